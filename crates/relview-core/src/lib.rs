//! relview Core - Relation data model shared by every relview crate
//!
//! This crate defines:
//!
//! - `RelationId` - Parser for `/`-separated relation ids (symbolic keys and type markers)
//! - `Relation` - A columnar value set tagged by its relation id
//! - `Value` / `ValueType` - Tagged scalar values and parsed type markers
//! - `time` - Duration and elapsed-period formatting
//! - `RelviewError` - The core error type

mod error;
mod relation;
mod relation_id;
pub mod time;
mod types;

pub use error::*;
pub use relation::*;
pub use relation_id::*;
pub use time::{period_between, period_since, time_to_string};
pub use types::*;
