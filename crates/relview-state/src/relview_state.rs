//! relview State - Console state container
//!
//! Every remote collection the console shows (accounts, engines, worksheets,
//! models, users, notifications, permissions) is held as a [`Resource`] in a
//! single [`ConsoleState`]. State only changes through [`reduce`], a pure
//! function over explicit [`Action`]s, so loading and error transitions can be
//! tested without any UI runtime.
//!
//! [`Store`] owns the state and drives requests through a [`ConsoleBackend`].
//! Backend failures end up in the resource's `error` field; they never escape
//! the store.

mod entities;
mod error;
mod reducer;
mod resource;
mod store;

pub use entities::*;
pub use error::{BackendError, BackendResult};
pub use reducer::{Action, ConsoleState, Payload, ResourceKind, reduce};
pub use resource::Resource;
pub use store::{ConsoleBackend, Store};
