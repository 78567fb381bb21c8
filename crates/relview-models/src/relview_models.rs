//! relview Models - Model namespace trees
//!
//! Models are named with `/`-delimited paths (`lib/finance/revenue`). This
//! crate folds a flat model list into a folder tree for the tree view, with
//! each model's Idb annotations hanging under its leaf.
//!
//! Trees are built into an index-addressed arena ([`ModelTree`]) and only
//! turned into nested, serializable [`ModelNode`]s when rendered. Neither
//! step recurses, so path depth is bounded by memory rather than stack.

mod idb;
mod model;
mod tree;

pub use idb::{IdbEntry, IdbNode, build_idb_nodes};
pub use model::Model;
pub use tree::{ModelNode, ModelTree, NodeId, TreeNode};
