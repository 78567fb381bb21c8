//! Arena-backed model tree

use crate::idb::{IdbEntry, IdbNode, build_idb_nodes};
use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Index of a node in a [`ModelTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A node stored in the arena
#[derive(Debug, Clone)]
pub struct TreeNode {
    path: String,
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    model: Option<Model>,
    idbs: Vec<IdbNode>,
}

impl TreeNode {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn model(&self) -> Option<&Model> {
        self.model.as_ref()
    }

    pub fn idbs(&self) -> &[IdbNode] {
        &self.idbs
    }

    /// Folders are nodes without an attached model
    pub fn is_folder(&self) -> bool {
        self.model.is_none()
    }
}

/// Nested, serializable form of a tree node, sorted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelNode {
    pub path: String,
    pub name: String,
    pub children: Vec<ModelNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub idbs: Vec<IdbNode>,
}

impl ModelNode {
    pub fn is_folder(&self) -> bool {
        self.model.is_none()
    }

    /// Folders first, then by name (case-sensitive, ascending)
    fn display_order(a: &ModelNode, b: &ModelNode) -> Ordering {
        b.is_folder()
            .cmp(&a.is_folder())
            .then_with(|| a.name.cmp(&b.name))
    }
}

/// A folder tree built from slash-named models
///
/// Nodes live in a flat arena and are addressed by [`NodeId`]. A child is
/// always allocated after its parent, which lets [`ModelTree::render`] fold
/// the arena into nested nodes with a single backwards pass.
#[derive(Debug, Clone, Default)]
pub struct ModelTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
    by_path: HashMap<String, NodeId>,
    replaced: Vec<String>,
}

impl ModelTree {
    /// Build a tree from models without annotations
    pub fn from_models(models: &[Model]) -> Self {
        Self::build(models, &HashMap::new())
    }

    /// Build a tree, attaching the annotations listed under each model's name
    ///
    /// When two models resolve to the same path the later one replaces the
    /// earlier; the path is recorded in [`ModelTree::replaced_paths`]. A model
    /// whose path is already a folder is attached to that folder, which keeps
    /// its children.
    pub fn build(models: &[Model], idbs: &HashMap<String, Vec<IdbEntry>>) -> Self {
        let mut tree = Self::default();

        for model in models {
            let Some(node) = tree.ensure_path(model.segments()) else {
                tracing::warn!(name = %model.name, "skipping model with an empty path");
                continue;
            };

            let annotations = idbs
                .get(&model.name)
                .map(|entries| build_idb_nodes(&tree.nodes[node.0].path, entries))
                .unwrap_or_default();

            let slot = &mut tree.nodes[node.0];
            if slot.model.is_some() {
                tracing::debug!(path = %slot.path, "model path defined twice, keeping the last one");
                tree.replaced.push(slot.path.clone());
            }
            slot.model = Some(model.clone());
            slot.idbs = annotations;
        }

        tracing::debug!(
            models = models.len(),
            nodes = tree.nodes.len(),
            "built model tree"
        );
        tree
    }

    /// Walk the segments, creating missing nodes; returns the final node
    fn ensure_path<'a>(&mut self, segments: impl Iterator<Item = &'a str>) -> Option<NodeId> {
        let mut current: Option<NodeId> = None;
        let mut path = String::new();

        for segment in segments {
            if !path.is_empty() {
                path.push('/');
            }
            path.push_str(segment);

            let id = match self.by_path.get(&path) {
                Some(id) => *id,
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(TreeNode {
                        path: path.clone(),
                        name: segment.to_string(),
                        parent: current,
                        children: Vec::new(),
                        model: None,
                        idbs: Vec::new(),
                    });
                    self.by_path.insert(path.clone(), id);
                    match current {
                        Some(parent) => self.nodes[parent.0].children.push(id),
                        None => self.roots.push(id),
                    }
                    id
                }
            };
            current = Some(id);
        }

        current
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    /// Look a node up by its normalized path (`a/b/c`)
    pub fn get(&self, path: &str) -> Option<NodeId> {
        self.by_path.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes carrying a model
    pub fn model_count(&self) -> usize {
        self.nodes.iter().filter(|node| !node.is_folder()).count()
    }

    /// Paths whose model was replaced by a later model with the same path
    pub fn replaced_paths(&self) -> &[String] {
        &self.replaced
    }

    /// Nested nodes for the tree view, sorted folders-first then by name
    pub fn render(&self) -> Vec<ModelNode> {
        let mut built: Vec<Option<ModelNode>> = self
            .nodes
            .iter()
            .map(|node| {
                Some(ModelNode {
                    path: node.path.clone(),
                    name: node.name.clone(),
                    children: Vec::with_capacity(node.children.len()),
                    model: node.model.clone(),
                    idbs: node.idbs.clone(),
                })
            })
            .collect();

        let mut roots = Vec::with_capacity(self.roots.len());
        for index in (0..built.len()).rev() {
            let Some(mut node) = built[index].take() else {
                continue;
            };
            node.children.sort_by(ModelNode::display_order);
            match self.nodes[index].parent {
                Some(parent) => {
                    if let Some(parent) = built[parent.0].as_mut() {
                        parent.children.push(node);
                    }
                }
                None => roots.push(node),
            }
        }

        roots.sort_by(ModelNode::display_order);
        roots
    }
}

#[cfg(test)]
mod tests;
