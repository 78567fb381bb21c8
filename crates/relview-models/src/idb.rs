//! Idb annotation subtrees

use serde::{Deserialize, Serialize};

/// An annotation as delivered for a model, possibly nested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdbEntry {
    pub name: String,
    #[serde(default)]
    pub children: Vec<IdbEntry>,
}

impl IdbEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: IdbEntry) -> Self {
        self.children.push(child);
        self
    }
}

/// An annotation placed in the tree, with a synthetic path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdbNode {
    /// `{parent path}/{name}[{sibling index}]`
    pub path: String,
    pub name: String,
    pub children: Vec<IdbNode>,
}

struct FlatIdb {
    path: String,
    name: String,
    parent: Option<usize>,
}

/// Place annotation entries under `parent_path`
///
/// Paths are disambiguated by position among siblings, so two annotations
/// with the same name under the same parent still get distinct paths.
pub fn build_idb_nodes(parent_path: &str, entries: &[IdbEntry]) -> Vec<IdbNode> {
    // Pre-order flattening: every parent lands before its children.
    let mut flat: Vec<FlatIdb> = Vec::new();
    let mut stack: Vec<(&IdbEntry, usize, Option<usize>)> = entries
        .iter()
        .enumerate()
        .rev()
        .map(|(index, entry)| (entry, index, None))
        .collect();

    while let Some((entry, index, parent)) = stack.pop() {
        let parent_path = match parent {
            Some(parent) => flat[parent].path.as_str(),
            None => parent_path,
        };
        let path = format!("{}/{}[{}]", parent_path, entry.name, index);
        let id = flat.len();
        flat.push(FlatIdb {
            path,
            name: entry.name.clone(),
            parent,
        });
        stack.extend(
            entry
                .children
                .iter()
                .enumerate()
                .rev()
                .map(|(index, child)| (child, index, Some(id))),
        );
    }

    let parents: Vec<Option<usize>> = flat.iter().map(|node| node.parent).collect();
    let mut built: Vec<Option<IdbNode>> = flat
        .into_iter()
        .map(|node| {
            Some(IdbNode {
                path: node.path,
                name: node.name,
                children: Vec::new(),
            })
        })
        .collect();

    // Children always have larger ids, so walking backwards completes every
    // node before it is moved into its parent. Children arrive reversed.
    let mut roots = Vec::with_capacity(entries.len());
    for id in (0..built.len()).rev() {
        let Some(mut node) = built[id].take() else {
            continue;
        };
        node.children.reverse();
        match parents[id] {
            Some(parent) => {
                if let Some(parent) = built[parent].as_mut() {
                    parent.children.push(node);
                }
            }
            None => roots.push(node),
        }
    }
    roots.reverse();
    roots
}
