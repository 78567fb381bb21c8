//! Tests for the model tree

use super::*;
use pretty_assertions::assert_eq;

fn models(names: &[&str]) -> Vec<Model> {
    names
        .iter()
        .map(|name| Model::new(*name, format!("def {}", name)))
        .collect()
}

fn names(nodes: &[ModelNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.name.as_str()).collect()
}

#[test]
fn test_structure_is_independent_of_input_order() {
    let orders = [
        ["a/b", "a/c", "d"],
        ["d", "a/c", "a/b"],
        ["a/c", "d", "a/b"],
    ];

    for order in orders {
        let rendered = ModelTree::from_models(&models(&order)).render();

        assert_eq!(names(&rendered), vec!["a", "d"], "order {order:?}");
        let folder = &rendered[0];
        assert!(folder.is_folder());
        assert_eq!(folder.path, "a");
        assert_eq!(names(&folder.children), vec!["b", "c"]);
        assert!(folder.children.iter().all(|child| !child.is_folder()));
        assert_eq!(folder.children[1].path, "a/c");

        assert!(!rendered[1].is_folder());
        assert_eq!(rendered[1].model.as_ref().map(|m| m.value.as_str()), Some("def d"));
    }
}

#[test]
fn test_folders_sort_before_leaves_then_by_name() {
    let tree = ModelTree::from_models(&models(&["zeta", "Beta/x", "alpha", "gamma/y", "Alpha"]));
    let rendered = tree.render();
    assert_eq!(names(&rendered), vec!["Beta", "gamma", "Alpha", "alpha", "zeta"]);
}

#[test]
fn test_model_without_slash_is_top_level_leaf() {
    let tree = ModelTree::from_models(&models(&["main"]));
    assert_eq!(tree.len(), 1);
    let root = tree.node(tree.roots()[0]).unwrap();
    assert_eq!(root.path(), "main");
    assert!(!root.is_folder());
}

#[test]
fn test_empty_segments_are_ignored() {
    let tree = ModelTree::from_models(&models(&["/lib//util/", "lib/util"]));
    assert_eq!(tree.len(), 2);
    assert!(tree.get("lib/util").is_some());
    assert_eq!(tree.replaced_paths(), &["lib/util".to_string()]);
}

#[test]
fn test_model_with_empty_path_is_skipped() {
    let tree = ModelTree::from_models(&models(&["", "///", "ok"]));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.model_count(), 1);
}

#[test]
fn test_model_attaches_to_existing_folder() {
    let tree = ModelTree::from_models(&models(&["a/b", "a"]));
    let a = tree.node(tree.get("a").unwrap()).unwrap();
    assert_eq!(a.model().map(|m| m.name.as_str()), Some("a"));
    assert_eq!(a.children().len(), 1);

    let rendered = tree.render();
    assert_eq!(rendered.len(), 1);
    assert_eq!(names(&rendered[0].children), vec!["b"]);
}

#[test]
fn test_duplicate_path_last_model_wins() {
    let input = vec![Model::new("lib/x", "first"), Model::new("lib/x", "second")];
    let tree = ModelTree::from_models(&input);
    let x = tree.node(tree.get("lib/x").unwrap()).unwrap();
    assert_eq!(x.model().unwrap().value, "second");
    assert_eq!(tree.replaced_paths(), &["lib/x".to_string()]);
}

#[test]
fn test_idbs_attach_to_model_leaf() {
    let input = models(&["lib/a", "lib/b"]);
    let mut idbs = HashMap::new();
    idbs.insert(
        "lib/a".to_string(),
        vec![IdbEntry::new("rule").with_child(IdbEntry::new("atom")), IdbEntry::new("rule")],
    );

    let tree = ModelTree::build(&input, &idbs);
    let a = tree.node(tree.get("lib/a").unwrap()).unwrap();
    let paths: Vec<&str> = a.idbs().iter().map(|idb| idb.path.as_str()).collect();
    assert_eq!(paths, vec!["lib/a/rule[0]", "lib/a/rule[1]"]);
    assert_eq!(a.idbs()[0].children[0].path, "lib/a/rule[0]/atom[0]");

    let b = tree.node(tree.get("lib/b").unwrap()).unwrap();
    assert!(b.idbs().is_empty());
}

#[test]
fn test_deep_paths_build_without_recursion() {
    let name = (0..1_000).map(|i| format!("d{}", i)).collect::<Vec<_>>().join("/");
    let tree = ModelTree::from_models(&[Model::new(name.clone(), "deep")]);
    assert_eq!(tree.len(), 1_000);
    assert!(tree.get(&name).is_some());

    let rendered = tree.render();
    let mut depth = 1;
    let mut current = &rendered[0];
    while let Some(child) = current.children.first() {
        current = child;
        depth += 1;
    }
    assert_eq!(depth, 1_000);
    assert_eq!(current.model.as_ref().unwrap().value, "deep");
}

#[test]
fn test_render_serializes_for_tree_view() {
    let tree = ModelTree::from_models(&models(&["a/b"]));
    let json = serde_json::to_value(tree.render()).unwrap();
    assert_eq!(json[0]["name"], "a");
    assert!(json[0].get("model").is_none());
    assert_eq!(json[0]["children"][0]["model"]["name"], "a/b");
}
