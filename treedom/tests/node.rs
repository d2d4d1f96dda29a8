use std::collections::HashSet;

use treedom::{
    count_nodes, find_node, find_parent, subtree_contains, TreeNode, DEFAULT_NODES_PROPERTY,
};

const NODES: &str = DEFAULT_NODES_PROPERTY;

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<String> = (0..64).map(|_| TreeNode::new("n").id).collect();
    assert_eq!(ids.len(), 64);
}

#[test]
fn display_value_resolves_the_configured_field() {
    let node = TreeNode::new("label").data("title", "other");
    assert_eq!(node.display_value("name"), Some("label"));
    assert_eq!(node.display_value("title"), Some("other"));
    assert_eq!(node.display_value("missing"), None);
}

#[test]
fn children_are_kept_in_insertion_order() {
    let root = TreeNode::new("root")
        .child(TreeNode::new("one"))
        .child(TreeNode::new("two"))
        .child(TreeNode::new("three"));

    let labels: Vec<&str> = root
        .child_nodes(NODES)
        .unwrap()
        .iter()
        .filter_map(|c| c.display_value("name"))
        .collect();
    assert_eq!(labels, vec!["one", "two", "three"]);
}

#[test]
fn remove_child_takes_the_first_identity_match() {
    let a = TreeNode::new("A");
    let a_id = a.id.clone();
    let mut root = TreeNode::new("root").child(a).child(TreeNode::new("B"));

    let removed = root.remove_child(NODES, &a_id).unwrap();
    assert_eq!(removed.id, a_id);
    assert_eq!(root.child_nodes(NODES).unwrap().len(), 1);

    // Second removal finds nothing
    assert!(root.remove_child(NODES, &a_id).is_none());
}

#[test]
fn has_children_requires_a_nonempty_list() {
    let mut leaf = TreeNode::new("leaf");
    assert!(!leaf.has_children(NODES));

    let child = TreeNode::new("child");
    let child_id = child.id.clone();
    leaf.push_child(NODES, child);
    assert!(leaf.has_children(NODES));

    leaf.remove_child(NODES, &child_id);
    assert!(!leaf.has_children(NODES));
}

#[test]
fn find_node_and_parent_traverse_the_configured_list() {
    let c = TreeNode::new("C");
    let c_id = c.id.clone();
    let b = TreeNode::new("B").child(c);
    let b_id = b.id.clone();
    let root = TreeNode::new("root").child(TreeNode::new("A")).child(b);
    let root_id = root.id.clone();

    assert_eq!(find_node(&root, &c_id, NODES).unwrap().id, c_id);
    assert_eq!(find_parent(&root, &c_id, NODES).unwrap().id, b_id);
    assert_eq!(find_parent(&root, &b_id, NODES).unwrap().id, root_id);
    assert!(find_parent(&root, &root_id, NODES).is_none());
    assert!(find_node(&root, "missing", NODES).is_none());
}

#[test]
fn subtree_contains_includes_the_node_itself() {
    let c = TreeNode::new("C");
    let c_id = c.id.clone();
    let a = TreeNode::new("A").child(c);
    let a_id = a.id.clone();
    let b = TreeNode::new("B");
    let b_id = b.id.clone();
    let root = TreeNode::new("root").child(a).child(b);

    let a = &root.child_nodes(NODES).unwrap()[0];
    assert!(subtree_contains(a, &a_id, NODES));
    assert!(subtree_contains(a, &c_id, NODES));
    assert!(!subtree_contains(a, &b_id, NODES));
}

#[test]
fn count_nodes_covers_the_whole_subtree() {
    let root = TreeNode::new("root")
        .child(TreeNode::new("A").child(TreeNode::new("C")))
        .child(TreeNode::new("B"));

    assert_eq!(count_nodes(&root, NODES), 4);
    assert_eq!(count_nodes(&TreeNode::new("leaf"), NODES), 1);
}
