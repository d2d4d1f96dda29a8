use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id() -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("node-{id}")
}

/// Default name of the field holding a node's children.
pub const DEFAULT_NODES_PROPERTY: &str = "nodes";
/// Default name of the field holding a node's label.
pub const DEFAULT_DISPLAY_PROPERTY: &str = "name";

/// A user-defined tree node: named text fields plus named, ordered child
/// lists. Which field is the label and which list holds the children is
/// decided by the widget configuration, not by the node itself.
///
/// Nodes do not store a parent pointer; the parent is resolved by traversal
/// (`find_parent`) and passed down explicitly during rendering.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Generated identity (`node-N`), used for selection, expansion and
    /// by-identity child removal.
    pub id: String,
    pub data: HashMap<String, String>,
    pub lists: HashMap<String, Vec<TreeNode>>,
}

impl Default for TreeNode {
    fn default() -> Self {
        Self {
            id: generate_id(),
            data: HashMap::new(),
            lists: HashMap::new(),
        }
    }
}

impl TreeNode {
    /// Create a node with the given label under the default display field.
    pub fn new(label: impl Into<String>) -> Self {
        Self::default().data(DEFAULT_DISPLAY_PROPERTY, label)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Fields
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    /// Resolve the label shown for this node via the configured field.
    pub fn display_value(&self, property: &str) -> Option<&str> {
        self.data.get(property).map(String::as_str)
    }

    // Children
    /// Append a child to the default child list.
    pub fn child(mut self, child: TreeNode) -> Self {
        self.lists
            .entry(DEFAULT_NODES_PROPERTY.to_string())
            .or_default()
            .push(child);
        self
    }

    /// Append children to the default child list.
    pub fn children(mut self, new_children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.lists
            .entry(DEFAULT_NODES_PROPERTY.to_string())
            .or_default()
            .extend(new_children);
        self
    }

    /// The child list under the configured field, if one exists.
    pub fn child_nodes(&self, property: &str) -> Option<&[TreeNode]> {
        self.lists.get(property).map(Vec::as_slice)
    }

    /// True iff the configured child list exists and is non-empty.
    pub fn has_children(&self, property: &str) -> bool {
        self.lists.get(property).is_some_and(|c| !c.is_empty())
    }

    /// Append a child to the configured list, creating the list if absent.
    pub fn push_child(&mut self, property: &str, node: TreeNode) {
        self.lists.entry(property.to_string()).or_default().push(node);
    }

    /// Remove the first child with the given id from the configured list.
    /// A list emptied this way stays in place.
    pub fn remove_child(&mut self, property: &str, id: &str) -> Option<TreeNode> {
        let children = self.lists.get_mut(property)?;
        let index = children.iter().position(|c| c.id == id)?;
        Some(children.remove(index))
    }
}

/// Find a node by id in the subtree rooted at `root`.
pub fn find_node<'a>(root: &'a TreeNode, id: &str, property: &str) -> Option<&'a TreeNode> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_nodes(property).unwrap_or_default() {
        if let Some(found) = find_node(child, id, property) {
            return Some(found);
        }
    }

    None
}

/// Mutable variant of [`find_node`].
pub fn find_node_mut<'a>(
    root: &'a mut TreeNode,
    id: &str,
    property: &str,
) -> Option<&'a mut TreeNode> {
    if root.id == id {
        return Some(root);
    }

    let children = root.lists.get_mut(property)?;
    for child in children.iter_mut() {
        if let Some(found) = find_node_mut(child, id, property) {
            return Some(found);
        }
    }

    None
}

/// Find the parent of the node with the given id. Returns None for the root
/// itself and for ids not present in the tree.
pub fn find_parent<'a>(root: &'a TreeNode, id: &str, property: &str) -> Option<&'a TreeNode> {
    let children = root.child_nodes(property).unwrap_or_default();

    if children.iter().any(|c| c.id == id) {
        return Some(root);
    }

    for child in children {
        if let Some(found) = find_parent(child, id, property) {
            return Some(found);
        }
    }

    None
}

/// True iff `id` names `node` itself or any node in its subtree.
pub fn subtree_contains(node: &TreeNode, id: &str, property: &str) -> bool {
    if node.id == id {
        return true;
    }

    node.child_nodes(property)
        .unwrap_or_default()
        .iter()
        .any(|child| subtree_contains(child, id, property))
}

/// Count the nodes in the subtree rooted at `root`, including `root`.
pub fn count_nodes(root: &TreeNode, property: &str) -> usize {
    1 + root
        .child_nodes(property)
        .unwrap_or_default()
        .iter()
        .map(|child| count_nodes(child, property))
        .sum::<usize>()
}
