use tokio::sync::oneshot;

use crate::node::{TreeNode, DEFAULT_DISPLAY_PROPERTY, DEFAULT_NODES_PROPERTY};
use crate::reparent::RejectReason;

pub type SelectCallback = Box<dyn FnMut(&TreeNode)>;
pub type AddCallback = Box<dyn FnMut(&TreeNode)>;
pub type RemoveCallback = Box<dyn FnMut(&TreeNode, Option<&TreeNode>) -> RemoveDecision>;
pub type InvalidDropCallback = Box<dyn FnMut(RejectReason)>;

/// The host's answer to a remove request.
///
/// A host that needs to confirm asynchronously returns `Deferred` with the
/// receiving half of a oneshot channel; the widget polls it each tick. A
/// sender dropped without an answer counts as consent, matching a callback
/// that returns nothing.
#[derive(Debug)]
pub enum RemoveDecision {
    /// Clear the selection; the host deletes the node itself.
    Commit,
    /// Keep selection and model as they are.
    Cancel,
    /// Answer pending; `false` cancels, anything else commits.
    Deferred(oneshot::Receiver<bool>),
}

impl From<bool> for RemoveDecision {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            RemoveDecision::Commit
        } else {
            RemoveDecision::Cancel
        }
    }
}

impl From<oneshot::Receiver<bool>> for RemoveDecision {
    fn from(rx: oneshot::Receiver<bool>) -> Self {
        RemoveDecision::Deferred(rx)
    }
}

/// Widget configuration. Field defaults mirror the classic tree-widget
/// surface: draggable, collapsible, children under `"nodes"`, label under
/// `"name"`. Host callbacks are optional; the matching UI affordances are
/// derived from their presence at construction time.
pub struct TreeOptions {
    pub draggable: bool,
    pub nodes_property: String,
    pub display_property: String,
    pub collapsible: bool,
    pub(crate) on_node_select: Option<SelectCallback>,
    pub(crate) on_add: Option<AddCallback>,
    pub(crate) on_remove: Option<RemoveCallback>,
    pub(crate) on_invalid_drop: Option<InvalidDropCallback>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            draggable: true,
            nodes_property: DEFAULT_NODES_PROPERTY.to_string(),
            display_property: DEFAULT_DISPLAY_PROPERTY.to_string(),
            collapsible: true,
            on_node_select: None,
            on_add: None,
            on_remove: None,
            on_invalid_drop: None,
        }
    }
}

impl TreeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn nodes_property(mut self, property: impl Into<String>) -> Self {
        self.nodes_property = property.into();
        self
    }

    pub fn display_property(mut self, property: impl Into<String>) -> Self {
        self.display_property = property.into();
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Invoked whenever a node becomes the selection (not on reselect).
    pub fn on_node_select(mut self, callback: impl FnMut(&TreeNode) + 'static) -> Self {
        self.on_node_select = Some(Box::new(callback));
        self
    }

    /// Invoked by `request_add` with the selected node. Its presence enables
    /// the add affordance.
    pub fn on_add(mut self, callback: impl FnMut(&TreeNode) + 'static) -> Self {
        self.on_add = Some(Box::new(callback));
        self
    }

    /// Invoked by `request_remove` with the selected node and its parent.
    /// Its presence enables the remove affordance.
    pub fn on_remove(
        mut self,
        callback: impl FnMut(&TreeNode, Option<&TreeNode>) -> RemoveDecision + 'static,
    ) -> Self {
        self.on_remove = Some(Box::new(callback));
        self
    }

    /// Diagnostic hook for rejected drops. Rejections stay no-ops either
    /// way; this only reports them.
    pub fn on_invalid_drop(mut self, callback: impl FnMut(RejectReason) + 'static) -> Self {
        self.on_invalid_drop = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for TreeOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeOptions")
            .field("draggable", &self.draggable)
            .field("nodes_property", &self.nodes_property)
            .field("display_property", &self.display_property)
            .field("collapsible", &self.collapsible)
            .field("on_node_select", &self.on_node_select.is_some())
            .field("on_add", &self.on_add.is_some())
            .field("on_remove", &self.on_remove.is_some())
            .field("on_invalid_drop", &self.on_invalid_drop.is_some())
            .finish()
    }
}
