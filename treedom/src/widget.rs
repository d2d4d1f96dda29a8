use std::sync::OnceLock;

use tokio::sync::oneshot::error::TryRecvError;
use tokio::sync::oneshot::Receiver;

use crate::error::TreeError;
use crate::event::{Event, MouseButton};
use crate::expand::ExpansionState;
use crate::node::{find_node, find_parent, TreeNode};
use crate::options::{RemoveDecision, TreeOptions};
use crate::rect::Rect;
use crate::reparent::{reparent, ReparentOutcome};
use crate::select::SelectionState;
use crate::terminal::Capabilities;
use crate::view::{build_view, hit_test, NodeRow, RowTemplate, TreeView};

/// Cells the pointer must travel with the button held before a press turns
/// into a drag.
const DRAG_THRESHOLD: u16 = 2;

/// Host-visible notifications produced by event handling and the request
/// methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    Selected { node: String },
    Toggled { node: String, expanded: bool },
    Moved { node: String, from: String, to: String },
    AddRequested { node: String },
    RemoveRequested { node: String },
    Removed { node: String },
    RemoveCancelled { node: String },
}

#[derive(Debug, Default)]
struct DragState {
    pressed: Option<Press>,
    dragging: Option<String>,
}

#[derive(Debug)]
struct Press {
    node: String,
    x: u16,
    y: u16,
}

struct PendingRemove {
    node: String,
    rx: Receiver<bool>,
}

/// The tree widget: composes configuration, exclusive selection, expansion
/// flags, drag tracking and deferred removals over a host-owned [`TreeNode`]
/// graph. The widget mutates the graph in place (reparenting) but never owns
/// it; every method borrows the root.
pub struct TreeWidget {
    options: TreeOptions,
    can_add: bool,
    can_remove: bool,
    selection: SelectionState,
    expansion: ExpansionState,
    drag: DragState,
    template: OnceLock<RowTemplate>,
    pending: Vec<PendingRemove>,
}

impl TreeWidget {
    /// Construct the widget. Fails when the configuration requests drag
    /// support but the backend cannot capture drags; this is the only fatal
    /// error the widget produces.
    pub fn new(options: TreeOptions, caps: Capabilities) -> Result<Self, TreeError> {
        if options.draggable && !caps.drag {
            return Err(TreeError::DragUnsupported);
        }

        let can_add = options.on_add.is_some();
        let can_remove = options.on_remove.is_some();
        let expansion = ExpansionState::new(options.collapsible);

        Ok(Self {
            options,
            can_add,
            can_remove,
            selection: SelectionState::new(),
            expansion,
            drag: DragState::default(),
            template: OnceLock::new(),
            pending: Vec::new(),
        })
    }

    pub fn can_add(&self) -> bool {
        self.can_add
    }

    pub fn can_remove(&self) -> bool {
        self.can_remove
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.expansion.toggle(id)
    }

    /// The compiled row shell, built once on first use and shared by every
    /// row rendered afterwards.
    pub fn template(&self) -> &RowTemplate {
        self.template
            .get_or_init(|| RowTemplate::compile(self.options.collapsible))
    }

    /// Flatten the currently visible tree into rows.
    pub fn view(&self, root: &TreeNode) -> TreeView {
        build_view(
            root,
            &self.options.nodes_property,
            &self.options.display_property,
            &self.expansion,
            &self.selection,
            self.drag.dragging.as_deref(),
        )
    }

    /// Dispatch one input event against the view of the current frame.
    /// `area` is the screen region the view was drawn into.
    pub fn handle_event(
        &mut self,
        event: &Event,
        root: &mut TreeNode,
        view: &TreeView,
        area: Rect,
    ) -> Vec<TreeEvent> {
        let mut events = Vec::new();

        match event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let hit = hit_test(view, self.template(), area, *x, *y).cloned();
                match hit {
                    Some(row) => self.click_row(root, &row, *x, *y, &mut events),
                    None => self.drag = DragState::default(),
                }
            }

            Event::Drag {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if self.drag.dragging.is_none() {
                    if let Some(press) = &self.drag.pressed {
                        if press.x.abs_diff(*x).max(press.y.abs_diff(*y)) >= DRAG_THRESHOLD {
                            log::debug!("[drag] start {}", press.node);
                            self.drag.dragging = Some(press.node.clone());
                        }
                    }
                }
            }

            Event::Release {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let dragged = self.drag.dragging.take();
                self.drag.pressed = None;

                if let Some(dragged) = dragged {
                    self.drop_on(root, view, area, &dragged, *x, *y, &mut events);
                }
            }

            _ => {}
        }

        events
    }

    /// Select a node programmatically. Fires `on_node_select` and returns
    /// true when the selection actually changed; reselecting is idempotent.
    pub fn select(&mut self, root: &TreeNode, id: &str) -> bool {
        let prop = self.options.nodes_property.clone();

        let Some(node) = find_node(root, id, &prop) else {
            return false;
        };
        let parent = find_parent(root, id, &prop).map(|p| p.id.clone());

        let changed = self.selection.select(id, parent.as_deref());
        if changed {
            if let Some(callback) = self.options.on_node_select.as_mut() {
                callback(node);
            }
        }
        changed
    }

    /// Ask the host to add a child under the selected node. A no-op without
    /// a selection or without a configured `on_add`.
    pub fn request_add(&mut self, root: &TreeNode) -> Option<TreeEvent> {
        if !self.can_add {
            return None;
        }

        let id = self.selection.selected()?.to_string();
        let prop = self.options.nodes_property.clone();
        let node = find_node(root, &id, &prop)?;

        let callback = self.options.on_add.as_mut()?;
        callback(node);

        Some(TreeEvent::AddRequested { node: id })
    }

    /// Ask the host to remove the selected node. The host answers with a
    /// [`RemoveDecision`]; a committed removal clears the selection (the
    /// host deletes the node from its own graph). A no-op without a
    /// selection or without a configured `on_remove`.
    pub fn request_remove(&mut self, root: &TreeNode) -> Option<TreeEvent> {
        if !self.can_remove {
            return None;
        }

        let id = self.selection.selected()?.to_string();
        let parent_id = self.selection.parent().map(str::to_string);
        let prop = self.options.nodes_property.clone();

        let node = find_node(root, &id, &prop)?;
        let parent = parent_id.as_deref().and_then(|p| find_node(root, p, &prop));

        let callback = self.options.on_remove.as_mut()?;
        let decision = callback(node, parent);
        match decision {
            RemoveDecision::Cancel => Some(TreeEvent::RemoveCancelled { node: id }),
            RemoveDecision::Commit => {
                self.selection.clear();
                Some(TreeEvent::Removed { node: id })
            }
            RemoveDecision::Deferred(rx) => {
                self.pending.push(PendingRemove {
                    node: id.clone(),
                    rx,
                });
                Some(TreeEvent::RemoveRequested { node: id })
            }
        }
    }

    /// Settle deferred remove confirmations. Call once per tick. Several
    /// removes may be in flight at once; each settlement applies to the
    /// selection as it is at settlement time, so the last one wins.
    pub fn poll_removals(&mut self) -> Vec<TreeEvent> {
        let mut events = Vec::new();
        let mut still_pending = Vec::new();

        for mut pending in std::mem::take(&mut self.pending) {
            match pending.rx.try_recv() {
                Ok(false) => {
                    log::debug!("[remove] cancelled for {}", pending.node);
                    events.push(TreeEvent::RemoveCancelled { node: pending.node });
                }
                // A dropped sender is "no explicit answer", which commits.
                Ok(true) | Err(TryRecvError::Closed) => {
                    self.selection.clear();
                    events.push(TreeEvent::Removed { node: pending.node });
                }
                Err(TryRecvError::Empty) => still_pending.push(pending),
            }
        }

        self.pending = still_pending;
        events
    }

    fn click_row(
        &mut self,
        root: &TreeNode,
        row: &NodeRow,
        x: u16,
        y: u16,
        events: &mut Vec<TreeEvent>,
    ) {
        if self.options.collapsible {
            let expanded = self.expansion.toggle(&row.node_id);
            events.push(TreeEvent::Toggled {
                node: row.node_id.clone(),
                expanded,
            });
        }

        if !self.selection.is_selected(&row.node_id) {
            self.selection.select(&row.node_id, row.parent_id.as_deref());
            let prop = self.options.nodes_property.clone();
            if let Some(callback) = self.options.on_node_select.as_mut() {
                if let Some(node) = find_node(root, &row.node_id, &prop) {
                    callback(node);
                }
            }
            events.push(TreeEvent::Selected {
                node: row.node_id.clone(),
            });
        } else {
            self.selection.select(&row.node_id, row.parent_id.as_deref());
        }

        // Only nodes with a parent can be picked up; the root stays put.
        if self.options.draggable && row.parent_id.is_some() {
            self.drag.pressed = Some(Press {
                node: row.node_id.clone(),
                x,
                y,
            });
        } else {
            self.drag.pressed = None;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn drop_on(
        &mut self,
        root: &mut TreeNode,
        view: &TreeView,
        area: Rect,
        dragged: &str,
        x: u16,
        y: u16,
        events: &mut Vec<TreeEvent>,
    ) {
        let Some(target_id) = hit_test(view, self.template(), area, x, y).map(|r| r.node_id.clone())
        else {
            return;
        };
        let prop = self.options.nodes_property.clone();

        match reparent(root, dragged, &target_id, &prop) {
            ReparentOutcome::Moved { node, from, to } => {
                events.push(TreeEvent::Moved { node, from, to });
            }
            ReparentOutcome::Rejected(reason) => {
                if let Some(callback) = self.options.on_invalid_drop.as_mut() {
                    callback(reason);
                }
            }
        }
    }
}
