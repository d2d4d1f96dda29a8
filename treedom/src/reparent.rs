use crate::node::{find_node, find_node_mut, find_parent, subtree_contains, TreeNode};

/// Result of a drop attempt. Rejections leave the tree completely
/// unmutated; all checks run before the first mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReparentOutcome {
    Moved { node: String, from: String, to: String },
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The target is the dragged node itself or one of its descendants;
    /// committing would make a node its own ancestor.
    Cycle,
    /// The target already is the dragged node's parent.
    SameParent,
    /// The dragged node is the root (or not in the tree) and so has no
    /// parent to detach from.
    NoParent,
    /// The target id does not name a node in the tree.
    UnknownTarget,
}

/// Move the node `dragged_id` to become the last child of `target_id`.
///
/// `property` names the child-list field, as configured on the widget.
/// Structurally invalid moves are rejected without touching the tree:
/// dropping a node onto its own subtree, onto its current parent, or
/// dragging a node that has no parent.
pub fn reparent(
    root: &mut TreeNode,
    dragged_id: &str,
    target_id: &str,
    property: &str,
) -> ReparentOutcome {
    let Some(dragged) = find_node(root, dragged_id, property) else {
        return reject(RejectReason::NoParent, dragged_id, target_id);
    };

    if subtree_contains(dragged, target_id, property) {
        return reject(RejectReason::Cycle, dragged_id, target_id);
    }

    let Some(parent_id) = find_parent(root, dragged_id, property).map(|p| p.id.clone()) else {
        return reject(RejectReason::NoParent, dragged_id, target_id);
    };

    if parent_id == target_id {
        return reject(RejectReason::SameParent, dragged_id, target_id);
    }

    // The target must exist before anything is detached. Since it is not in
    // the dragged subtree, it is still reachable afterwards.
    if find_node(root, target_id, property).is_none() {
        return reject(RejectReason::UnknownTarget, dragged_id, target_id);
    }

    let Some(detached) = find_node_mut(root, &parent_id, property)
        .and_then(|parent| parent.remove_child(property, dragged_id))
    else {
        return reject(RejectReason::NoParent, dragged_id, target_id);
    };

    match find_node_mut(root, target_id, property) {
        Some(target) => {
            target.push_child(property, detached);
            log::debug!("[reparent] moved {dragged_id}: {parent_id} -> {target_id}");
            ReparentOutcome::Moved {
                node: dragged_id.to_string(),
                from: parent_id,
                to: target_id.to_string(),
            }
        }
        None => {
            // Unreachable on a single thread; restore the child rather than
            // drop it if the invariant is ever violated.
            if let Some(parent) = find_node_mut(root, &parent_id, property) {
                parent.push_child(property, detached);
            }
            reject(RejectReason::UnknownTarget, dragged_id, target_id)
        }
    }
}

fn reject(reason: RejectReason, dragged_id: &str, target_id: &str) -> ReparentOutcome {
    log::debug!("[reparent] rejected {dragged_id} -> {target_id}: {reason:?}");
    ReparentOutcome::Rejected(reason)
}
