pub mod error;
pub mod event;
pub mod expand;
pub mod node;
pub mod options;
pub mod rect;
pub mod reparent;
pub mod select;
pub mod terminal;
pub mod theme;
pub mod view;
pub mod widget;

pub use error::TreeError;
pub use event::{translate, Event, Key, Modifiers, MouseButton};
pub use expand::ExpansionState;
pub use node::{
    count_nodes, find_node, find_node_mut, find_parent, subtree_contains, TreeNode,
    DEFAULT_DISPLAY_PROPERTY, DEFAULT_NODES_PROPERTY,
};
pub use options::{RemoveDecision, TreeOptions};
pub use rect::Rect;
pub use reparent::{reparent, RejectReason, ReparentOutcome};
pub use select::SelectionState;
pub use terminal::{Capabilities, Screen};
pub use theme::{Color, TreeTheme};
pub use view::{hit_test, NodeRow, RowTemplate, TreeView};
pub use widget::{TreeEvent, TreeWidget};
