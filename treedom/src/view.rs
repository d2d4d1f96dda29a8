use unicode_width::UnicodeWidthStr;

use crate::expand::ExpansionState;
use crate::node::TreeNode;
use crate::rect::Rect;
use crate::select::SelectionState;

/// One visible node, flattened out of the recursive model. Rows carry the
/// parent id resolved during traversal, so later stages (selection context,
/// drop validation) never need a stored back-reference on the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    pub node_id: String,
    pub parent_id: Option<String>,
    pub depth: u16,
    pub label: String,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
    pub dragging: bool,
}

/// The rendered tree: visible rows in draw order, top to bottom.
#[derive(Debug, Default)]
pub struct TreeView {
    rows: Vec<NodeRow>,
}

impl TreeView {
    pub fn rows(&self) -> &[NodeRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&NodeRow> {
        self.rows.get(index)
    }

    pub fn row_for_node(&self, id: &str) -> Option<&NodeRow> {
        self.rows.iter().find(|r| r.node_id == id)
    }
}

/// The compiled, shareable row shell: indent unit, expansion markers and
/// their measured widths, fixed once per widget. Every row of every frame
/// is instantiated from the same handle instead of re-deriving the markup
/// per node.
#[derive(Debug, Clone)]
pub struct RowTemplate {
    indent: &'static str,
    expanded_marker: &'static str,
    collapsed_marker: &'static str,
    leaf_marker: &'static str,
    indent_width: u16,
    marker_width: u16,
}

impl RowTemplate {
    pub(crate) fn compile(collapsible: bool) -> Self {
        let (expanded_marker, collapsed_marker) = if collapsible {
            ("▾ ", "▸ ")
        } else {
            ("· ", "· ")
        };
        Self {
            indent: "  ",
            expanded_marker,
            collapsed_marker,
            leaf_marker: "  ",
            indent_width: "  ".width() as u16,
            marker_width: 2,
        }
    }

    /// Render the full line for a row.
    pub fn instantiate(&self, row: &NodeRow) -> String {
        let mut line = String::new();
        for _ in 0..row.depth {
            line.push_str(self.indent);
        }
        line.push_str(self.marker(row));
        line.push_str(&row.label);
        line
    }

    fn marker(&self, row: &NodeRow) -> &'static str {
        if !row.has_children {
            self.leaf_marker
        } else if row.expanded {
            self.expanded_marker
        } else {
            self.collapsed_marker
        }
    }

    /// Column span of the row's clickable label region (marker + label),
    /// relative to the widget area's left edge.
    pub fn label_span(&self, row: &NodeRow) -> (u16, u16) {
        let start = row.depth * self.indent_width;
        let end = start + self.marker_width + row.label.width() as u16;
        (start, end)
    }
}

/// Flatten the expanded portion of the tree into rows. The parent reference
/// is threaded down the recursion; each node's expansion flag is looked up
/// independently in the side table.
pub(crate) fn build_view(
    root: &TreeNode,
    nodes_property: &str,
    display_property: &str,
    expansion: &ExpansionState,
    selection: &SelectionState,
    dragging: Option<&str>,
) -> TreeView {
    let mut rows = Vec::new();
    flatten(
        root,
        None,
        0,
        nodes_property,
        display_property,
        expansion,
        selection,
        dragging,
        &mut rows,
    );
    TreeView { rows }
}

#[allow(clippy::too_many_arguments)]
fn flatten(
    node: &TreeNode,
    parent: Option<&TreeNode>,
    depth: u16,
    nodes_property: &str,
    display_property: &str,
    expansion: &ExpansionState,
    selection: &SelectionState,
    dragging: Option<&str>,
    rows: &mut Vec<NodeRow>,
) {
    let has_children = node.has_children(nodes_property);
    let expanded = expansion.is_expanded(&node.id);

    rows.push(NodeRow {
        node_id: node.id.clone(),
        parent_id: parent.map(|p| p.id.clone()),
        depth,
        label: node
            .display_value(display_property)
            .unwrap_or_default()
            .to_string(),
        has_children,
        expanded,
        selected: selection.is_selected(&node.id),
        dragging: dragging == Some(node.id.as_str()),
    });

    if has_children && expanded {
        for child in node.child_nodes(nodes_property).unwrap_or_default() {
            flatten(
                child,
                Some(node),
                depth + 1,
                nodes_property,
                display_property,
                expansion,
                selection,
                dragging,
                rows,
            );
        }
    }
}

/// Find the row whose clickable label region contains the given screen
/// coordinates. Rows occupy one line each from the top of `area`; clicks on
/// the indentation or past the label miss.
pub fn hit_test<'a>(
    view: &'a TreeView,
    template: &RowTemplate,
    area: Rect,
    x: u16,
    y: u16,
) -> Option<&'a NodeRow> {
    if !area.contains(x, y) {
        return None;
    }

    let row = view.row((y - area.y) as usize)?;
    let (start, end) = template.label_span(row);
    let col = x - area.x;

    if col >= start && col < end.min(area.width) {
        Some(row)
    } else {
        None
    }
}
