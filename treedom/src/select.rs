/// Tracks the single selected node of one widget instance, together with the
/// render-time parent context needed when the host is asked to confirm a
/// removal. At most one node is selected at any time.
#[derive(Debug, Default)]
pub struct SelectionState {
    selected: Option<String>,
    parent: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the currently selected node.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Id of the selected node's parent as seen at selection time. None when
    /// the root is selected.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select a node, replacing any previous selection. Returns false if the
    /// node was already selected (the parent context is still re-set).
    pub fn select(&mut self, id: &str, parent: Option<&str>) -> bool {
        let changed = self.selected.as_deref() != Some(id);
        self.selected = Some(id.to_string());
        self.parent = parent.map(str::to_string);
        changed
    }

    /// Clear the selection. Returns true if there was one.
    pub fn clear(&mut self) -> bool {
        self.parent = None;
        if self.selected.is_some() {
            self.selected = None;
            true
        } else {
            false
        }
    }
}
