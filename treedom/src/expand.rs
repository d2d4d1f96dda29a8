use std::collections::HashMap;

/// Per-node expanded/collapsed flags, kept in a side table keyed by node id
/// so the model itself stays free of view state. Flags are not persisted
/// across widget instances.
#[derive(Debug)]
pub struct ExpansionState {
    default_expanded: bool,
    flags: HashMap<String, bool>,
}

impl ExpansionState {
    /// Nodes of a collapsible widget start collapsed; of a non-collapsible
    /// widget, expanded.
    pub fn new(collapsible: bool) -> Self {
        Self {
            default_expanded: !collapsible,
            flags: HashMap::new(),
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(self.default_expanded)
    }

    /// Flip the node's flag. Returns the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = !self.is_expanded(id);
        self.flags.insert(id.to_string(), flag);
        flag
    }

    /// Drop all per-node flags, reverting every node to the default.
    pub fn reset(&mut self) {
        self.flags.clear();
    }
}
