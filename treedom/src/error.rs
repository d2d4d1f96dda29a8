use thiserror::Error;

/// Fatal configuration errors, surfaced at widget construction. Everything
/// else the widget encounters at runtime (invalid drops, requests without a
/// selection) is a silent no-op, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("draggable option requires a terminal with mouse drag capture")]
    DragUnsupported,
}
