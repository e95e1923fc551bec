use crate::autograd::NodeId;
use thiserror::Error;

/// Custom error type for the gradnet workspace.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GradnetError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Label {label} out of range for {num_classes} classes")]
    LabelOutOfRange { label: usize, num_classes: usize },

    #[error("Empty dataset passed to {operation}")]
    EmptyDataset { operation: String },

    #[error("A network needs at least one layer")]
    EmptyNetwork,

    #[error("Layer {layer} has zero neurons")]
    InvalidLayerSize { layer: usize },

    #[error("Node {0:?} does not exist in the graph")]
    NodeNotFound(NodeId),

    #[error("Cannot allocate a parameter while {live} transient nodes are alive; reset the graph first")]
    GraphNotReset { live: usize },

    #[error("Node {0:?} is not a parameter; only parameters can be updated in place")]
    NotAParameter(NodeId),

    #[error("Parameter count mismatch: expected {expected}, got {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    #[error("Index out of bounds: index {index} for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Cannot compute a loss over an empty set of scores")]
    EmptyScores,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
