//! Graph-subsystem error type.

use thiserror::Error;

use eamod_core::{CoreError, Literal};

/// Errors produced by `eamod-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// `node` is the 0-based index of the row holding the bad neighbour.
    #[error("neighbour {value} of node {node} is not a valid road node")]
    InvalidNeighbor { node: usize, value: Literal },

    #[error("declared node count {declared} does not match adjacency list length {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("adjacency list entry {label:?}: {source}")]
    Parse {
        label:  String,
        #[source]
        source: CoreError,
    },

    #[error("edge count {0} does not fit in an EdgeId")]
    EdgeOverflow(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;
