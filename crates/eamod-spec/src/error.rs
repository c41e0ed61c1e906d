use eamod_core::CoreError;
use eamod_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("road graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("{what} must be a non-negative integer, got {value}")]
    InvalidDimension { what: &'static str, value: i64 },

    #[error("{what} with shape {shape:?} is too large to allocate")]
    TooLarge { what: &'static str, shape: Vec<usize> },

    #[error("cannot parse {field}: {source}")]
    Parse {
        field:  &'static str,
        #[source]
        source: CoreError,
    },

    #[error("road capacity at ({row}, {col}) is negative: {value}")]
    InvalidCapacity { row: usize, col: usize, value: i64 },

    #[error("{what} has shape {rows}x{cols}, expected {expected}")]
    MatrixShape {
        what:     &'static str,
        rows:     usize,
        cols:     usize,
        expected: String,
    },

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpecResult<T> = Result<T, SpecError>;
