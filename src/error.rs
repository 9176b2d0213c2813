use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a flow document from disk.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse JSON in '{}': {source}", .path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A required field of a flow document is missing or empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("flow ID is required")]
    MissingFlowId,

    #[error("flow name is required")]
    MissingFlowName,
}

/// Any failure along the load, validate and render path.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid flow: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}
