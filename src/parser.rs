use crate::error::ParseError;
use crate::model::Flow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads a [`Flow`] from a JSON file on disk.
///
/// The parser only remembers the path it was created with; every call to
/// [`Parser::parse`] reads the file again.
#[derive(Debug, Clone)]
pub struct Parser {
    path: PathBuf,
}

impl Parser {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file and deserializes it as a flow document.
    ///
    /// # Errors
    ///
    /// * [`ParseError::FileRead`] if the file is missing or unreadable.
    /// * [`ParseError::Deserialization`] if the content is not a UTF-8 JSON document of the flow shape.
    pub fn parse(&self) -> Result<Flow, ParseError> {
        debug!(path = %self.path.display(), "reading flow document");
        let content = fs::read(&self.path).map_err(|source| ParseError::FileRead {
            path: self.path.clone(),
            source,
        })?;

        let flow = Flow::from_json_slice(&content).map_err(|source| ParseError::Deserialization {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            bytes = content.len(),
            flow_id = %flow.flow_id,
            processors = flow.processors.len(),
            connections = flow.connections.len(),
            "decoded flow document"
        );
        Ok(flow)
    }
}
