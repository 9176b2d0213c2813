//! Common test utilities for building flow documents and files.
use ahash::AHashMap;
use nifiparser::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// The smallest document that passes validation.
#[allow(dead_code)]
pub const MINIMAL_FLOW_JSON: &str =
    r#"{"flowId":"f1","flowName":"Pipeline A","version":"1.0","processors":[],"connections":[]}"#;

/// A three-processor pipeline with properties and two connections.
#[allow(dead_code)]
pub const SAMPLE_FLOW_JSON: &str = r#"{
    "flowId": "test-123",
    "flowName": "Test Flow",
    "version": "1.0.0",
    "processors": [
        {
            "id": "p1",
            "name": "Fetch",
            "type": "GetFile",
            "properties": { "Input Directory": "/in", "Keep Source File": "false" },
            "status": "running"
        },
        {
            "id": "p2",
            "name": "Transform",
            "type": "ConvertRecord",
            "properties": {},
            "status": "running"
        },
        {
            "id": "p3",
            "name": "Store",
            "type": "PutFile",
            "properties": { "Directory": "/out" },
            "status": "stopped"
        }
    ],
    "connections": [
        { "id": "c1", "source": "p1", "destination": "p2", "relationship": "success" },
        { "id": "c2", "source": "p2", "destination": "p3", "relationship": "failure" }
    ]
}"#;

/// Writes `content` into a fresh temporary directory and returns its path.
///
/// The `TempDir` must be kept alive for as long as the file is used.
#[allow(dead_code)]
pub fn write_flow_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to create test file");
    (dir, path)
}

#[allow(dead_code)]
pub fn processor(id: &str, name: &str, status: &str) -> Processor {
    Processor {
        id: id.to_string(),
        name: name.to_string(),
        processor_type: "LogAttribute".to_string(),
        properties: AHashMap::new(),
        status: status.to_string(),
    }
}

#[allow(dead_code)]
pub fn connection(id: &str, source: &str, destination: &str, relationship: &str) -> Connection {
    Connection {
        id: id.to_string(),
        source: source.to_string(),
        destination: destination.to_string(),
        relationship: relationship.to_string(),
    }
}

/// Creates a flow with the given id and name and no processors or connections.
#[allow(dead_code)]
pub fn named_flow(flow_id: &str, flow_name: &str) -> Flow {
    Flow {
        flow_id: flow_id.to_string(),
        flow_name: flow_name.to_string(),
        ..Flow::default()
    }
}

/// Renders a report section into a string.
#[allow(dead_code)]
pub fn render(flow: &Flow, section: Section) -> String {
    let mut out = Vec::new();
    Displayer::new(flow)
        .write_section(&mut out, section)
        .expect("Writing to a Vec cannot fail");
    String::from_utf8(out).expect("Report is valid UTF-8")
}
