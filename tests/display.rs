//! Tests for the console report rendering.
mod common;
use common::*;
use nifiparser::prelude::*;

#[test]
fn test_displayer_borrows_flow() {
    let flow = named_flow("test-123", "Test Flow");
    let displayer = Displayer::new(&flow);
    assert!(std::ptr::eq(displayer.flow(), &flow));
}

#[test]
fn test_summary() {
    let flow = Flow::from_json_str(SAMPLE_FLOW_JSON).expect("Failed to parse fixture");
    let output = render(&flow, Section::Summary);

    let rule = "=".repeat(60);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], rule);
    assert_eq!(lines[1], "NiFi Flow Summary: Test Flow");
    assert_eq!(lines[2], rule);
    assert!(output.contains("Flow ID:       test-123"));
    assert!(output.contains("Version:       1.0.0"));
    assert!(output.contains("Processors:    3"));
    assert!(output.contains("Connections:   2"));
    assert!(output.ends_with("\n\n"));
}

#[test]
fn test_summary_renders_zero_counts() {
    let flow = Flow::from_json_str(MINIMAL_FLOW_JSON).expect("Failed to parse fixture");
    let output = render(&flow, Section::Summary);

    assert!(output.contains("Processors:    0"));
    assert!(output.contains("Connections:   0"));
}

#[test]
fn test_processors_empty() {
    let flow = named_flow("test-123", "Test Flow");
    let output = render(&flow, Section::Processors);
    assert_eq!(output, "No processors found.\n");
}

#[test]
fn test_processors_details() {
    let flow = Flow::from_json_str(SAMPLE_FLOW_JSON).expect("Failed to parse fixture");
    let output = render(&flow, Section::Processors);

    assert!(output.starts_with("Processors:\n"));
    assert!(output.contains(&"-".repeat(60)));
    assert!(output.contains("1. Fetch (ID: p1)"));
    assert!(output.contains("   Type:   GetFile"));
    assert!(output.contains("   Status: running"));
    assert!(output.contains("2. Transform (ID: p2)"));
    assert!(output.contains("3. Store (ID: p3)"));

    // Property order is unspecified; only presence is checked.
    assert!(output.contains("     - Input Directory: /in"));
    assert!(output.contains("     - Keep Source File: false"));
    assert!(output.contains("     - Directory: /out"));
}

#[test]
fn test_processors_without_properties_skip_header() {
    let flow = Flow {
        processors: vec![processor("p1", "Only", "running")],
        ..named_flow("f1", "Flow")
    };
    let output = render(&flow, Section::Processors);

    assert!(output.contains("1. Only (ID: p1)"));
    assert!(!output.contains("Properties:"));
}

#[test]
fn test_connections_empty() {
    let flow = named_flow("test-123", "Test Flow");
    let output = render(&flow, Section::Connections);
    assert_eq!(output, "No connections found.\n");
}

#[test]
fn test_connections_arrows() {
    let flow = Flow::from_json_str(SAMPLE_FLOW_JSON).expect("Failed to parse fixture");
    let output = render(&flow, Section::Connections);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Connections:");
    assert_eq!(lines[2], "1. p1 -> p2 (success)");
    assert_eq!(lines[3], "2. p2 -> p3 (failure)");
}

#[test]
fn test_statistics() {
    let flow = Flow {
        processors: vec![
            processor("p1", "A", "running"),
            processor("p2", "B", "running"),
            processor("p3", "C", "stopped"),
        ],
        connections: vec![connection("c1", "p1", "p2", "success")],
        ..named_flow("test-123", "Test Flow")
    };
    let output = render(&flow, Section::Statistics);

    assert!(output.contains("Running Processors:  2"));
    assert!(output.contains("Stopped Processors:  1"));
    assert!(output.contains("Total Connections:   1"));
}

#[test]
fn test_statistics_ignore_unknown_and_differently_cased_statuses() {
    let flow = Flow {
        processors: vec![
            processor("p1", "A", "running"),
            processor("p2", "B", "Running"),
            processor("p3", "C", "disabled"),
            processor("p4", "D", "stopped"),
            processor("p5", "E", ""),
        ],
        ..named_flow("f1", "Flow")
    };

    assert_eq!(
        Displayer::new(&flow).statistics(),
        FlowStatistics {
            running: 1,
            stopped: 1,
            connections: 0,
        }
    );
}

#[test]
fn test_statistics_empty_flow() {
    let flow = named_flow("f1", "Flow");
    let output = render(&flow, Section::Statistics);

    assert!(output.contains("Running Processors:  0"));
    assert!(output.contains("Stopped Processors:  0"));
    assert!(output.contains("Total Connections:   0"));
}

#[test]
fn test_rendering_is_repeatable() {
    let flow = Flow::from_json_str(SAMPLE_FLOW_JSON).expect("Failed to parse fixture");
    for section in Section::ALL {
        assert_eq!(render(&flow, section), render(&flow, section));
    }
}

#[test]
fn test_report_follows_requested_order() {
    let flow = Flow::from_json_str(SAMPLE_FLOW_JSON).expect("Failed to parse fixture");
    let mut out = Vec::new();
    Displayer::new(&flow)
        .write_report(&mut out, &[Section::Statistics, Section::Summary])
        .expect("Writing to a Vec cannot fail");
    let output = String::from_utf8(out).expect("Report is valid UTF-8");

    let stats_at = output.find("Statistics:").expect("Statistics missing");
    let summary_at = output.find("NiFi Flow Summary").expect("Summary missing");
    assert!(stats_at < summary_at);
    assert!(!output.contains("Connections:\n"));
}
