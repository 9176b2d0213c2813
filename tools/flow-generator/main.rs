use ahash::AHashMap;
use clap::Parser;
use nifiparser::model::{Connection, Flow, Processor, STATUS_RUNNING, STATUS_STOPPED};
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::{Rng, rng};
use std::fs;

/// A CLI tool to generate sample flow documents for nifiparser
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flow.json")]
    output: String,

    /// The number of processors to generate
    #[arg(long, default_value_t = 5)]
    processors: usize,

    /// The number of connections to generate. Defaults to one fewer than the processors
    #[arg(long)]
    connections: Option<usize>,

    /// The flow name written into the document
    #[arg(long, default_value = "Generated Flow")]
    name: String,
}

/// Processor types paired with a generator for their properties.
type ProcessorTemplate = (&'static str, fn(&mut ThreadRng) -> AHashMap<String, String>);

const PROCESSOR_TEMPLATES: [ProcessorTemplate; 6] = [
    ("GetFile", get_file_properties),
    ("PutFile", put_file_properties),
    ("ConvertRecord", convert_record_properties),
    ("RouteOnAttribute", route_properties),
    ("InvokeHTTP", invoke_http_properties),
    ("LogAttribute", no_properties),
];

const RELATIONSHIPS: [&str; 4] = ["success", "failure", "matched", "retry"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rng();

    let connection_count = cli
        .connections
        .unwrap_or_else(|| cli.processors.saturating_sub(1));

    if connection_count > 0 && cli.processors == 0 {
        eprintln!(
            "Error: cannot generate {} connection(s) without any processors",
            connection_count
        );
        std::process::exit(1);
    }

    println!(
        "Generating new flow ({} processors, {} connections)...",
        cli.processors, connection_count
    );

    let processors = generate_processors(&mut rng, cli.processors);
    let connections = generate_connections(&mut rng, &processors, connection_count);

    let flow = Flow {
        flow_id: format!("flow-{:08x}", rng.random::<u32>()),
        flow_name: cli.name,
        version: "1.0.0".to_string(),
        processors,
        connections,
    };

    fs::write(&cli.output, flow.to_json_pretty()?)?;

    println!(
        "Successfully generated and saved flow '{}' to '{}'",
        flow.flow_id, cli.output
    );

    Ok(())
}

fn generate_processors(rng: &mut ThreadRng, count: usize) -> Vec<Processor> {
    let processors: Vec<Processor> = (0..count)
        .map(|i| {
            let (processor_type, properties_fn) = PROCESSOR_TEMPLATES[i % PROCESSOR_TEMPLATES.len()];
            let status = if rng.random_bool(0.75) {
                STATUS_RUNNING
            } else {
                STATUS_STOPPED
            };
            Processor {
                id: format!("proc-{}", i + 1),
                name: format!("{} {}", processor_type, i + 1),
                processor_type: processor_type.to_string(),
                properties: properties_fn(rng),
                status: status.to_string(),
            }
        })
        .collect();
    println!("-> Generated {} processor(s).", processors.len());
    processors
}

/// Chains processors in order first, then adds random edges once the chain is complete.
fn generate_connections(
    rng: &mut ThreadRng,
    processors: &[Processor],
    count: usize,
) -> Vec<Connection> {
    let connections: Vec<Connection> = (0..count)
        .map(|i| {
            let (source, destination) = if i + 1 < processors.len() {
                (&processors[i], &processors[i + 1])
            } else {
                (
                    &processors[rng.random_range(0..processors.len())],
                    &processors[rng.random_range(0..processors.len())],
                )
            };
            let relationship = RELATIONSHIPS.choose(rng).copied().unwrap_or("success");
            Connection {
                id: format!("conn-{}", i + 1),
                source: source.id.clone(),
                destination: destination.id.clone(),
                relationship: relationship.to_string(),
            }
        })
        .collect();
    println!("-> Generated {} connection(s).", connections.len());
    connections
}

// --- Property Generator Functions for Each Processor Type ---

fn get_file_properties(rng: &mut ThreadRng) -> AHashMap<String, String> {
    let mut properties = AHashMap::new();
    properties.insert(
        "Input Directory".to_string(),
        format!("/data/in/{}", rng.random_range(1..100)),
    );
    properties.insert("Keep Source File".to_string(), rng.random_bool(0.5).to_string());
    properties
}

fn put_file_properties(rng: &mut ThreadRng) -> AHashMap<String, String> {
    let mut properties = AHashMap::new();
    properties.insert(
        "Directory".to_string(),
        format!("/data/out/{}", rng.random_range(1..100)),
    );
    properties.insert("Conflict Resolution Strategy".to_string(), "replace".to_string());
    properties
}

fn convert_record_properties(_rng: &mut ThreadRng) -> AHashMap<String, String> {
    let mut properties = AHashMap::new();
    properties.insert("Record Reader".to_string(), "CSVReader".to_string());
    properties.insert("Record Writer".to_string(), "JsonRecordSetWriter".to_string());
    properties
}

fn route_properties(rng: &mut ThreadRng) -> AHashMap<String, String> {
    let mut properties = AHashMap::new();
    properties.insert(
        "Routing Strategy".to_string(),
        "Route to Property name".to_string(),
    );
    properties.insert(
        "large".to_string(),
        format!("${{fileSize:gt({})}}", rng.random_range(1024..1_048_576)),
    );
    properties
}

fn invoke_http_properties(rng: &mut ThreadRng) -> AHashMap<String, String> {
    let mut properties = AHashMap::new();
    properties.insert("HTTP Method".to_string(), "POST".to_string());
    properties.insert(
        "Remote URL".to_string(),
        format!("http://localhost:{}/ingest", rng.random_range(8000..9000)),
    );
    properties
}

fn no_properties(_rng: &mut ThreadRng) -> AHashMap<String, String> {
    AHashMap::new()
}
