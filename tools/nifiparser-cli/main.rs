use clap::{Parser, ValueEnum};
use nifiparser::parser::Parser as FlowParser;
use nifiparser::prelude::*;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SectionCli {
    Summary,
    Processors,
    Connections,
    Statistics,
}

impl From<SectionCli> for Section {
    fn from(section: SectionCli) -> Self {
        match section {
            SectionCli::Summary => Section::Summary,
            SectionCli::Processors => Section::Processors,
            SectionCli::Connections => Section::Connections,
            SectionCli::Statistics => Section::Statistics,
        }
    }
}

/// Reads a NiFi flow document, validates it and prints a summary
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow JSON file
    flow_path: Option<String>,

    /// Report section to print; repeat to print several. Defaults to all of them
    #[arg(short, long = "section", value_enum)]
    sections: Vec<SectionCli>,

    /// Report every validation failure instead of stopping at the first
    #[arg(long)]
    all_errors: bool,

    /// Enable debug logging on stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "nifiparser=debug"
    } else {
        "nifiparser=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_report(flow_path: String, sections: Vec<Section>, all_errors: bool) {
    let start = Instant::now();
    info!(path = %flow_path, "loading flow");

    let flow = FlowParser::new(&flow_path)
        .parse()
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    if all_errors {
        let errors = validation_errors(&flow);
        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            exit_with_error(&format!("invalid flow: {}", messages.join(", ")));
        }
    } else {
        validate_flow(&flow)
            .unwrap_or_else(|e| exit_with_error(&FlowError::from(e).to_string()));
    }

    Displayer::new(&flow)
        .print_report(&sections)
        .unwrap_or_else(|e| exit_with_error(&FlowError::from(e).to_string()));

    debug!(elapsed = ?start.elapsed(), "report finished");
}

fn selected_sections(sections: Vec<SectionCli>) -> Vec<Section> {
    if sections.is_empty() {
        Section::ALL.to_vec()
    } else {
        sections.into_iter().map(Section::from).collect()
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let flow_path = cli.flow_path.unwrap_or_else(|| {
        exit_with_error("Flow path is required in non-interactive mode.");
    });

    run_report(flow_path, selected_sections(cli.sections), cli.all_errors);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- nifiparser Interactive Mode ---");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut ask = |question: &str, default: &str| -> String {
        read_answer(&mut input, question, default)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to read input: {}", e)))
    };

    let default_path = cli.flow_path.as_deref().unwrap_or("data/flow.json");
    let flow_path = ask("Enter flow path", default_path);

    let sections = loop {
        println!("\nPlease select what to print:");
        println!("  1: Full report");
        println!("  2: Summary only");
        println!("  3: Processors only");
        println!("  4: Connections only");
        println!("  5: Statistics only");

        match ask("Enter choice", "1").as_str() {
            "1" => break Section::ALL.to_vec(),
            "2" => break vec![Section::Summary],
            "3" => break vec![Section::Processors],
            "4" => break vec![Section::Connections],
            "5" => break vec![Section::Statistics],
            _ => println!("Invalid choice. Please enter a number from 1 to 5."),
        }
    };
    println!();

    run_report(flow_path, sections, cli.all_errors);
}

/// Prints `question` and reads one trimmed line, falling back to `default` on an empty answer.
///
/// End of input also selects the default, so piped runs never loop forever.
fn read_answer(input: &mut impl BufRead, question: &str, default: &str) -> io::Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "> {} [default: {}]: ", question, default)?;
    stdout.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(match line.trim() {
        "" => default.to_string(),
        answer => answer.to_string(),
    })
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
