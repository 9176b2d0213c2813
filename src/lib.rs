//! # nifiparser - Data-Flow Document Inspector
//!
//! **nifiparser** reads a JSON description of a data-flow pipeline (processors
//! connected by directed relationships), checks the fields every flow must carry,
//! and renders a human-readable report for the console.
//!
//! ## Core Workflow
//!
//! 1.  **Parse**: Create a [`Parser`](parser::Parser) for a file path and call `parse()` to get a [`Flow`](model::Flow).
//! 2.  **Validate**: Call [`validate_flow`](validation::validate_flow) to make sure the flow has an id and a name.
//! 3.  **Display**: Wrap the flow in a [`Displayer`](display::Displayer) and render any of the four
//!     report sections (summary, processors, connections, statistics) to any `std::io::Write` sink.
//!
//! [`load_flow`] combines the first two steps.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nifiparser::prelude::*;
//!
//! fn main() -> Result<(), FlowError> {
//!     let flow = Parser::new("data/flow.json").parse()?;
//!     validate_flow(&flow)?;
//!
//!     let displayer = Displayer::new(&flow);
//!     displayer.print_summary()?;
//!     displayer.print_processors()?;
//!     displayer.print_connections()?;
//!     displayer.print_statistics()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "flowId": "f1",
//!   "flowName": "Pipeline A",
//!   "version": "1.0",
//!   "processors": [
//!     { "id": "p1", "name": "Fetch", "type": "GetFile",
//!       "properties": { "Input Directory": "/in" }, "status": "running" }
//!   ],
//!   "connections": [
//!     { "id": "c1", "source": "p1", "destination": "p2", "relationship": "success" }
//!   ]
//! }
//! ```
//!
//! Missing fields default to empty values and unknown fields are ignored.

pub mod display;
pub mod error;
pub mod model;
pub mod parser;
pub mod prelude;
pub mod validation;

use error::FlowError;
use model::Flow;
use std::path::Path;

/// Parses the file at `path` and validates the result.
pub fn load_flow(path: impl AsRef<Path>) -> Result<Flow, FlowError> {
    let flow = parser::Parser::new(path.as_ref()).parse()?;
    validation::validate_flow(&flow)?;
    Ok(flow)
}
