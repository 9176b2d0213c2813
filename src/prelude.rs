//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! nifiparser crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use nifiparser::prelude::*;
//!
//! # fn run_example() -> Result<(), FlowError> {
//! let flow = load_flow("path/to/flow.json")?;
//! let stats = Displayer::new(&flow).statistics();
//! println!("{} running, {} stopped", stats.running, stats.stopped);
//! # Ok(())
//! # }
//! ```

// Loading and validation
pub use crate::load_flow;
pub use crate::parser::Parser;
pub use crate::validation::{validate_flow, validation_errors};

// Data model
pub use crate::model::{Connection, Flow, Processor};

// Rendering
pub use crate::display::{Displayer, FlowStatistics, Section};

// Error types
pub use crate::error::{FlowError, ParseError, ValidationError};
