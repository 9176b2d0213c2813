use crate::model::Flow;
use itertools::Itertools;
use std::io::{self, Write};

mod statistics;

pub use statistics::FlowStatistics;

/// Width of every separator rule in the report.
pub const RULE_WIDTH: usize = 60;

/// A part of the console report that can be rendered on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Processors,
    Connections,
    Statistics,
}

impl Section {
    /// Every section, in the order a full report prints them.
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::Processors,
        Section::Connections,
        Section::Statistics,
    ];
}

/// Renders a flow as plain text.
///
/// Each `write_*` method is independent and can be called any number of times,
/// in any order. Rendering never validates the flow; empty collections produce a
/// placeholder line. The only failure is an I/O error from the sink.
pub struct Displayer<'a> {
    flow: &'a Flow,
}

impl<'a> Displayer<'a> {
    pub fn new(flow: &'a Flow) -> Self {
        Self { flow }
    }

    pub fn flow(&self) -> &'a Flow {
        self.flow
    }

    pub fn statistics(&self) -> FlowStatistics {
        FlowStatistics::from_flow(self.flow)
    }

    /// Writes the flow name, id, version and collection sizes inside a `=` frame.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let frame = "=".repeat(RULE_WIDTH);
        writeln!(out, "{}", frame)?;
        writeln!(out, "NiFi Flow Summary: {}", self.flow.flow_name)?;
        writeln!(out, "{}", frame)?;
        writeln!(out, "Flow ID:       {}", self.flow.flow_id)?;
        writeln!(out, "Version:       {}", self.flow.version)?;
        writeln!(out, "Processors:    {}", self.flow.processors.len())?;
        writeln!(out, "Connections:   {}", self.flow.connections.len())?;
        writeln!(out)
    }

    /// Writes one numbered block per processor, including its properties when it has any.
    pub fn write_processors<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.flow.processors.is_empty() {
            return writeln!(out, "No processors found.");
        }

        writeln!(out, "Processors:")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for (i, processor) in self.flow.processors.iter().enumerate() {
            writeln!(out, "{}. {} (ID: {})", i + 1, processor.name, processor.id)?;
            writeln!(out, "   Type:   {}", processor.processor_type)?;
            writeln!(out, "   Status: {}", processor.status)?;
            if !processor.properties.is_empty() {
                writeln!(out, "   Properties:")?;
                // Sorted so repeated runs print identical reports.
                for (key, value) in processor.properties.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
                    writeln!(out, "     - {}: {}", key, value)?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Writes one `source -> destination (relationship)` line per connection.
    pub fn write_connections<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.flow.connections.is_empty() {
            return writeln!(out, "No connections found.");
        }

        writeln!(out, "Connections:")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        for (i, connection) in self.flow.connections.iter().enumerate() {
            writeln!(
                out,
                "{}. {} -> {} ({})",
                i + 1,
                connection.source,
                connection.destination,
                connection.relationship
            )?;
        }
        writeln!(out)
    }

    /// Writes the running/stopped tallies and the connection total.
    pub fn write_statistics<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let stats = self.statistics();
        writeln!(out, "Statistics:")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(out, "Running Processors:  {}", stats.running)?;
        writeln!(out, "Stopped Processors:  {}", stats.stopped)?;
        writeln!(out, "Total Connections:   {}", stats.connections)?;
        writeln!(out)
    }

    pub fn write_section<W: Write>(&self, out: &mut W, section: Section) -> io::Result<()> {
        match section {
            Section::Summary => self.write_summary(out),
            Section::Processors => self.write_processors(out),
            Section::Connections => self.write_connections(out),
            Section::Statistics => self.write_statistics(out),
        }
    }

    /// Writes the requested sections in the order given.
    pub fn write_report<W: Write>(&self, out: &mut W, sections: &[Section]) -> io::Result<()> {
        for section in sections {
            self.write_section(out, *section)?;
        }
        Ok(())
    }

    pub fn print_summary(&self) -> io::Result<()> {
        self.write_summary(&mut io::stdout().lock())
    }

    pub fn print_processors(&self) -> io::Result<()> {
        self.write_processors(&mut io::stdout().lock())
    }

    pub fn print_connections(&self) -> io::Result<()> {
        self.write_connections(&mut io::stdout().lock())
    }

    pub fn print_statistics(&self) -> io::Result<()> {
        self.write_statistics(&mut io::stdout().lock())
    }

    /// Prints the requested sections to stdout and flushes it.
    pub fn print_report(&self, sections: &[Section]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_report(&mut stdout, sections)?;
        stdout.flush()
    }
}
