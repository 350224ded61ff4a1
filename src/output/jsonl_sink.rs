//! JSON Lines output

use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::events::{Case, ProcessEvent};
use crate::output::LogSink;
use crate::simulation::GenerationResult;

/// Writes the event log and case attributes as one JSON object per line
#[derive(Debug)]
pub struct JsonLinesLogSink<W: Write> {
    events: W,
    cases: W,
    destinations: Vec<String>,
}

impl<W: Write> JsonLinesLogSink<W> {
    /// Create a sink over two writers
    pub fn new(events_writer: W, cases_writer: W) -> Self {
        Self { events: events_writer, cases: cases_writer, destinations: Vec::new() }
    }

    /// Attach a description of where the writers point
    pub fn with_destinations(mut self, destinations: Vec<String>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Flush and return the underlying writers
    pub fn into_inner(mut self) -> GenerationResult<(W, W)> {
        self.finish()?;
        Ok((self.events, self.cases))
    }
}

fn write_lines<T: Serialize, W: Write>(writer: &mut W, records: &[T]) -> GenerationResult<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

impl<W: Write> LogSink for JsonLinesLogSink<W> {
    fn write_events(&mut self, events: &[ProcessEvent]) -> GenerationResult<()> {
        write_lines(&mut self.events, events)?;
        self.events.flush()?;
        debug!("Wrote {} event lines as JSON", events.len());
        Ok(())
    }

    fn write_cases(&mut self, cases: &[Case]) -> GenerationResult<()> {
        write_lines(&mut self.cases, cases)?;
        debug!("Wrote {} case lines as JSON", cases.len());
        Ok(())
    }

    fn finish(&mut self) -> GenerationResult<()> {
        self.events.flush()?;
        self.cases.flush()?;
        Ok(())
    }

    fn destinations(&self) -> Vec<String> {
        self.destinations.clone()
    }
}
