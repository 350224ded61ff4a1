//! CSV output

use std::io::Write;
use tracing::debug;

use crate::events::{Case, ProcessEvent};
use crate::output::LogSink;
use crate::simulation::{GenerationError, GenerationResult};

/// Writes the event log and case attributes as two CSV datasets
///
/// Each dataset gets exactly one header row, even when no rows follow.
#[derive(Debug)]
pub struct CsvLogSink<W: Write> {
    events: csv::Writer<W>,
    cases: csv::Writer<W>,
    events_header_written: bool,
    cases_header_written: bool,
    destinations: Vec<String>,
}

impl<W: Write> CsvLogSink<W> {
    /// Create a sink over two writers
    pub fn new(events_writer: W, cases_writer: W) -> Self {
        let builder = || {
            let mut builder = csv::WriterBuilder::new();
            builder.has_headers(false);
            builder
        };
        Self {
            events: builder().from_writer(events_writer),
            cases: builder().from_writer(cases_writer),
            events_header_written: false,
            cases_header_written: false,
            destinations: Vec::new(),
        }
    }

    /// Attach a description of where the writers point
    pub fn with_destinations(mut self, destinations: Vec<String>) -> Self {
        self.destinations = destinations;
        self
    }

    /// Flush and return the underlying writers
    pub fn into_inner(mut self) -> GenerationResult<(W, W)> {
        self.write_headers()?;
        let events = self.events.into_inner().map_err(|e| GenerationError::IoError(e.into_error()))?;
        let cases = self.cases.into_inner().map_err(|e| GenerationError::IoError(e.into_error()))?;
        Ok((events, cases))
    }

    fn write_headers(&mut self) -> GenerationResult<()> {
        self.ensure_events_header()?;
        self.ensure_cases_header()
    }

    fn ensure_events_header(&mut self) -> GenerationResult<()> {
        if !self.events_header_written {
            self.events.write_record(ProcessEvent::COLUMNS)?;
            self.events_header_written = true;
        }
        Ok(())
    }

    fn ensure_cases_header(&mut self) -> GenerationResult<()> {
        if !self.cases_header_written {
            self.cases.write_record(Case::COLUMNS)?;
            self.cases_header_written = true;
        }
        Ok(())
    }
}

impl<W: Write> LogSink for CsvLogSink<W> {
    fn write_events(&mut self, events: &[ProcessEvent]) -> GenerationResult<()> {
        self.ensure_events_header()?;
        for event in events {
            self.events.serialize(event)?;
        }
        // Cases may share the same underlying stream
        self.events.flush()?;
        debug!("Wrote {} event rows as CSV", events.len());
        Ok(())
    }

    fn write_cases(&mut self, cases: &[Case]) -> GenerationResult<()> {
        self.ensure_cases_header()?;
        for case in cases {
            self.cases.serialize(case)?;
        }
        debug!("Wrote {} case rows as CSV", cases.len());
        Ok(())
    }

    fn finish(&mut self) -> GenerationResult<()> {
        self.write_headers()?;
        self.events.flush()?;
        self.cases.flush()?;
        Ok(())
    }

    fn destinations(&self) -> Vec<String> {
        self.destinations.clone()
    }
}
