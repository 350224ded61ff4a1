//! Output sinks for generated event logs
//!
//! # Overview
//!
//! - **LogSink**: the seam between the log assembler and persistence
//! - **CsvLogSink**: two CSV datasets with header rows
//! - **JsonLinesLogSink**: two JSON Lines datasets, one object per line
//! - **sink_for_config**: opens the sink selected by a [`GeneratorConfig`]
//!
//! An output path of `-` writes to stdout.
//!
//! # Usage Example
//!
//! ```rust
//! use order_to_cash_event_log::output::*;
//!
//! let mut sink = CsvLogSink::new(Vec::new(), Vec::new());
//! sink.write_events(&[]).unwrap();
//! sink.write_cases(&[]).unwrap();
//!
//! let (events, _cases) = sink.into_inner().unwrap();
//! assert!(String::from_utf8(events).unwrap().starts_with("case_id,activity,timestamp"));
//! ```

pub mod csv_sink;
pub mod jsonl_sink;

pub use csv_sink::*;
pub use jsonl_sink::*;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::events::{Case, ProcessEvent};
use crate::simulation::GenerationResult;
use crate::types::{GeneratorConfig, OutputFormat};

/// Output path that selects stdout instead of a file
pub const STDOUT_PATH: &str = "-";

/// Destination for the two generated datasets
pub trait LogSink {
    /// Write the event log rows
    fn write_events(&mut self, events: &[ProcessEvent]) -> GenerationResult<()>;

    /// Write the case attribute rows
    fn write_cases(&mut self, cases: &[Case]) -> GenerationResult<()>;

    /// Flush everything written so far
    fn finish(&mut self) -> GenerationResult<()>;

    /// Human-readable description of where the data goes
    fn destinations(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write_events(&mut self, events: &[ProcessEvent]) -> GenerationResult<()> {
        (**self).write_events(events)
    }

    fn write_cases(&mut self, cases: &[Case]) -> GenerationResult<()> {
        (**self).write_cases(cases)
    }

    fn finish(&mut self) -> GenerationResult<()> {
        (**self).finish()
    }

    fn destinations(&self) -> Vec<String> {
        (**self).destinations()
    }
}

/// Swap a `.csv`/`.jsonl` extension for the one matching `format`
///
/// Paths with any other extension, and stdout, are returned unchanged.
pub fn resolve_output_path(path: &str, format: OutputFormat) -> PathBuf {
    let candidate = PathBuf::from(path);
    if path == STDOUT_PATH {
        return candidate;
    }
    let known = [OutputFormat::Csv.extension(), OutputFormat::JsonLines.extension()];
    match candidate.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if known.contains(&ext) && ext != format.extension() => {
            candidate.with_extension(format.extension())
        }
        _ => candidate,
    }
}

/// Open a buffered writer for an output path, creating parent directories
pub fn open_output(path: &Path) -> GenerationResult<Box<dyn Write>> {
    if path == Path::new(STDOUT_PATH) {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    debug!("Opening output file {}", path.display());
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}

/// Open the sink selected by the configuration
pub fn sink_for_config(config: &GeneratorConfig) -> GenerationResult<Box<dyn LogSink>> {
    let format = config
        .get_output_format()
        .map_err(crate::simulation::GenerationError::configuration_error)?;
    let events_path = resolve_output_path(&config.event_log_output, format);
    let cases_path = resolve_output_path(&config.case_attributes_output, format);

    let events_writer = open_output(&events_path)?;
    let cases_writer = open_output(&cases_path)?;
    let destinations = vec![
        format!("Event log: {}", describe_path(&events_path)),
        format!("Case attributes: {}", describe_path(&cases_path)),
    ];

    Ok(match format {
        OutputFormat::Csv => {
            Box::new(CsvLogSink::new(events_writer, cases_writer).with_destinations(destinations))
        }
        OutputFormat::JsonLines => Box::new(
            JsonLinesLogSink::new(events_writer, cases_writer).with_destinations(destinations),
        ),
    })
}

fn describe_path(path: &Path) -> String {
    if path == Path::new(STDOUT_PATH) {
        "stdout".to_string()
    } else {
        path.display().to_string()
    }
}
