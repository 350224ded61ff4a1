//! Configuration structures for the event log generator
//!
//! This module contains the generator configuration structure, the command line
//! surface, partial configuration files, and the validation logic that runs
//! before any case is generated.

use super::OutputFormat;
use crate::output::resolve_output_path;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Number of cases generated per run
    pub const CASE_COUNT: usize = 5000;

    /// Seed for the shared random source
    pub const SEED: u64 = 42;

    /// Base on-time-delivery allowance in days, before company scaling
    pub const BASE_SLA_DAYS: f64 = 5.0;

    /// Destination of the per-event dataset
    pub const EVENT_LOG_OUTPUT: &str = "data/event_log.csv";

    /// Destination of the per-case dataset
    pub const CASE_ATTRIBUTES_OUTPUT: &str = "data/case_attributes.csv";

    /// First day a case may start on (year, month, day)
    pub const START_DATE: (i32, u32, u32) = (2024, 1, 1);

    /// Last day a case may start on (year, month, day)
    pub const END_DATE: (i32, u32, u32) = (2025, 3, 1);
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "order-to-cash-event-log",
    version = "0.1.0",
    about = "Order-to-cash event log generator - synthesizes process-mining demo data",
    long_about = "Generates a fictitious order-to-cash event log and per-case summary with realistic process variants, company-specific lead times, and an on-time-delivery KPI.

EXAMPLES:
    # Run with default settings (5000 cases, seed 42)
    order-to-cash-event-log

    # Use a configuration file
    order-to-cash-event-log --config config.json

    # Override specific settings
    order-to-cash-event-log --case-count 20000 --seed 7

    # Generate configuration template
    order-to-cash-event-log --print-config > my-config.json

    # Export the built-in reference tables for editing
    order-to-cash-event-log --print-reference-data > tables.json

    # Validate configuration without generating
    order-to-cash-event-log --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of cases to generate
    #[arg(
        long,
        help = "Number of cases to generate",
        long_help = "Total number of process instances to generate. Must be greater than 0. Default: 5000"
    )]
    pub case_count: Option<usize>,

    /// First possible case start date
    #[arg(long, help = "First possible case start date (YYYY-MM-DD)")]
    pub start_date: Option<NaiveDate>,

    /// Last possible case start date
    #[arg(long, help = "Last possible case start date (YYYY-MM-DD)")]
    pub end_date: Option<NaiveDate>,

    /// Random seed for reproducible results
    #[arg(
        long,
        help = "Random seed for reproducible results",
        long_help = "Seed for the random source. The same seed and case count always produce identical output. Default: 42"
    )]
    pub seed: Option<u64>,

    /// Base SLA in days
    #[arg(long, help = "Base on-time-delivery SLA in days (scaled per company)")]
    pub base_sla_days: Option<f64>,

    /// Output format for generated datasets
    #[arg(
        long,
        help = "Output format (csv or jsonl)",
        long_help = "Output format for both datasets. Supported formats: csv, jsonl. Default: csv"
    )]
    pub output_format: Option<String>,

    /// Output path for the event log
    #[arg(long, help = "Output path for the event log dataset")]
    pub event_log_output: Option<String>,

    /// Output path for the case attributes
    #[arg(long, help = "Output path for the case attributes dataset")]
    pub case_attributes_output: Option<String>,

    /// Reference data file
    #[arg(
        long,
        help = "Reference tables file (JSON format)",
        long_help = "Path to a JSON file with activities, variants, weights, companies, materials, payment terms and durations. Built-in tables are used when omitted."
    )]
    pub reference_data: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Directory for rolling JSON log files
    #[arg(long, help = "Also write JSON logs to a daily rolling file in this directory")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without generating
    #[arg(long, help = "Validate configuration without generating data")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Print built-in reference tables and exit
    #[arg(long, help = "Print built-in reference tables in JSON format and exit")]
    pub print_reference_data: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of cases to generate
    pub case_count: Option<usize>,

    /// First possible case start date
    pub start_date: Option<NaiveDate>,

    /// Last possible case start date
    pub end_date: Option<NaiveDate>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Base on-time-delivery SLA in days
    pub base_sla_days: Option<f64>,

    /// Output format for generated datasets
    pub output_format: Option<String>,

    /// Output path for the event log
    pub event_log_output: Option<String>,

    /// Output path for the case attributes
    pub case_attributes_output: Option<String>,

    /// Reference tables file
    pub reference_data: Option<String>,
}

/// Configuration for the event log generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Number of cases to generate
    pub case_count: usize,

    /// First possible case start date
    pub start_date: NaiveDate,

    /// Last possible case start date (inclusive)
    pub end_date: NaiveDate,

    /// Random seed for reproducible results
    pub seed: u64,

    /// Base on-time-delivery SLA in days
    pub base_sla_days: f64,

    /// Output format for generated datasets
    pub output_format: String,

    /// Output path for the event log
    pub event_log_output: String,

    /// Output path for the case attributes
    pub case_attributes_output: String,

    /// Reference tables file (built-in tables when `None`)
    pub reference_data: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for generator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Case count is invalid
    #[error("Case count must be greater than 0, got {0}")]
    InvalidCaseCount(usize),

    /// Date range is empty or inverted
    #[error("Invalid date range: start ({start}) must be before end ({end})")]
    InvalidDateRange {
        /// Configured start date
        start: NaiveDate,
        /// Configured end date
        end: NaiveDate,
    },

    /// SLA is not a positive number of days
    #[error("Base SLA must be a positive number of days, got {0}")]
    InvalidBaseSla(f64),

    /// Output format not recognised
    #[error("{0}")]
    InvalidOutputFormat(String),

    /// An output path is empty
    #[error("Output path for {0} must not be empty")]
    EmptyOutputPath(&'static str),

    /// Both datasets would be written to the same destination
    #[error("Event log and case attributes must go to different outputs, both resolve to '{0}'")]
    ConflictingOutputPaths(String),
}

fn date_from_parts((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            case_count: defaults::CASE_COUNT,
            start_date: date_from_parts(defaults::START_DATE),
            end_date: date_from_parts(defaults::END_DATE),
            seed: defaults::SEED,
            base_sla_days: defaults::BASE_SLA_DAYS,
            output_format: "csv".to_string(),
            event_log_output: defaults::EVENT_LOG_OUTPUT.to_string(),
            case_attributes_output: defaults::CASE_ATTRIBUTES_OUTPUT.to_string(),
            reference_data: None,
        }
    }
}

impl GeneratorConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            case_count: config_file.case_count.unwrap_or(defaults.case_count),
            start_date: config_file.start_date.unwrap_or(defaults.start_date),
            end_date: config_file.end_date.unwrap_or(defaults.end_date),
            seed: config_file.seed.unwrap_or(defaults.seed),
            base_sla_days: config_file.base_sla_days.unwrap_or(defaults.base_sla_days),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            event_log_output: config_file.event_log_output.unwrap_or(defaults.event_log_output),
            case_attributes_output: config_file
                .case_attributes_output
                .unwrap_or(defaults.case_attributes_output),
            reference_data: config_file.reference_data.or(defaults.reference_data),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.case_count {
            config.case_count = value;
        }
        if let Some(value) = args.start_date {
            config.start_date = value;
        }
        if let Some(value) = args.end_date {
            config.end_date = value;
        }
        if let Some(value) = args.seed {
            config.seed = value;
        }
        if let Some(value) = args.base_sla_days {
            config.base_sla_days = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.event_log_output {
            config.event_log_output = value;
        }
        if let Some(value) = args.case_attributes_output {
            config.case_attributes_output = value;
        }
        if let Some(value) = args.reference_data {
            config.reference_data = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.case_count == 0 {
            return Err(ConfigValidationError::InvalidCaseCount(self.case_count));
        }

        if self.start_date >= self.end_date {
            return Err(ConfigValidationError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if !(self.base_sla_days.is_finite() && self.base_sla_days > 0.0) {
            return Err(ConfigValidationError::InvalidBaseSla(self.base_sla_days));
        }

        let format =
            self.get_output_format().map_err(ConfigValidationError::InvalidOutputFormat)?;

        if self.event_log_output.trim().is_empty() {
            return Err(ConfigValidationError::EmptyOutputPath("event log"));
        }
        if self.case_attributes_output.trim().is_empty() {
            return Err(ConfigValidationError::EmptyOutputPath("case attributes"));
        }

        let events_path = resolve_output_path(&self.event_log_output, format);
        if events_path == resolve_output_path(&self.case_attributes_output, format) {
            return Err(ConfigValidationError::ConflictingOutputPaths(
                events_path.display().to_string(),
            ));
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// Number of whole days between the first and last possible start date
    pub fn start_window_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
