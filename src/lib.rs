//! Order-to-Cash Event Log Generator
//!
//! Synthesizes a fictitious order-to-cash business-process event log for
//! process-mining demonstrations: a per-event log and a per-case summary with
//! realistic variant mix, company-specific lead times, and an on-time-delivery KPI.
//!
//! # Overview
//!
//! Each case draws a company, material group, payment term and weighted process
//! variant, then walks the variant's activities with normally distributed,
//! company-scaled durations. The finished event sequence is handed to the KPI
//! evaluator, and the case is emitted. A seeded random source makes every run
//! reproducible.
//!
//! ## Key Features
//!
//! - **Reference Data**: validated, replaceable lookup tables for the process
//! - **Case Generation**: weighted variants, company skew, sub-second timestamps
//! - **On-Time Delivery KPI**: company-scaled SLA between order receipt and delivery
//! - **Reproducible Batches**: identical output for identical seed and case count
//! - **CSV and JSON Lines Output**: two joinable datasets keyed by case id
//!
//! ## Quick Start
//!
//! ```rust
//! use order_to_cash_event_log::*;
//!
//! let config = GeneratorConfig { case_count: 100, ..Default::default() };
//! let assembler = LogAssembler::from_config(config)?;
//!
//! let log = assembler.assemble()?;
//! let stats = log.statistics();
//! println!("Generated {} events for {} cases", stats.total_events, stats.total_cases);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums, configuration and timestamp helpers
//! - [`reference`]: Activities, variants, companies and duration tables
//! - [`events`]: Process events, case summaries and the case generator
//! - [`kpi`]: On-time-delivery evaluation
//! - [`simulation`]: Batch assembly, statistics, errors and logging
//! - [`output`]: CSV and JSON Lines sinks
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Reference  │    │   Events    │    │     KPI     │
//! │             │    │             │    │             │
//! │ Variants    │───►│ Case        │───►│ On-Time     │
//! │ Companies   │    │ Generator   │    │ Delivery    │
//! │ Durations   │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                            │
//!                            ▼
//!                    ┌─────────────┐    ┌─────────────┐
//!                    │ Simulation  │    │   Output    │
//!                    │             │    │             │
//!                    │ Log         │───►│ CSV         │
//!                    │ Assembler   │    │ JSON Lines  │
//!                    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod kpi;
pub mod output;
pub mod reference;
pub mod simulation;
pub mod types;

// Core types and configuration
pub use types::{
    CaseId, CliArgs, ConfigError, ConfigValidationError, GeneratorConfig, OutputFormat, Region,
};

// Reference data
pub use reference::{CompanyProfile, DurationParams, ProcessVariant, ReferenceData, ReferenceDataError};

// Events and case generation
pub use events::{Case, CaseAttributes, CaseGenerator, GeneratedCase, ProcessEvent};

// KPI evaluation
pub use kpi::{KpiError, OnTimeDeliveryEvaluator};

// Batch assembly and reporting
pub use simulation::{
    EventLog, GenerationError, GenerationResult, LogAssembler, LogStatistics, LoggingConfig,
};

// Output sinks
pub use output::{sink_for_config, CsvLogSink, JsonLinesLogSink, LogSink};
