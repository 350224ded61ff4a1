//! Generation runs, statistics, errors and logging
//!
//! # Overview
//!
//! - **LogAssembler**: runs the case generator over every configured case and feeds a sink
//! - **EventLog**: the assembled events and case summaries
//! - **LogStatistics**: counts and shares reported after a run
//! - **GenerationError**: error taxonomy for a run
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use order_to_cash_event_log::simulation::*;
//! use order_to_cash_event_log::types::GeneratorConfig;
//!
//! let config = GeneratorConfig { case_count: 10, ..Default::default() };
//! let assembler = LogAssembler::from_config(config).unwrap();
//!
//! let log = assembler.assemble().unwrap();
//! assert_eq!(log.case_count(), 10);
//! println!("{}", log.statistics().compact_summary());
//! ```

pub mod error;
pub mod log_assembler;
pub mod logging;
pub mod statistics;

// Re-export all public types for convenience
pub use error::*;
pub use log_assembler::*;
pub use logging::*;
pub use statistics::*;
