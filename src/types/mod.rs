//! Core types and identifiers for the event log generator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the generator.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based case identifiers drawn from the seeded random source
//! - **Enums**: Type-safe enumerations for regions and output formats
//! - **Configuration**: Generator configuration with validation and CLI support
//! - **Timestamps**: Day/duration conversion and the sortable output layout
//!
//! # Usage Example
//!
//! ```rust
//! use order_to_cash_event_log::types::*;
//!
//! let region: Region = "Asia-Pacific".parse().unwrap();
//! assert_eq!(region, Region::AsiaPacific);
//!
//! let config = GeneratorConfig {
//!     case_count: 100,
//!     seed: 7,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod timestamp;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
