//! Process events, case summaries and case generation
//!
//! # Overview
//!
//! - **ProcessEvent**: one timestamped activity occurrence with denormalized case attributes
//! - **Case**: the finalized summary of one process instance
//! - **CaseGenerator**: expands a weighted variant choice into a case and its ordered events
//!
//! # Usage Example
//!
//! ```rust
//! use order_to_cash_event_log::events::*;
//! use order_to_cash_event_log::reference::ReferenceData;
//! use order_to_cash_event_log::types::GeneratorConfig;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = GeneratorConfig::default();
//! let generator = CaseGenerator::new(&config, ReferenceData::built_in()).unwrap();
//! let mut rng = StdRng::seed_from_u64(config.seed);
//!
//! let generated = generator.generate_case(0, &mut rng).unwrap();
//! assert!(generated.events.iter().all(|e| generated.case.owns(e)));
//! ```

pub mod case;
pub mod generator;
pub mod process_event;

// Re-export all public types for convenience
pub use case::*;
pub use generator::*;
pub use process_event::*;
