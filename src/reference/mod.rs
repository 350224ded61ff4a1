//! Reference data for the order-to-cash process
//!
//! This module holds the static lookup tables the case generator draws from:
//! activities, process variants and their selection weights, companies with
//! their region and lead-time factor, material groups, payment terms, and the
//! per-activity duration distributions.
//!
//! # Overview
//!
//! - **tables**: the built-in constant tables
//! - **ReferenceData**: an owned, validated copy of the tables that can be
//!   replaced wholesale from a JSON file
//! - **ReferenceDataError**: every way a table set can be malformed
//!
//! # Usage Example
//!
//! ```rust
//! use order_to_cash_event_log::reference::*;
//!
//! let data = ReferenceData::built_in();
//! data.validate().unwrap();
//!
//! let variant = data.variant("rejected_order").unwrap();
//! assert!(!variant.contains(CREATE_DELIVERY));
//! ```

pub mod registry;
pub mod tables;

// Re-export all public types for convenience
pub use registry::*;
pub use tables::{CREATE_DELIVERY, RECEIVE_PURCHASE_ORDER};
