//! Process events
//!
//! This module contains the event record: one timestamped occurrence of an
//! activity within a case, carrying denormalized copies of the case attributes
//! so the event log can be consumed without the case table.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{CaseId, Region};

/// Categorical attributes drawn once per case and copied onto every event
#[derive(Debug, Clone, PartialEq)]
pub struct CaseAttributes {
    /// Owning company
    pub company: String,
    /// Region of the owning company
    pub region: Region,
    /// Material group of the order
    pub material_group: String,
    /// Payment term of the order
    pub payment_term: String,
    /// Name of the selected process variant
    pub variant: String,
}

/// One occurrence of an activity within a case
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessEvent {
    /// Case this event belongs to
    pub case_id: CaseId,
    /// Activity name
    pub activity: String,
    /// When the activity occurred
    #[serde(serialize_with = "crate::types::timestamp::serialize")]
    pub timestamp: DateTime<Utc>,
    /// Owning company
    pub company: String,
    /// Region of the owning company
    pub region: Region,
    /// Material group of the order
    pub material_group: String,
    /// Payment term of the order
    pub payment_term: String,
    /// Name of the selected process variant
    pub variant: String,
}

impl ProcessEvent {
    /// Column order of the event log dataset
    pub const COLUMNS: [&'static str; 8] = [
        "case_id",
        "activity",
        "timestamp",
        "company",
        "region",
        "material_group",
        "payment_term",
        "variant",
    ];

    /// Create a new event with the case attributes copied in
    pub fn new(
        case_id: CaseId,
        activity: impl Into<String>,
        timestamp: DateTime<Utc>,
        attributes: &CaseAttributes,
    ) -> Self {
        Self {
            case_id,
            activity: activity.into(),
            timestamp,
            company: attributes.company.clone(),
            region: attributes.region,
            material_group: attributes.material_group.clone(),
            payment_term: attributes.payment_term.clone(),
            variant: attributes.variant.clone(),
        }
    }

    /// Whether this event is an occurrence of the given activity
    pub fn is_activity(&self, activity: &str) -> bool {
        self.activity == activity
    }
}
