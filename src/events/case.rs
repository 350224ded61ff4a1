//! Case summary records

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::events::process_event::{CaseAttributes, ProcessEvent};
use crate::types::timestamp::duration_to_days;
use crate::types::{CaseId, Region};

/// One end-to-end process instance, finalized after all of its events exist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Case {
    /// Unique case identifier
    pub case_id: CaseId,
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
    /// Timestamp of the first event
    #[serde(serialize_with = "crate::types::timestamp::serialize")]
    pub start_time: DateTime<Utc>,
    /// Timestamp after the last activity completed
    #[serde(serialize_with = "crate::types::timestamp::serialize")]
    pub end_time: DateTime<Utc>,
    /// `end_time - start_time` in fractional days
    pub case_duration: f64,
    /// Whether delivery was created within the company-scaled SLA
    pub on_time_delivery: bool,
}

impl Case {
    /// Column order of the case attributes dataset
    pub const COLUMNS: [&'static str; 10] = [
        "case_id",
        "company",
        "region",
        "material_group",
        "payment_term",
        "variant",
        "start_time",
        "end_time",
        "case_duration",
        "on_time_delivery",
    ];

    /// Finalize a case from its attributes and time span
    pub fn new(
        case_id: CaseId,
        attributes: CaseAttributes,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        on_time_delivery: bool,
    ) -> Self {
        Self {
            case_id,
            company: attributes.company,
            region: attributes.region,
            material_group: attributes.material_group,
            payment_term: attributes.payment_term,
            variant: attributes.variant,
            start_time,
            end_time,
            case_duration: duration_to_days(end_time - start_time),
            on_time_delivery,
        }
    }

    /// Whether an event belongs to this case
    pub fn owns(&self, event: &ProcessEvent) -> bool {
        event.case_id == self.case_id
    }
}
