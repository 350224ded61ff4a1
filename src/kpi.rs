//! On-time-delivery KPI
//!
//! A case is delivered on time when the latest "Create Delivery" event happens no
//! more than `base_sla_days * lead_time_factor` days after the earliest
//! "Receive Purchase Order" event. Cases without a delivery are never on time.
//!
//! The SLA is scaled by the same company factor that scales activity durations,
//! which keeps the on-time rate comparable across fast and slow subsidiaries.

use tracing::trace;

use crate::events::ProcessEvent;
use crate::reference::{CompanyProfile, CREATE_DELIVERY, RECEIVE_PURCHASE_ORDER};
use crate::types::timestamp::duration_to_days;
use crate::types::CaseId;

/// Errors raised while evaluating the KPI
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KpiError {
    /// A delivery exists but there is no purchase order to measure from
    #[error("Case {case_id} has a '{CREATE_DELIVERY}' event but no '{RECEIVE_PURCHASE_ORDER}' event")]
    MissingPurchaseOrder {
        /// Offending case
        case_id: CaseId,
    },

    /// The evaluator was handed an empty event sequence
    #[error("Cannot evaluate on-time delivery of a case without events")]
    NoEvents,
}

/// Computes the on-time-delivery flag of a finished case
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnTimeDeliveryEvaluator {
    base_sla_days: f64,
}

impl OnTimeDeliveryEvaluator {
    /// Create an evaluator with the given base SLA in days
    pub fn new(base_sla_days: f64) -> Self {
        Self { base_sla_days }
    }

    /// Base SLA before company scaling
    pub fn base_sla_days(&self) -> f64 {
        self.base_sla_days
    }

    /// SLA allowance for a company with the given lead-time factor
    pub fn sla_days(&self, lead_time_factor: f64) -> f64 {
        self.base_sla_days * lead_time_factor
    }

    /// Evaluate the ordered events of one case
    pub fn evaluate(
        &self,
        events: &[ProcessEvent],
        company: &CompanyProfile,
    ) -> Result<bool, KpiError> {
        let first = events.first().ok_or(KpiError::NoEvents)?;

        let Some(delivery_time) = events
            .iter()
            .filter(|e| e.is_activity(CREATE_DELIVERY))
            .map(|e| e.timestamp)
            .max()
        else {
            return Ok(false);
        };

        let start_time = events
            .iter()
            .filter(|e| e.is_activity(RECEIVE_PURCHASE_ORDER))
            .map(|e| e.timestamp)
            .min()
            .ok_or(KpiError::MissingPurchaseOrder { case_id: first.case_id })?;

        let elapsed_days = duration_to_days(delivery_time - start_time);
        let sla = self.sla_days(company.lead_time_factor);
        let on_time = elapsed_days <= sla;

        trace!(
            case_id = %first.case_id,
            elapsed_days,
            sla,
            on_time,
            "Evaluated on-time delivery"
        );
        Ok(on_time)
    }
}

impl Default for OnTimeDeliveryEvaluator {
    fn default() -> Self {
        Self::new(crate::types::config::defaults::BASE_SLA_DAYS)
    }
}
