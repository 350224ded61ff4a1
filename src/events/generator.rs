//! Case generation logic
//!
//! This module expands one simulated order into its attributes, its chosen
//! process variant, and a chronologically ordered list of events.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rand_distr::Normal;
use tracing::{debug, info, instrument};

use crate::events::{Case, CaseAttributes, ProcessEvent};
use crate::kpi::OnTimeDeliveryEvaluator;
use crate::reference::{CompanyProfile, ReferenceData};
use crate::simulation::{GenerationError, GenerationResult};
use crate::types::timestamp::duration_from_days;
use crate::types::{CaseId, GeneratorConfig};

/// Smallest duration an activity may take, in days
pub const MIN_ACTIVITY_DURATION_DAYS: f64 = 0.01;

/// Last year the fixed-width timestamp layout can represent
pub const MAX_TIMESTAMP_YEAR: i32 = 9999;

/// A finalized case together with the events it owns
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCase {
    /// Case summary
    pub case: Case,
    /// Events in generation order
    pub events: Vec<ProcessEvent>,
}

/// Generates individual cases from validated reference data
///
/// The generator holds no random state of its own. Callers pass the random
/// source explicitly so a batch run stays reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct CaseGenerator {
    reference: ReferenceData,
    variant_index: WeightedIndex<f64>,
    evaluator: OnTimeDeliveryEvaluator,
    start_date: NaiveDate,
    start_window_days: i64,
}

impl CaseGenerator {
    /// Create a case generator, validating the reference data first
    pub fn new(config: &GeneratorConfig, reference: ReferenceData) -> GenerationResult<Self> {
        reference.validate()?;

        let weights: Vec<f64> = reference.variants.iter().map(|v| reference.weight(&v.name)).collect();
        let variant_index = WeightedIndex::new(&weights).map_err(|e| {
            GenerationError::configuration_error(format!("Invalid variant weights: {}", e))
        })?;

        info!(
            "Initialized case generator with {} variants and {} companies",
            reference.variants.len(),
            reference.companies.len()
        );

        Ok(Self {
            reference,
            variant_index,
            evaluator: OnTimeDeliveryEvaluator::new(config.base_sla_days),
            start_date: config.start_date,
            start_window_days: config.start_window_days().max(0),
        })
    }

    /// Reference data the generator draws from
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// KPI evaluator applied to every case
    pub fn evaluator(&self) -> &OnTimeDeliveryEvaluator {
        &self.evaluator
    }

    /// Generate one case and its events
    ///
    /// Random draws happen in a fixed order: case id, company, material group,
    /// payment term, variant, start offset, then one duration per activity.
    #[instrument(skip(self, rng))]
    pub fn generate_case<R: Rng + ?Sized>(
        &self,
        case_index: usize,
        rng: &mut R,
    ) -> GenerationResult<GeneratedCase> {
        let case_id = CaseId::from_rng(rng);
        let company = self.pick(&self.reference.companies, rng)?.clone();
        let material_group = self.pick(&self.reference.material_groups, rng)?.clone();
        let payment_term = self.pick(&self.reference.payment_terms, rng)?.clone();
        let variant = &self.reference.variants[self.variant_index.sample(rng)];

        let start_time = self.draw_start_time(rng);

        let attributes = CaseAttributes {
            company: company.name.clone(),
            region: company.region,
            material_group,
            payment_term,
            variant: variant.name.clone(),
        };

        let mut events = Vec::with_capacity(variant.activities.len());
        let mut current_time = start_time;

        for activity in &variant.activities {
            events.push(ProcessEvent::new(case_id, activity.as_str(), current_time, &attributes));
            let duration = self.draw_duration(activity, &company, rng)?;
            current_time = current_time
                .checked_add_signed(duration)
                .filter(|time| time.year() <= MAX_TIMESTAMP_YEAR)
                .ok_or_else(|| {
                    GenerationError::case_generation_error(format!(
                        "Case {} runs past year {} after '{}' at {} (lead-time factor {})",
                        case_index, MAX_TIMESTAMP_YEAR, activity, company.name, company.lead_time_factor
                    ))
                })?;
        }

        let on_time = self.evaluator.evaluate(&events, &company)?;
        let case = Case::new(case_id, attributes, start_time, current_time, on_time);

        debug!(
            "Generated case {} ({}) for {}: {} events, {:.2} days, on time: {}",
            case_index,
            case.variant,
            case.company,
            events.len(),
            case.case_duration,
            on_time
        );

        Ok(GeneratedCase { case, events })
    }

    fn pick<'a, T, R: Rng + ?Sized>(&self, items: &'a [T], rng: &mut R) -> GenerationResult<&'a T> {
        if items.is_empty() {
            return Err(GenerationError::case_generation_error("Cannot sample from an empty table"));
        }
        Ok(&items[rng.gen_range(0..items.len())])
    }

    fn draw_start_time<R: Rng + ?Sized>(&self, rng: &mut R) -> DateTime<Utc> {
        let offset_days = rng.gen_range(0..=self.start_window_days);
        let midnight = (self.start_date + Duration::days(offset_days)).and_time(NaiveTime::MIN);
        Utc.from_utc_datetime(&midnight)
    }

    fn draw_duration<R: Rng + ?Sized>(
        &self,
        activity: &str,
        company: &CompanyProfile,
        rng: &mut R,
    ) -> GenerationResult<Duration> {
        let params = self
            .reference
            .duration(activity)
            .ok_or_else(|| {
                GenerationError::case_generation_error(format!(
                    "No duration parameters for activity '{}'",
                    activity
                ))
            })?
            .scaled(company.lead_time_factor);

        let normal = Normal::new(params.mean_days, params.std_dev_days).map_err(|e| {
            GenerationError::case_generation_error(format!(
                "Invalid duration distribution for '{}': {}",
                activity, e
            ))
        })?;

        let days = normal.sample(rng).max(MIN_ACTIVITY_DURATION_DAYS);
        Ok(duration_from_days(days))
    }
}
