//! Reference data registry and validation
//!
//! This module contains the [`ReferenceData`] struct that holds every lookup table
//! the case generator consumes, along with eager validation so that malformed
//! tables fail at startup instead of producing malformed logs.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::reference::tables;
use crate::types::Region;

/// Duration distribution of a single activity, in days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationParams {
    /// Mean duration in days
    pub mean_days: f64,
    /// Standard deviation in days
    pub std_dev_days: f64,
}

impl DurationParams {
    /// Create duration parameters
    pub fn new(mean_days: f64, std_dev_days: f64) -> Self {
        Self { mean_days, std_dev_days }
    }

    /// Scale both mean and standard deviation by a lead-time factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self { mean_days: self.mean_days * factor, std_dev_days: self.std_dev_days * factor }
    }
}

/// A named, ordered path through the process
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessVariant {
    /// Variant name
    pub name: String,
    /// Activities in execution order (may repeat)
    pub activities: Vec<String>,
}

impl ProcessVariant {
    /// Create a new process variant
    pub fn new(name: impl Into<String>, activities: Vec<String>) -> Self {
        Self { name: name.into(), activities }
    }

    /// Whether the variant contains the given activity at least once
    pub fn contains(&self, activity: &str) -> bool {
        self.activities.iter().any(|a| a == activity)
    }
}

/// A subsidiary that owns cases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company name
    pub name: String,
    /// Sales region
    pub region: Region,
    /// Multiplier applied to every activity duration and to the SLA
    pub lead_time_factor: f64,
}

impl CompanyProfile {
    /// Create a new company profile
    pub fn new(name: impl Into<String>, region: Region, lead_time_factor: f64) -> Self {
        Self { name: name.into(), region, lead_time_factor }
    }
}

/// Errors raised by malformed reference tables
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferenceDataError {
    /// A table that must have entries is empty
    #[error("Reference table '{0}' must not be empty")]
    EmptyTable(&'static str),

    /// The same name appears twice in a table
    #[error("Duplicate entry '{name}' in reference table '{table}'")]
    DuplicateEntry {
        /// Table containing the duplicate
        table: &'static str,
        /// Duplicated name
        name: String,
    },

    /// A variant has no activities
    #[error("Variant '{0}' has no activities")]
    EmptyVariant(String),

    /// A variant references an activity missing from the activity list
    #[error("Variant '{variant}' references unknown activity '{activity}'")]
    UnknownActivity {
        /// Offending variant
        variant: String,
        /// Activity that is not declared
        activity: String,
    },

    /// An activity has no duration parameters
    #[error("Activity '{0}' has no duration parameters")]
    MissingDuration(String),

    /// Duration parameters are negative or not finite
    #[error("Invalid duration for activity '{activity}': mean {mean_days}, std dev {std_dev_days}")]
    InvalidDuration {
        /// Offending activity
        activity: String,
        /// Configured mean
        mean_days: f64,
        /// Configured standard deviation
        std_dev_days: f64,
    },

    /// A variant has no selection weight
    #[error("Variant '{0}' has no selection weight")]
    MissingWeight(String),

    /// A weight names a variant that does not exist
    #[error("Selection weight given for unknown variant '{0}'")]
    UnknownVariant(String),

    /// A weight is negative or not finite
    #[error("Invalid selection weight {weight} for variant '{variant}'")]
    InvalidWeight {
        /// Offending variant
        variant: String,
        /// Configured weight
        weight: f64,
    },

    /// Every weight is zero
    #[error("Variant selection weights must not all be zero")]
    ZeroTotalWeight,

    /// A lead-time factor is not a positive finite number
    #[error("Invalid lead-time factor {factor} for company '{company}' (must be positive)")]
    InvalidLeadTimeFactor {
        /// Offending company
        company: String,
        /// Configured factor
        factor: f64,
    },

    /// A lookup named a company that is not in the table
    #[error("Unknown company '{0}'")]
    UnknownCompany(String),

    /// Reference file could not be read
    #[error("Failed to read reference data file '{path}': {message}")]
    ReadError {
        /// File path
        path: String,
        /// Underlying error message
        message: String,
    },

    /// Reference file could not be parsed
    #[error("Failed to parse reference data file '{path}': {message}")]
    ParseError {
        /// File path
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Immutable lookup tables consumed by the case generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Every activity name of the process
    pub activities: Vec<String>,
    /// Process variants, in sampling order
    pub variants: Vec<ProcessVariant>,
    /// Selection weight per variant name (normalized when sampling)
    pub variant_weights: BTreeMap<String, f64>,
    /// Companies, in sampling order
    pub companies: Vec<CompanyProfile>,
    /// Material groups
    pub material_groups: Vec<String>,
    /// Payment terms
    pub payment_terms: Vec<String>,
    /// Duration distribution per activity
    pub activity_durations: BTreeMap<String, DurationParams>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::built_in()
    }
}

impl ReferenceData {
    /// The built-in order-to-cash tables
    pub fn built_in() -> Self {
        let to_strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            activities: to_strings(&tables::ACTIVITIES),
            variants: tables::VARIANTS
                .iter()
                .map(|(name, _, activities)| ProcessVariant::new(*name, to_strings(activities)))
                .collect(),
            variant_weights: tables::VARIANTS
                .iter()
                .map(|(name, weight, _)| (name.to_string(), *weight))
                .collect(),
            companies: tables::COMPANIES
                .iter()
                .map(|(name, region, factor)| CompanyProfile::new(*name, *region, *factor))
                .collect(),
            material_groups: to_strings(&tables::MATERIAL_GROUPS),
            payment_terms: to_strings(&tables::PAYMENT_TERMS),
            activity_durations: tables::ACTIVITY_DURATIONS
                .iter()
                .map(|(name, mean, std_dev)| (name.to_string(), DurationParams::new(*mean, *std_dev)))
                .collect(),
        }
    }

    /// Load tables from a JSON file and validate them
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceDataError> {
        let path = path.as_ref();
        let path_text = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| ReferenceDataError::ReadError {
            path: path_text.clone(),
            message: e.to_string(),
        })?;

        let data: Self = serde_json::from_str(&content).map_err(|e| {
            ReferenceDataError::ParseError { path: path_text.clone(), message: e.to_string() }
        })?;

        data.validate()?;
        info!(
            "Loaded reference data from {}: {} activities, {} variants, {} companies",
            path_text,
            data.activities.len(),
            data.variants.len(),
            data.companies.len()
        );
        Ok(data)
    }

    /// Serialize the tables as pretty JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check every table invariant, failing on the first violation
    pub fn validate(&self) -> Result<(), ReferenceDataError> {
        let activities = unique_names("activities", self.activities.iter().map(String::as_str))?;
        let variant_names = unique_names("variants", self.variants.iter().map(|v| v.name.as_str()))?;
        unique_names("companies", self.companies.iter().map(|c| c.name.as_str()))?;
        unique_names("material_groups", self.material_groups.iter().map(String::as_str))?;
        unique_names("payment_terms", self.payment_terms.iter().map(String::as_str))?;

        for variant in &self.variants {
            if variant.activities.is_empty() {
                return Err(ReferenceDataError::EmptyVariant(variant.name.clone()));
            }
            for activity in &variant.activities {
                if !activities.contains(activity.as_str()) {
                    return Err(ReferenceDataError::UnknownActivity {
                        variant: variant.name.clone(),
                        activity: activity.clone(),
                    });
                }
                if !self.activity_durations.contains_key(activity) {
                    return Err(ReferenceDataError::MissingDuration(activity.clone()));
                }
            }
        }

        for (activity, params) in &self.activity_durations {
            let valid = params.mean_days.is_finite()
                && params.std_dev_days.is_finite()
                && params.mean_days >= 0.0
                && params.std_dev_days >= 0.0;
            if !valid {
                return Err(ReferenceDataError::InvalidDuration {
                    activity: activity.clone(),
                    mean_days: params.mean_days,
                    std_dev_days: params.std_dev_days,
                });
            }
        }

        for variant in &self.variants {
            if !self.variant_weights.contains_key(&variant.name) {
                return Err(ReferenceDataError::MissingWeight(variant.name.clone()));
            }
        }
        let mut total_weight = 0.0;
        for (variant, weight) in &self.variant_weights {
            if !variant_names.contains(variant.as_str()) {
                return Err(ReferenceDataError::UnknownVariant(variant.clone()));
            }
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ReferenceDataError::InvalidWeight {
                    variant: variant.clone(),
                    weight: *weight,
                });
            }
            total_weight += weight;
        }
        if total_weight <= 0.0 {
            return Err(ReferenceDataError::ZeroTotalWeight);
        }

        for company in &self.companies {
            if !company.lead_time_factor.is_finite() || company.lead_time_factor <= 0.0 {
                return Err(ReferenceDataError::InvalidLeadTimeFactor {
                    company: company.name.clone(),
                    factor: company.lead_time_factor,
                });
            }
        }

        debug!(
            "Reference data validated: {} activities, {} variants (total weight {:.3}), {} companies",
            self.activities.len(),
            self.variants.len(),
            total_weight,
            self.companies.len()
        );
        Ok(())
    }

    /// Look up a variant by name
    pub fn variant(&self, name: &str) -> Option<&ProcessVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Look up a company by name
    pub fn company(&self, name: &str) -> Option<&CompanyProfile> {
        self.companies.iter().find(|c| c.name == name)
    }

    /// Lead-time factor of a company
    pub fn lead_time_factor(&self, company: &str) -> Result<f64, ReferenceDataError> {
        self.company(company)
            .map(|c| c.lead_time_factor)
            .ok_or_else(|| ReferenceDataError::UnknownCompany(company.to_string()))
    }

    /// Duration parameters of an activity
    pub fn duration(&self, activity: &str) -> Option<DurationParams> {
        self.activity_durations.get(activity).copied()
    }

    /// Selection weight of a variant, zero when absent
    pub fn weight(&self, variant: &str) -> f64 {
        self.variant_weights.get(variant).copied().unwrap_or(0.0)
    }

    /// Sum of all variant weights
    pub fn total_weight(&self) -> f64 {
        self.variant_weights.values().sum()
    }
}

fn unique_names<'a>(
    table: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<BTreeSet<&'a str>, ReferenceDataError> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ReferenceDataError::DuplicateEntry { table, name: name.to_string() });
        }
    }
    if seen.is_empty() {
        return Err(ReferenceDataError::EmptyTable(table));
    }
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_tables_are_valid() {
        let data = ReferenceData::built_in();
        data.validate().unwrap();

        assert_eq!(data.activities.len(), 14);
        assert_eq!(data.variants.len(), 10);
        assert_eq!(data.companies.len(), 14);
        assert_eq!(data.material_groups.len(), 7);
        assert_eq!(data.payment_terms.len(), 4);
        assert_eq!(data.activity_durations.len(), 14);
    }

    #[test]
    fn test_built_in_weights_sum_to_one() {
        let data = ReferenceData::built_in();
        assert!((data.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_built_in_variant_lengths() {
        let data = ReferenceData::built_in();
        for variant in &data.variants {
            assert!((3..=9).contains(&variant.activities.len()), "{}", variant.name);
            assert_eq!(variant.activities[0], tables::RECEIVE_PURCHASE_ORDER);
        }
        assert_eq!(data.variant("rejected_order").unwrap().activities.len(), 3);
        assert_eq!(data.variant("rejected_then_continued").unwrap().activities.len(), 9);
    }

    #[test]
    fn test_lookups() {
        let data = ReferenceData::built_in();

        let uk = data.company("Drystone UK Ltd").unwrap();
        assert_eq!(uk.region, Region::Europe);
        assert_eq!(uk.lead_time_factor, 0.5);

        assert_eq!(data.lead_time_factor("Drystone Belgium NV").unwrap(), 1.5);
        assert!(matches!(
            data.lead_time_factor("Nowhere Corp"),
            Err(ReferenceDataError::UnknownCompany(_))
        ));

        assert_eq!(data.duration("Clear Invoice"), Some(DurationParams::new(5.0, 2.0)));
        assert_eq!(data.duration("Teleport Goods"), None);
        assert_eq!(data.weight("standard_path"), 0.40);
        assert_eq!(data.weight("unknown"), 0.0);
    }

    #[test]
    fn test_duration_scaling() {
        let params = DurationParams::new(2.0, 1.0).scaled(1.5);
        assert_eq!(params, DurationParams::new(3.0, 1.5));
    }

    #[test]
    fn test_variant_contains() {
        let data = ReferenceData::built_in();
        assert!(!data.variant("rejected_order").unwrap().contains(tables::CREATE_DELIVERY));
        assert!(data.variant("standard_path").unwrap().contains(tables::CREATE_DELIVERY));
    }

    #[test]
    fn test_json_roundtrip() {
        let data = ReferenceData::built_in();
        let json = data.to_json_pretty().unwrap();
        let parsed: ReferenceData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_unknown_activity_in_variant() {
        let mut data = ReferenceData::built_in();
        data.variants[0].activities.push("Teleport Goods".to_string());
        assert!(matches!(
            data.validate(),
            Err(ReferenceDataError::UnknownActivity { activity, .. }) if activity == "Teleport Goods"
        ));
    }

    #[test]
    fn test_missing_duration() {
        let mut data = ReferenceData::built_in();
        data.activity_durations.remove("Issue Goods");
        assert_eq!(
            data.validate(),
            Err(ReferenceDataError::MissingDuration("Issue Goods".to_string()))
        );
    }

    #[test]
    fn test_negative_lead_time_factor() {
        let mut data = ReferenceData::built_in();
        data.companies[3].lead_time_factor = -1.2;
        assert!(matches!(
            data.validate(),
            Err(ReferenceDataError::InvalidLeadTimeFactor { factor, .. }) if factor == -1.2
        ));
    }

    #[test]
    fn test_zero_lead_time_factor() {
        let mut data = ReferenceData::built_in();
        data.companies[0].lead_time_factor = 0.0;
        assert!(matches!(data.validate(), Err(ReferenceDataError::InvalidLeadTimeFactor { .. })));
    }

    #[test]
    fn test_weight_errors() {
        let mut missing = ReferenceData::built_in();
        missing.variant_weights.remove("billing_block");
        assert_eq!(
            missing.validate(),
            Err(ReferenceDataError::MissingWeight("billing_block".to_string()))
        );

        let mut extra = ReferenceData::built_in();
        extra.variant_weights.insert("ghost_path".to_string(), 0.1);
        assert_eq!(
            extra.validate(),
            Err(ReferenceDataError::UnknownVariant("ghost_path".to_string()))
        );

        let mut negative = ReferenceData::built_in();
        negative.variant_weights.insert("standard_path".to_string(), -0.4);
        assert!(matches!(negative.validate(), Err(ReferenceDataError::InvalidWeight { .. })));

        let mut zero = ReferenceData::built_in();
        for weight in zero.variant_weights.values_mut() {
            *weight = 0.0;
        }
        assert_eq!(zero.validate(), Err(ReferenceDataError::ZeroTotalWeight));
    }

    #[test]
    fn test_weights_need_not_sum_to_one() {
        let mut data = ReferenceData::built_in();
        for weight in data.variant_weights.values_mut() {
            *weight *= 20.0;
        }
        data.validate().unwrap();
    }

    #[test]
    fn test_duplicate_and_empty_tables() {
        let mut duplicate = ReferenceData::built_in();
        duplicate.material_groups.push("Fasteners".to_string());
        assert!(matches!(
            duplicate.validate(),
            Err(ReferenceDataError::DuplicateEntry { table: "material_groups", .. })
        ));

        let mut empty = ReferenceData::built_in();
        empty.payment_terms.clear();
        assert_eq!(empty.validate(), Err(ReferenceDataError::EmptyTable("payment_terms")));
    }

    #[test]
    fn test_invalid_duration() {
        let mut data = ReferenceData::built_in();
        data.activity_durations
            .insert("Create Shipment".to_string(), DurationParams::new(1.5, -0.7));
        assert!(matches!(data.validate(), Err(ReferenceDataError::InvalidDuration { .. })));
    }

    #[test]
    fn test_empty_variant() {
        let mut data = ReferenceData::built_in();
        data.variants[1].activities.clear();
        assert_eq!(
            data.validate(),
            Err(ReferenceDataError::EmptyVariant("price_change_path".to_string()))
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        std::fs::write(&path, ReferenceData::built_in().to_json_pretty().unwrap()).unwrap();

        let loaded = ReferenceData::from_file(&path).unwrap();
        assert_eq!(loaded, ReferenceData::built_in());
    }

    #[test]
    fn test_from_file_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        let mut data = ReferenceData::built_in();
        data.companies[0].lead_time_factor = -0.5;
        std::fs::write(&path, data.to_json_pretty().unwrap()).unwrap();

        assert!(matches!(
            ReferenceData::from_file(&path),
            Err(ReferenceDataError::InvalidLeadTimeFactor { .. })
        ));
    }

    #[test]
    fn test_from_file_errors() {
        assert!(matches!(
            ReferenceData::from_file("no/such/tables.json"),
            Err(ReferenceDataError::ReadError { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ReferenceData::from_file(&path),
            Err(ReferenceDataError::ParseError { .. })
        ));
    }
}
