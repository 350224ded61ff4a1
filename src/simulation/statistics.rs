//! Statistics collection and reporting
//!
//! Counters are built from an assembled log, one finished case at a time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::time::Duration;

use crate::events::{Case, ProcessEvent};
use crate::types::timestamp::format_timestamp;

/// Case count and share of one process variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantShare {
    /// Variant name
    pub variant: String,
    /// Number of cases that followed the variant
    pub cases: usize,
    /// Share of all cases, in percent
    pub percentage: f64,
}

/// Summary of a generated event log
#[derive(Debug, Clone, Default, Serialize)]
pub struct LogStatistics {
    /// Total number of events generated
    pub total_events: usize,
    /// Total number of cases generated
    pub total_cases: usize,
    /// Distinct activities that occurred
    pub activities: BTreeSet<String>,
    /// Distinct companies that own at least one case
    pub companies: BTreeSet<String>,
    /// Earliest event timestamp
    pub first_event: Option<DateTime<Utc>>,
    /// Latest event timestamp
    pub last_event: Option<DateTime<Utc>>,
    /// Cases per variant name
    pub variant_counts: BTreeMap<String, usize>,
    /// Cases delivered within their SLA
    pub on_time_cases: usize,
    /// Cases delivered late or never
    pub late_cases: usize,
    /// Where the datasets were written
    pub output_destinations: Vec<String>,
    /// Wall time of the generation run
    pub generation_duration: Duration,
}

impl LogStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Build statistics for an already assembled log
    pub fn from_records(cases: &[Case], events: &[ProcessEvent]) -> Self {
        let mut stats = Self::new();
        for case in cases {
            stats.record_case(case);
        }
        stats.record_events(events);
        stats
    }

    /// Count one finished case
    pub fn record_case(&mut self, case: &Case) {
        self.total_cases += 1;
        *self.variant_counts.entry(case.variant.clone()).or_insert(0) += 1;
        if !self.companies.contains(&case.company) {
            self.companies.insert(case.company.clone());
        }
        if case.on_time_delivery {
            self.on_time_cases += 1;
        } else {
            self.late_cases += 1;
        }
    }

    /// Count the events of one or more cases
    pub fn record_events(&mut self, events: &[ProcessEvent]) {
        for event in events {
            self.total_events += 1;
            if !self.activities.contains(&event.activity) {
                self.activities.insert(event.activity.clone());
            }
            self.first_event = Some(self.first_event.map_or(event.timestamp, |t| t.min(event.timestamp)));
            self.last_event = Some(self.last_event.map_or(event.timestamp, |t| t.max(event.timestamp)));
        }
    }

    /// Record where a dataset was written
    pub fn add_output_destination(&mut self, destination: impl Into<String>) {
        self.output_destinations.push(destination.into());
    }

    /// Set the wall time of the run
    pub fn set_generation_duration(&mut self, duration: Duration) {
        self.generation_duration = duration;
    }

    /// Number of distinct activities
    pub fn distinct_activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Number of distinct companies
    pub fn distinct_company_count(&self) -> usize {
        self.companies.len()
    }

    /// Average number of events per case
    pub fn average_events_per_case(&self) -> f64 {
        if self.total_cases == 0 {
            0.0
        } else {
            self.total_events as f64 / self.total_cases as f64
        }
    }

    /// Share of on-time cases, in percent
    pub fn on_time_percentage(&self) -> f64 {
        percentage(self.on_time_cases, self.total_cases)
    }

    /// Share of late cases, in percent
    pub fn late_percentage(&self) -> f64 {
        percentage(self.late_cases, self.total_cases)
    }

    /// Variants sorted by case count descending, ties by name
    pub fn variant_breakdown(&self) -> Vec<VariantShare> {
        let mut shares: Vec<VariantShare> = self
            .variant_counts
            .iter()
            .map(|(variant, &cases)| VariantShare {
                variant: variant.clone(),
                cases,
                percentage: percentage(cases, self.total_cases),
            })
            .collect();
        // BTreeMap iteration is already name-ordered and the sort is stable
        shares.sort_by(|a, b| b.cases.cmp(&a.cases));
        shares
    }

    /// Generate the human-readable run summary
    pub fn generate_summary_output(&self) -> String {
        let mut output = String::new();

        output.push_str("📦 Order-to-Cash Event Log Generated!\n");
        output.push_str("=====================================\n\n");

        output.push_str("📊 Log Summary:\n");
        output.push_str(&format!("   Total Events: {}\n", self.total_events));
        output.push_str(&format!("   Total Cases: {}\n", self.total_cases));
        output.push_str(&format!("   Average Events per Case: {:.2}\n", self.average_events_per_case()));
        output.push_str(&format!("   Distinct Activities: {}\n", self.distinct_activity_count()));
        output.push_str(&format!("   Distinct Companies: {}\n", self.distinct_company_count()));
        match (self.first_event, self.last_event) {
            (Some(first), Some(last)) => output.push_str(&format!(
                "   Date Range: {} to {}\n\n",
                format_timestamp(&first),
                format_timestamp(&last)
            )),
            _ => output.push_str("   Date Range: n/a\n\n"),
        }

        output.push_str("🔀 Variant Distribution:\n");
        for share in self.variant_breakdown() {
            output.push_str(&format!(
                "   {:<28} {:>7} ({:.1}%)\n",
                share.variant, share.cases, share.percentage
            ));
        }
        output.push('\n');

        output.push_str("🚚 On-Time Delivery:\n");
        output.push_str(&format!(
            "   On Time: {} ({:.1}%)\n",
            self.on_time_cases,
            self.on_time_percentage()
        ));
        output.push_str(&format!(
            "   Late: {} ({:.1}%)\n\n",
            self.late_cases,
            self.late_percentage()
        ));

        if !self.output_destinations.is_empty() {
            output.push_str("💾 Output:\n");
            for destination in &self.output_destinations {
                output.push_str(&format!("   {}\n", destination));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "⏱️  Generated in {:.2} seconds\n",
            self.generation_duration.as_secs_f64()
        ));

        output
    }

    /// Generate a compact one-line summary suitable for logging
    pub fn compact_summary(&self) -> String {
        format!(
            "{} cases | {} events | {} variants | on time {:.1}% | {:.2}s",
            self.total_cases,
            self.total_events,
            self.variant_counts.len(),
            self.on_time_percentage(),
            self.generation_duration.as_secs_f64()
        )
    }
}

impl fmt::Display for LogStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_summary_output())
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
