//! Tests for case generation invariants over a full batch
//!
//! Every case must contain exactly its variant's activities in order, with
//! strictly increasing timestamps and a duration matching its time span.

use order_to_cash_event_log::reference::{CREATE_DELIVERY, RECEIVE_PURCHASE_ORDER};
use order_to_cash_event_log::types::timestamp::duration_to_days;
use order_to_cash_event_log::*;
use std::collections::HashMap;

fn assemble(case_count: usize, seed: u64) -> (LogAssembler, EventLog) {
    let config = GeneratorConfig { case_count, seed, ..GeneratorConfig::default() };
    let assembler = LogAssembler::new(config, ReferenceData::built_in()).unwrap();
    let log = assembler.assemble().unwrap();
    (assembler, log)
}

fn events_by_case(log: &EventLog) -> HashMap<CaseId, Vec<&ProcessEvent>> {
    let mut grouped: HashMap<CaseId, Vec<&ProcessEvent>> = HashMap::new();
    for event in &log.events {
        grouped.entry(event.case_id).or_default().push(event);
    }
    grouped
}

/// Event count per case equals its variant length, repeated activities included
#[test]
fn test_event_count_matches_variant_length() {
    let (assembler, log) = assemble(2000, 42);
    let reference = assembler.generator().reference();
    let grouped = events_by_case(&log);

    let mut saw_repeated_invoice = false;
    for case in &log.cases {
        let variant = reference.variant(&case.variant).unwrap();
        let events = &grouped[&case.case_id];
        assert_eq!(events.len(), variant.activities.len(), "case {}", case.case_id);

        let activities: Vec<&str> = events.iter().map(|e| e.activity.as_str()).collect();
        let expected: Vec<&str> = variant.activities.iter().map(String::as_str).collect();
        assert_eq!(activities, expected);

        if case.variant == "invoice_after_invoice" {
            let invoices = activities.iter().filter(|a| **a == "Create Invoice").count();
            assert_eq!(invoices, 2);
            saw_repeated_invoice = true;
        }
    }
    assert!(saw_repeated_invoice, "sample should include invoice_after_invoice");
}

/// Timestamps strictly increase within each case
#[test]
fn test_timestamps_monotonic_within_case() {
    let (_, log) = assemble(1000, 7);

    for events in events_by_case(&log).values() {
        for pair in events.windows(2) {
            assert!(
                pair[0].timestamp < pair[1].timestamp,
                "{} at {} is not before {} at {}",
                pair[0].activity,
                pair[0].timestamp,
                pair[1].activity,
                pair[1].timestamp
            );
        }
    }
}

/// Case duration equals its time span, and events fall inside it
#[test]
fn test_case_duration_consistency() {
    let (_, log) = assemble(1000, 99);
    let grouped = events_by_case(&log);

    for case in &log.cases {
        let span = duration_to_days(case.end_time - case.start_time);
        assert!((case.case_duration - span).abs() < 1e-9);
        assert!(case.case_duration > 0.0);

        let events = &grouped[&case.case_id];
        assert_eq!(events[0].timestamp, case.start_time);
        assert!(events.iter().all(|e| e.timestamp < case.end_time));
    }
}

/// Denormalized attributes on every event match the owning case
#[test]
fn test_events_carry_case_attributes() {
    let (_, log) = assemble(500, 3);
    let cases: HashMap<CaseId, &Case> = log.cases.iter().map(|c| (c.case_id, c)).collect();

    for event in &log.events {
        let case = cases[&event.case_id];
        assert_eq!(event.company, case.company);
        assert_eq!(event.region, case.region);
        assert_eq!(event.material_group, case.material_group);
        assert_eq!(event.payment_term, case.payment_term);
        assert_eq!(event.variant, case.variant);
    }
}

/// Cases without a delivery are never on time; every case starts with the order
#[test]
fn test_missing_delivery_cases_are_late() {
    let (_, log) = assemble(2000, 11);
    let grouped = events_by_case(&log);

    let mut rejected = 0;
    for case in &log.cases {
        let events = &grouped[&case.case_id];
        assert!(events[0].is_activity(RECEIVE_PURCHASE_ORDER));
        if !events.iter().any(|e| e.is_activity(CREATE_DELIVERY)) {
            assert!(!case.on_time_delivery);
        }
        if case.variant == "rejected_order" {
            rejected += 1;
            assert!(!case.on_time_delivery);
        }
    }
    assert!(rejected > 0, "sample should include rejected orders");
}

/// Every company and attribute value comes from the reference tables
#[test]
fn test_attributes_come_from_reference_tables() {
    let (assembler, log) = assemble(1000, 5);
    let reference = assembler.generator().reference();

    for case in &log.cases {
        let company = reference.company(&case.company).unwrap();
        assert_eq!(company.region, case.region);
        assert!(reference.material_groups.contains(&case.material_group));
        assert!(reference.payment_terms.contains(&case.payment_term));
    }
}

/// Case identifiers are unique across the batch
#[test]
fn test_case_ids_unique() {
    let (_, log) = assemble(3000, 1);
    let mut ids: Vec<CaseId> = log.cases.iter().map(|c| c.case_id).collect();
    ids.sort_by_key(|id| *id.as_uuid());
    ids.dedup();
    assert_eq!(ids.len(), 3000);
}
