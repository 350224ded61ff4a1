//! Tests for replacing and validating the reference tables end to end

use order_to_cash_event_log::reference::{CREATE_DELIVERY, RECEIVE_PURCHASE_ORDER};
use order_to_cash_event_log::*;
use std::fs;

fn single_variant_reference() -> ReferenceData {
    let mut reference = ReferenceData::built_in();
    reference.variants = vec![ProcessVariant::new(
        "express",
        vec![
            RECEIVE_PURCHASE_ORDER.to_string(),
            "Create Sales Order".to_string(),
            CREATE_DELIVERY.to_string(),
        ],
    )];
    reference.variant_weights = [("express".to_string(), 3.0)].into_iter().collect();
    reference.companies = vec![CompanyProfile::new("Drystone Test Ltd", Region::Americas, 2.0)];
    reference
}

/// A reference file named in the configuration replaces the built-in tables
#[test]
fn test_reference_file_drives_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.json");
    fs::write(&path, single_variant_reference().to_json_pretty().unwrap()).unwrap();

    let config = GeneratorConfig {
        case_count: 50,
        reference_data: Some(path.display().to_string()),
        ..GeneratorConfig::default()
    };
    let log = LogAssembler::from_config(config).unwrap().assemble().unwrap();

    assert_eq!(log.event_count(), 150);
    for case in &log.cases {
        assert_eq!(case.variant, "express");
        assert_eq!(case.company, "Drystone Test Ltd");
        assert_eq!(case.region, Region::Americas);
    }
}

/// Scaling a company's factor stretches every activity duration
#[test]
fn test_lead_time_factor_scales_durations() {
    let fast = single_variant_reference();
    let mut slow = single_variant_reference();
    slow.companies[0].lead_time_factor = 20.0;

    let config = GeneratorConfig { case_count: 200, ..GeneratorConfig::default() };
    let fast_log = LogAssembler::new(config.clone(), fast).unwrap().assemble().unwrap();
    let slow_log = LogAssembler::new(config, slow).unwrap().assemble().unwrap();

    let mean = |log: &EventLog| {
        log.cases.iter().map(|c| c.case_duration).sum::<f64>() / log.case_count() as f64
    };
    assert!(mean(&slow_log) > mean(&fast_log) * 5.0);
}

/// Zero standard deviation yields exact, scaled durations
#[test]
fn test_deterministic_durations_with_zero_spread() {
    let mut reference = single_variant_reference();
    for params in reference.activity_durations.values_mut() {
        params.std_dev_days = 0.0;
    }

    let config = GeneratorConfig { case_count: 5, ..GeneratorConfig::default() };
    let log = LogAssembler::new(config, reference).unwrap().assemble().unwrap();

    // (0.5 + 1.0 + 2.0) days at factor 2.0
    for case in &log.cases {
        assert!((case.case_duration - 7.0).abs() < 1e-9, "duration {}", case.case_duration);
        // Delivery after 3.0 days against an SLA of 10.0 days
        assert!(case.on_time_delivery);
    }
}

/// Durations drawn below the floor are clamped to 0.01 days
#[test]
fn test_negative_draws_are_clamped() {
    let mut reference = single_variant_reference();
    for params in reference.activity_durations.values_mut() {
        params.mean_days = 0.0;
        params.std_dev_days = 0.0;
    }

    let config = GeneratorConfig { case_count: 5, ..GeneratorConfig::default() };
    let log = LogAssembler::new(config, reference).unwrap().assemble().unwrap();

    for case in &log.cases {
        assert!((case.case_duration - 0.03).abs() < 1e-9);
    }
}

/// Malformed tables are rejected before any case is generated
#[test]
fn test_invalid_tables_fail_fast() {
    let mut unknown_activity = single_variant_reference();
    unknown_activity.variants[0].activities.push("Teleport Goods".to_string());

    let mut negative_factor = single_variant_reference();
    negative_factor.companies[0].lead_time_factor = -1.0;

    for reference in [unknown_activity, negative_factor] {
        let result = LogAssembler::new(GeneratorConfig::default(), reference);
        match result {
            Err(error) => assert_eq!(error.category(), "Reference Data"),
            Ok(_) => panic!("invalid reference data was accepted"),
        }
    }
}

/// A broken reference file reports the path
#[test]
fn test_broken_reference_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let config =
        GeneratorConfig { reference_data: Some(path.display().to_string()), ..Default::default() };
    let error = LogAssembler::from_config(config).unwrap_err();
    assert!(error.to_string().contains("tables.json"));
}

/// Durations that pass validation but leave the calendar fail instead of panicking
#[test]
fn test_extreme_durations_fail_with_an_error() {
    let mut reference = ReferenceData::built_in();
    for params in reference.activity_durations.values_mut() {
        params.mean_days = 1e8;
    }
    assert!(reference.validate().is_ok());

    let config = GeneratorConfig { case_count: 3, ..GeneratorConfig::default() };
    let error = LogAssembler::new(config, reference).unwrap().assemble().unwrap_err();
    assert_eq!(error.category(), "Case Generation");
}
