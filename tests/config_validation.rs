mod common;

use automata_core::{
    AutomatonError, ConfigIssue, EcaConfig, LifeConfig, RawValue, MAX_CELLS, MAX_RADIUS,
};
use common::{EcaBuilder, LifeBuilder};

fn issues_of(err: AutomatonError) -> Vec<ConfigIssue> {
    match err {
        AutomatonError::InvalidConfig(issues) => issues,
        other => panic!("expected a configuration error, got {other}"),
    }
}

#[test]
fn test_missing_fields_named_in_one_message() {
    let message = EcaBuilder::empty().build().run().unwrap_err().to_string();
    for field in ["cells", "generations", "rule"] {
        assert!(message.contains(&format!("{field} must be defined")), "{message}");
    }
}

#[test]
fn test_invalid_fields_reported_together() {
    let config = EcaConfig::new(0, 2.5, -3);
    let err = config.validate().unwrap_err();
    let message = err.to_string();
    let issues = issues_of(err);

    assert_eq!(issues.len(), 3);
    assert!(matches!(
        issues[0],
        ConfigIssue::NotPositive { field: "cells", .. }
    ));
    assert!(matches!(
        issues[1],
        ConfigIssue::NotIntegral {
            field: "generations",
            ..
        }
    ));
    assert!(matches!(issues[2], ConfigIssue::NegativeRule { .. }));
    assert_eq!(message.matches("; ").count(), 2);
}

#[test]
fn test_integral_values_of_any_type_pass() {
    let config = EcaConfig::new("101", 200.0, "30");
    let validated = config.validate().unwrap();
    assert_eq!(validated.cells(), 101);
    assert_eq!(validated.generations(), 200);
    assert_eq!(validated.rule().to_string(), "30");
}

#[test]
fn test_radius_cap_skips_rule_range_check() {
    let err = EcaBuilder::new(10, 10, 5)
        .radius(MAX_RADIUS + 1)
        .build()
        .validate()
        .unwrap_err();
    assert_eq!(
        issues_of(err),
        vec![ConfigIssue::RadiusTooLarge {
            radius: MAX_RADIUS + 1,
            max: MAX_RADIUS
        }]
    );
}

#[test]
fn test_life_coercion_failure_aborts() {
    let config = LifeConfig::new("thirty", 5);
    assert!(config.run().is_err());
    let issues = issues_of(config.validate().unwrap_err());
    assert_eq!(
        issues,
        vec![ConfigIssue::Coercion {
            field: "size",
            value: "\"thirty\"".into()
        }]
    );
}

#[test]
fn test_life_rejects_every_bad_field() {
    let mut config = LifeBuilder::new(1, 1).density(1.5).build();
    config.size = RawValue::Int(0);
    config.generations = RawValue::Int(-4);

    let issues = issues_of(config.validate().unwrap_err());
    assert_eq!(issues.len(), 3);
    assert!(issues.contains(&ConfigIssue::DensityOutOfRange { value: 1.5 }));
    assert!(matches!(
        issues[0],
        ConfigIssue::NotPositive { field: "size", .. }
    ));
}

#[test]
fn test_oversized_history_is_reported() {
    let config = EcaConfig::new(10_000_000_000i64, 1_000_000_000i64, 30);
    let issues = issues_of(config.run().unwrap_err());
    assert_eq!(
        issues,
        vec![ConfigIssue::TooLarge {
            what: "history",
            rows: 1_000_000_000,
            cols: 10_000_000_000,
        }]
    );

    let at_budget = EcaConfig::new(i64::try_from(MAX_CELLS).unwrap(), 1, 30);
    assert!(at_budget.validate().is_ok());
    let over_budget = EcaConfig::new(i64::try_from(MAX_CELLS).unwrap(), 2, 30);
    assert!(over_budget.validate().is_err());
}

#[test]
fn test_oversized_world_is_reported() {
    let issues = issues_of(LifeConfig::new(4_000_000_000i64, 1).run().unwrap_err());
    assert_eq!(
        issues,
        vec![ConfigIssue::TooLarge {
            what: "world grid",
            rows: 4_000_000_000,
            cols: 4_000_000_000,
        }]
    );
}
