//! End-to-end formatting scenarios across the core and styles crates

use std::sync::Arc;

use serde_json::json;

use stayline_integration_tests::{meeting_event, DetailStyle, PickyStyle, UppercaseStyle};
use stayline_styles::{
    DispatchPolicy, EventFormatter, FormatterConfig, InMemoryStyleRegistry, StyleError,
    StyleRegistration, StyleRegistry,
};

fn registry() -> InMemoryStyleRegistry {
    InMemoryStyleRegistry::new()
}

/// One registered style: formatting returns its result directly.
#[test]
fn single_uppercase_style_formats_event_name() {
    let registry = registry();
    registry
        .register_style(StyleRegistration::new("uppercase", UppercaseStyle))
        .unwrap();

    let event = meeting_event();
    let formatter = EventFormatter::new(&event, Arc::new(registry));

    assert_eq!(formatter.format_json("summary").unwrap(), json!("MEETING"));
}

/// Two registered styles under the default policy: the last one wins.
#[test]
fn last_registered_style_wins() {
    let registry = registry();
    registry
        .register_style(StyleRegistration::new("uppercase", UppercaseStyle))
        .unwrap();
    registry
        .register_style(StyleRegistration::new("detail", DetailStyle))
        .unwrap();

    let event = meeting_event();
    let formatter = EventFormatter::new(&event, Arc::new(registry));
    let result = formatter.format_json("summary").unwrap();

    // The detail style registered last, so its object shape is returned.
    assert_eq!(result["name"], json!("meeting"));
    assert_eq!(result["unit_id"], json!("unit-9"));
    assert_eq!(result["type"], json!("summary"));
}

/// Zero registered styles: formatting fails with a defined error.
#[test]
fn empty_registry_yields_no_styles_error() {
    let event = meeting_event();
    let formatter = EventFormatter::new(&event, Arc::new(registry()));

    let result = formatter.format_json("summary");
    assert!(matches!(result, Err(StyleError::NoStylesRegistered)));
}

/// A failing style surfaces its own error to the caller unchanged.
#[test]
fn style_failure_surfaces_to_caller() {
    let registry = registry();
    registry
        .register_style(StyleRegistration::new("picky", PickyStyle))
        .unwrap();

    let event = meeting_event();
    let formatter = EventFormatter::new(&event, Arc::new(registry));

    assert!(formatter.format_json("ok").is_ok());
    match formatter.format_json("bad") {
        Err(StyleError::FormatFailed(message)) => {
            assert!(message.contains("bad"));
        }
        other => panic!("expected FormatFailed, got {:?}", other.map(|_| ())),
    }
}

/// A failing style stops the dispatch; later styles never run.
#[test]
fn dispatch_stops_at_first_failure() {
    use std::sync::atomic::{AtomicBool, Ordering};

    static LATER_RAN: AtomicBool = AtomicBool::new(false);

    struct WitnessStyle;

    impl stayline_styles::EventStyle for WitnessStyle {
        fn format(
            &self,
            _event: &stayline_core::Event,
            _event_type: &str,
        ) -> stayline_styles::Result<serde_json::Value> {
            LATER_RAN.store(true, Ordering::SeqCst);
            Ok(json!(null))
        }
    }

    let registry = registry();
    registry
        .register_style(StyleRegistration::new("picky", PickyStyle))
        .unwrap();
    registry
        .register_style(StyleRegistration::new("witness", WitnessStyle))
        .unwrap();

    let event = meeting_event();
    let formatter = EventFormatter::new(&event, Arc::new(registry));

    assert!(formatter.format_json("bad").is_err());
    assert!(!LATER_RAN.load(Ordering::SeqCst));
}

/// Policy loaded from YAML config drives the dispatcher.
#[test]
fn config_selects_style_by_id() {
    let registry = registry();
    registry
        .register_style(StyleRegistration::new("uppercase", UppercaseStyle))
        .unwrap();
    registry
        .register_style(StyleRegistration::new("detail", DetailStyle))
        .unwrap();

    let config = FormatterConfig::from_yaml_str("policy:\n  select: uppercase\n").unwrap();
    assert_eq!(config.policy, DispatchPolicy::Select("uppercase".to_string()));

    let event = meeting_event();
    let formatter = EventFormatter::new(&event, Arc::new(registry)).with_policy(config.policy);

    // Despite detail being registered last, the selected style runs alone.
    assert_eq!(formatter.format_json("summary").unwrap(), json!("MEETING"));
}

/// Aggregate policy returns every style's result keyed by id.
#[test]
fn aggregate_policy_collects_all_results() {
    let registry = registry();
    registry
        .register_style(StyleRegistration::new("uppercase", UppercaseStyle))
        .unwrap();
    registry
        .register_style(StyleRegistration::new("detail", DetailStyle))
        .unwrap();

    let event = meeting_event();
    let formatter =
        EventFormatter::new(&event, Arc::new(registry)).with_policy(DispatchPolicy::Aggregate);

    let result = formatter.format_json("summary").unwrap();
    assert_eq!(result["uppercase"], json!("MEETING"));
    assert_eq!(result["detail"]["name"], json!("meeting"));
}

/// One registry shared by formatters for different events stays consistent.
#[test]
fn registry_is_shared_across_formatters() {
    use chrono::{TimeZone, Utc};

    let registry = registry();
    registry
        .register_style(StyleRegistration::new("uppercase", UppercaseStyle))
        .unwrap();
    let shared: Arc<dyn StyleRegistry> = Arc::new(registry);

    let first = meeting_event();
    let second = stayline_core::Event::new(
        "ev-2",
        "checkout",
        "unit-3",
        Utc.with_ymd_and_hms(2024, 6, 2, 10, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 2, 10, 30, 0).unwrap(),
        0,
    )
    .unwrap();

    let result_a = EventFormatter::new(&first, Arc::clone(&shared))
        .format_json("summary")
        .unwrap();
    let result_b = EventFormatter::new(&second, shared)
        .format_json("summary")
        .unwrap();

    assert_eq!(result_a, json!("MEETING"));
    assert_eq!(result_b, json!("CHECKOUT"));
}
