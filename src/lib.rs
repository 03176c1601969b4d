//! Shared fixtures for Stayline integration tests
//!
//! Concrete event styles live in host applications; the ones here exist
//! only so the integration tests can exercise the registry and dispatcher
//! end to end.

use chrono::{TimeZone, Utc};
use serde_json::json;

use stayline_core::Event;
use stayline_styles::{EventStyle, FormattedResult, Result, StyleError};

/// A style that returns the event's name in upper case.
pub struct UppercaseStyle;

impl EventStyle for UppercaseStyle {
    fn format(&self, event: &Event, _event_type: &str) -> Result<FormattedResult> {
        Ok(json!(event.name().to_uppercase()))
    }
}

/// A style that renders the full event as a JSON object.
pub struct DetailStyle;

impl EventStyle for DetailStyle {
    fn format(&self, event: &Event, event_type: &str) -> Result<FormattedResult> {
        Ok(json!({
            "type": event_type,
            "id": event.id(),
            "name": event.name(),
            "unit_id": event.unit_id(),
            "start": event.start().to_rfc3339(),
            "end": event.end().to_rfc3339(),
            "value": event.value(),
        }))
    }
}

/// A style that rejects the `"bad"` event type.
pub struct PickyStyle;

impl EventStyle for PickyStyle {
    fn format(&self, _event: &Event, event_type: &str) -> Result<FormattedResult> {
        if event_type == "bad" {
            return Err(StyleError::FormatFailed(format!(
                "unsupported event type: {}",
                event_type
            )));
        }
        Ok(json!({ "type": event_type }))
    }
}

/// A two-hour meeting on unit-9, used by all scenario tests.
pub fn meeting_event() -> Event {
    Event::new(
        "ev-1",
        "meeting",
        "unit-9",
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap(),
        1,
    )
    .unwrap()
}
