//! Event formatting dispatcher
//!
//! Borrows one event, queries the style registry, and runs the registered
//! styles against the event according to a [`DispatchPolicy`]. Dispatch is
//! synchronous and request-scoped; the formatter holds no state beyond the
//! event borrow, the registry handle, and the policy.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info};

use stayline_core::Event;

use crate::{
    error::{Result, StyleError},
    registry::StyleRegistry,
    types::{DispatchPolicy, FormattedResult},
};

/// Formats one event through the registered styles.
///
/// The event borrow is taken at construction and handed unchanged to every
/// style the dispatch invokes; the formatter never copies or mutates the
/// event. Failures — unknown style, failing `format`, registry errors —
/// propagate to the caller without local recovery.
#[derive(Clone)]
pub struct EventFormatter<'e> {
    event: &'e Event,
    registry: Arc<dyn StyleRegistry>,
    policy: DispatchPolicy,
}

impl<'e> EventFormatter<'e> {
    /// Create a formatter for `event` with the default policy
    /// ([`DispatchPolicy::LastWins`]).
    pub fn new(event: &'e Event, registry: Arc<dyn StyleRegistry>) -> Self {
        Self {
            event,
            registry,
            policy: DispatchPolicy::default(),
        }
    }

    /// Replace the dispatch policy.
    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Format the held event for `event_type` according to the configured
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NoStylesRegistered`] when the registry is
    /// empty and the policy runs "all styles"; any style or registry
    /// failure is propagated as-is.
    pub fn format_json(&self, event_type: &str) -> Result<FormattedResult> {
        match &self.policy {
            DispatchPolicy::LastWins => self.format_last_wins(event_type),
            DispatchPolicy::Select(style_id) => self.format_with(style_id, event_type),
            DispatchPolicy::Aggregate => {
                let results = self.format_all(event_type)?;
                let mut object = serde_json::Map::new();
                for (style_id, value) in results {
                    object.insert(style_id, value);
                }
                Ok(Value::Object(object))
            }
        }
    }

    /// Run only the named style against the held event.
    pub fn format_with(&self, style_id: &str, event_type: &str) -> Result<FormattedResult> {
        debug!(style_id, event_type, "Formatting event with selected style");

        let style = self.registry.resolve(style_id)?;
        style.format(self.event, event_type).map_err(|e| {
            error!(style_id, error = %e, "Event style failed");
            e
        })
    }

    /// Run every registered style, returning `(style_id, result)` pairs in
    /// registration order. Fails fast on the first style error.
    pub fn format_all(&self, event_type: &str) -> Result<Vec<(String, FormattedResult)>> {
        let styles = self.registry.resolve_all()?;
        if styles.is_empty() {
            return Err(StyleError::NoStylesRegistered);
        }

        info!(
            event_id = %self.event.id(),
            event_type,
            style_count = styles.len(),
            "Formatting event"
        );

        let mut results = Vec::with_capacity(styles.len());
        for (descriptor, style) in styles {
            debug!(style_id = %descriptor.id, event_type, "Running event style");
            match style.format(self.event, event_type) {
                Ok(value) => results.push((descriptor.id, value)),
                Err(e) => {
                    error!(style_id = %descriptor.id, error = %e, "Event style failed");
                    return Err(e);
                }
            }
        }

        Ok(results)
    }

    // Compatibility behavior inherited from the original booking module:
    // every style runs, only the final result is kept.
    fn format_last_wins(&self, event_type: &str) -> Result<FormattedResult> {
        let mut results = self.format_all(event_type)?;
        results
            .pop()
            .map(|(_, value)| value)
            .ok_or(StyleError::NoStylesRegistered)
    }
}
