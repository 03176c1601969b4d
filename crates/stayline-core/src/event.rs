//! The bookable event entity
//!
//! An `Event` represents one booked (or bookable) span of time against a
//! unit. Fields are fixed at construction; downstream formatting code only
//! ever borrows the event read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EventError, Result};

/// A bookable event instance.
///
/// Constructed via [`Event::new`], which validates the date range. All
/// fields are private; read access goes through the getters so the
/// construction-then-immutable invariant holds for every consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: String,
    name: String,
    unit_id: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    value: i64,
}

impl Event {
    /// Create a new event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidRange`] if `end` precedes `start`, and
    /// [`EventError::InvalidField`] if `id` or `unit_id` is empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_id: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        value: i64,
    ) -> Result<Self> {
        let id = id.into();
        let unit_id = unit_id.into();

        if id.is_empty() {
            return Err(EventError::InvalidField {
                field: "id",
                reason: "must not be empty".to_string(),
            });
        }
        if unit_id.is_empty() {
            return Err(EventError::InvalidField {
                field: "unit_id",
                reason: "must not be empty".to_string(),
            });
        }
        if end < start {
            return Err(EventError::InvalidRange { start, end });
        }

        Ok(Self {
            id,
            name: name.into(),
            unit_id,
            start,
            end,
            value,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bookable unit this event is booked against.
    pub fn unit_id(&self) -> &str {
        &self.unit_id
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Opaque state/value marker (e.g. availability state or price in
    /// minor units); its interpretation belongs to the host system.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Duration of the event in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
