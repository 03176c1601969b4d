//! Core types for the styles system

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use stayline_core::Event;

use crate::error::Result;

/// The value a style produces for one event type.
///
/// Deliberately unconstrained: the shape is owned entirely by the style
/// that produced it, never by the dispatcher.
pub type FormattedResult = serde_json::Value;

/// The event style capability.
///
/// A style renders a borrowed [`Event`] for a given event-type identifier.
/// The dispatcher hands every style the same event borrow and never mutates
/// the event. This layer imposes no constraints on `event_type`;
/// validation, if any, belongs to the concrete style.
pub trait EventStyle: Send + Sync {
    /// Produce a representation of `event` appropriate to `event_type`.
    ///
    /// # Errors
    ///
    /// Failure conditions are defined by the concrete style and surface
    /// as [`crate::StyleError::FormatFailed`] (or any other variant the
    /// style chooses to return).
    fn format(&self, event: &Event, event_type: &str) -> Result<FormattedResult>;
}

/// A style as registered with a [`crate::StyleRegistry`].
///
/// Built at process/component init; there is no runtime class discovery.
/// The style object itself is stored behind an `Arc`, so registrations are
/// cheap to clone and resolve.
#[derive(Clone)]
pub struct StyleRegistration {
    /// Unique style identifier. May be left empty at construction, in
    /// which case the registry assigns a generated id on registration.
    pub id: String,
    /// Optional human-readable description, surfaced in listings.
    pub description: Option<String>,
    /// The style instance invoked during dispatch.
    pub style: Arc<dyn EventStyle>,
}

impl StyleRegistration {
    /// Create a registration from an id and a style instance.
    pub fn new(id: impl Into<String>, style: impl EventStyle + 'static) -> Self {
        Self {
            id: id.into(),
            description: None,
            style: Arc::new(style),
        }
    }

    /// Create a registration from an already-shared style instance.
    pub fn from_arc(id: impl Into<String>, style: Arc<dyn EventStyle>) -> Self {
        Self {
            id: id.into(),
            description: None,
            style,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Listable metadata for this registration.
    pub fn descriptor(&self) -> StyleDescriptor {
        StyleDescriptor {
            id: self.id.clone(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Debug for StyleRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistration")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Listable metadata about a registered style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub id: String,
    pub description: Option<String>,
}

/// How the dispatcher resolves "format this event" into style invocations
///
/// `LastWins` reproduces the behavior inherited from the original booking
/// module: run every style and keep only the final result. `Select` and
/// `Aggregate` are the preferred alternatives for new hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// Run every registered style in registration order and return the
    /// last result.
    #[default]
    LastWins,
    /// Run only the named style.
    Select(String),
    /// Run every style and return a JSON object keyed by style id.
    Aggregate,
}

impl DispatchPolicy {
    /// Semantic validation beyond what serde enforces.
    pub fn validate(&self) -> Result<()> {
        match self {
            DispatchPolicy::Select(id) if id.is_empty() => Err(
                crate::StyleError::Config("select policy requires a style id".to_string()),
            ),
            _ => Ok(()),
        }
    }
}
