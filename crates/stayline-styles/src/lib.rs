//! Stayline event styles
//!
//! Pluggable formatting of booking events. Hosts register *event styles* —
//! small formatters that turn an [`stayline_core::Event`] into a JSON
//! representation for a given event-type identifier — and dispatch through
//! an [`EventFormatter`].
//!
//! # Architecture
//!
//! 1. **Style capability** ([`EventStyle`]): the contract every style
//!    satisfies — format a borrowed event for an event type.
//! 2. **Style registry** ([`registry`]): explicit, init-time registration of
//!    style factories, replacing runtime plugin discovery.
//! 3. **Formatter** ([`EventFormatter`]): borrows one event and runs styles
//!    against it according to a [`DispatchPolicy`].
//! 4. **Configuration** ([`FormatterConfig`]): YAML wiring of the dispatch
//!    policy.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use stayline_core::Event;
//! use stayline_styles::{
//!     EventFormatter, EventStyle, FormattedResult, InMemoryStyleRegistry,
//!     Result, StyleRegistration, StyleRegistry,
//! };
//!
//! struct SummaryStyle;
//!
//! impl EventStyle for SummaryStyle {
//!     fn format(&self, event: &Event, event_type: &str) -> Result<FormattedResult> {
//!         Ok(serde_json::json!({
//!             "type": event_type,
//!             "name": event.name(),
//!         }))
//!     }
//! }
//!
//! let registry = InMemoryStyleRegistry::new();
//! registry.register_style(StyleRegistration::new("summary", SummaryStyle))?;
//!
//! let formatter = EventFormatter::new(&event, Arc::new(registry));
//! let json = formatter.format_json("summary")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error Handling
//!
//! All operations return `Result<T>`, an alias for
//! `std::result::Result<T, StyleError>`. The dispatcher propagates style
//! and registry failures unchanged; formatting with an empty registry is
//! [`StyleError::NoStylesRegistered`].
//!
//! # Thread Safety
//!
//! Registries are `Send + Sync` and cheaply clonable; each formatter is an
//! independent, request-scoped borrow and needs no synchronization.

pub mod config;
pub mod error;
pub mod formatter;
pub mod registry;
pub mod types;

pub use config::FormatterConfig;
pub use error::{Result, StyleError};
pub use formatter::EventFormatter;
pub use registry::{InMemoryStyleRegistry, StyleRegistry};
pub use types::{
    DispatchPolicy, EventStyle, FormattedResult, StyleDescriptor, StyleRegistration,
};
