//! Style registry for storing and managing event styles
//!
//! The style registry is the explicit, statically-typed replacement for the
//! runtime plugin discovery the original booking module relied on. Hosts
//! register their styles by id at initialization; the dispatcher later
//! resolves them and runs them against the event being formatted.
//!
//! # Examples
//!
//! ```ignore
//! use stayline_styles::{InMemoryStyleRegistry, StyleRegistration, StyleRegistry};
//!
//! let registry = InMemoryStyleRegistry::new();
//!
//! let registration = StyleRegistration::new("summary", SummaryStyle)
//!     .with_description("Compact JSON summary");
//!
//! let style_id = registry.register_style(registration)?;
//!
//! // List registered styles, in registration order
//! for descriptor in registry.list_styles()? {
//!     println!("{}", descriptor.id);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod storage;

pub use storage::InMemoryStyleRegistry;

use std::sync::Arc;

use crate::{
    error::Result,
    types::{EventStyle, StyleDescriptor, StyleRegistration},
};

/// Trait for managing event styles
///
/// Defines the seam between style storage and the dispatcher. The iteration
/// order reported by [`list_styles`](StyleRegistry::list_styles) and
/// [`resolve_all`](StyleRegistry::resolve_all) is registration order, and
/// the dispatcher inherits it.
///
/// # Thread Safety
///
/// All implementations must be thread-safe (`Send + Sync`); the registry is
/// read-only from the dispatcher's perspective and may be shared between
/// concurrent formatters.
pub trait StyleRegistry: Send + Sync {
    /// Register a new style.
    ///
    /// Stores the registration and returns its id. A registration with an
    /// empty id is assigned a generated unique id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StyleError::AlreadyRegistered`] if a style with the
    /// same id already exists.
    fn register_style(&self, registration: StyleRegistration) -> Result<String>;

    /// Remove a style by id.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StyleError::StyleNotFound`] if no such style exists.
    fn unregister_style(&self, style_id: &str) -> Result<()>;

    /// Get the descriptor of a registered style.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StyleError::StyleNotFound`] if no such style exists.
    fn get_style(&self, style_id: &str) -> Result<StyleDescriptor>;

    /// List descriptors of all registered styles, in registration order.
    fn list_styles(&self) -> Result<Vec<StyleDescriptor>>;

    /// Resolve the named style for dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StyleError::StyleNotFound`] if no such style exists.
    fn resolve(&self, style_id: &str) -> Result<Arc<dyn EventStyle>>;

    /// Resolve every registered style, in registration order.
    ///
    /// An empty registry yields an empty vector; the zero-styles policy is
    /// the dispatcher's concern, not the registry's.
    fn resolve_all(&self) -> Result<Vec<(StyleDescriptor, Arc<dyn EventStyle>)>>;
}
