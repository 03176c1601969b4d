//! Stayline core domain types
//!
//! Defines the bookable `Event` entity shared by the rest of the workspace.
//! An event is constructed once, validated, and never mutated afterwards;
//! formatting layers borrow it read-only.

pub mod error;
pub mod event;

pub use error::{EventError, Result};
pub use event::Event;
