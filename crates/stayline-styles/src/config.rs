//! Formatter configuration loading
//!
//! Hosts wire the dispatch policy from a YAML fragment in their own
//! configuration tree:
//!
//! ```yaml
//! policy: last_wins
//! ```
//!
//! or, selecting one style:
//!
//! ```yaml
//! policy:
//!   select: summary
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::Result, types::DispatchPolicy};

/// Configuration for an [`crate::EventFormatter`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Dispatch policy; defaults to [`DispatchPolicy::LastWins`].
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub policy: DispatchPolicy,
}

impl FormatterConfig {
    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StyleError::Yaml`] on malformed YAML and
    /// [`crate::StyleError::Config`] on semantically invalid values.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.policy.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
