//! In-memory style registry implementation

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::{
    error::{Result, StyleError},
    types::{EventStyle, StyleDescriptor, StyleRegistration},
};

/// In-memory style registry
///
/// Registrations are kept in a vector so that iteration order is exactly
/// registration order. Cloning is cheap and shares the underlying storage.
#[derive(Clone)]
pub struct InMemoryStyleRegistry {
    styles: Arc<RwLock<Vec<StyleRegistration>>>,
}

impl InMemoryStyleRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            styles: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryStyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl super::StyleRegistry for InMemoryStyleRegistry {
    fn register_style(&self, mut registration: StyleRegistration) -> Result<String> {
        // Generate unique id if not provided
        if registration.id.is_empty() {
            registration.id = Uuid::new_v4().to_string();
        }

        let style_id = registration.id.clone();
        let mut styles = self.styles.write().map_err(|e| {
            StyleError::Registry(format!("Failed to acquire write lock: {}", e))
        })?;

        if styles.iter().any(|s| s.id == style_id) {
            return Err(StyleError::AlreadyRegistered(style_id));
        }

        styles.push(registration);
        Ok(style_id)
    }

    fn unregister_style(&self, style_id: &str) -> Result<()> {
        let mut styles = self.styles.write().map_err(|e| {
            StyleError::Registry(format!("Failed to acquire write lock: {}", e))
        })?;

        let position = styles
            .iter()
            .position(|s| s.id == style_id)
            .ok_or_else(|| StyleError::StyleNotFound(style_id.to_string()))?;

        styles.remove(position);
        Ok(())
    }

    fn get_style(&self, style_id: &str) -> Result<StyleDescriptor> {
        let styles = self.styles.read().map_err(|e| {
            StyleError::Registry(format!("Failed to acquire read lock: {}", e))
        })?;

        styles
            .iter()
            .find(|s| s.id == style_id)
            .map(StyleRegistration::descriptor)
            .ok_or_else(|| StyleError::StyleNotFound(style_id.to_string()))
    }

    fn list_styles(&self) -> Result<Vec<StyleDescriptor>> {
        let styles = self.styles.read().map_err(|e| {
            StyleError::Registry(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(styles.iter().map(StyleRegistration::descriptor).collect())
    }

    fn resolve(&self, style_id: &str) -> Result<Arc<dyn EventStyle>> {
        let styles = self.styles.read().map_err(|e| {
            StyleError::Registry(format!("Failed to acquire read lock: {}", e))
        })?;

        styles
            .iter()
            .find(|s| s.id == style_id)
            .map(|s| Arc::clone(&s.style))
            .ok_or_else(|| StyleError::StyleNotFound(style_id.to_string()))
    }

    fn resolve_all(&self) -> Result<Vec<(StyleDescriptor, Arc<dyn EventStyle>)>> {
        let styles = self.styles.read().map_err(|e| {
            StyleError::Registry(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(styles
            .iter()
            .map(|s| (s.descriptor(), Arc::clone(&s.style)))
            .collect())
    }
}
