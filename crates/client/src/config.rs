use std::sync::{Arc, PoisonError, RwLock};

use enka_core::config::{ConfigUpdate, EnkaConfig};
use enka_core::error::EnkaError;

/// Configuration shared by every component of one [`EnkaAssets`] instance.
///
/// Readers take a cheap snapshot per operation; updates swap the whole
/// value, so no component ever sees a half-applied change.
///
/// [`EnkaAssets`]: crate::assets::EnkaAssets
#[derive(Debug, Clone)]
pub struct SharedConfig(Arc<RwLock<EnkaConfig>>);

impl SharedConfig {
    pub fn new(config: EnkaConfig) -> Self {
        Self(Arc::new(RwLock::new(config)))
    }

    pub fn snapshot(&self) -> EnkaConfig {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Merge `update` over the current value. On error nothing changes.
    pub fn update(&self, update: ConfigUpdate) -> Result<EnkaConfig, EnkaError> {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        let next = guard.merged(update)?;
        *guard = next.clone();
        Ok(next)
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new(EnkaConfig::default())
    }
}
