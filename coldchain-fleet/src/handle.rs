//! Shared, concurrently mutable settings
//!
//! The operator can change settings while a tick is running. Ticks never read
//! through the lock field by field; they take a [`SettingsHandle::snapshot`]
//! once and use that copy for every box, so a tick sees either the old or the
//! new settings in full.

use std::sync::Arc;

use coldchain_core::{Settings, SettingsPatch};
use parking_lot::RwLock;

use crate::errors::FleetResult;

/// Cloneable handle to the live settings
#[derive(Debug, Clone, Default)]
pub struct SettingsHandle {
    inner: Arc<RwLock<Settings>>,
}

impl SettingsHandle {
    /// Validates before publishing
    pub fn new(settings: Settings) -> FleetResult<Self> {
        settings.validate()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(settings)),
        })
    }

    /// Copy for one tick
    pub fn snapshot(&self) -> Settings {
        *self.inner.read()
    }

    /// Merge a partial update; the stored settings only change if valid
    pub fn update(&self, patch: &SettingsPatch) -> FleetResult<Settings> {
        let mut guard = self.inner.write();
        match guard.apply(patch) {
            Ok(merged) => {
                *guard = merged;
                log::info!("Settings updated: {:?}", merged);
                Ok(merged)
            }
            Err(e) => {
                log::warn!("Settings update rejected: {}", e);
                Err(e.into())
            }
        }
    }

    /// Replace everything at once
    pub fn replace(&self, settings: Settings) -> FleetResult<()> {
        if let Err(e) = settings.validate() {
            log::warn!("Settings replacement rejected: {}", e);
            return Err(e.into());
        }
        *self.inner.write() = settings;
        Ok(())
    }
}
