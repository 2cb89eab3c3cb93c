//! Integration config store: the external credential record, loaded once at
//! startup and replaced wholesale on save.
//!
//! The store only persists. Callers re-run provider SDK initialization
//! (idempotent) after changing the app id; the next onboarding attempt reads
//! the fresh value.

use crate::InboxError;
use omnichat_core::IntegrationConfig;
use omnichat_storage::SlotStore;
use tracing::{info, warn};

/// Slot key the integration config is persisted under.
pub const CONFIG_SLOT: &str = "omnichat_config";

pub struct ConfigStore<S: SlotStore> {
    store: S,
    config: IntegrationConfig,
}

impl<S: SlotStore> ConfigStore<S> {
    /// Loads the config from its slot, defaulting to the placeholder record
    /// when the slot is absent or unreadable.
    pub fn load(store: S) -> Self {
        let config = match store.read(CONFIG_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Persisted config unreadable, using defaults: {}", e);
                    IntegrationConfig::default()
                }
            },
            Ok(None) => IntegrationConfig::default(),
            Err(e) => {
                warn!("Failed to read config slot, using defaults: {}", e);
                IntegrationConfig::default()
            }
        };
        Self { store, config }
    }

    pub fn config(&self) -> &IntegrationConfig {
        &self.config
    }

    /// Replaces the config wholesale and persists synchronously.
    pub fn save(&mut self, config: IntegrationConfig) -> Result<(), InboxError> {
        let payload = serde_json::to_string(&config)?;
        self.store.write(CONFIG_SLOT, &payload)?;
        self.config = config;
        info!("saved integration config");
        Ok(())
    }

    /// Consumes the store, returning the underlying slot store.
    pub fn into_store(self) -> S {
        self.store
    }
}
