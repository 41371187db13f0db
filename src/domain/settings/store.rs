use super::bus::{SettingsBus, Subscription};
use super::draft::SettingsDraft;
use super::error::SettingsError;
use super::model::{merge_over_defaults, SiteSettings};
use crate::infrastructure::repositories::{read_json, write_json, KeyValueRepository};
use serde_json::Value;
use std::sync::Arc;

const SETTINGS_KEY: &str = "savesora_admin_settings";

/// Persisted site settings plus the change broadcast.
///
/// Reads always yield a complete record: stored fields win, anything missing
/// or unreadable falls back to the defaults.
pub struct SettingsStore {
    store: Arc<dyn KeyValueRepository>,
    bus: SettingsBus,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            store,
            bus: SettingsBus::new(),
        }
    }

    pub async fn get(&self) -> SiteSettings {
        let Some(stored) = read_json::<Value>(self.store.as_ref(), SETTINGS_KEY).await else {
            return SiteSettings::default();
        };

        merge_over_defaults(&stored).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Stored settings do not fit the schema, using defaults");
            SiteSettings::default()
        })
    }

    /// Replace the stored record and notify every subscriber.
    pub async fn save(&self, settings: &SiteSettings) -> Result<(), SettingsError> {
        write_json(self.store.as_ref(), SETTINGS_KEY, settings).await?;
        self.announce();
        Ok(())
    }

    /// Replace the stored record with a possibly partial JSON object.
    ///
    /// The object is validated by merging it over the defaults and stored as
    /// given, so omitted fields keep reading back as defaults.
    pub async fn save_value(&self, value: Value) -> Result<SiteSettings, SettingsError> {
        if !value.is_object() {
            return Err(SettingsError::Invalid(
                "Settings must be a JSON object".to_string(),
            ));
        }
        let merged =
            merge_over_defaults(&value).map_err(|e| SettingsError::Invalid(e.to_string()))?;

        write_json(self.store.as_ref(), SETTINGS_KEY, &value).await?;
        self.announce();
        Ok(merged)
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.bus.subscribe(listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.bus.listener_count()
    }

    /// Start an edit session from the current settings.
    pub async fn draft(&self) -> SettingsDraft {
        SettingsDraft::new(self.get().await)
    }

    fn announce(&self) {
        let notified = self.bus.notify();
        tracing::info!(subscribers = notified, "Site settings saved");
    }
}
