use super::error::SettingsError;
use super::model::{SettingsSection, SiteSettings};
use super::store::SettingsStore;
use serde_json::Value;

/// Local copy of the settings being edited in the admin panel.
///
/// Field edits stay in the draft until [`commit`](SettingsDraft::commit)
/// writes the whole record in one save.
#[derive(Debug, Clone)]
pub struct SettingsDraft {
    base: SiteSettings,
    current: SiteSettings,
}

impl SettingsDraft {
    pub fn new(base: SiteSettings) -> Self {
        Self {
            current: base.clone(),
            base,
        }
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.current
    }

    pub fn is_dirty(&self) -> bool {
        self.current != self.base
    }

    /// Set `section.field` to `value`. The field must exist and the value
    /// must have the field's type.
    pub fn set_field(
        &mut self,
        section: SettingsSection,
        field: &str,
        value: Value,
    ) -> Result<(), SettingsError> {
        let mut record = serde_json::to_value(&self.current)
            .map_err(|e| SettingsError::Dependency(e.to_string()))?;

        let slot = record
            .get_mut(section.as_str())
            .and_then(|section| section.get_mut(field))
            .ok_or_else(|| SettingsError::UnknownField {
                section: section.to_string(),
                field: field.to_string(),
            })?;
        *slot = value;

        self.current = serde_json::from_value(record).map_err(|e| {
            SettingsError::Invalid(format!("Invalid value for {}.{}: {}", section, field, e))
        })?;
        Ok(())
    }

    pub fn discard(&mut self) {
        self.current = self.base.clone();
    }

    /// Save the complete edited record and return it.
    pub async fn commit(self, store: &SettingsStore) -> Result<SiteSettings, SettingsError> {
        store.save(&self.current).await?;
        Ok(self.current)
    }
}
