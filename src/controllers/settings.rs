use axum::{extract::State, Extension, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::domain::settings::{
    SettingsFieldUpdate, SettingsStore, SiteSettings, SiteSnapshot, SiteSurfaces,
};
use crate::error::AppResult;
use crate::infrastructure::auth::AdminUser;

pub struct SettingsController {
    store: Arc<SettingsStore>,
    surfaces: Arc<SiteSurfaces>,
}

impl SettingsController {
    pub fn new(store: Arc<SettingsStore>, surfaces: Arc<SiteSurfaces>) -> Self {
        Self { store, surfaces }
    }

    /// GET /api/settings - Complete site settings
    pub async fn get_settings(
        State(controller): State<Arc<SettingsController>>,
    ) -> Json<SiteSettings> {
        Json(controller.store.get().await)
    }

    /// GET /api/site - What the public page currently shows
    pub async fn get_site(State(controller): State<Arc<SettingsController>>) -> Json<SiteSnapshot> {
        Json(controller.surfaces.snapshot())
    }

    /// PUT /api/admin/settings - Replace the stored settings record
    pub async fn replace_settings(
        State(controller): State<Arc<SettingsController>>,
        Extension(admin): Extension<AdminUser>,
        Json(record): Json<Value>,
    ) -> AppResult<Json<SiteSettings>> {
        let settings = controller.store.save_value(record).await?;
        tracing::info!(admin = %admin.email, "Settings replaced");
        Ok(Json(settings))
    }

    /// PATCH /api/admin/settings - Edit one field and save the whole record
    pub async fn update_field(
        State(controller): State<Arc<SettingsController>>,
        Extension(admin): Extension<AdminUser>,
        Json(update): Json<SettingsFieldUpdate>,
    ) -> AppResult<Json<SiteSettings>> {
        let mut draft = controller.store.draft().await;
        draft.set_field(update.section, &update.field, update.value)?;
        let settings = draft.commit(&controller.store).await?;

        tracing::info!(
            admin = %admin.email,
            section = %update.section,
            field = %update.field,
            "Setting updated"
        );
        Ok(Json(settings))
    }
}
