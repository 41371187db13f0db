pub mod bus;
pub mod draft;
pub mod error;
pub mod model;
pub mod store;
pub mod views;

pub use bus::Subscription;
pub use draft::SettingsDraft;
pub use error::SettingsError;
pub use model::{
    merge_over_defaults, Announcement, Branding, Homepage, Navigation, SettingsSection,
    SiteSettings,
};
pub use store::SettingsStore;
pub use views::{
    AnnouncementBanner, HeroView, LiveView, NavigationView, SiteSnapshot, SiteSurfaces,
};

use serde::{Deserialize, Serialize};

/// Request for PATCH /api/admin/settings
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsFieldUpdate {
    pub section: SettingsSection,
    pub field: String,
    pub value: serde_json::Value,
}
