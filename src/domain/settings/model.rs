use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Admin-editable site configuration. Always complete once read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteSettings {
    pub branding: Branding,
    pub homepage: Homepage,
    pub navigation: Navigation,
    pub announcement: Announcement,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub site_title: String,
    pub tagline: String,
    pub accent_color: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            site_title: "SaveSora".to_string(),
            tagline: "Fast Online Video Downloader".to_string(),
            accent_color: "blue".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    pub main_title: String,
    pub subtitle: String,
    pub description: String,
}

impl Default for Homepage {
    fn default() -> Self {
        Self {
            main_title: "SaveSora: Fast Online Video Downloader".to_string(),
            subtitle: "Easily download high-quality videos from a link\u{2014}no watermark, no hassle."
                .to_string(),
            description: "The fastest and most secure way to download Sora videos online. \
                          No installation required, completely free, and high quality guaranteed."
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    #[serde(rename = "showTikTok")]
    pub show_tiktok: bool,
    pub show_fake_sora: bool,
    pub show_login: bool,
    pub show_pricing: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            show_tiktok: false,
            show_fake_sora: false,
            show_login: true,
            show_pricing: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub enabled: bool,
    pub text: String,
    pub bg_color: String,
}

impl Default for Announcement {
    fn default() -> Self {
        Self {
            enabled: false,
            text: "\u{1F389} New Feature: 4K Downloads are now available for Pro users!".to_string(),
            bg_color: "bg-blue-600".to_string(),
        }
    }
}

/// Top-level group of fields in [`SiteSettings`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    Branding,
    Homepage,
    Navigation,
    Announcement,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 4] = [
        SettingsSection::Branding,
        SettingsSection::Homepage,
        SettingsSection::Navigation,
        SettingsSection::Announcement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsSection::Branding => "branding",
            SettingsSection::Homepage => "homepage",
            SettingsSection::Navigation => "navigation",
            SettingsSection::Announcement => "announcement",
        }
    }
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("Unknown settings section: {}", s))
    }
}

/// Overlay a possibly partial stored record onto the defaults.
///
/// Objects merge key by key at every depth; `null` leaves the default in
/// place. Fails when a present value has the wrong type.
pub fn merge_over_defaults(stored: &Value) -> Result<SiteSettings, serde_json::Error> {
    let mut merged = serde_json::to_value(SiteSettings::default())?;
    deep_merge(&mut merged, stored);
    serde_json::from_value(merged)
}

fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(key) {
                    Some(slot) => deep_merge(slot, value),
                    None => {
                        base.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}
