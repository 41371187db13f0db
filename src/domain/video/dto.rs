use serde::{Deserialize, Serialize};

/// Request for POST /api/videos/resolve
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveVideoRequest {
    pub url: String,
    #[serde(default)]
    pub verification_token: String,
}
