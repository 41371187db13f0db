pub mod gate;

use serde::{Deserialize, Serialize};

pub use gate::{VerificationError, VerificationGate, VerificationMode, VerificationToken};

/// Request for POST /api/verification/signal
#[derive(Debug, Serialize, Deserialize)]
pub struct VerificationSignalRequest {
    pub token: String,
}

/// Response for POST /api/verification/signal
#[derive(Debug, Serialize, Deserialize)]
pub struct VerificationSignalResponse {
    pub accepted: bool,
}
