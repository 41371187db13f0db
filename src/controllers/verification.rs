use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::domain::verification::{
    VerificationGate, VerificationMode, VerificationSignalRequest, VerificationSignalResponse,
};

pub struct VerificationController {
    gate: Arc<VerificationGate>,
}

impl VerificationController {
    pub fn new(gate: Arc<VerificationGate>) -> Self {
        Self { gate }
    }

    /// GET /api/verification - Whether a gated action is waiting for a check
    pub async fn status(State(controller): State<Arc<VerificationController>>) -> Json<Value> {
        let mode = match controller.gate.mode() {
            VerificationMode::Simulated { .. } => "simulated",
            VerificationMode::External { .. } => "external",
        };
        Json(json!({
            "mode": mode,
            "waiting": controller.gate.is_waiting(),
        }))
    }

    /// POST /api/verification/signal - Token from the verification widget
    pub async fn signal(
        State(controller): State<Arc<VerificationController>>,
        Json(request): Json<VerificationSignalRequest>,
    ) -> Json<VerificationSignalResponse> {
        let accepted = controller.gate.deliver(&request.token);
        tracing::debug!(accepted, "Verification signal received");
        Json(VerificationSignalResponse { accepted })
    }
}
