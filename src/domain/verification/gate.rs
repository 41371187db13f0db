use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::oneshot;
use uuid::Uuid;

/// Proof that a human check passed for one gated action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerificationToken(String);

impl VerificationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerificationMode {
    /// Resolve on the external signal or after `delay`, whichever comes first.
    Simulated { delay: Duration },
    /// Resolve only on the external signal; give up after `timeout`.
    External { timeout: Duration },
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum VerificationError {
    #[error("verification was abandoned before a signal arrived")]
    Cancelled,
    #[error("verification timed out")]
    TimedOut,
}

impl From<VerificationError> for AppError {
    fn from(_: VerificationError) -> Self {
        AppError::VerificationIncomplete("Please complete the security check first.".to_string())
    }
}

/// One-shot human verification in front of gated actions.
///
/// The gate keeps nothing between challenges. Challenges wait side by side,
/// each for its own signal. The external widget reports success through
/// [`VerificationGate::deliver`], which resolves the oldest waiting challenge;
/// with nothing waiting the signal is dropped.
pub struct VerificationGate {
    mode: VerificationMode,
    pending: Mutex<BTreeMap<u64, oneshot::Sender<VerificationToken>>>,
    next_id: AtomicU64,
}

impl VerificationGate {
    pub fn new(mode: VerificationMode) -> Self {
        Self {
            mode,
            pending: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn mode(&self) -> VerificationMode {
        self.mode
    }

    /// Wait for a fresh verification signal.
    pub async fn challenge(&self) -> Result<VerificationToken, VerificationError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let (reply, signal) = oneshot::channel();

        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, reply);

        tracing::debug!(challenge = id, mode = ?self.mode, "Verification challenge started");

        let outcome = match self.mode {
            VerificationMode::Simulated { delay } => tokio::select! {
                token = signal => token.map_err(|_| VerificationError::Cancelled),
                _ = tokio::time::sleep(delay) => {
                    Ok(VerificationToken::new(format!("simulated_{}", Uuid::new_v4().simple())))
                }
            },
            VerificationMode::External { timeout } => {
                match tokio::time::timeout(timeout, signal).await {
                    Ok(Ok(token)) => Ok(token),
                    Ok(Err(_)) => Err(VerificationError::Cancelled),
                    Err(_) => Err(VerificationError::TimedOut),
                }
            }
        };

        self.release(id);

        match &outcome {
            Ok(_) => tracing::debug!(challenge = id, "Verification passed"),
            Err(e) => tracing::info!(challenge = id, error = %e, "Verification not completed"),
        }
        outcome
    }

    /// Hand the external success signal to the oldest waiting challenge.
    ///
    /// Returns `false` when the token is blank or nothing is waiting.
    pub fn deliver(&self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        // Waiters that already gave up are skipped.
        while let Some((id, reply)) = pending.pop_first() {
            if reply.send(VerificationToken::new(token)).is_ok() {
                tracing::debug!(challenge = id, "Verification signal delivered");
                return true;
            }
        }
        false
    }

    pub fn is_waiting(&self) -> bool {
        !self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    #[cfg(test)]
    fn waiting_count(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, id: u64) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }
}
