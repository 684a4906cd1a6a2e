//! Error types for workflow and store operations.

use thiserror::Error;

use crate::core::scheduling::{SchedulingId, SchedulingStatus};

/// Errors produced by the scheduling workflow and its stores.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Referenced record does not exist in the store.
    #[error("not found: {0}")]
    NotFound(String),
    /// Reservation window is empty or inverted.
    #[error("invalid window: start {start} is not before end {end}")]
    InvalidWindow {
        /// Requested window start.
        start: chrono::DateTime<chrono::Utc>,
        /// Requested window end.
        end: chrono::DateTime<chrono::Utc>,
    },
    /// Approve/reject attempted on a record that is already decided.
    #[error("already decided: scheduling {id} is {status}")]
    InvalidTransition {
        /// Record identifier.
        id: SchedulingId,
        /// Status the record currently holds.
        status: SchedulingStatus,
    },
    /// No actor is signed in to attribute the operation to.
    #[error("unauthenticated: no actor signed in")]
    Unauthenticated,
    /// Patch is internally inconsistent.
    #[error("invalid patch: {0}")]
    InvalidPatch(String),
    /// Service configuration is unusable.
    #[error("config error: {0}")]
    Config(String),
    /// Underlying HTTP call failed (network, non-2xx, malformed payload).
    #[error("transport failure: {message}")]
    Transport {
        /// HTTP status code, when a response was received.
        status: Option<u16>,
        /// Failure context.
        message: String,
    },
}

impl WorkflowError {
    /// Whether this failure indicates an expired or invalid credential.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                status: Some(401),
                ..
            }
        )
    }

    /// Build a `NotFound` error for a scheduling id.
    #[must_use]
    pub fn scheduling_not_found(id: SchedulingId) -> Self {
        Self::NotFound(format!("scheduling {id}"))
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
