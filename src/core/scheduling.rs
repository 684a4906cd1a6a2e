//! Scheduling records and their status state machine.
//!
//! Field renames keep the wire format of the operations service: the
//! requester travels as `user_id`, the window as `start_datetime` /
//! `end_datetime`, and the decision timestamp as `approved_at`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::WorkflowError;

/// Store-scoped scheduling identifier.
pub type SchedulingId = i64;
/// Identifier of an authenticated user.
pub type ActorId = i64;
/// Identifier of a reservable common area.
pub type AreaId = i64;
/// Identifier of a residential unit.
pub type UnitId = i64;

/// Lifecycle status of a scheduling.
///
/// `Pending` is the only non-terminal state; the two legal transitions are
/// `Pending -> Approved` and `Pending -> Rejected`. Neither is reversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulingStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by a manager; `approved_by` records who.
    Approved,
    /// Rejected; terminal, `approved_by` stays empty.
    Rejected,
}

impl SchedulingStatus {
    /// Whether this status admits no further transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for SchedulingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// A reservation of a shared area by a unit over a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheduling {
    /// Unique identifier, assigned by the store on insert.
    pub id: SchedulingId,
    /// Reserved common area.
    pub area_id: AreaId,
    /// Requesting residential unit.
    pub unit_id: UnitId,
    /// User who created the request (wire name `user_id`).
    #[serde(rename = "user_id")]
    pub requester_id: ActorId,
    /// Window start (inclusive).
    #[serde(rename = "start_datetime")]
    pub start_time: DateTime<Utc>,
    /// Window end (exclusive).
    #[serde(rename = "end_datetime")]
    pub end_time: DateTime<Utc>,
    /// Free-text description of the booking.
    #[serde(default)]
    pub purpose: Option<String>,
    /// Expected number of guests.
    #[serde(default)]
    pub guests_count: Option<i32>,
    /// Lifecycle status.
    pub status: SchedulingStatus,
    /// Approving user; `Some` exactly when `status` is approved.
    #[serde(default)]
    pub approved_by: Option<ActorId>,
    /// When the decision was taken (wire name `approved_at`).
    #[serde(default, rename = "approved_at")]
    pub decided_at: Option<DateTime<Utc>>,
    /// When the record was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Scheduling {
    /// Merge a patch into this record.
    ///
    /// This is the single guard point for the status state machine: a patch
    /// carrying a status change is refused with `InvalidTransition` when the
    /// record is already decided, and an approver travelling without an
    /// accompanying approve transition is refused with `InvalidPatch`, so
    /// `approved_by` stays tied to the approved state no matter how the
    /// patch was built. On failure the record is left untouched.
    pub fn apply(&mut self, patch: &SchedulingPatch) -> Result<(), WorkflowError> {
        if patch.approved_by.is_some() && patch.status != Some(SchedulingStatus::Approved) {
            return Err(WorkflowError::InvalidPatch(
                "approver may only be set by an approve transition".to_owned(),
            ));
        }
        if patch.status.is_some() && self.status.is_terminal() {
            return Err(WorkflowError::InvalidTransition {
                id: self.id,
                status: self.status,
            });
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(actor) = patch.approved_by {
            self.approved_by = Some(actor);
        }
        if let Some(at) = patch.decided_at {
            self.decided_at = Some(at);
        }
        if let Some(purpose) = &patch.purpose {
            self.purpose = Some(purpose.clone());
        }
        Ok(())
    }
}

/// Caller-facing input for creating a scheduling.
///
/// Deliberately has no `status`, `approved_by`, or requester field: the
/// workflow forces the initial state and takes the requester from the
/// session, never from the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingRequest {
    /// Common area to reserve.
    pub area_id: AreaId,
    /// Requesting unit.
    pub unit_id: UnitId,
    /// Window start.
    #[serde(rename = "start_datetime")]
    pub start_time: DateTime<Utc>,
    /// Window end.
    #[serde(rename = "end_datetime")]
    pub end_time: DateTime<Utc>,
    /// Free-text description.
    #[serde(default)]
    pub purpose: Option<String>,
    /// Expected number of guests.
    #[serde(default)]
    pub guests_count: Option<i32>,
}

impl SchedulingRequest {
    /// Check the `start < end` window invariant.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.start_time >= self.end_time {
            return Err(WorkflowError::InvalidWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(())
    }
}

/// Insert payload handed to a store.
///
/// Serializes to the create body of the operations service; the service
/// (like the in-memory store) defaults `status` to pending and assigns the
/// identifier itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewScheduling {
    /// Common area to reserve.
    pub area_id: AreaId,
    /// Requesting unit.
    pub unit_id: UnitId,
    /// User the request is attributed to (wire name `user_id`).
    #[serde(rename = "user_id")]
    pub requester_id: ActorId,
    /// Window start.
    #[serde(rename = "start_datetime")]
    pub start_time: DateTime<Utc>,
    /// Window end.
    #[serde(rename = "end_datetime")]
    pub end_time: DateTime<Utc>,
    /// Free-text description.
    #[serde(default)]
    pub purpose: Option<String>,
    /// Expected number of guests.
    #[serde(default)]
    pub guests_count: Option<i32>,
}

impl NewScheduling {
    /// Attribute a validated request to a requester.
    #[must_use]
    pub fn from_request(request: SchedulingRequest, requester_id: ActorId) -> Self {
        Self {
            area_id: request.area_id,
            unit_id: request.unit_id,
            requester_id,
            start_time: request.start_time,
            end_time: request.end_time,
            purpose: request.purpose,
            guests_count: request.guests_count,
        }
    }
}

/// Partial update for a stored scheduling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulingPatch {
    /// New status, when transitioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SchedulingStatus>,
    /// Approving actor; set together with an approve transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<ActorId>,
    /// Decision timestamp (wire name `approved_at`).
    #[serde(
        default,
        rename = "approved_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub decided_at: Option<DateTime<Utc>>,
    /// Replacement purpose text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

impl SchedulingPatch {
    /// Patch performing the `pending -> approved` transition.
    #[must_use]
    pub fn approve(actor: ActorId, at: DateTime<Utc>) -> Self {
        Self {
            status: Some(SchedulingStatus::Approved),
            approved_by: Some(actor),
            decided_at: Some(at),
            purpose: None,
        }
    }

    /// Patch performing the `pending -> rejected` transition.
    ///
    /// Leaves `approved_by` empty: it is populated only for approvals.
    #[must_use]
    pub fn reject(at: DateTime<Utc>) -> Self {
        Self {
            status: Some(SchedulingStatus::Rejected),
            approved_by: None,
            decided_at: Some(at),
            purpose: None,
        }
    }

    /// Whether this patch carries a status transition.
    #[must_use]
    pub const fn is_decision(&self) -> bool {
        self.status.is_some()
    }
}
