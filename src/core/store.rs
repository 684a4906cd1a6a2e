//! Store contract for scheduling collections.

use async_trait::async_trait;

use crate::core::error::WorkflowError;
use crate::core::scheduling::{NewScheduling, Scheduling, SchedulingId, SchedulingPatch};

/// Ordered collection of scheduling records, addressable by id.
///
/// Implementations must keep `update` atomic with respect to concurrent
/// callers on the same id: of two racing approvals of a pending record,
/// exactly one observes `pending` and transitions it, the other fails with
/// `InvalidTransition`. Readers never observe a half-applied patch.
#[async_trait]
pub trait SchedulingStore: Send + Sync {
    /// All records in insertion order. An empty store yields an empty vec.
    async fn list(&self) -> Result<Vec<Scheduling>, WorkflowError>;

    /// Fetch one record, failing with `NotFound` when the id is absent.
    async fn get(&self, id: SchedulingId) -> Result<Scheduling, WorkflowError>;

    /// Assign the next id (monotonically increasing, never reused), append,
    /// and return the stored record. New records start out pending with no
    /// approver.
    async fn insert(&self, record: NewScheduling) -> Result<Scheduling, WorkflowError>;

    /// Merge a patch into an existing record and return the updated record.
    ///
    /// Fails with `NotFound` for an absent id and `InvalidTransition` when
    /// the patch carries a status change but the record is already decided;
    /// on failure the stored record is unchanged.
    async fn update(
        &self,
        id: SchedulingId,
        patch: SchedulingPatch,
    ) -> Result<Scheduling, WorkflowError>;
}
