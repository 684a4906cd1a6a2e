//! In-memory scheduling store.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::error::WorkflowError;
use crate::core::scheduling::{
    NewScheduling, Scheduling, SchedulingId, SchedulingPatch, SchedulingStatus,
};
use crate::core::store::SchedulingStore;
use crate::util::clock;

struct MemoryState {
    next_id: SchedulingId,
    records: Vec<Scheduling>,
}

/// Simple in-memory store for development and testing.
///
/// A single mutex serializes every mutation, which makes `update` atomic:
/// of two racing decisions on the same pending record, the second observes
/// the terminal status and fails. Ids increase monotonically and are never
/// reused. Readers receive clones, never references into the store.
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
}

impl InMemoryStore {
    /// Create an empty store; the first assigned id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }

    /// Seed the store with existing records, e.g. demo fixtures.
    ///
    /// The id counter continues past the highest seeded id.
    #[must_use]
    pub fn with_records(records: Vec<Scheduling>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(MemoryState { next_id, records }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchedulingStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Scheduling>, WorkflowError> {
        Ok(self.state.lock().records.clone())
    }

    async fn get(&self, id: SchedulingId) -> Result<Scheduling, WorkflowError> {
        self.state
            .lock()
            .records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| WorkflowError::scheduling_not_found(id))
    }

    async fn insert(&self, record: NewScheduling) -> Result<Scheduling, WorkflowError> {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        let stored = Scheduling {
            id,
            area_id: record.area_id,
            unit_id: record.unit_id,
            requester_id: record.requester_id,
            start_time: record.start_time,
            end_time: record.end_time,
            purpose: record.purpose,
            guests_count: record.guests_count,
            status: SchedulingStatus::Pending,
            approved_by: None,
            decided_at: None,
            created_at: clock::now(),
        };
        state.records.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: SchedulingId,
        patch: SchedulingPatch,
    ) -> Result<Scheduling, WorkflowError> {
        let mut state = self.state.lock();
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| WorkflowError::scheduling_not_found(id))?;
        record.apply(&patch)?;
        Ok(record.clone())
    }
}
