//! The scheduling workflow: creation validation and status transitions.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::audit::{build_audit_event, AuditSink};
use crate::core::error::WorkflowError;
use crate::core::scheduling::{
    NewScheduling, Scheduling, SchedulingId, SchedulingPatch, SchedulingRequest, SchedulingStatus,
};
use crate::core::session::SessionContext;
use crate::core::store::SchedulingStore;
use crate::util::clock;

/// The only component permitted to construct or transition scheduling
/// records.
///
/// The workflow performs no silent recovery: every failure from the store
/// propagates unchanged to the caller.
pub struct SchedulingWorkflow {
    store: Arc<dyn SchedulingStore>,
    session: Arc<SessionContext>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl SchedulingWorkflow {
    /// Create a workflow over a store, taking actor identity from `session`.
    #[must_use]
    pub fn new(store: Arc<dyn SchedulingStore>, session: Arc<SessionContext>) -> Self {
        Self {
            store,
            session,
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    fn current_actor(&self) -> Result<i64, WorkflowError> {
        self.session
            .current_actor_id()
            .ok_or(WorkflowError::Unauthenticated)
    }

    /// Create a scheduling from a caller request.
    ///
    /// The requester is taken from the session, never from the request body,
    /// and the record always starts out pending with no approver. The window
    /// must satisfy `start < end`.
    ///
    /// Double-booking of the same area and window is not checked here; the
    /// upstream service never did, and adding conflict detection would change
    /// observable behavior without clarified requirements.
    pub async fn create(&self, request: SchedulingRequest) -> Result<Scheduling, WorkflowError> {
        let requester = self.current_actor()?;
        request.validate()?;

        let created = self
            .store
            .insert(NewScheduling::from_request(request, requester))
            .await?;
        tracing::info!(
            id = created.id,
            area_id = created.area_id,
            unit_id = created.unit_id,
            "scheduling created"
        );
        self.record_audit(Some(requester), "create", Some(created.id));
        Ok(created)
    }

    /// Approve a pending scheduling, attributing the decision to the
    /// signed-in actor.
    ///
    /// A record that is already approved or rejected fails with
    /// `InvalidTransition` rather than being silently accepted, so a second
    /// approver can never overwrite `approved_by`.
    pub async fn approve(&self, id: SchedulingId) -> Result<Scheduling, WorkflowError> {
        let approver = self.current_actor()?;
        let updated = self
            .store
            .update(id, SchedulingPatch::approve(approver, clock::now()))
            .await?;
        tracing::info!(id, approver, "scheduling approved");
        self.record_audit(Some(approver), "approve", Some(id));
        Ok(updated)
    }

    /// Reject a pending scheduling.
    ///
    /// Symmetric to [`Self::approve`] but leaves `approved_by` empty; the
    /// dashboard has no end-to-end flow calling this yet.
    pub async fn reject(&self, id: SchedulingId) -> Result<Scheduling, WorkflowError> {
        let actor = self.current_actor()?;
        let updated = self
            .store
            .update(id, SchedulingPatch::reject(clock::now()))
            .await?;
        tracing::info!(id, actor, "scheduling rejected");
        self.record_audit(Some(actor), "reject", Some(id));
        Ok(updated)
    }

    /// All schedulings currently known, in creation order.
    pub async fn list(&self) -> Result<Vec<Scheduling>, WorkflowError> {
        self.store.list().await
    }

    /// Fetch one scheduling by id.
    pub async fn get(&self, id: SchedulingId) -> Result<Scheduling, WorkflowError> {
        self.store.get(id).await
    }

    /// Pending schedulings awaiting a decision, in creation order.
    pub async fn list_pending(&self) -> Result<Vec<Scheduling>, WorkflowError> {
        Ok(self
            .store
            .list()
            .await?
            .into_iter()
            .filter(|s| s.status == SchedulingStatus::Pending)
            .collect())
    }

    fn record_audit(&self, actor_id: Option<i64>, action: &str, entity_id: Option<i64>) {
        if let Some(audit_sink) = &self.audit {
            let mut sink = audit_sink.lock();
            sink.record(build_audit_event(
                actor_id,
                action,
                "scheduling",
                entity_id,
                None,
            ));
        }
    }
}
