//! Remote scheduling store backed by the operations service.

use async_trait::async_trait;

use crate::core::error::WorkflowError;
use crate::core::scheduling::{
    NewScheduling, Scheduling, SchedulingId, SchedulingPatch, SchedulingStatus,
};
use crate::core::store::SchedulingStore;
use crate::infra::client::ResourceClient;

const RESOURCE_PATH: &str = "/api/schedulings";

/// Store that delegates to the operations service's scheduling routes.
///
/// Decisions map to the service's action routes
/// (`PUT /api/schedulings/{id}/approve` and `/reject`); other patches go
/// through a plain `PUT`. The pending-only transition guard is enforced
/// server-side for this backend; the client maps the service's status codes
/// onto [`WorkflowError`] without a read-then-write round trip.
pub struct HttpSchedulingStore {
    client: ResourceClient,
}

impl HttpSchedulingStore {
    /// Wrap a resource client pointed at the operations service.
    #[must_use]
    pub const fn new(client: ResourceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SchedulingStore for HttpSchedulingStore {
    async fn list(&self) -> Result<Vec<Scheduling>, WorkflowError> {
        self.client.get_json(RESOURCE_PATH).await
    }

    async fn get(&self, id: SchedulingId) -> Result<Scheduling, WorkflowError> {
        self.client
            .get_json(&format!("{RESOURCE_PATH}/{id}"))
            .await
            .map_err(|e| match e {
                WorkflowError::NotFound(_) => WorkflowError::scheduling_not_found(id),
                other => other,
            })
    }

    async fn insert(&self, record: NewScheduling) -> Result<Scheduling, WorkflowError> {
        self.client.post_json(RESOURCE_PATH, &record).await
    }

    async fn update(
        &self,
        id: SchedulingId,
        patch: SchedulingPatch,
    ) -> Result<Scheduling, WorkflowError> {
        let result = match patch.status {
            Some(SchedulingStatus::Approved) => {
                let approved_by = patch.approved_by.ok_or_else(|| WorkflowError::Transport {
                    status: None,
                    message: "approve patch without approver".to_owned(),
                })?;
                self.client
                    .put_action(
                        &format!("{RESOURCE_PATH}/{id}/approve"),
                        &[("approved_by", approved_by)],
                    )
                    .await
            }
            Some(SchedulingStatus::Rejected) => {
                self.client
                    .put_action::<[(&str, &str)], Scheduling>(
                        &format!("{RESOURCE_PATH}/{id}/reject"),
                        &[],
                    )
                    .await
            }
            _ => {
                self.client
                    .put_json(&format!("{RESOURCE_PATH}/{id}"), &patch)
                    .await
            }
        };
        result.map_err(|e| match e {
            WorkflowError::NotFound(_) => WorkflowError::scheduling_not_found(id),
            other => other,
        })
    }
}
