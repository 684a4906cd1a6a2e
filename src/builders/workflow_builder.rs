//! Construct stores and workflows from service configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ServiceConfig, StoreBackendConfig};
use crate::core::audit::InMemoryAuditSink;
use crate::core::error::WorkflowError;
use crate::core::session::SessionContext;
use crate::core::store::SchedulingStore;
use crate::core::workflow::SchedulingWorkflow;
use crate::infra::client::ResourceClient;
use crate::infra::store::{HttpSchedulingStore, InMemoryStore};

/// Build the store selected by configuration.
pub fn build_store(
    cfg: &ServiceConfig,
    session: Arc<SessionContext>,
) -> Result<Arc<dyn SchedulingStore>, WorkflowError> {
    cfg.validate().map_err(WorkflowError::Config)?;

    match cfg.store {
        StoreBackendConfig::InMemory => Ok(Arc::new(InMemoryStore::new())),
        StoreBackendConfig::Http => {
            let client = ResourceClient::new(
                &cfg.operations_url,
                Duration::from_secs(cfg.request_timeout_secs),
                session,
            )?;
            Ok(Arc::new(HttpSchedulingStore::new(client)))
        }
    }
}

/// Build a workflow over the configured store, with an in-memory audit sink
/// bounded by `audit_capacity`.
pub fn build_workflow(
    cfg: &ServiceConfig,
    session: Arc<SessionContext>,
) -> Result<SchedulingWorkflow, WorkflowError> {
    let store = build_store(cfg, Arc::clone(&session))?;
    Ok(SchedulingWorkflow::new(store, session)
        .with_audit(Box::new(InMemoryAuditSink::new(cfg.audit_capacity))))
}
