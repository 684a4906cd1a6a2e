//! Core domain model and business rules for scheduling approvals.

pub mod error;
pub mod scheduling;
pub mod store;
pub mod workflow;
pub mod session;
pub mod audit;

pub use error::{AppResult, WorkflowError};
pub use scheduling::{
    ActorId, NewScheduling, Scheduling, SchedulingId, SchedulingPatch, SchedulingRequest,
    SchedulingStatus,
};
pub use store::SchedulingStore;
pub use workflow::SchedulingWorkflow;
pub use session::SessionContext;
pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink};
