//! Audit sink implementations.
//!
//! Every workflow mutation is recorded as an audit event, mirroring the
//! operations service's log table (actor, action, entity, timestamp).

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::core::scheduling::ActorId;
use crate::util::clock;

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event identifier (UUIDv4).
    pub event_id: String,
    /// Acting user, when known.
    pub actor_id: Option<ActorId>,
    /// Action taken (create, approve, reject).
    pub action: String,
    /// Kind of entity acted on.
    pub entity_type: String,
    /// Identifier of the entity acted on, when known.
    pub entity_id: Option<i64>,
    /// Additional context.
    pub detail: Option<String>,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink with a bounded buffer; oldest events are dropped
/// first when full.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an audit event from context.
#[must_use]
pub fn build_audit_event(
    actor_id: Option<ActorId>,
    action: impl Into<String>,
    entity_type: impl Into<String>,
    entity_id: Option<i64>,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        actor_id,
        action: action.into(),
        entity_type: entity_type.into(),
        entity_id,
        detail,
        created_at: clock::now(),
    }
}
