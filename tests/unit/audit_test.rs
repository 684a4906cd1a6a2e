//! Tests for audit sink

use condo_ops::core::{build_audit_event, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink_records_events() {
    let mut sink = InMemoryAuditSink::new(10);

    sink.record(build_audit_event(
        Some(1),
        "approve",
        "scheduling",
        Some(3),
        None,
    ));

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].actor_id, Some(1));
    assert_eq!(events[0].action, "approve");
    assert_eq!(events[0].entity_type, "scheduling");
    assert_eq!(events[0].entity_id, Some(3));
}

#[test]
fn test_audit_sink_overflow_drops_oldest() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(Some(1), "create", "scheduling", Some(1), None));
    sink.record(build_audit_event(Some(1), "create", "scheduling", Some(2), None));
    sink.record(build_audit_event(Some(1), "approve", "scheduling", Some(1), None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].entity_id, Some(2)); // First one popped
    assert_eq!(events[1].action, "approve");
}

#[test]
fn test_event_ids_are_unique() {
    let a = build_audit_event(None, "create", "scheduling", None, None);
    let b = build_audit_event(None, "create", "scheduling", None, None);
    assert_ne!(a.event_id, b.event_id);
}
