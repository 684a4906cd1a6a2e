//! Tests for the in-memory store

use condo_ops::core::{NewScheduling, SchedulingPatch, SchedulingStatus, WorkflowError};
use condo_ops::core::SchedulingStore;
use condo_ops::infra::InMemoryStore;

use crate::dec1;

fn new_record(unit_id: i64) -> NewScheduling {
    NewScheduling {
        area_id: 1,
        unit_id,
        requester_id: 2,
        start_time: dec1(14),
        end_time: dec1(18),
        purpose: None,
        guests_count: None,
    }
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let store = InMemoryStore::new();
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids_and_pending_status() {
    let store = InMemoryStore::new();
    let first = store.insert(new_record(101)).await.unwrap();
    let second = store.insert(new_record(205)).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.status, SchedulingStatus::Pending);
    assert_eq!(first.approved_by, None);
    assert_eq!(first.decided_at, None);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let store = InMemoryStore::new();
    for unit in [101, 205, 303] {
        store.insert(new_record(unit)).await.unwrap();
    }

    let listed = store.list().await.unwrap();
    let units: Vec<i64> = listed.iter().map(|s| s.unit_id).collect();
    assert_eq!(units, vec![101, 205, 303]);
}

#[tokio::test]
async fn test_get_missing_id_fails_not_found() {
    let store = InMemoryStore::new();
    let err = store.get(42).await.unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(_)));
}

#[tokio::test]
async fn test_update_missing_id_fails_not_found() {
    let store = InMemoryStore::new();
    let err = store
        .update(42, SchedulingPatch::approve(1, dec1(9)))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(_)));
}

#[tokio::test]
async fn test_update_merges_and_returns_updated_record() {
    let store = InMemoryStore::new();
    let created = store.insert(new_record(101)).await.unwrap();

    let updated = store
        .update(created.id, SchedulingPatch::approve(1, dec1(9)))
        .await
        .unwrap();
    assert_eq!(updated.status, SchedulingStatus::Approved);
    assert_eq!(updated.approved_by, Some(1));

    // The stored record reflects the merge, not just the returned copy.
    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_second_decision_fails_and_leaves_record_unchanged() {
    let store = InMemoryStore::new();
    let created = store.insert(new_record(101)).await.unwrap();
    let approved = store
        .update(created.id, SchedulingPatch::approve(1, dec1(9)))
        .await
        .unwrap();

    let err = store
        .update(created.id, SchedulingPatch::approve(3, dec1(10)))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
    assert_eq!(store.get(created.id).await.unwrap(), approved);
}

#[tokio::test]
async fn test_update_refuses_stray_approver_on_pending_record() {
    let store = InMemoryStore::new();
    let created = store.insert(new_record(101)).await.unwrap();

    let patch = SchedulingPatch {
        approved_by: Some(3),
        ..SchedulingPatch::default()
    };
    let err = store.update(created.id, patch).await.unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidPatch(_)));

    let record = store.get(created.id).await.unwrap();
    assert_eq!(record.status, SchedulingStatus::Pending);
    assert_eq!(record.approved_by, None);
}

#[tokio::test]
async fn test_seeded_store_continues_id_sequence() {
    let store = InMemoryStore::new();
    let a = store.insert(new_record(101)).await.unwrap();
    let b = store.insert(new_record(205)).await.unwrap();

    let seeded = InMemoryStore::with_records(vec![a, b]);
    let c = seeded.insert(new_record(303)).await.unwrap();
    assert_eq!(c.id, 3);
    assert_eq!(seeded.list().await.unwrap().len(), 3);
}
