//! Tests for error formatting and classification

use condo_ops::core::{SchedulingStatus, WorkflowError};

use crate::dec1;

#[test]
fn test_not_found_message() {
    let err = WorkflowError::scheduling_not_found(7);
    assert_eq!(err.to_string(), "not found: scheduling 7");
}

#[test]
fn test_invalid_window_message_names_both_ends() {
    let err = WorkflowError::InvalidWindow {
        start: dec1(18),
        end: dec1(14),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("invalid window"));
    assert!(msg.contains("2025-12-01 18:00:00"));
    assert!(msg.contains("2025-12-01 14:00:00"));
}

#[test]
fn test_invalid_transition_message() {
    let err = WorkflowError::InvalidTransition {
        id: 3,
        status: SchedulingStatus::Approved,
    };
    assert_eq!(err.to_string(), "already decided: scheduling 3 is approved");
}

#[test]
fn test_unauthorized_classification() {
    let unauthorized = WorkflowError::Transport {
        status: Some(401),
        message: "token expired".into(),
    };
    assert!(unauthorized.is_unauthorized());

    let server_error = WorkflowError::Transport {
        status: Some(500),
        message: "boom".into(),
    };
    assert!(!server_error.is_unauthorized());

    let network = WorkflowError::Transport {
        status: None,
        message: "connection refused".into(),
    };
    assert!(!network.is_unauthorized());
}
