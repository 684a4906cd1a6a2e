//! Tests for the session context

use condo_ops::core::SessionContext;

#[test]
fn test_fresh_session_is_signed_out() {
    let session = SessionContext::new();
    assert!(!session.is_signed_in());
    assert_eq!(session.current_actor_id(), None);
    assert_eq!(session.access_token(), None);
}

#[test]
fn test_sign_in_exposes_actor_and_token() {
    let session = SessionContext::new();
    session.sign_in(2, "jwt-abc".to_owned());

    assert!(session.is_signed_in());
    assert_eq!(session.current_actor_id(), Some(2));
    assert_eq!(session.access_token().as_deref(), Some("jwt-abc"));
}

#[test]
fn test_sign_out_clears_everything() {
    let session = SessionContext::new();
    session.sign_in(2, "jwt-abc".to_owned());
    session.sign_out();

    assert!(!session.is_signed_in());
    assert_eq!(session.current_actor_id(), None);
    assert_eq!(session.access_token(), None);
}

#[test]
fn test_sign_in_replaces_previous_actor() {
    let session = SessionContext::new();
    session.sign_in(2, "first".to_owned());
    session.sign_in(7, "second".to_owned());

    assert_eq!(session.current_actor_id(), Some(7));
    assert_eq!(session.access_token().as_deref(), Some("second"));
}
