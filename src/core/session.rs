//! Process-wide authenticated actor identity.

use parking_lot::RwLock;

use crate::core::scheduling::ActorId;

#[derive(Debug, Clone)]
struct SessionState {
    actor_id: ActorId,
    access_token: String,
}

/// Holds the current signed-in actor and their bearer token.
///
/// Populated at sign-in, cleared at sign-out, read (never written) by the
/// workflow. Read-mostly: a `parking_lot::RwLock` keeps lookups cheap.
#[derive(Debug, Default)]
pub struct SessionContext {
    state: RwLock<Option<SessionState>>,
}

impl SessionContext {
    /// Create an empty (signed-out) session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful sign-in.
    pub fn sign_in(&self, actor_id: ActorId, access_token: String) {
        *self.state.write() = Some(SessionState {
            actor_id,
            access_token,
        });
    }

    /// Clear the session. Called on sign-out and on a 401-equivalent
    /// transport failure.
    pub fn sign_out(&self) {
        *self.state.write() = None;
    }

    /// Identity of the signed-in actor, if any.
    pub fn current_actor_id(&self) -> Option<ActorId> {
        self.state.read().as_ref().map(|s| s.actor_id)
    }

    /// Bearer token for outbound requests, if signed in.
    pub fn access_token(&self) -> Option<String> {
        self.state.read().as_ref().map(|s| s.access_token.clone())
    }

    /// Whether an actor is currently signed in.
    pub fn is_signed_in(&self) -> bool {
        self.state.read().is_some()
    }
}
