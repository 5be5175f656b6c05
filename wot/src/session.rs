//! Explicit session context for collaborator calls.

use weft_types::UserId;

/// An authenticated caller context.
///
/// Passed explicitly into every collaborator call; nothing in this
/// workspace keeps ambient session state.
#[derive(Clone, Debug)]
pub struct Session {
    uid: UserId,
    token: String,
}

impl Session {
    pub fn new(uid: UserId, token: impl Into<String>) -> Self {
        Self {
            uid,
            token: token.into(),
        }
    }

    /// The session owner.
    pub fn uid(&self) -> UserId {
        self.uid
    }

    /// Bearer token for authenticated transport calls.
    pub fn token(&self) -> &str {
        &self.token
    }
}
