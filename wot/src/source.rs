//! Collaborator seams the core depends on.
//!
//! Everything I/O-shaped lives behind these traits: the HTTP client
//! implements them against a real server, tests implement them in
//! memory. The core never talks to the network directly.

use crate::{CandidateVouch, Session, WotError};
use async_trait::async_trait;
use weft_chain::User;
use weft_types::{UserId, Username};

/// Source of server-reported vouch candidates.
#[async_trait]
pub trait VouchSource: Send + Sync {
    /// Fetch candidates addressed to `username`, or to the session owner
    /// when `username` is `None`.
    ///
    /// Transport failures pass through opaquely as [`WotError::Transport`];
    /// retry policy belongs to the implementation, not the core.
    async fn fetch_candidates(
        &self,
        session: &Session,
        username: Option<&Username>,
    ) -> Result<Vec<CandidateVouch>, WotError>;
}

/// Loader of full identity snapshots: the user record plus their chain,
/// already signature-checked.
#[async_trait]
pub trait UserLoader: Send + Sync {
    async fn load_self(&self, session: &Session) -> Result<User, WotError>;

    async fn load_by_uid(&self, session: &Session, uid: UserId) -> Result<User, WotError>;

    async fn load_by_username(
        &self,
        session: &Session,
        username: &Username,
    ) -> Result<User, WotError>;
}
