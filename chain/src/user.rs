//! Loaded identity snapshots.

use crate::{ChainError, SigChain};
use serde::{Deserialize, Serialize};
use std::fmt;
use weft_types::{KeyId, Seqno, UserId, Username};

/// A stable reference to one incarnation of an identity.
///
/// The uid survives username changes; the eldest seqno bumps whenever the
/// identity resets to a fresh eldest key. Together they pin exactly which
/// incarnation of a user made a statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserVersion {
    pub uid: UserId,
    pub eldest_seqno: Seqno,
}

impl fmt::Display for UserVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%{}", self.uid, self.eldest_seqno)
    }
}

/// A loaded identity: who the user is plus their full signed history.
#[derive(Clone, Debug)]
pub struct User {
    username: Username,
    uid: UserId,
    eldest_kid: KeyId,
    eldest_seqno: Seqno,
    chain: SigChain,
}

impl User {
    pub fn new(
        username: Username,
        uid: UserId,
        eldest_kid: KeyId,
        eldest_seqno: Seqno,
        chain: SigChain,
    ) -> Result<Self, ChainError> {
        if chain.owner() != uid {
            return Err(ChainError::OwnerMismatch {
                chain: chain.owner(),
                user: uid,
            });
        }
        Ok(Self {
            username,
            uid,
            eldest_kid,
            eldest_seqno,
            chain,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn uid(&self) -> UserId {
        self.uid
    }

    pub fn eldest_kid(&self) -> KeyId {
        self.eldest_kid
    }

    pub fn eldest_seqno(&self) -> Seqno {
        self.eldest_seqno
    }

    pub fn chain(&self) -> &SigChain {
        &self.chain
    }

    /// The stable version token for this incarnation.
    pub fn version(&self) -> UserVersion {
        UserVersion {
            uid: self.uid,
            eldest_seqno: self.eldest_seqno,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_chain(n: u8) -> SigChain {
        SigChain::from_links(UserId::new([n; 16]), Vec::new()).unwrap()
    }

    #[test]
    fn user_owns_its_chain() {
        let err = User::new(
            Username::from("nia"),
            UserId::new([1; 16]),
            KeyId::new([7; 32]),
            Seqno::FIRST,
            empty_chain(2),
        )
        .unwrap_err();
        assert!(matches!(err, ChainError::OwnerMismatch { .. }));
    }

    #[test]
    fn version_pins_incarnation() {
        let user = User::new(
            Username::from("nia"),
            UserId::new([1; 16]),
            KeyId::new([7; 32]),
            Seqno::new(3),
            empty_chain(1),
        )
        .unwrap();
        let version = user.version();
        assert_eq!(version.uid, user.uid());
        assert_eq!(version.eldest_seqno, Seqno::new(3));
        assert_eq!(version.to_string(), format!("{}%3", user.uid()));
    }
}
