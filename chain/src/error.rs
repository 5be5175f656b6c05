//! Chain construction and resolution errors.

use crate::LinkKind;
use thiserror::Error;
use weft_types::{Seqno, SigId, UserId};

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("no link with sig id {sig_id} in this chain")]
    LinkNotFound { sig_id: SigId },

    #[error("link {sig_id} is a {found} link, expected {expected}")]
    WrongLinkType {
        sig_id: SigId,
        expected: LinkKind,
        found: LinkKind,
    },

    #[error("link {sig_id} belongs to {owner}, not chain owner {expected}")]
    ForeignLink {
        sig_id: SigId,
        owner: UserId,
        expected: UserId,
    },

    #[error("link {sig_id} has seqno {seqno}, expected {expected}")]
    OutOfOrder {
        sig_id: SigId,
        seqno: Seqno,
        expected: Seqno,
    },

    #[error("duplicate sig id {sig_id} in chain")]
    DuplicateSigId { sig_id: SigId },

    #[error("revocation names unknown link {sig_id}")]
    UnknownRevocationTarget { sig_id: SigId },

    #[error("revocation names link {sig_id}, which is not earlier in the chain")]
    ForwardRevocation { sig_id: SigId },

    #[error("chain belongs to {chain}, not user {user}")]
    OwnerMismatch { chain: UserId, user: UserId },
}
