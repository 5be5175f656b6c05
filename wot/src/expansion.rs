//! Expansion payload schemas for vouch and reaction links.
//!
//! These are the shapes parsed out of a link's committed payload, after
//! the commitment check has released the bytes.

use serde::{Deserialize, Serialize};
use weft_types::{KeyId, Seqno, SigId, UserId, Username};

/// The vouchee as asserted inside a vouch expansion.
///
/// This is the anti-substitution anchor: the voucher signed exactly this
/// identity, so verification compares it against the user the vouch is
/// being presented for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VouchedUser {
    pub username: Username,
    pub uid: UserId,
    pub eldest: EldestAssertion,
    pub seq_tail: SeqTail,
}

/// The vouchee's eldest key at vouch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EldestAssertion {
    pub kid: KeyId,
    pub seqno: Seqno,
}

/// Marker pinning the tail of the vouchee's history at vouch time.
///
/// Carried through opaquely; the payload hash is not re-interpreted here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqTail {
    pub payload_hash: String,
    pub seqno: Seqno,
    pub sig_id: SigId,
}

/// A voucher's confidence descriptor.
///
/// All fields optional; a descriptor with nothing filled in carries no
/// statement at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username_verified_via: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proofs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

impl Confidence {
    /// Whether this descriptor is semantically absent.
    pub fn is_unstated(&self) -> bool {
        *self == Self::default()
    }
}

/// Payload committed by a vouch link.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VouchExpansion {
    pub user: VouchedUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(rename = "vouch_text")]
    pub vouch_texts: Vec<String>,
}

impl VouchExpansion {
    /// Normalize an empty-but-present confidence to absent.
    ///
    /// "No confidence stated" has exactly one representation after this.
    pub fn normalize(&mut self) {
        if self.confidence.as_ref().is_some_and(Confidence::is_unstated) {
            self.confidence = None;
        }
    }
}

/// Payload committed by a reaction link.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReactionExpansion {
    /// The vouch this reaction answers.
    pub sig_id: SigId,
    /// Reaction keyword; mapped case-insensitively to a [`crate::ReactionType`].
    pub reaction: String,
}
