//! Vouch status derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The objective status of a vouch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VouchStatus {
    /// Vouch made, no reaction from the vouchee yet.
    Proposed,
    /// The vouchee accepted the vouch.
    Accepted,
    /// The vouchee rejected the vouch.
    Rejected,
    /// The vouch, or the vouchee's reaction to it, has been revoked.
    Revoked,
}

impl fmt::Display for VouchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VouchStatus::Proposed => "proposed",
            VouchStatus::Accepted => "accepted",
            VouchStatus::Rejected => "rejected",
            VouchStatus::Revoked => "revoked",
        };
        f.write_str(name)
    }
}

/// The vouchee's reaction to a vouch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactionType {
    Accept,
    Reject,
    /// Keyword outside the recognized table. Kept as a typed fact so
    /// status derivation refuses it explicitly instead of defaulting.
    Unrecognized,
}

impl ReactionType {
    /// Map a reaction keyword, case-insensitively.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "accept" => Self::Accept,
            "reject" => Self::Reject,
            _ => Self::Unrecognized,
        }
    }
}

/// Derive a vouch's status from revocation and reaction facts.
///
/// First match wins, and revocation of either link dominates whatever the
/// reaction says. `None` means no rule matched — an unrecognized reaction
/// on unrevoked links — and the caller must fail rather than default.
pub fn resolve_status(
    vouch_revoked: bool,
    reaction_revoked: Option<bool>,
    reaction: Option<ReactionType>,
) -> Option<VouchStatus> {
    match (vouch_revoked, reaction_revoked, reaction) {
        (true, _, _) => Some(VouchStatus::Revoked),
        (_, Some(true), _) => Some(VouchStatus::Revoked),
        (_, _, None) => Some(VouchStatus::Proposed),
        (_, _, Some(ReactionType::Accept)) => Some(VouchStatus::Accepted),
        (_, _, Some(ReactionType::Reject)) => Some(VouchStatus::Rejected),
        (_, _, Some(ReactionType::Unrecognized)) => None,
    }
}
