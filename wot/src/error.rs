//! The verification error taxonomy.

use std::fmt;
use thiserror::Error;
use weft_chain::ChainError;
use weft_crypto::ExpansionError;
use weft_types::{SigId, Username};

/// Which stage of the vouch pipeline an error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkRole {
    /// The vouch link, looked up in the voucher's chain.
    Vouch,
    /// The reaction link, looked up in the vouchee's chain.
    Reaction,
}

impl fmt::Display for LinkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkRole::Vouch => "vouch",
            LinkRole::Reaction => "reaction",
        };
        f.write_str(name)
    }
}

/// Why a candidate vouch was rejected, or why a batch failed.
///
/// Every variant is terminal for the candidate that produced it and,
/// under fail-fast batching, for the whole batch. Nothing here is
/// retried internally.
#[derive(Debug, Error)]
pub enum WotError {
    /// The named link could not be resolved (absent, or the wrong kind).
    #[error("{role} link lookup failed: {source}")]
    Link {
        role: LinkRole,
        #[source]
        source: ChainError,
    },

    /// The candidate's payload is not the one the link committed to.
    #[error("{role} expansion for {sig_id} rejected: {source}")]
    Expansion {
        role: LinkRole,
        sig_id: SigId,
        #[source]
        source: ExpansionError,
    },

    /// The committed payload does not parse as the expected schema.
    #[error("{role} expansion does not match the expected schema: {source}")]
    Schema {
        role: LinkRole,
        #[source]
        source: serde_json::Error,
    },

    /// The vouch's identity assertion names someone else.
    #[error("vouched {field} mismatch: expected {expected}, found {found}")]
    IdentityMismatch {
        field: &'static str,
        expected: String,
        found: String,
    },

    /// The reaction answers a different vouch.
    #[error("reaction {reaction_sig} references vouch {referenced}, not {vouch_sig}")]
    ReactionBinding {
        reaction_sig: SigId,
        referenced: SigId,
        vouch_sig: SigId,
    },

    /// No status rule matched the verified facts.
    #[error("could not determine the status of the vouch from {voucher}")]
    UndeterminedStatus { voucher: Username },

    /// Transport failure fetching candidates; opaque to the verifier.
    #[error("transport error: {0}")]
    Transport(String),

    /// Failure loading an identity; opaque to the verifier.
    #[error("error loading user: {0}")]
    UserLoad(String),
}
