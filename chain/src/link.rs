//! Chain links — entries in an identity's append-only signed history.

use serde::{Deserialize, Serialize};
use std::fmt;
use weft_types::{ExpansionHash, Seqno, SigId, Timestamp, UserId};

/// What kind of statement a chain link makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// First link of a chain, establishing the eldest key.
    Eldest,
    /// A vouch for another identity.
    Vouch,
    /// A reaction to a vouch received from another identity.
    Reaction,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkKind::Eldest => "eldest",
            LinkKind::Vouch => "vouch",
            LinkKind::Reaction => "reaction",
        };
        f.write_str(name)
    }
}

/// One immutable entry in an identity's signed history.
///
/// Links arrive already signature-checked. Everything here is fixed at
/// creation except `revoked`, which is derived from later links during
/// chain construction and only ever moves false → true.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainLink {
    /// The identity this link belongs to.
    pub owner: UserId,
    /// What kind of statement the link makes.
    pub kind: LinkKind,
    /// Position in the owner's chain.
    pub seqno: Seqno,
    /// Id of the signature sealing this link; unique system-wide.
    pub sig_id: SigId,
    /// When the link was created.
    pub ctime: Timestamp,
    /// Commitment to the link's out-of-band expansion payload.
    pub expansion: ExpansionHash,
    /// Earlier links of the same chain revoked by this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub revokes: Vec<SigId>,
    /// Whether a later link has revoked this one.
    #[serde(default)]
    pub revoked: bool,
}
