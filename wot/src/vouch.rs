//! Validated vouch records.

use crate::{Confidence, VouchStatus};
use serde::Serialize;
use weft_chain::UserVersion;
use weft_types::{SigId, Timestamp};

/// A vouch that survived verification, with its status resolved.
///
/// The only vouch shape exposed outside this crate. An immutable value;
/// it carries no references back to the chains it was checked against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidatedVouch {
    /// Resolved status — never the server's suggestion.
    pub status: VouchStatus,
    /// The voucher's incarnation, as loaded from their own chain.
    pub voucher: UserVersion,
    /// The voucher's statements about the vouchee.
    pub vouch_texts: Vec<String>,
    /// Sig id of the vouch link, usable as a proof reference.
    pub proof: SigId,
    /// Creation time of the vouch link.
    pub vouched_at: Timestamp,
    /// The voucher's confidence, normalized (never empty-but-present).
    pub confidence: Option<Confidence>,
}
