//! Server-reported vouch candidates.
//!
//! Everything in this module is untrusted input: the server proposes,
//! the verifier disposes.

use crate::VouchStatus;
use serde::{Deserialize, Serialize};
use weft_types::{Seqno, SigId, UserId};

/// One vouch as reported by the server, pending verification.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CandidateVouch {
    /// Who the server says made the vouch.
    pub voucher: UserId,

    /// The voucher's claimed eldest seqno at vouch time.
    pub voucher_eldest_seqno: Seqno,

    /// Sig id of the vouch link in the voucher's chain.
    #[serde(rename = "vouch_sig")]
    pub vouch_sig_id: SigId,

    /// Raw expansion payload for the vouch link.
    pub vouch_expansion: String,

    /// Sig id of the vouchee's reaction link, if the vouchee reacted.
    #[serde(rename = "reaction_sig", default, skip_serializing_if = "Option::is_none")]
    pub reaction_sig_id: Option<SigId>,

    /// Raw expansion payload for the reaction link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_expansion: Option<String>,

    /// The status the server suggests. Advisory only — the verifier
    /// recomputes status from the chains and never reads this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VouchStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_candidate_parses_from_wire_json() {
        let json = format!(
            r#"{{
                "voucher": "{}",
                "voucher_eldest_seqno": 1,
                "vouch_sig": "{}",
                "vouch_expansion": "{{}}",
                "reaction_sig": "{}",
                "reaction_expansion": "{{}}",
                "status": "accepted"
            }}"#,
            "ab".repeat(16),
            "01".repeat(32),
            "02".repeat(32),
        );
        let candidate: CandidateVouch = serde_json::from_str(&json).unwrap();
        assert_eq!(candidate.voucher, UserId::new([0xab; 16]));
        assert_eq!(candidate.vouch_sig_id, SigId::new([1; 32]));
        assert_eq!(candidate.reaction_sig_id, Some(SigId::new([2; 32])));
        assert_eq!(candidate.status, Some(VouchStatus::Accepted));
    }

    #[test]
    fn reaction_fields_and_status_are_optional() {
        let json = format!(
            r#"{{
                "voucher": "{}",
                "voucher_eldest_seqno": 4,
                "vouch_sig": "{}",
                "vouch_expansion": "payload"
            }}"#,
            "cd".repeat(16),
            "03".repeat(32),
        );
        let candidate: CandidateVouch = serde_json::from_str(&json).unwrap();
        assert_eq!(candidate.voucher_eldest_seqno, Seqno::new(4));
        assert!(candidate.reaction_sig_id.is_none());
        assert!(candidate.reaction_expansion.is_none());
        assert!(candidate.status.is_none());
    }
}
