//! The vouch verification pipeline and batch fetch entry points.

use crate::{
    resolve_status, CandidateVouch, LinkRole, ReactionExpansion, ReactionType, Session,
    UserLoader, ValidatedVouch, VouchExpansion, VouchSource, VouchedUser, WotError,
};
use tracing::debug;
use weft_chain::{LinkKind, User};
use weft_crypto::{extract_expansion, ExpansionError};
use weft_types::Username;

/// Verifies server-reported vouches against both parties' sig chains.
///
/// Generic over its backend so the whole pipeline runs against either the
/// HTTP client or an in-memory double.
pub struct WotService<B> {
    backend: B,
}

impl<B: VouchSource + UserLoader> WotService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch and verify every vouch addressed to the session owner.
    pub async fn fetch_for_self(&self, session: &Session) -> Result<Vec<ValidatedVouch>, WotError> {
        let candidates = self.backend.fetch_candidates(session, None).await?;
        debug!(count = candidates.len(), "server returned vouch candidates");
        let me = self.backend.load_self(session).await?;
        self.verify_batch(session, &candidates, &me).await
    }

    /// Fetch and verify every vouch addressed to `username`.
    pub async fn fetch_for_user(
        &self,
        session: &Session,
        username: &Username,
    ) -> Result<Vec<ValidatedVouch>, WotError> {
        let candidates = self.backend.fetch_candidates(session, Some(username)).await?;
        debug!(
            count = candidates.len(),
            user = %username,
            "server returned vouch candidates"
        );
        let vouchee = self.backend.load_by_username(session, username).await?;
        self.verify_batch(session, &candidates, &vouchee).await
    }

    /// Verify candidates in server order. The first failure aborts the
    /// batch; there is no partial result.
    async fn verify_batch(
        &self,
        session: &Session,
        candidates: &[CandidateVouch],
        vouchee: &User,
    ) -> Result<Vec<ValidatedVouch>, WotError> {
        let mut verified = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            verified.push(self.verify(session, candidate, vouchee).await?);
        }
        debug!(
            count = verified.len(),
            vouchee = %vouchee.username(),
            "verified vouch batch"
        );
        Ok(verified)
    }

    /// Verify one candidate end to end and resolve its status.
    ///
    /// Pure given the candidate, the vouchee snapshot, and the loader's
    /// responses: the same inputs always produce the same record.
    pub async fn verify(
        &self,
        session: &Session,
        candidate: &CandidateVouch,
        vouchee: &User,
    ) -> Result<ValidatedVouch, WotError> {
        // The vouch must exist, as a vouch link, in the voucher's own chain.
        let voucher = self.backend.load_by_uid(session, candidate.voucher).await?;
        if voucher.eldest_seqno() != candidate.voucher_eldest_seqno {
            return Err(WotError::IdentityMismatch {
                field: "voucher eldest seqno",
                expected: voucher.eldest_seqno().to_string(),
                found: candidate.voucher_eldest_seqno.to_string(),
            });
        }
        let vouch_link = voucher
            .chain()
            .resolve(&candidate.vouch_sig_id, LinkKind::Vouch)
            .map_err(|source| WotError::Link {
                role: LinkRole::Vouch,
                source,
            })?;

        // Only the payload the link committed to gets parsed.
        let raw = extract_expansion(&vouch_link.expansion, &candidate.vouch_expansion).map_err(
            |source| WotError::Expansion {
                role: LinkRole::Vouch,
                sig_id: vouch_link.sig_id,
                source,
            },
        )?;
        let mut expansion: VouchExpansion =
            serde_json::from_slice(&raw).map_err(|source| WotError::Schema {
                role: LinkRole::Vouch,
                source,
            })?;
        expansion.normalize();

        if let Err(err) = assert_vouch_is_for(&expansion.user, vouchee) {
            debug!(user = ?expansion.user, "vouch identity assertion does not match the vouchee");
            return Err(err);
        }

        let mut reaction_link = None;
        let mut reaction = None;
        if let Some(reaction_sig_id) = &candidate.reaction_sig_id {
            // The reaction lives in the vouchee's own chain.
            let link = vouchee
                .chain()
                .resolve(reaction_sig_id, LinkKind::Reaction)
                .map_err(|source| WotError::Link {
                    role: LinkRole::Reaction,
                    source,
                })?;
            let payload =
                candidate
                    .reaction_expansion
                    .as_deref()
                    .ok_or(WotError::Expansion {
                        role: LinkRole::Reaction,
                        sig_id: *reaction_sig_id,
                        source: ExpansionError::MissingPayload,
                    })?;
            let raw = extract_expansion(&link.expansion, payload).map_err(|source| {
                WotError::Expansion {
                    role: LinkRole::Reaction,
                    sig_id: *reaction_sig_id,
                    source,
                }
            })?;
            let parsed: ReactionExpansion =
                serde_json::from_slice(&raw).map_err(|source| WotError::Schema {
                    role: LinkRole::Reaction,
                    source,
                })?;
            // A reaction binds to exactly one vouch: all 32 bytes must match.
            if parsed.sig_id != vouch_link.sig_id {
                return Err(WotError::ReactionBinding {
                    reaction_sig: *reaction_sig_id,
                    referenced: parsed.sig_id,
                    vouch_sig: vouch_link.sig_id,
                });
            }
            reaction = Some(ReactionType::from_keyword(&parsed.reaction));
            reaction_link = Some(link);
        }

        let status = resolve_status(
            vouch_link.revoked,
            reaction_link.map(|link| link.revoked),
            reaction,
        )
        .ok_or_else(|| WotError::UndeterminedStatus {
            voucher: voucher.username().clone(),
        })?;

        Ok(ValidatedVouch {
            status,
            voucher: voucher.version(),
            vouch_texts: expansion.vouch_texts,
            proof: candidate.vouch_sig_id,
            vouched_at: vouch_link.ctime,
            confidence: expansion.confidence,
        })
    }
}

/// The vouch's identity assertion must name exactly the vouchee.
///
/// Any disagreement means the vouch was signed for someone else and is
/// being replayed against this user.
fn assert_vouch_is_for(vouched: &VouchedUser, vouchee: &User) -> Result<(), WotError> {
    if vouched.username != *vouchee.username() {
        return Err(WotError::IdentityMismatch {
            field: "username",
            expected: vouchee.username().to_string(),
            found: vouched.username.to_string(),
        });
    }
    if vouched.uid != vouchee.uid() {
        return Err(WotError::IdentityMismatch {
            field: "user id",
            expected: vouchee.uid().to_string(),
            found: vouched.uid.to_string(),
        });
    }
    if vouched.eldest.kid != vouchee.eldest_kid() {
        return Err(WotError::IdentityMismatch {
            field: "eldest key id",
            expected: vouchee.eldest_kid().to_string(),
            found: vouched.eldest.kid.to_string(),
        });
    }
    Ok(())
}
