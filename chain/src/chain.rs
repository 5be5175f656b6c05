//! Append-only signed histories and link resolution.

use crate::{ChainError, ChainLink, LinkKind};
use std::collections::HashMap;
use weft_types::{Seqno, SigId, UserId};

/// A fully loaded identity history.
///
/// Construction validates structure (single owner, dense seqnos, unique
/// sig ids) and applies revocations, so a `SigChain` in hand is always
/// internally consistent. Signature verification happened upstream.
#[derive(Clone, Debug)]
pub struct SigChain {
    owner: UserId,
    links: Vec<ChainLink>,
    by_sig_id: HashMap<SigId, usize>,
}

impl SigChain {
    /// Assemble a chain from loader-supplied links.
    ///
    /// Revocations are applied here: a link may revoke any number of
    /// strictly earlier links of the same chain. Targets that are unknown
    /// or not earlier reject the whole chain.
    pub fn from_links(owner: UserId, mut links: Vec<ChainLink>) -> Result<Self, ChainError> {
        let mut by_sig_id = HashMap::with_capacity(links.len());
        for (idx, link) in links.iter().enumerate() {
            if link.owner != owner {
                return Err(ChainError::ForeignLink {
                    sig_id: link.sig_id,
                    owner: link.owner,
                    expected: owner,
                });
            }
            let expected = Seqno::new(idx as u64 + 1);
            if link.seqno != expected {
                return Err(ChainError::OutOfOrder {
                    sig_id: link.sig_id,
                    seqno: link.seqno,
                    expected,
                });
            }
            if by_sig_id.insert(link.sig_id, idx).is_some() {
                return Err(ChainError::DuplicateSigId { sig_id: link.sig_id });
            }
        }

        for idx in 0..links.len() {
            let revokes = links[idx].revokes.clone();
            for target in revokes {
                let target_idx = *by_sig_id
                    .get(&target)
                    .ok_or(ChainError::UnknownRevocationTarget { sig_id: target })?;
                if target_idx >= idx {
                    return Err(ChainError::ForwardRevocation { sig_id: target });
                }
                links[target_idx].revoked = true;
            }
        }

        Ok(Self {
            owner,
            links,
            by_sig_id,
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    /// The most recent link, if any.
    pub fn tail(&self) -> Option<&ChainLink> {
        self.links.last()
    }

    /// Look up a link by signature id, without a kind check.
    pub fn link(&self, sig_id: &SigId) -> Option<&ChainLink> {
        self.by_sig_id.get(sig_id).map(|&idx| &self.links[idx])
    }

    /// Resolve a link by signature id, requiring it to be of `expected` kind.
    pub fn resolve(&self, sig_id: &SigId, expected: LinkKind) -> Result<&ChainLink, ChainError> {
        let link = self
            .link(sig_id)
            .ok_or(ChainError::LinkNotFound { sig_id: *sig_id })?;
        if link.kind != expected {
            return Err(ChainError::WrongLinkType {
                sig_id: *sig_id,
                expected,
                found: link.kind,
            });
        }
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_types::{ExpansionHash, Timestamp};

    fn uid(n: u8) -> UserId {
        UserId::new([n; 16])
    }

    fn sig(n: u8) -> SigId {
        SigId::new([n; 32])
    }

    fn link(owner: UserId, kind: LinkKind, seqno: u64, sig_byte: u8) -> ChainLink {
        ChainLink {
            owner,
            kind,
            seqno: Seqno::new(seqno),
            sig_id: sig(sig_byte),
            ctime: Timestamp::new(1_600_000_000 + seqno),
            expansion: ExpansionHash::new([sig_byte; 32]),
            revokes: Vec::new(),
            revoked: false,
        }
    }

    fn three_link_chain() -> SigChain {
        let owner = uid(1);
        SigChain::from_links(
            owner,
            vec![
                link(owner, LinkKind::Eldest, 1, 10),
                link(owner, LinkKind::Vouch, 2, 11),
                link(owner, LinkKind::Reaction, 3, 12),
            ],
        )
        .unwrap()
    }

    #[test]
    fn resolve_finds_link_of_expected_kind() {
        let chain = three_link_chain();
        let found = chain.resolve(&sig(11), LinkKind::Vouch).unwrap();
        assert_eq!(found.seqno, Seqno::new(2));
    }

    #[test]
    fn resolve_missing_link_fails() {
        let chain = three_link_chain();
        let err = chain.resolve(&sig(99), LinkKind::Vouch).unwrap_err();
        assert!(matches!(err, ChainError::LinkNotFound { .. }));
    }

    #[test]
    fn resolve_wrong_kind_fails() {
        let chain = three_link_chain();
        let err = chain.resolve(&sig(12), LinkKind::Vouch).unwrap_err();
        assert!(matches!(
            err,
            ChainError::WrongLinkType {
                expected: LinkKind::Vouch,
                found: LinkKind::Reaction,
                ..
            }
        ));
    }

    #[test]
    fn revocation_marks_earlier_link() {
        let owner = uid(1);
        let mut revoker = link(owner, LinkKind::Vouch, 3, 12);
        revoker.revokes = vec![sig(11)];
        let chain = SigChain::from_links(
            owner,
            vec![
                link(owner, LinkKind::Eldest, 1, 10),
                link(owner, LinkKind::Vouch, 2, 11),
                revoker,
            ],
        )
        .unwrap();
        assert!(chain.link(&sig(11)).unwrap().revoked);
        assert!(!chain.link(&sig(10)).unwrap().revoked);
        assert!(!chain.link(&sig(12)).unwrap().revoked);
        assert_eq!(chain.links().iter().filter(|l| l.revoked).count(), 1);
    }

    #[test]
    fn revocation_of_unknown_target_rejects_chain() {
        let owner = uid(1);
        let mut revoker = link(owner, LinkKind::Vouch, 2, 11);
        revoker.revokes = vec![sig(99)];
        let err =
            SigChain::from_links(owner, vec![link(owner, LinkKind::Eldest, 1, 10), revoker])
                .unwrap_err();
        assert!(matches!(err, ChainError::UnknownRevocationTarget { .. }));
    }

    #[test]
    fn self_revocation_rejects_chain() {
        let owner = uid(1);
        let mut revoker = link(owner, LinkKind::Vouch, 2, 11);
        revoker.revokes = vec![sig(11)];
        let err =
            SigChain::from_links(owner, vec![link(owner, LinkKind::Eldest, 1, 10), revoker])
                .unwrap_err();
        assert!(matches!(err, ChainError::ForwardRevocation { .. }));
    }

    #[test]
    fn foreign_link_rejects_chain() {
        let owner = uid(1);
        let err = SigChain::from_links(
            owner,
            vec![
                link(owner, LinkKind::Eldest, 1, 10),
                link(uid(2), LinkKind::Vouch, 2, 11),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ChainError::ForeignLink { .. }));
    }

    #[test]
    fn sparse_seqnos_reject_chain() {
        let owner = uid(1);
        let err = SigChain::from_links(
            owner,
            vec![
                link(owner, LinkKind::Eldest, 1, 10),
                link(owner, LinkKind::Vouch, 3, 11),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ChainError::OutOfOrder { .. }));
    }

    #[test]
    fn duplicate_sig_id_rejects_chain() {
        let owner = uid(1);
        let err = SigChain::from_links(
            owner,
            vec![
                link(owner, LinkKind::Eldest, 1, 10),
                link(owner, LinkKind::Vouch, 2, 10),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ChainError::DuplicateSigId { .. }));
    }

    #[test]
    fn empty_chain_is_valid() {
        let chain = SigChain::from_links(uid(1), Vec::new()).unwrap();
        assert!(chain.is_empty());
        assert!(chain.tail().is_none());
    }

    #[test]
    fn link_wire_roundtrip() {
        let l = link(uid(1), LinkKind::Vouch, 1, 42);
        let json = serde_json::to_string(&l).unwrap();
        let back: ChainLink = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sig_id, l.sig_id);
        assert_eq!(back.kind, l.kind);
        assert_eq!(back.expansion, l.expansion);
    }
}
