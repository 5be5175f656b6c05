use proptest::prelude::*;

use weft_types::{ExpansionHash, KeyId, Seqno, SigId, Timestamp, UserId, Username};

proptest! {
    /// UserId roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn user_id_roundtrip(bytes in prop::array::uniform16(0u8..)) {
        let uid = UserId::new(bytes);
        prop_assert_eq!(uid.as_bytes(), &bytes);
    }

    /// SigId hex roundtrip: Display -> FromStr reproduces the id.
    #[test]
    fn sig_id_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let sig = SigId::new(bytes);
        let parsed: SigId = sig.to_string().parse().unwrap();
        prop_assert_eq!(parsed, sig);
    }

    /// KeyId hex roundtrip: Display -> FromStr reproduces the id.
    #[test]
    fn key_id_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let kid = KeyId::new(bytes);
        let parsed: KeyId = kid.to_string().parse().unwrap();
        prop_assert_eq!(parsed, kid);
        prop_assert_eq!(parsed.as_bytes(), &bytes);
    }

    /// ExpansionHash hex roundtrip: Display -> FromStr reproduces the hash.
    #[test]
    fn expansion_hash_hex_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = ExpansionHash::new(bytes);
        let parsed: ExpansionHash = hash.to_string().parse().unwrap();
        prop_assert_eq!(parsed, hash);
    }

    /// SigId JSON roundtrip: ids travel as quoted hex strings.
    #[test]
    fn sig_id_json_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let sig = SigId::new(bytes);
        let encoded = serde_json::to_string(&sig).unwrap();
        prop_assert_eq!(&encoded, &format!("\"{sig}\""));
        let decoded: SigId = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, sig);
    }

    /// UserId JSON roundtrip.
    #[test]
    fn user_id_json_roundtrip(bytes in prop::array::uniform16(0u8..)) {
        let uid = UserId::new(bytes);
        let encoded = serde_json::to_string(&uid).unwrap();
        let decoded: UserId = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, uid);
    }

    /// Seqno ordering matches the underlying integer ordering.
    #[test]
    fn seqno_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        prop_assert_eq!(Seqno::new(a) <= Seqno::new(b), a <= b);
        prop_assert_eq!(Seqno::new(a) == Seqno::new(b), a == b);
    }

    /// Timestamp ordering matches the underlying integer ordering.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
        prop_assert_eq!(ta.as_secs(), a);
    }

    /// Seqno keeps the value it was built from.
    #[test]
    fn seqno_roundtrip(n in 0u64..u64::MAX) {
        prop_assert_eq!(Seqno::new(n).value(), n);
    }

    /// Strings that are not 64 hex characters never parse as a SigId.
    #[test]
    fn sig_id_rejects_wrong_length(s in "[0-9a-f]{0,63}") {
        prop_assert!(s.parse::<SigId>().is_err());
    }
}

#[test]
fn sig_id_rejects_non_hex() {
    let s = "zz".repeat(32);
    assert!(s.parse::<SigId>().is_err());
}

#[test]
fn seqno_next_increments() {
    assert_eq!(Seqno::FIRST.next(), Seqno::new(2));
}

#[test]
fn username_displays_exactly() {
    let name = Username::from("ada");
    assert_eq!(name.as_str(), "ada");
    assert_eq!(name.to_string(), "ada");
    assert_ne!(name, Username::from("Ada"));
}
