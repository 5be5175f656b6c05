//! Expansion commitment hash type.

use crate::IdParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The 32-byte hash a chain link commits to for its out-of-band expansion.
///
/// The expansion payload itself travels separately and must re-hash to
/// this value before anything in it is trusted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpansionHash([u8; 32]);

impl ExpansionHash {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for ExpansionHash {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|source| IdParseError {
            kind: "expansion hash",
            source,
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for ExpansionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExpansionHash({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ExpansionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for ExpansionHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for ExpansionHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
