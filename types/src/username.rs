//! Username type.
//!
//! Usernames are compared exactly as the server reports them; no case
//! folding or normalization happens on this side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user's handle on the identity server.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Username {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}
