//! The weft server API client.
//!
//! Endpoints:
//! - `GET /wot/get` (optional `username` query) — candidate vouches
//!   addressed to a user, as `{"webOfTrust": [...]}`.
//! - `GET /user/lookup` (`uid` or `username` query) — an identity record
//!   plus its chain links.

use crate::ClientConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use weft_chain::{ChainLink, SigChain, User};
use weft_types::{KeyId, Seqno, UserId, Username};
use weft_wot::{CandidateVouch, Session, UserLoader, VouchSource, WotError};

/// HTTP client for a weft server.
///
/// Holds a reusable connection pool; cheap to clone per call site via the
/// inner `reqwest::Client`.
pub struct WotApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// Raw response from `GET /wot/get`.
#[derive(Debug, Deserialize)]
struct WotResponse {
    #[serde(rename = "webOfTrust")]
    vouches: Vec<CandidateVouch>,
}

/// Raw response from `GET /user/lookup`.
#[derive(Debug, Deserialize)]
struct UserResponse {
    username: Username,
    uid: UserId,
    eldest_kid: KeyId,
    eldest_seqno: Seqno,
    chain: Vec<ChainLink>,
}

impl UserResponse {
    /// Assemble the loaded identity, re-validating chain structure.
    fn into_user(self) -> Result<User, WotError> {
        let chain = SigChain::from_links(self.uid, self.chain)
            .map_err(|e| WotError::UserLoad(format!("invalid chain for {}: {e}", self.username)))?;
        User::new(
            self.username,
            self.uid,
            self.eldest_kid,
            self.eldest_seqno,
            chain,
        )
        .map_err(|e| WotError::UserLoad(e.to_string()))
    }
}

impl WotApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET {base_url}/{path}?{query}` with the session's bearer token,
    /// decoded as JSON. Failures come back as a description string; the
    /// caller decides which pass-through error they are.
    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, String> {
        let url = format!("{}/{path}", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(describe)?;

        if !response.status().is_success() {
            return Err(format!("HTTP status {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("failed to parse response: {e}"))
    }
}

fn describe(e: reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {e}")
    } else if e.is_connect() {
        format!("connection failed: {e}")
    } else {
        format!("request failed: {e}")
    }
}

#[async_trait]
impl VouchSource for WotApiClient {
    async fn fetch_candidates(
        &self,
        session: &Session,
        username: Option<&Username>,
    ) -> Result<Vec<CandidateVouch>, WotError> {
        let mut query = Vec::new();
        if let Some(username) = username {
            query.push(("username", username.to_string()));
        }
        let response: WotResponse = self
            .get_json(session, "wot/get", &query)
            .await
            .map_err(WotError::Transport)?;
        Ok(response.vouches)
    }
}

#[async_trait]
impl UserLoader for WotApiClient {
    async fn load_self(&self, session: &Session) -> Result<User, WotError> {
        self.load_by_uid(session, session.uid()).await
    }

    async fn load_by_uid(&self, session: &Session, uid: UserId) -> Result<User, WotError> {
        let response: UserResponse = self
            .get_json(session, "user/lookup", &[("uid", uid.to_string())])
            .await
            .map_err(WotError::UserLoad)?;
        response.into_user()
    }

    async fn load_by_username(
        &self,
        session: &Session,
        username: &Username,
    ) -> Result<User, WotError> {
        let response: UserResponse = self
            .get_json(
                session,
                "user/lookup",
                &[("username", username.to_string())],
            )
            .await
            .map_err(WotError::UserLoad)?;
        response.into_user()
    }
}
