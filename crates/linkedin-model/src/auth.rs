//! Access token used to sign API calls.

use libs::chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bearer token obtained out of band (the OAuth flow is not handled here).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// An access token that can be provided in subsequent calls
    pub access_token: String,
    /// When the token stops being valid, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Token {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Check if the token is expired. A token without a known expiry is
    /// considered valid.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.map_or(false, |expiration| Utc::now() >= expiration)
    }

    /// Value of the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
