//! Client for LinkedIn's v2 Integrations (share on LinkedIn) API.
//!
//! Two endpoints are covered: creating a UGC post with
//! [`create_share`](clients::IntegrationsClient::create_share) and uploading
//! an image asset with
//! [`upload_asset`](clients::IntegrationsClient::upload_asset).
//!
//! ```no_run
//! use linkedin::{prelude::*, LinkedIn, MediaSource, Token};
//! use linkedin::model::{ShareOptions, Urn};
//!
//! # async fn run() -> linkedin::ClientResult<()> {
//! let linkedin = LinkedIn::new(Token::new("access-token"));
//! let me = Urn::person("8675309")?;
//!
//! let asset = linkedin
//!     .upload_asset(&MediaSource::from_url("./cat.png")?, &me, None)
//!     .await?;
//! let share = ShareOptions::new(&me).text("Look").image(asset, None);
//! linkedin.create_share(&share).await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod clients;
mod media;

pub use linkedin_http as http;
pub use linkedin_model as model;

pub use client::LinkedIn;
pub use media::MediaSource;
pub use model::Token;

use crate::http::HttpError;

use std::{env, time::Duration};

use libs::log;
use thiserror::Error;

pub mod prelude {
    pub use crate::clients::{BaseClient, IntegrationsClient};
    pub use crate::model::idtypes::Id;
}

/// Common headers as constants.
pub(crate) mod headers {
    pub const ACCEPT: &str = "accept";
    pub const AUTHORIZATION: &str = "authorization";
    pub const CONTENT_LENGTH: &str = "content-length";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const LI_FORMAT: &str = "x-li-format";
    pub const RESTLI_PROTOCOL_VERSION: &str = "x-restli-protocol-version";

    pub const APPLICATION_JSON: &str = "application/json";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

pub(crate) mod endpoints {
    pub const UGC_POSTS: &str = "ugcPosts";
    pub const REGISTER_UPLOAD: &str = "assets?action=registerUpload";
}

/// Possible errors returned from the `linkedin` client.
///
/// `Http`, `RegistrationFailed` and `UploadFailed` all carry a transport
/// failure (network error or non-2xx status), see
/// [`ClientError::is_transport`]. Which one tells where it happened.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("json parse error: {0}")]
    ParseJson(#[from] libs::serde_json::Error),

    #[error("url parse error: {0}")]
    ParseUrl(#[from] libs::url::ParseError),

    // Note that this type is boxed because its size might be very large in
    // comparison to the rest. For more information visit:
    // https://rust-lang.github.io/rust-clippy/master/index.html#large_enum_variant
    #[error("http error: {0}")]
    Http(Box<HttpError>),

    /// The asset registration request failed.
    #[error("asset registration failed: {0}")]
    RegistrationFailed(Box<HttpError>),

    /// The registration went through but its response lacks the upload URL
    /// or the asset.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The byte upload to the registered URL failed.
    #[error("asset upload failed: {0}")]
    UploadFailed(Box<HttpError>),

    /// The media source couldn't be opened, read or downloaded.
    #[error("media source error: {0}")]
    Resource(#[source] std::io::Error),

    #[error("model error: {0}")]
    Model(#[from] model::ModelError),
}

impl ClientError {
    /// Whether the request itself failed, as opposed to a local error or a
    /// response that broke the API contract.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::RegistrationFailed(_) | Self::UploadFailed(_)
        )
    }
}

// The conversion has to be done manually because it's in a `Box<T>`
impl From<HttpError> for ClientError {
    fn from(err: HttpError) -> Self {
        Self::Http(Box::new(err))
    }
}

impl From<model::IdError> for ClientError {
    fn from(err: model::IdError) -> Self {
        Self::Model(err.into())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com/v2/";
pub const DEFAULT_RESTLI_PROTOCOL_VERSION: &str = "2.0.0";
/// Uploads may be large, so they get far longer than regular API calls.
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);

/// Struct to configure the LinkedIn client.
#[derive(Debug, Clone)]
pub struct Config {
    /// The LinkedIn API prefix, [`DEFAULT_API_BASE_URL`] by default.
    pub api_base_url: String,

    /// Sent as `X-Restli-Protocol-Version` on API calls,
    /// [`DEFAULT_RESTLI_PROTOCOL_VERSION`] by default.
    pub restli_protocol_version: String,

    /// Connect and request timeout for asset uploads when the caller doesn't
    /// pass one, [`DEFAULT_UPLOAD_TIMEOUT`] by default.
    pub upload_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            restli_protocol_version: String::from(DEFAULT_RESTLI_PROTOCOL_VERSION),
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
        }
    }
}

impl Config {
    /// Defaults, overridden by `LINKEDIN_API_BASE_URL` and
    /// `LINKEDIN_UPLOAD_TIMEOUT` (seconds) when set. You can optionally
    /// activate the `env-file` feature in order to read these variables from
    /// a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        let mut config = Self::default();
        if let Ok(url) = env::var("LINKEDIN_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Ok(secs) = env::var("LINKEDIN_UPLOAD_TIMEOUT") {
            match secs.parse() {
                Ok(secs) => config.upload_timeout = Duration::from_secs(secs),
                Err(_) => log::warn!("Ignoring invalid LINKEDIN_UPLOAD_TIMEOUT {:?}", secs),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.linkedin.com/v2/");
        assert_eq!(config.upload_timeout, Duration::from_secs(300));
        assert_eq!(config.restli_protocol_version, "2.0.0");
    }

    #[test]
    fn test_error_classes() {
        let malformed = ClientError::MalformedResponse("missing `asset`".to_owned());
        assert!(!malformed.is_transport());
        assert_eq!(malformed.to_string(), "malformed response: missing `asset`");

        let resource = ClientError::Resource(std::io::ErrorKind::NotFound.into());
        assert!(!resource.is_transport());
    }
}
