use crate::{
    clients::{BaseClient, IntegrationsClient},
    http::HttpClient,
    Config, Token,
};

use std::env;

use maybe_async::maybe_async;

/// Client handle carrying the access token, the configuration and the HTTP
/// client. Cloning it is cheap and clones share the connection pool.
#[derive(Clone, Debug, Default)]
pub struct LinkedIn {
    pub token: Option<Token>,
    pub config: Config,
    pub(crate) http: HttpClient,
}

/// This client has access to the base methods.
#[maybe_async]
impl BaseClient for LinkedIn {
    fn get_http(&self) -> &HttpClient {
        &self.http
    }

    fn get_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

/// The token is expected to carry the `w_member_social` scope (or
/// `w_organization_social` for company pages).
#[maybe_async]
impl IntegrationsClient for LinkedIn {}

impl LinkedIn {
    /// Builds a new [`LinkedIn`] client from an already generated token.
    #[must_use]
    pub fn new(token: Token) -> Self {
        Self {
            token: Some(token),
            ..Default::default()
        }
    }

    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// client.
    #[must_use]
    pub fn with_config(token: Token, config: Config) -> Self {
        Self {
            token: Some(token),
            config,
            ..Default::default()
        }
    }

    /// Reads the token from `LINKEDIN_ACCESS_TOKEN` and the configuration
    /// with [`Config::from_env`]. You can optionally activate the `env-file`
    /// feature in order to read these variables from a `.env` file.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        let token = Token::new(env::var("LINKEDIN_ACCESS_TOKEN").ok()?);
        Some(Self::with_config(token, Config::from_env()))
    }
}
