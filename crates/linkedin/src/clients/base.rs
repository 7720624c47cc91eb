use crate::{
    headers,
    http::{BaseHttpClient, Headers, HttpClient, HttpError},
    Config, Token,
};

use std::fmt;

use libs::log;
use libs::serde_json::Value;
use maybe_async::maybe_async;

/// This trait implements the plumbing shared by every endpoint: URL building,
/// default headers and the raw API call.
#[maybe_async]
pub trait BaseClient
where
    Self: Send + Sync + Default + Clone + fmt::Debug,
{
    fn get_config(&self) -> &Config;
    fn get_http(&self) -> &HttpClient;
    fn get_token(&self) -> Option<&Token>;

    /// If it's a relative URL like "ugcPosts", the API prefix is prepended
    /// to it. Absolute URLs are returned as is.
    fn api_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_owned();
        }

        let mut base = self.get_config().api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        base + url.trim_start_matches('/')
    }

    /// Headers attached to every request: the bearer token when there is
    /// one, the Rest.li protocol version and `x-li-format: json`.
    fn default_headers(&self) -> Headers {
        let mut headers = Headers::new();
        if let Some(token) = self.get_token() {
            if token.is_expired() {
                log::warn!("Sending a request with an expired access token");
            }
            headers.insert(headers::AUTHORIZATION.to_owned(), token.bearer());
        }
        headers.insert(
            headers::RESTLI_PROTOCOL_VERSION.to_owned(),
            self.get_config().restli_protocol_version.clone(),
        );
        headers.insert(headers::LI_FORMAT.to_owned(), "json".to_owned());
        headers
    }

    /// Posts `payload` as JSON to an API endpoint. The HTTP error is handed
    /// back untouched so that each endpoint decides how to report it.
    async fn api_post(&self, url: &str, payload: &Value) -> Result<String, HttpError> {
        let url = self.api_url(url);
        let mut headers = self.default_headers();
        headers.insert(
            headers::CONTENT_TYPE.to_owned(),
            headers::APPLICATION_JSON.to_owned(),
        );
        self.get_http().post(&url, Some(&headers), payload).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{clients::BaseClient, Config, LinkedIn, Token};

    #[test]
    fn test_api_url() {
        let linkedin = LinkedIn::default();
        assert_eq!(
            linkedin.api_url("ugcPosts"),
            "https://api.linkedin.com/v2/ugcPosts"
        );
        assert_eq!(
            linkedin.api_url("/assets?action=registerUpload"),
            "https://api.linkedin.com/v2/assets?action=registerUpload"
        );
        assert_eq!(
            linkedin.api_url("https://upload.example/x"),
            "https://upload.example/x"
        );
    }

    #[test]
    fn test_api_url_base_without_slash() {
        let config = Config {
            api_base_url: "http://localhost:1234/v2".to_owned(),
            ..Default::default()
        };
        let linkedin = LinkedIn::with_config(Token::new("t"), config);
        assert_eq!(
            linkedin.api_url("ugcPosts"),
            "http://localhost:1234/v2/ugcPosts"
        );
    }

    #[test]
    fn test_default_headers() {
        let headers = LinkedIn::new(Token::new("secret")).default_headers();
        assert_eq!(headers["authorization"], "Bearer secret");
        assert_eq!(headers["x-li-format"], "json");
        assert_eq!(headers["x-restli-protocol-version"], "2.0.0");

        let anonymous = LinkedIn::default().default_headers();
        assert!(!anonymous.contains_key("authorization"));
    }
}
