//! The client implementation for the reqwest HTTP client, which is async by
//! default.

use super::{media::MediaBody, BaseHttpClient, Headers, Media};

use std::time::Duration;

use libs::log;
use libs::serde_json::Value;
use maybe_async::async_impl;
use reqwest::{Method, RequestBuilder};

/// Default timeout for API calls. Uploads bring their own.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Custom enum that contains all the possible errors that may occur when using
/// [`reqwest`].
#[derive(thiserror::Error, Debug)]
pub enum ReqwestError {
    /// The request couldn't be completed because there was an error when trying
    /// to do so
    #[error("request: {0}")]
    Client(#[from] reqwest::Error),

    /// The request was made, but the server returned an unsuccessful status
    /// code, such as 404 or 503. In some cases, the response may contain a
    /// custom message from LinkedIn with more information.
    #[error("status code {}", reqwest::Response::status(.0))]
    StatusCode(reqwest::Response),
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    /// reqwest needs an instance of its client to perform requests.
    client: reqwest::Client,
}

impl Default for ReqwestClient {
    fn default() -> Self {
        let client = reqwest::ClientBuilder::new()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }
}

impl ReqwestClient {
    /// A client whose connect and request timeouts are both `timeout`.
    ///
    /// reqwest only knows the connect timeout as a client setting, a single
    /// request can't override it. Transfers that bring their own timeout
    /// thus build a fresh client instead of going through `self.client`, at
    /// the cost of its connection pool.
    fn timeout_client(timeout: Duration) -> Result<reqwest::Client, ReqwestError> {
        reqwest::ClientBuilder::new()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(Into::into)
    }

    async fn request<D>(
        &self,
        client: &reqwest::Client,
        method: Method,
        url: &str,
        headers: Option<&Headers>,
        add_data: D,
    ) -> Result<String, ReqwestError>
    where
        D: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let mut request = client.request(method.clone(), url);

        if let Some(headers) = headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        // Configuring the request for the specific type (get/post/put/delete)
        request = add_data(request);

        log::info!("Making request {} {}", method, url);
        let response = request.send().await?;

        if response.status().is_success() {
            response.text().await.map_err(Into::into)
        } else {
            Err(ReqwestError::StatusCode(response))
        }
    }
}

#[async_impl]
impl BaseHttpClient for ReqwestClient {
    type Error = ReqwestError;

    #[inline]
    async fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error> {
        self.request(&self.client, Method::POST, url, headers, |req| {
            req.json(payload)
        })
        .await
    }

    async fn get_media(&self, url: &str, timeout: Duration) -> Result<Media, Self::Error> {
        let client = Self::timeout_client(timeout)?;

        log::info!("Downloading media {}", url);
        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ReqwestError::StatusCode(response));
        }

        let bytes = response.bytes().await?;
        Ok(Media::from_bytes(bytes))
    }

    async fn post_media(
        &self,
        url: &str,
        headers: Option<&Headers>,
        media: Media,
        timeout: Duration,
    ) -> Result<String, Self::Error> {
        // Not `self.client`: its connect timeout can't be changed per request.
        let client = Self::timeout_client(timeout)?;

        let body = match media.body {
            MediaBody::File(file) => {
                reqwest::Body::from(libs::tokio::fs::File::from_std(file))
            }
            MediaBody::Bytes(bytes) => reqwest::Body::from(bytes),
        };

        self.request(&client, Method::POST, url, headers, |req| req.body(body))
            .await
    }
}
