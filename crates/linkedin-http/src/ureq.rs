//! The client implementation for the ureq HTTP client, which is blocking.

use super::{media::MediaBody, BaseHttpClient, Headers, Media};

use std::{
    io::{self, Read},
    time::Duration,
};

use libs::log;
use libs::serde_json::Value;
use maybe_async::sync_impl;
use ureq::{Request, Response};

/// Default timeout for API calls. Uploads bring their own.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Custom enum that contains all the possible errors that may occur when using
/// [`ureq`].
#[derive(thiserror::Error, Debug)]
pub enum UreqError {
    /// The request couldn't be completed because there was an error when trying
    /// to do so
    #[error("transport: {0}")]
    Transport(#[from] ureq::Transport),

    /// There was an error when trying to decode the response
    #[error("I/O: {0}")]
    Io(#[from] io::Error),

    /// The request was made, but the server returned an unsuccessful status
    /// code, such as 404 or 503. In some cases, the response may contain a
    /// custom message from LinkedIn with more information.
    #[error("status code {}", Response::status(.0))]
    StatusCode(Response),
}

#[derive(Debug, Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
}

impl Default for UreqClient {
    fn default() -> Self {
        let agent = ureq::AgentBuilder::new()
            .try_proxy_from_env(true)
            .timeout(DEFAULT_TIMEOUT)
            .build();
        Self { agent }
    }
}

impl UreqClient {
    /// An agent whose connect and request timeouts are both `timeout`.
    fn timeout_agent(timeout: Duration) -> ureq::Agent {
        ureq::AgentBuilder::new()
            .try_proxy_from_env(true)
            .timeout_connect(timeout)
            .timeout(timeout)
            .build()
    }

    /// The request handling in ureq is split in three parts:
    ///
    /// * The initial request (POST) with the headers: `request`
    /// * Sending the body: `send_request`
    /// * Reading the response, which is shared by every method in this module.
    fn request<D>(
        &self,
        mut request: Request,
        headers: Option<&Headers>,
        send_request: D,
    ) -> Result<String, UreqError>
    where
        D: FnOnce(Request) -> Result<Response, ureq::Error>,
    {
        if let Some(headers) = headers {
            for (key, val) in headers.iter() {
                request = request.set(key, val);
            }
        }

        log::info!("Making request {} {}", request.method(), request.url());
        match send_request(request) {
            Ok(response) => response.into_string().map_err(Into::into),
            Err(ureq::Error::Status(_, response)) => Err(UreqError::StatusCode(response)),
            Err(ureq::Error::Transport(transport)) => Err(UreqError::Transport(transport)),
        }
    }
}

#[sync_impl]
impl BaseHttpClient for UreqClient {
    type Error = UreqError;

    #[inline]
    fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error> {
        let request = self.agent.post(url);
        let sender = |req: Request| req.send_json(payload);
        self.request(request, headers, sender)
    }

    fn get_media(&self, url: &str, timeout: Duration) -> Result<Media, Self::Error> {
        log::info!("Downloading media {}", url);
        let response = match Self::timeout_agent(timeout).get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => return Err(UreqError::StatusCode(response)),
            Err(ureq::Error::Transport(transport)) => return Err(UreqError::Transport(transport)),
        };

        let capacity = response
            .header("content-length")
            .and_then(|len| len.parse().ok())
            .unwrap_or(0);
        let mut bytes = Vec::with_capacity(capacity);
        response.into_reader().read_to_end(&mut bytes)?;
        Ok(Media::from_bytes(bytes))
    }

    fn post_media(
        &self,
        url: &str,
        headers: Option<&Headers>,
        media: Media,
        timeout: Duration,
    ) -> Result<String, Self::Error> {
        let request = Self::timeout_agent(timeout).post(url);

        let sender = move |req: Request| match media.body {
            MediaBody::File(file) => req.send(file),
            MediaBody::Bytes(bytes) => req.send_bytes(&bytes),
        };
        self.request(request, headers, sender)
    }
}
