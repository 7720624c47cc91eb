use crate::Media;

use std::{collections::HashMap, fmt, time::Duration};

use libs::serde_json::Value;
use maybe_async::maybe_async;

pub type Headers = HashMap<String, String>;

/// This trait represents the interface to be implemented for an HTTP client,
/// which is kept separate from the LinkedIn client for cleaner code. Thus, it
/// also requires other basic traits that are needed for the LinkedIn client.
///
/// A non-2xx response is an error of the client's `Error` type, the body of a
/// successful response is returned as-is.
#[maybe_async]
pub trait BaseHttpClient: Send + Sync + Default + Clone + fmt::Debug {
    type Error;

    /// Sends `payload` as a JSON body.
    async fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error>;

    /// Downloads the body at `url` so it can be uploaded elsewhere. No
    /// headers are sent, the source host never sees the API credentials.
    /// `timeout` bounds connecting and the whole download.
    async fn get_media(&self, url: &str, timeout: Duration) -> Result<Media, Self::Error>;

    /// Streams `media` as the raw request body. `timeout` bounds both the
    /// connection and the whole request, replacing the client's default.
    async fn post_media(
        &self,
        url: &str,
        headers: Option<&Headers>,
        media: Media,
        timeout: Duration,
    ) -> Result<String, Self::Error>;
}
