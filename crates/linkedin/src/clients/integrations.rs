use crate::{
    clients::{convert_result, BaseClient},
    endpoints, headers,
    http::{BaseHttpClient, Headers, Media},
    model::{RegisterUpload, ShareOptions, UploadTarget, Urn},
    ClientError, ClientResult, MediaSource,
};

use std::{io, time::Duration};

use libs::log;
use libs::serde_json::{self, Map, Value};
use maybe_async::maybe_async;

/// The Share on LinkedIn endpoints.
///
/// LinkedIn's v2 API is loose about its own documentation: the request
/// shapes here are the ones the live API accepts, which isn't always what
/// the reference pages say.
#[maybe_async]
pub trait IntegrationsClient: BaseClient {
    /// Creates a UGC post.
    ///
    /// `options` are merged over the defaults (`lifecycleState: PUBLISHED`,
    /// public member network visibility), see [`ShareOptions::to_body`].
    /// `author` is not checked locally, LinkedIn rejects shares without it.
    ///
    /// Returns the response body, or an empty object when LinkedIn answers
    /// without one.
    ///
    /// [Reference](https://learn.microsoft.com/en-us/linkedin/consumer/integrations/self-serve/share-on-linkedin)
    async fn create_share(&self, options: &ShareOptions) -> ClientResult<Value> {
        let body = Value::Object(options.to_body()?);

        log::info!("Creating share");
        let result = self.api_post(endpoints::UGC_POSTS, &body).await?;
        if result.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        convert_result(&result)
    }

    /// Registers a feed image owned by `owner`, the first half of
    /// [`Self::upload_asset`].
    async fn register_upload(&self, owner: &Urn) -> ClientResult<UploadTarget> {
        let body = serde_json::to_value(RegisterUpload::feedshare_image(owner))?;

        log::debug!("Registering upload for {}", owner);
        let result = self
            .api_post(endpoints::REGISTER_UPLOAD, &body)
            .await
            .map_err(|err| ClientError::RegistrationFailed(Box::new(err)))?;

        let response: Value = convert_result(&result)
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))?;
        UploadTarget::from_response(&response)
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))
    }

    /// Opens `source` for uploading. URLs are downloaded through the
    /// client's HTTP backend within `timeout`; any failure to get at the
    /// bytes is a [`ClientError::Resource`].
    async fn open_media(&self, source: &MediaSource, timeout: Duration) -> ClientResult<Media> {
        match source {
            MediaSource::Url(url) => {
                log::debug!("Downloading media source {}", url);
                self.get_http()
                    .get_media(url.as_str(), timeout)
                    .await
                    .map_err(|err| {
                        ClientError::Resource(io::Error::new(
                            io::ErrorKind::Other,
                            format!("downloading {}: {}", url, err),
                        ))
                    })
            }
            source => source.open().map_err(ClientError::Resource),
        }
    }

    /// Uploads an image for `owner` and returns the asset URN, ready to be
    /// attached with [`ShareOptions::image`].
    ///
    /// The upload is registered first, then the bytes are streamed to the URL
    /// LinkedIn hands back. A URL source is downloaded after registering, so
    /// its length is the downloaded size. `timeout` bounds both connecting and sending the
    /// bytes, [`Config::upload_timeout`](crate::Config::upload_timeout) when
    /// `None`. Nothing is retried: the first failing step ends the call.
    ///
    /// [Reference](https://learn.microsoft.com/en-us/linkedin/consumer/integrations/self-serve/share-on-linkedin#create-an-image-share)
    async fn upload_asset(
        &self,
        source: &MediaSource,
        owner: &Urn,
        timeout: Option<Duration>,
    ) -> ClientResult<String> {
        log::info!("Uploading asset for {}", owner);
        let target = self.register_upload(owner).await?;

        let timeout = timeout.unwrap_or(self.get_config().upload_timeout);
        let media = self.open_media(source, timeout).await?;
        let headers = upload_headers(self.default_headers(), media.len());

        log::debug!(
            "Sending {} bytes for {} (timeout {:?})",
            media.len(),
            target.asset,
            timeout
        );
        self.get_http()
            .post_media(&target.upload_url, Some(&headers), media, timeout)
            .await
            .map_err(|err| ClientError::UploadFailed(Box::new(err)))?;

        Ok(target.asset)
    }
}

/// The upload URL rejects `x-li-format`, so it's taken off the defaults.
pub(crate) fn upload_headers(defaults: Headers, len: u64) -> Headers {
    let mut upload = defaults;
    upload.remove(headers::LI_FORMAT);
    upload.insert(headers::ACCEPT.to_owned(), "*/*".to_owned());
    upload.insert(headers::CONTENT_LENGTH.to_owned(), len.to_string());
    upload.insert(
        headers::CONTENT_TYPE.to_owned(),
        headers::OCTET_STREAM.to_owned(),
    );
    upload
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{LinkedIn, Token};

    #[test]
    fn test_upload_headers() {
        let defaults = LinkedIn::new(Token::new("secret")).default_headers();
        let headers = upload_headers(defaults, 4096);

        assert!(!headers.contains_key("x-li-format"));
        assert_eq!(headers["accept"], "*/*");
        assert_eq!(headers["content-length"], "4096");
        assert_eq!(headers["content-type"], "application/octet-stream");
        assert_eq!(headers["authorization"], "Bearer secret");
    }
}
