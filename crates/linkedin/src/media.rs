use crate::{http::Media, ClientError, ClientResult};

use std::{
    io,
    path::{Path, PathBuf},
};

use libs::{bytes::Bytes, url::Url};

/// Where the bytes of an upload come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaSource {
    /// A local file, streamed when uploading.
    Path(PathBuf),
    /// Bytes already in memory. Cloning the source shares them.
    Bytes(Bytes),
    /// An `http(s)` URL, downloaded right before the upload.
    Url(Url),
}

impl MediaSource {
    /// Accepts a plain path, a `file://` URL or an `http(s)://` URL.
    pub fn from_url(source: &str) -> ClientResult<Self> {
        if source.starts_with("file:") {
            let url = Url::parse(source)?;
            let path = url.to_file_path().map_err(|()| {
                ClientError::Resource(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("not a local file url: {}", source),
                ))
            })?;
            return Ok(Self::Path(path));
        }

        if let Some((scheme, _)) = source.split_once("://") {
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") {
                return Ok(Self::Url(Url::parse(source)?));
            }
            return Err(ClientError::Resource(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("unsupported media source scheme: {}", scheme),
            )));
        }

        Ok(Self::Path(PathBuf::from(source)))
    }

    /// Opens a local source and measures it. The handle is released when
    /// the returned body is dropped.
    ///
    /// URLs can't be opened here, the client downloads them with its own
    /// HTTP backend.
    pub(crate) fn open(&self) -> io::Result<Media> {
        match self {
            Self::Path(path) => Media::open(path),
            Self::Bytes(bytes) => Ok(Media::from_bytes(bytes.clone())),
            Self::Url(url) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("{} has to be downloaded", url),
            )),
        }
    }
}

impl From<PathBuf> for MediaSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for MediaSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for MediaSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes.into())
    }
}

impl From<Bytes> for MediaSource {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Url> for MediaSource {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}
