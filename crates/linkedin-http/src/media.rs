use std::{fmt, fs::File, io, path::Path};

use libs::bytes::Bytes;

/// A byte stream ready to be uploaded, with its length known up front.
///
/// Files are not read into memory: the handle is handed to the HTTP backend,
/// and closed when the body is dropped. Bytes are shared, not copied.
pub struct Media {
    pub(crate) body: MediaBody,
    len: u64,
}

pub(crate) enum MediaBody {
    File(File),
    Bytes(Bytes),
}

impl Media {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::from_file(File::open(path)?)
    }

    pub fn from_file(file: File) -> io::Result<Self> {
        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "media source is not a regular file",
            ));
        }

        Ok(Self {
            len: metadata.len(),
            body: MediaBody::File(file),
        })
    }

    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        Self {
            len: bytes.len() as u64,
            body: MediaBody::Bytes(bytes),
        }
    }

    /// Total size of the body in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.body {
            MediaBody::File(_) => "file",
            MediaBody::Bytes(_) => "bytes",
        };
        f.debug_struct("Media")
            .field("kind", &kind)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_bytes_length() {
        let media = Media::from_bytes(b"hello".to_vec());
        assert_eq!(media.len(), 5);
        assert!(!media.is_empty());
        assert!(Media::from_bytes(Vec::<u8>::new()).is_empty());
    }

    #[test]
    fn test_bytes_are_shared() {
        let shared = Bytes::from(vec![7u8; 64]);
        let media = Media::from_bytes(shared.clone());
        match media.body {
            MediaBody::Bytes(body) => assert_eq!(body.as_ptr(), shared.as_ptr()),
            MediaBody::File(_) => panic!("expected a bytes body"),
        }
    }

    #[test]
    fn test_file_length_from_metadata() {
        let path = std::env::temp_dir().join("linkedin-http-media-length.bin");
        let mut file = File::create(&path).unwrap();
        file.write_all(&[0u8; 1234]).unwrap();
        drop(file);

        let media = Media::open(&path).unwrap();
        assert_eq!(media.len(), 1234);
        drop(media);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_open_missing_file() {
        let err = Media::open("/definitely/not/here.png").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_open_directory_is_rejected() {
        let err = Media::open(std::env::temp_dir()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
