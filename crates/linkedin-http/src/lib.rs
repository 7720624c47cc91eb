//! HTTP compatibility layer for the LinkedIn clients.
//!
//! Exactly one backend is compiled in: `client-reqwest` (async, the default)
//! or `client-ureq` (blocking). Both expose the same [`BaseHttpClient`]
//! interface, re-exported here as [`HttpClient`] and [`HttpError`].

mod common;
mod media;

#[cfg(feature = "client-reqwest")]
mod reqwest;

#[cfg(feature = "client-ureq")]
mod ureq;

pub use common::{BaseHttpClient, Headers};
pub use media::Media;

#[cfg(feature = "client-reqwest")]
pub use self::reqwest::{ReqwestClient as HttpClient, ReqwestError as HttpError};

#[cfg(feature = "client-ureq")]
pub use self::ureq::{UreqClient as HttpClient, UreqError as HttpError};

#[cfg(all(feature = "client-reqwest", feature = "client-ureq"))]
compile_error!(
    "`client-reqwest` and `client-ureq` features cannot both be enabled at \
    the same time, if you want to use `client-ureq` you need to set \
    `default-features = false`"
);

#[cfg(not(any(feature = "client-reqwest", feature = "client-ureq")))]
compile_error!(
    "You have to enable at least one of the available clients with the \
    `client-reqwest` or `client-ureq` features."
);
