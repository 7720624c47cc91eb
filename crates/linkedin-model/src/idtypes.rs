//! LinkedIn identifiers.
//!
//! Every entity in the v2 API is addressed by a URN of the form
//! `urn:li:<type>:<id>`, e.g. `urn:li:person:8675309` or
//! `urn:li:digitalmediaAsset:C5522AQGXGgw`. The id part may itself contain
//! colons (compound keys such as `urn:li:share:(urn:li:person:1,2)`), so only
//! the first two separators after the prefix are significant.

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use std::{fmt, str::FromStr};

const URN_PREFIX: &str = "urn:li:";

/// URN parsing error
///
/// See also [`Urn`] for details.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, Error)]
pub enum IdError {
    /// URN prefix is not `urn:li:`.
    InvalidPrefix,
    /// URN can't be split into type and id parts.
    InvalidFormat,
    /// URN has an empty or invalid type name, or the type doesn't match the
    /// one expected in a given context.
    InvalidType,
    /// Id is empty or contains whitespace.
    InvalidId,
}

/// The main interface for an ID.
pub trait Id {
    /// Returns the inner object ID, which is guaranteed to be valid for its
    /// type.
    fn id(&self) -> &str;

    /// Returns the full URN, e.g. `urn:li:person:8675309`.
    fn uri(&self) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Urn {
    kind: String,
    id: String,
}

impl Urn {
    pub fn new(kind: &str, id: &str) -> Result<Self, IdError> {
        if kind.is_empty() || !kind.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(IdError::InvalidType);
        }
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(IdError::InvalidId);
        }

        Ok(Self {
            kind: kind.to_owned(),
            id: id.to_owned(),
        })
    }

    /// A member, the usual author and owner for personal shares.
    pub fn person(id: &str) -> Result<Self, IdError> {
        Self::new("person", id)
    }

    /// A company page.
    pub fn organization(id: &str) -> Result<Self, IdError> {
        Self::new("organization", id)
    }

    /// The entity type, e.g. `person`.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl Id for Urn {
    fn id(&self) -> &str {
        &self.id
    }

    fn uri(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Urn {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix(URN_PREFIX).ok_or(IdError::InvalidPrefix)?;
        let (kind, id) = rest.split_once(':').ok_or(IdError::InvalidFormat)?;
        Self::new(kind, id)
    }
}

impl TryFrom<String> for Urn {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Urn> for String {
    fn from(urn: Urn) -> Self {
        urn.to_string()
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}:{}", URN_PREFIX, self.kind, self.id)
    }
}
