//! UGC post (share) request objects.
//!
//! A share body is [`ShareOptions`] merged over [`share_defaults`]: every
//! top-level key the caller sets replaces the default one wholesale, nothing
//! is merged deeper than that.

use crate::{ModelError, Urn};

use libs::serde_json::{self, json, Map, Value};
use serde::{Deserialize, Serialize};

pub const LIFECYCLE_STATE: &str = "lifecycleState";
pub const VISIBILITY: &str = "visibility";
pub const MEMBER_NETWORK_VISIBILITY: &str = "com.linkedin.ugc.MemberNetworkVisibility";

/// Builds a `visibility` value for member network visibility, e.g. `PUBLIC`
/// or `CONNECTIONS`.
pub fn member_network_visibility(value: &str) -> Value {
    json!({ MEMBER_NETWORK_VISIBILITY: value })
}

/// Fields every share starts with.
pub fn share_defaults() -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(LIFECYCLE_STATE.to_owned(), json!(LifecycleState::Published));
    body.insert(VISIBILITY.to_owned(), member_network_visibility("PUBLIC"));
    body
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Draft,
    Published,
}

/// Caller-provided share fields. Unset fields fall back to the defaults,
/// `extra` carries anything the typed fields don't cover.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareOptions {
    /// URN of the posting entity. LinkedIn rejects shares without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<LifecycleState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_content: Option<SpecificContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShareOptions {
    pub fn new(author: &Urn) -> Self {
        Self {
            author: Some(author.to_string()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content_mut().share_commentary = Text::new(text);
        self
    }

    /// Attaches an uploaded asset, see `upload_asset`.
    #[must_use]
    pub fn image(mut self, asset: impl Into<String>, title: Option<&str>) -> Self {
        let content = self.content_mut();
        content.share_media_category = ShareMediaCategory::Image;
        content.media.push(ShareMedia {
            media: Some(asset.into()),
            title: title.map(Text::new),
            ..Default::default()
        });
        self
    }

    #[must_use]
    pub fn article(mut self, url: impl Into<String>, title: Option<&str>) -> Self {
        let content = self.content_mut();
        content.share_media_category = ShareMediaCategory::Article;
        content.media.push(ShareMedia {
            original_url: Some(url.into()),
            title: title.map(Text::new),
            ..Default::default()
        });
        self
    }

    #[must_use]
    pub fn lifecycle_state(mut self, state: LifecycleState) -> Self {
        self.lifecycle_state = Some(state);
        self
    }

    #[must_use]
    pub fn visibility(mut self, visibility: Value) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Sets an arbitrary top-level field.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// The request body: these options merged over [`share_defaults`].
    pub fn to_body(&self) -> Result<Map<String, Value>, ModelError> {
        let mut body = share_defaults();
        if let Value::Object(fields) = serde_json::to_value(self)? {
            body.extend(fields);
        }
        Ok(body)
    }

    fn content_mut(&mut self) -> &mut ShareContent {
        &mut self
            .specific_content
            .get_or_insert_with(SpecificContent::default)
            .share_content
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    pub share_commentary: Text,
    pub share_media_category: ShareMediaCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<ShareMedia>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareMediaCategory {
    #[default]
    None,
    Article,
    Image,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShareMedia {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Text>,
    /// Asset URN, for image shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    /// Link, for article shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Text>,
}

impl Default for ShareMedia {
    fn default() -> Self {
        Self {
            status: "READY".to_owned(),
            description: None,
            media: None,
            original_url: None,
            title: None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
