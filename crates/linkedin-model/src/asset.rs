//! Asset registration, the first half of a media upload.

use crate::{ModelError, Urn};

use libs::log;
use libs::serde_json::Value;
use serde::{Deserialize, Serialize};

pub const FEEDSHARE_IMAGE_RECIPE: &str = "urn:li:digitalmediaRecipe:feedshare-image";
pub const USER_GENERATED_CONTENT: &str = "urn:li:userGeneratedContent";

/// Body of `POST assets?action=registerUpload`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUpload {
    pub register_upload_request: RegisterUploadRequest,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUploadRequest {
    pub recipes: Vec<String>,
    pub owner: String,
    pub service_relationships: Vec<ServiceRelationship>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRelationship {
    pub relationship_type: String,
    pub identifier: String,
}

impl RegisterUpload {
    /// A feed image owned by `owner`. Nothing else about the registration is
    /// configurable.
    pub fn feedshare_image(owner: &Urn) -> Self {
        Self {
            register_upload_request: RegisterUploadRequest {
                recipes: vec![FEEDSHARE_IMAGE_RECIPE.to_owned()],
                owner: owner.to_string(),
                service_relationships: vec![ServiceRelationship {
                    relationship_type: "OWNER".to_owned(),
                    identifier: USER_GENERATED_CONTENT.to_owned(),
                }],
            },
        }
    }
}

/// Where to send the bytes, and the asset they will become.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadTarget {
    /// Absolute, pre-signed URL.
    pub upload_url: String,
    /// URN of the registered asset, e.g. `urn:li:digitalmediaAsset:C123`.
    pub asset: String,
}

impl UploadTarget {
    /// Reads a registration response.
    ///
    /// LinkedIn nests the payload under `value`; a bare payload is accepted as
    /// well. `uploadMechanism` is keyed by the mechanism's own URN-like name,
    /// so the key is ignored and exactly one entry is expected. Should more
    /// than one show up, the first one in response order is used.
    pub fn from_response(response: &Value) -> Result<Self, ModelError> {
        let root = match response.get("value") {
            Some(value @ Value::Object(_)) => value,
            _ => response,
        };

        let mechanisms = root
            .get("uploadMechanism")
            .and_then(Value::as_object)
            .ok_or_else(|| shape("missing `uploadMechanism`"))?;
        if mechanisms.len() > 1 {
            log::warn!(
                "Got {} upload mechanisms, using the first one",
                mechanisms.len()
            );
        }
        let (name, mechanism) = mechanisms
            .iter()
            .next()
            .ok_or_else(|| shape("`uploadMechanism` is empty"))?;
        log::debug!("Using upload mechanism {}", name);

        let upload_url = mechanism
            .get("uploadUrl")
            .and_then(Value::as_str)
            .ok_or_else(|| shape("missing `uploadUrl`"))?;
        let asset = root
            .get("asset")
            .and_then(Value::as_str)
            .ok_or_else(|| shape("missing `asset`"))?;

        Ok(Self {
            upload_url: upload_url.to_owned(),
            asset: asset.to_owned(),
        })
    }
}

fn shape(msg: &str) -> ModelError {
    ModelError::UnexpectedShape(msg.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    use libs::serde_json::{self, json};
    use pretty_assertions::assert_eq;

    const MECHANISM: &str = "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest";

    #[test]
    fn test_register_body() {
        let owner = Urn::person("8675309").unwrap();
        let body = serde_json::to_value(RegisterUpload::feedshare_image(&owner)).unwrap();
        assert_eq!(
            body,
            json!({
                "registerUploadRequest": {
                    "recipes": ["urn:li:digitalmediaRecipe:feedshare-image"],
                    "owner": "urn:li:person:8675309",
                    "serviceRelationships": [{
                        "relationshipType": "OWNER",
                        "identifier": "urn:li:userGeneratedContent"
                    }]
                }
            })
        );
    }

    #[test]
    fn test_target_from_bare_response() {
        let response = json!({
            "uploadMechanism": { MECHANISM: { "uploadUrl": "https://up.example/x" } },
            "asset": "urn:li:digitalmediaAsset:C123"
        });
        let target = UploadTarget::from_response(&response).unwrap();
        assert_eq!(target.upload_url, "https://up.example/x");
        assert_eq!(target.asset, "urn:li:digitalmediaAsset:C123");
    }

    #[test]
    fn test_target_from_wrapped_response() {
        let response = json!({
            "value": {
                "uploadMechanism": {
                    MECHANISM: { "headers": {}, "uploadUrl": "https://up.example/y" }
                },
                "mediaArtifact": "urn:li:digitalmediaMediaArtifact:(x)",
                "asset": "urn:li:digitalmediaAsset:C456"
            }
        });
        let target = UploadTarget::from_response(&response).unwrap();
        assert_eq!(target.upload_url, "https://up.example/y");
        assert_eq!(target.asset, "urn:li:digitalmediaAsset:C456");
    }

    #[test]
    fn test_first_mechanism_in_response_order() {
        let raw = r#"{
            "uploadMechanism": {
                "z.second.in.alphabet": { "uploadUrl": "https://up.example/first" },
                "a.first.in.alphabet": { "uploadUrl": "https://up.example/second" }
            },
            "asset": "urn:li:digitalmediaAsset:C1"
        }"#;
        let response: Value = serde_json::from_str(raw).unwrap();
        let target = UploadTarget::from_response(&response).unwrap();
        assert_eq!(target.upload_url, "https://up.example/first");
    }

    #[test]
    fn test_malformed_responses() {
        let cases = [
            json!({ "asset": "urn:li:digitalmediaAsset:C1" }),
            json!({ "uploadMechanism": {}, "asset": "urn:li:digitalmediaAsset:C1" }),
            json!({ "uploadMechanism": { MECHANISM: {} }, "asset": "urn:li:digitalmediaAsset:C1" }),
            json!({ "uploadMechanism": { MECHANISM: { "uploadUrl": "https://up.example/x" } } }),
            json!({ "uploadMechanism": { MECHANISM: { "uploadUrl": 7 } }, "asset": "a" }),
            json!([]),
        ];
        for response in cases {
            let err = UploadTarget::from_response(&response).unwrap_err();
            assert!(
                matches!(err, ModelError::UnexpectedShape(_)),
                "{response} gave {err:?}"
            );
        }
    }
}
