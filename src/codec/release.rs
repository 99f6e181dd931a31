//! Release payload decoder

use serde::Deserialize;

use crate::codec::{DecodableModel, parse_checked, require_non_empty};
use crate::error::DecodeError;
use crate::model::{Release, ReleaseAsset};

#[derive(Debug, Deserialize)]
struct ReleaseWire {
    author: ActorWire,
    tag_name: String,
    name: String,
    assets: Vec<AssetWire>,
}

#[derive(Debug, Deserialize)]
struct ActorWire {
    login: String,
}

#[derive(Debug, Deserialize)]
struct AssetWire {
    name: String,
    browser_download_url: String,
}

impl DecodableModel for Release {
    fn decode(json: &str) -> Result<Self, DecodeError> {
        let value = parse_checked(json)?;
        let wire: ReleaseWire = serde_json::from_value(value)
            .map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;
        require_non_empty("author.login", &wire.author.login)?;
        require_non_empty("tag_name", &wire.tag_name)?;
        require_non_empty("name", &wire.name)?;

        // Array order is significant: assets are addressed by index later.
        let assets = wire
            .assets
            .into_iter()
            .map(|asset| ReleaseAsset {
                file_name: asset.name,
                download_url: asset.browser_download_url,
            })
            .collect();

        Ok(Release {
            author: wire.author.login,
            tag: wire.tag_name,
            name: wire.name,
            assets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_payload() -> serde_json::Value {
        json!({
            "author": {"login": "octocat"},
            "tag_name": "v1.2.3",
            "name": "v1.2.3 - Bug fixes",
            "assets": [
                {"name": "a.zip", "browser_download_url": "https://example.com/u1"},
                {"name": "b.zip", "browser_download_url": "https://example.com/u2"}
            ]
        })
    }

    #[test]
    fn decodes_a_full_payload() {
        let decoded = Release::decode(&base_payload().to_string()).unwrap();

        assert_eq!(
            decoded,
            Release {
                author: "octocat".to_string(),
                tag: "v1.2.3".to_string(),
                name: "v1.2.3 - Bug fixes".to_string(),
                assets: vec![
                    ReleaseAsset {
                        file_name: "a.zip".to_string(),
                        download_url: "https://example.com/u1".to_string(),
                    },
                    ReleaseAsset {
                        file_name: "b.zip".to_string(),
                        download_url: "https://example.com/u2".to_string(),
                    },
                ],
            }
        );
    }

    #[test]
    fn asset_order_follows_the_payload() {
        let decoded = Release::decode(&base_payload().to_string()).unwrap();

        assert_eq!(decoded.assets[0].file_name, "a.zip");
        assert_eq!(decoded.assets[0].download_url, "https://example.com/u1");
        assert_eq!(decoded.assets[1].file_name, "b.zip");
        assert_eq!(decoded.assets[1].download_url, "https://example.com/u2");
    }

    #[test]
    fn release_without_assets_decodes_to_an_empty_list() {
        let mut payload = base_payload();
        payload["assets"] = json!([]);

        let decoded = Release::decode(&payload.to_string()).unwrap();
        assert!(decoded.assets.is_empty());
    }

    #[test]
    fn message_payload_is_not_found() {
        let result = Release::decode(r#"{"message": "Not Found"}"#);
        assert!(matches!(result, Err(DecodeError::NotFound)));
    }

    #[test]
    fn missing_tag_name_is_malformed() {
        let mut payload = base_payload();
        payload.as_object_mut().unwrap().remove("tag_name");

        let result = Release::decode(&payload.to_string());
        assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
    }

    #[test]
    fn empty_author_login_is_malformed() {
        let mut payload = base_payload();
        payload["author"]["login"] = json!("");

        let result = Release::decode(&payload.to_string());
        assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
    }

    #[test]
    fn asset_missing_download_url_is_malformed() {
        let mut payload = base_payload();
        payload["assets"][0].as_object_mut().unwrap().remove("browser_download_url");

        let result = Release::decode(&payload.to_string());
        assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
    }
}
