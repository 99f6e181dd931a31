//! Repository payload decoder

use serde::Deserialize;

use crate::codec::{DecodableModel, parse_checked, require_non_empty};
use crate::error::DecodeError;
use crate::model::{Repository, RepositoryProperties};

/// License name substituted when the payload carries a null license node.
const UNKNOWN_LICENSE: &str = "unknown";

#[derive(Debug, Deserialize)]
struct RepositoryWire {
    owner: ActorWire,
    name: String,
    description: String,
    #[serde(default)]
    license: Option<LicenseWire>,
    fork: bool,
    #[serde(default)]
    parent: Option<ParentWire>,
    allow_forking: bool,
    stargazers_count: u32,
    forks_count: u32,
    private: bool,
    archived: bool,
    disabled: bool,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    topics: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ActorWire {
    login: String,
}

#[derive(Debug, Deserialize)]
struct LicenseWire {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ParentWire {
    owner: ActorWire,
}

impl DecodableModel for Repository {
    fn decode(json: &str) -> Result<Self, DecodeError> {
        let value = parse_checked(json)?;
        let wire: RepositoryWire = serde_json::from_value(value)
            .map_err(|e| DecodeError::MalformedPayload(e.to_string()))?;
        require_non_empty("owner.login", &wire.owner.login)?;
        require_non_empty("name", &wire.name)?;

        // A fork must name its parent; a non-fork never carries one.
        let parent = if wire.fork {
            match wire.parent {
                Some(parent) => Some(parent.owner.login),
                None => {
                    return Err(DecodeError::MalformedPayload(
                        "fork without a resolvable parent.owner.login".to_string(),
                    ));
                }
            }
        } else {
            None
        };

        Ok(Repository {
            owner: wire.owner.login,
            name: wire.name,
            description: wire.description,
            license: wire
                .license
                .map_or_else(|| UNKNOWN_LICENSE.to_string(), |license| license.name),
            properties: RepositoryProperties {
                forked: wire.fork,
                parent,
                allow_forking: wire.allow_forking,
                public: !wire.private,
                archived: wire.archived,
                disabled: wire.disabled,
                stars: wire.stargazers_count,
                forks: wire.forks_count,
                language: wire.language,
                topics: wire.topics.unwrap_or_default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_payload() -> serde_json::Value {
        json!({
            "owner": {"login": "octocat"},
            "name": "hello-world",
            "description": "My first repository",
            "license": {"name": "MIT License"},
            "fork": false,
            "allow_forking": true,
            "stargazers_count": 80,
            "forks_count": 9,
            "private": false,
            "archived": false,
            "disabled": false,
            "language": "Rust",
            "topics": ["octocat", "api"]
        })
    }

    #[test]
    fn decodes_a_full_payload() {
        let decoded = Repository::decode(&base_payload().to_string()).unwrap();

        assert_eq!(
            decoded,
            Repository {
                owner: "octocat".to_string(),
                name: "hello-world".to_string(),
                description: "My first repository".to_string(),
                license: "MIT License".to_string(),
                properties: RepositoryProperties {
                    forked: false,
                    parent: None,
                    allow_forking: true,
                    public: true,
                    archived: false,
                    disabled: false,
                    stars: 80,
                    forks: 9,
                    language: Some("Rust".to_string()),
                    topics: vec!["octocat".to_string(), "api".to_string()],
                },
            }
        );
        assert_eq!(decoded.full_name(), "octocat/hello-world");
    }

    #[test]
    fn null_license_defaults_to_unknown() {
        let mut payload = base_payload();
        payload["license"] = json!(null);

        let decoded = Repository::decode(&payload.to_string()).unwrap();
        assert_eq!(decoded.license, "unknown");
    }

    #[test]
    fn missing_license_key_defaults_to_unknown() {
        let mut payload = base_payload();
        payload.as_object_mut().unwrap().remove("license");

        let decoded = Repository::decode(&payload.to_string()).unwrap();
        assert_eq!(decoded.license, "unknown");
    }

    #[test]
    fn fork_resolves_parent_owner_login() {
        let mut payload = base_payload();
        payload["fork"] = json!(true);
        payload["parent"] = json!({"owner": {"login": "upstream-org"}});

        let decoded = Repository::decode(&payload.to_string()).unwrap();
        assert!(decoded.properties.forked);
        assert_eq!(decoded.properties.parent.as_deref(), Some("upstream-org"));
    }

    #[test]
    fn fork_without_parent_is_malformed() {
        let mut payload = base_payload();
        payload["fork"] = json!(true);

        let result = Repository::decode(&payload.to_string());
        assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
    }

    #[test]
    fn parent_of_a_non_fork_is_ignored() {
        let mut payload = base_payload();
        payload["parent"] = json!({"owner": {"login": "upstream-org"}});

        let decoded = Repository::decode(&payload.to_string()).unwrap();
        assert_eq!(decoded.properties.parent, None);
    }

    #[test]
    fn missing_topics_decode_to_an_empty_list() {
        let mut payload = base_payload();
        payload.as_object_mut().unwrap().remove("topics");
        payload["language"] = json!(null);

        let decoded = Repository::decode(&payload.to_string()).unwrap();
        assert!(decoded.properties.topics.is_empty());
        assert_eq!(decoded.properties.language, None);
    }

    #[test]
    fn message_payload_is_not_found() {
        let result = Repository::decode(r#"{"message": "Not Found"}"#);
        assert!(matches!(result, Err(DecodeError::NotFound)));
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let mut payload = base_payload();
        payload.as_object_mut().unwrap().remove("name");

        let result = Repository::decode(&payload.to_string());
        assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
    }

    #[test]
    fn empty_owner_login_is_malformed() {
        let mut payload = base_payload();
        payload["owner"]["login"] = json!("");

        let result = Repository::decode(&payload.to_string());
        assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
    }

    #[test]
    fn wrongly_typed_field_is_malformed() {
        let mut payload = base_payload();
        payload["stargazers_count"] = json!("eighty");

        let result = Repository::decode(&payload.to_string());
        assert!(matches!(result, Err(DecodeError::MalformedPayload(_))));
    }
}
