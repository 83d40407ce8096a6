//! Read-only views of the host's identity provider data.
//!
//! The resolver never talks to a realm directly. It only needs:
//! - an identity provider's alias and raw configuration values
//!   ([`IdentityProviderModelLike`])
//! - the mapper records attached to an alias
//!   ([`IdentityProviderMapperRepositoryLike`])
//!
//! Listing identity providers ([`IdentityProviderRepositoryLike`]) is only
//! needed by realm-wide discovery.

mod realm;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::error::CommonError;

pub use realm::RealmDefinition;

/// Config key of a hardcoded attribute mapper naming the attribute it sets.
pub const MAPPER_ATTRIBUTE_KEY: &str = "attribute";
/// Config key of a hardcoded attribute mapper holding the attribute value.
pub const MAPPER_ATTRIBUTE_VALUE_KEY: &str = "attribute.value";

pub trait IdentityProviderModelLike {
    fn alias(&self) -> &str;

    fn config_value(&self, key: &str) -> Option<&str>;
}

pub trait IdentityProviderMapperRepositoryLike {
    /// Mapper records attached to the identity provider with `alias`, in the
    /// order the host stores them.
    fn find_mappers_by_alias(
        &self,
        alias: &str,
    ) -> Result<Vec<IdentityProviderMapper>, CommonError>;
}

pub trait IdentityProviderRepositoryLike {
    fn list_identity_providers(&self) -> Result<Vec<IdentityProvider>, CommonError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProvider {
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub config: HashMap<String, String>,
}

fn default_enabled() -> bool {
    true
}

impl IdentityProvider {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            enabled: true,
            ..Default::default()
        }
    }

    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

impl IdentityProviderModelLike for IdentityProvider {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn config_value(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderMapper {
    #[serde(default)]
    pub name: String,
    pub identity_provider_alias: String,
    /// Mapper implementation id, e.g. `hardcoded-attribute-idp-mapper`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_provider_mapper: Option<String>,
    #[serde(default)]
    pub config: HashMap<String, String>,
}

impl IdentityProviderMapper {
    pub fn hardcoded_attribute(
        name: impl Into<String>,
        identity_provider_alias: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut config = HashMap::new();
        config.insert(MAPPER_ATTRIBUTE_KEY.to_string(), attribute.into());
        config.insert(MAPPER_ATTRIBUTE_VALUE_KEY.to_string(), value.into());
        Self {
            name: name.into(),
            identity_provider_alias: identity_provider_alias.into(),
            identity_provider_mapper: Some("hardcoded-attribute-idp-mapper".to_string()),
            config,
        }
    }

    pub fn target_attribute_name(&self) -> Option<&str> {
        self.config.get(MAPPER_ATTRIBUTE_KEY).map(String::as_str)
    }

    pub fn target_attribute_value(&self) -> Option<&str> {
        self.config.get(MAPPER_ATTRIBUTE_VALUE_KEY).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_provider_defaults_to_enabled() {
        let idp: IdentityProvider =
            serde_json::from_str(r#"{"alias":"keycloak-oidc"}"#).expect("Should deserialize");
        assert!(idp.enabled);
        assert!(idp.config.is_empty());
        assert_eq!(idp.alias(), "keycloak-oidc");
    }

    #[test]
    fn test_config_value_lookup() {
        let idp = IdentityProvider::new("corp").with_config("home.idp.discovery.domains", "");
        assert_eq!(idp.config_value("home.idp.discovery.domains"), Some(""));
        assert_eq!(idp.config_value("home.idp.discovery.domains.email"), None);
    }

    #[test]
    fn test_hardcoded_attribute_mapper_accessors() {
        let mapper = IdentityProviderMapper::hardcoded_attribute(
            "domain-mapper",
            "keycloak-oidc",
            "home.idp.discovery.domains",
            "example.com##example.org",
        );
        assert_eq!(
            mapper.target_attribute_name(),
            Some("home.idp.discovery.domains")
        );
        assert_eq!(
            mapper.target_attribute_value(),
            Some("example.com##example.org")
        );

        let json = serde_json::to_string(&mapper).expect("Should serialize");
        assert!(json.contains("identityProviderAlias"));
        assert!(json.contains("hardcoded-attribute-idp-mapper"));
    }
}
