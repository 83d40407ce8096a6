use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::error::CommonError;
use tracing::debug;

use super::{
    IdentityProvider, IdentityProviderMapper, IdentityProviderMapperRepositoryLike,
    IdentityProviderRepositoryLike,
};

/// In-memory snapshot of the parts of a realm that discovery reads.
///
/// The field names follow the realm export format, so an exported realm JSON
/// document can be parsed directly. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(default)]
    pub identity_providers: Vec<IdentityProvider>,
    #[serde(default)]
    pub identity_provider_mappers: Vec<IdentityProviderMapper>,
}

impl RealmDefinition {
    pub fn from_yaml(yaml_str: &str) -> Result<Self, CommonError> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    pub fn from_json(json_str: &str) -> Result<Self, CommonError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Loads a realm snapshot, parsing `.json` files as JSON and everything
    /// else as YAML.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CommonError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let definition = if is_json {
            Self::from_json(&contents)
        } else {
            Self::from_yaml(&contents)
        }
        .map_err(|e| CommonError::InvalidRequest {
            msg: format!("Failed to parse realm definition {}", path.display()),
            source: Some(anyhow::Error::new(e)),
        })?;

        debug!(
            path = %path.display(),
            identity_providers = definition.identity_providers.len(),
            mappers = definition.identity_provider_mappers.len(),
            "Loaded realm definition"
        );

        Ok(definition)
    }

    pub fn identity_provider(&self, alias: &str) -> Option<&IdentityProvider> {
        self.identity_providers.iter().find(|idp| idp.alias == alias)
    }
}

impl IdentityProviderRepositoryLike for RealmDefinition {
    fn list_identity_providers(&self) -> Result<Vec<IdentityProvider>, CommonError> {
        Ok(self.identity_providers.clone())
    }
}

impl IdentityProviderMapperRepositoryLike for RealmDefinition {
    fn find_mappers_by_alias(
        &self,
        alias: &str,
    ) -> Result<Vec<IdentityProviderMapper>, CommonError> {
        Ok(self
            .identity_provider_mappers
            .iter()
            .filter(|mapper| mapper.identity_provider_alias == alias)
            .cloned()
            .collect())
    }
}
