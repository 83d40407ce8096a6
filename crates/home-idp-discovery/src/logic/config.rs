use serde::{Deserialize, Serialize};
use shared::env::load_optional_env_files;

pub const USER_ATTRIBUTE_ENV: &str = "HOME_IDP_DISCOVERY_USER_ATTRIBUTE";
pub const DEFAULT_USER_ATTRIBUTE: &str = "email";

/// Settings for realm-wide home IdP discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryConfig {
    /// User attribute the domain was taken from. Selects the
    /// `home.idp.discovery.domains.<attribute>` override key when an identity
    /// provider defines one. `None` disables the override lookup.
    #[serde(default = "default_user_attribute")]
    pub user_attribute: Option<String>,
}

fn default_user_attribute() -> Option<String> {
    Some(DEFAULT_USER_ATTRIBUTE.to_string())
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            user_attribute: default_user_attribute(),
        }
    }
}

impl DiscoveryConfig {
    /// Reads `HOME_IDP_DISCOVERY_USER_ATTRIBUTE` after loading any `.env`
    /// files. Unset keeps the default attribute, an empty value disables it.
    pub fn from_env() -> Self {
        load_optional_env_files();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(USER_ATTRIBUTE_ENV) {
            None => Self::default(),
            Some(value) if value.trim().is_empty() => Self {
                user_attribute: None,
            },
            Some(value) => Self {
                user_attribute: Some(value.trim().to_string()),
            },
        }
    }

    pub fn user_attribute(&self) -> Option<&str> {
        self.user_attribute.as_deref()
    }
}
