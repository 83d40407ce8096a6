pub mod config;
pub mod discovery;
pub mod domains;
pub mod idp_config;

/// Identity provider config key (and hardcoded mapper attribute name) holding
/// the home IdP discovery domains.
pub const DOMAINS_ATTRIBUTE_KEY: &str = "home.idp.discovery.domains";

pub use config::DiscoveryConfig;
pub use discovery::HomeIdpDiscoverer;
pub use domains::{Domain, DomainList};
pub use idp_config::IdentityProviderDomainConfig;
