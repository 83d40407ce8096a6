use shared::error::CommonError;
use tracing::debug;

use crate::logic::config::DiscoveryConfig;
use crate::logic::domains::Domain;
use crate::logic::idp_config::IdentityProviderDomainConfig;
use crate::repository::{
    IdentityProvider, IdentityProviderMapperRepositoryLike, IdentityProviderRepositoryLike,
};

/// Finds the identity providers a user's domain belongs to.
pub struct HomeIdpDiscoverer<'a, R>
where
    R: IdentityProviderRepositoryLike + IdentityProviderMapperRepositoryLike + ?Sized,
{
    realm: &'a R,
    config: DiscoveryConfig,
}

impl<'a, R> HomeIdpDiscoverer<'a, R>
where
    R: IdentityProviderRepositoryLike + IdentityProviderMapperRepositoryLike + ?Sized,
{
    pub fn new(realm: &'a R, config: DiscoveryConfig) -> Self {
        Self { realm, config }
    }

    /// Identity providers for the domain of `email`. An identifier without a
    /// usable domain yields no providers.
    pub fn discover_for_email(&self, email: &str) -> Result<Vec<IdentityProvider>, CommonError> {
        match Domain::from_email(email) {
            Some(domain) => self.discover_for_domain(&domain),
            None => {
                debug!("Could not extract domain from user identifier");
                Ok(Vec::new())
            }
        }
    }

    /// Enabled identity providers configured for `domain`, in realm order.
    pub fn discover_for_domain(
        &self,
        domain: &Domain,
    ) -> Result<Vec<IdentityProvider>, CommonError> {
        let user_attribute = self.config.user_attribute();
        let mut candidates = Vec::new();

        for idp in self.realm.list_identity_providers()? {
            if !idp.enabled {
                debug!(alias = %idp.alias, "Skipping disabled identity provider");
                continue;
            }

            let matches = IdentityProviderDomainConfig::new(&idp, self.realm)
                .has_domain(user_attribute, domain.as_str())?;
            if matches {
                candidates.push(idp);
            }
        }

        debug!(
            %domain,
            candidates = candidates.len(),
            "Home identity provider discovery finished"
        );

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::DOMAINS_ATTRIBUTE_KEY;
    use crate::repository::{IdentityProviderMapper, RealmDefinition};
    use crate::test::fixtures::{FailingRealm, realm_with};

    fn aliases(idps: &[IdentityProvider]) -> Vec<&str> {
        idps.iter().map(|idp| idp.alias.as_str()).collect()
    }

    fn test_realm() -> RealmDefinition {
        realm_with(
            vec![
                IdentityProvider::new("corp")
                    .with_config(DOMAINS_ATTRIBUTE_KEY, "example.com##example.org"),
                IdentityProvider::new("partner")
                    .with_config(DOMAINS_ATTRIBUTE_KEY, "partner.example")
                    .with_config(format!("{DOMAINS_ATTRIBUTE_KEY}.upn"), "example.com"),
                IdentityProvider::new("legacy")
                    .with_config(DOMAINS_ATTRIBUTE_KEY, "example.com")
                    .disabled(),
                IdentityProvider::new("mapped"),
            ],
            vec![IdentityProviderMapper::hardcoded_attribute(
                "domain-mapper",
                "mapped",
                DOMAINS_ATTRIBUTE_KEY,
                "EXAMPLE.org",
            )],
        )
    }

    #[test]
    fn test_discover_for_email() {
        shared::setup_test!();
        let realm = test_realm();
        let discoverer = HomeIdpDiscoverer::new(&realm, DiscoveryConfig::default());

        let found = discoverer
            .discover_for_email("alice@Example.com")
            .expect("Should discover");
        assert_eq!(aliases(&found), vec!["corp"]);

        let found = discoverer
            .discover_for_email("bob@example.org")
            .expect("Should discover");
        assert_eq!(aliases(&found), vec!["corp", "mapped"]);
    }

    #[test]
    fn test_discover_uses_attribute_specific_domains() {
        let realm = test_realm();
        let config = DiscoveryConfig {
            user_attribute: Some("upn".to_string()),
        };
        let discoverer = HomeIdpDiscoverer::new(&realm, config);

        let found = discoverer
            .discover_for_domain(&Domain::new("example.com"))
            .expect("Should discover");
        assert_eq!(aliases(&found), vec!["corp", "partner"]);

        let found = discoverer
            .discover_for_domain(&Domain::new("partner.example"))
            .expect("Should discover");
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_skips_disabled_providers() {
        let realm = test_realm();
        let discoverer = HomeIdpDiscoverer::new(&realm, DiscoveryConfig::default());

        let found = discoverer
            .discover_for_domain(&Domain::new("example.com"))
            .expect("Should discover");
        assert!(!aliases(&found).contains(&"legacy"));
    }

    #[test]
    fn test_discover_without_domain_returns_nothing() {
        let realm = test_realm();
        let discoverer = HomeIdpDiscoverer::new(&realm, DiscoveryConfig::default());

        assert!(discoverer.discover_for_email("alice").expect("Should discover").is_empty());
        assert!(discoverer.discover_for_email("alice@").expect("Should discover").is_empty());
    }

    #[test]
    fn test_discover_in_empty_realm() {
        let realm = RealmDefinition::default();
        let discoverer = HomeIdpDiscoverer::new(&realm, DiscoveryConfig::default());

        let found = discoverer
            .discover_for_email("alice@example.com")
            .expect("Should discover");
        assert!(found.is_empty());
    }

    #[test]
    fn test_discover_propagates_repository_errors() {
        let discoverer = HomeIdpDiscoverer::new(&FailingRealm, DiscoveryConfig::default());

        let result = discoverer.discover_for_email("alice@example.com");
        assert!(matches!(result, Err(CommonError::Repository { .. })));
    }
}
