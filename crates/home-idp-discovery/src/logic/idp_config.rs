//! Domain configuration of a single identity provider.
//!
//! Domains are resolved in two tiers:
//! 1. the identity provider's own config, under
//!    `home.idp.discovery.domains.<userAttributeName>` if that key exists,
//!    otherwise under `home.idp.discovery.domains`
//! 2. if that value is missing or empty, the first hardcoded attribute mapper
//!    of the identity provider whose target attribute is
//!    `home.idp.discovery.domains`
//!
//! The tiers are never merged.

use shared::error::CommonError;
use tracing::trace;

use crate::logic::DOMAINS_ATTRIBUTE_KEY;
use crate::logic::domains::DomainList;
use crate::repository::{IdentityProviderMapperRepositoryLike, IdentityProviderModelLike};

pub struct IdentityProviderDomainConfig<'a, I, M>
where
    I: IdentityProviderModelLike + ?Sized,
    M: IdentityProviderMapperRepositoryLike + ?Sized,
{
    identity_provider: &'a I,
    mappers: &'a M,
}

impl<'a, I, M> IdentityProviderDomainConfig<'a, I, M>
where
    I: IdentityProviderModelLike + ?Sized,
    M: IdentityProviderMapperRepositoryLike + ?Sized,
{
    pub fn new(identity_provider: &'a I, mappers: &'a M) -> Self {
        Self {
            identity_provider,
            mappers,
        }
    }

    /// Whether `domain` is one of this identity provider's domains.
    ///
    /// Missing config and missing mappers resolve to "no match". The only
    /// error is one raised by the mapper repository itself.
    pub fn has_domain(
        &self,
        user_attribute_name: Option<&str>,
        domain: &str,
    ) -> Result<bool, CommonError> {
        Ok(self.domains(user_attribute_name)?.contains(domain))
    }

    pub fn domains(&self, user_attribute_name: Option<&str>) -> Result<DomainList, CommonError> {
        let key = self.domain_config_key(user_attribute_name);
        let configured = self.identity_provider.config_value(&key).unwrap_or("");

        if !configured.is_empty() {
            return Ok(DomainList::parse(configured));
        }

        let from_mapper = self.domains_from_mapper()?;
        Ok(DomainList::parse(from_mapper.as_deref().unwrap_or("")))
    }

    /// The attribute specific key when it is present verbatim in the config,
    /// the default key otherwise.
    pub fn domain_config_key(&self, user_attribute_name: Option<&str>) -> String {
        if let Some(name) = user_attribute_name {
            let candidate = format!("{DOMAINS_ATTRIBUTE_KEY}.{name}");
            if self.identity_provider.config_value(&candidate).is_some() {
                return candidate;
            }
        }
        DOMAINS_ATTRIBUTE_KEY.to_string()
    }

    fn domains_from_mapper(&self) -> Result<Option<String>, CommonError> {
        let alias = self.identity_provider.alias();
        let mapper = self
            .mappers
            .find_mappers_by_alias(alias)?
            .into_iter()
            .find(|mapper| mapper.target_attribute_name() == Some(DOMAINS_ATTRIBUTE_KEY));

        match mapper {
            Some(mapper) => {
                let value = mapper.target_attribute_value().unwrap_or("").to_string();
                trace!(
                    alias,
                    mapper = %mapper.name,
                    "Found attribute mapper for '{}' with domain '{}'",
                    DOMAINS_ATTRIBUTE_KEY,
                    value
                );
                Ok(Some(value))
            }
            None => {
                trace!(
                    alias,
                    "No attribute mapper found for '{}'",
                    DOMAINS_ATTRIBUTE_KEY
                );
                Ok(None)
            }
        }
    }
}
