//! Domain list parsing and matching.
//!
//! Domain lists are stored as a single string joined by `##`. Whitespace
//! around a separator is ignored, matching the host's
//! `\s*##\s*` multi-value config pattern.

use std::fmt;

pub const DOMAIN_DELIMITER: &str = "##";

/// Whitespace as understood by the host's `\s` class.
fn is_pattern_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Splits a delimiter-joined value into tokens.
///
/// A value without any separator is returned as its only token, so `""`
/// yields `[""]`. Leading empty tokens are kept and trailing empty tokens are
/// dropped.
pub fn split_config_value(value: &str) -> Vec<&str> {
    if !value.contains(DOMAIN_DELIMITER) {
        return vec![value];
    }

    let raw: Vec<&str> = value.split(DOMAIN_DELIMITER).collect();
    let last = raw.len() - 1;
    let mut tokens: Vec<&str> = raw
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            let token = if i > 0 {
                token.trim_start_matches(is_pattern_whitespace)
            } else {
                token
            };
            if i < last {
                token.trim_end_matches(is_pattern_whitespace)
            } else {
                token
            }
        })
        .collect();

    while tokens.last().is_some_and(|token| token.is_empty()) {
        tokens.pop();
    }

    tokens
}

/// Case-insensitive comparison without allocating lowercase copies.
pub fn domains_equal(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Domains resolved for one identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainList {
    domains: Vec<String>,
}

impl DomainList {
    pub fn parse(value: &str) -> Self {
        Self {
            domains: split_config_value(value)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// True iff any configured entry equals `domain`, ignoring case. No
    /// wildcard or subdomain matching.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.iter().any(|entry| domains_equal(entry, domain))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Domain part of a user identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain(String);

impl Domain {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The part after the last `@`, if there is one and it is not empty.
    pub fn from_email(email: &str) -> Option<Self> {
        let (_, domain) = email.trim().rsplit_once('@')?;
        if domain.is_empty() {
            return None;
        }
        Some(Self(domain.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
