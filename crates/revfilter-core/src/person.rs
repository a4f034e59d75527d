// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Person identities used to build trailer patterns

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// A name and email pair, as found in signatures and trailers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: String,
    email: String,
}

impl Person {
    /// Create a person identity
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidPerson` if the name or email is blank.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, FilterError> {
        let name = name.into();
        let email = email.into();
        if name.trim().is_empty() {
            return Err(FilterError::InvalidPerson {
                reason: "name is empty".to_string(),
            });
        }
        if email.trim().is_empty() {
            return Err(FilterError::InvalidPerson {
                reason: "email is empty".to_string(),
            });
        }
        Ok(Self { name, email })
    }

    /// Build a person from a `git2` signature
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidPerson` if the signature name or email
    /// is missing or not valid UTF-8.
    pub fn from_signature(signature: &git2::Signature<'_>) -> Result<Self, FilterError> {
        Self::new(
            signature.name().unwrap_or_default(),
            signature.email().unwrap_or_default(),
        )
    }

    /// Parse a `Name <email>` string
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidPerson` if the angle brackets are missing
    /// or either part is blank.
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let input = input.trim();
        let (name, rest) = input.split_once('<').ok_or_else(|| FilterError::InvalidPerson {
            reason: format!("expected 'Name <email>', got '{input}'"),
        })?;
        let email = rest
            .strip_suffix('>')
            .filter(|email| !email.contains(['<', '>']))
            .ok_or_else(|| FilterError::InvalidPerson {
                reason: format!("unterminated email in '{input}'"),
            })?;
        Self::new(name.trim(), email.trim())
    }

    /// The person's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's email address
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_new_rejects_blank_parts() {
        assert!(matches!(
            Person::new("", "jane@example.com"),
            Err(FilterError::InvalidPerson { .. })
        ));
        assert!(matches!(
            Person::new("Jane Doe", "  "),
            Err(FilterError::InvalidPerson { .. })
        ));
    }

    #[test]
    fn test_parse() {
        let person = Person::parse("Jane Doe <jane@example.com>").expect("parse");
        assert_eq!(person.name(), "Jane Doe");
        assert_eq!(person.email(), "jane@example.com");
        assert_eq!(person.to_string(), "Jane Doe <jane@example.com>");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let person = Person::parse("  Jane Doe   < jane@example.com >\n").expect("parse");
        assert_eq!(person.name(), "Jane Doe");
        assert_eq!(person.email(), "jane@example.com");
    }

    #[test]
    fn test_parse_invalid() {
        for input in [
            "Jane Doe",
            "Jane Doe jane@example.com>",
            "Jane Doe <jane@example.com",
            "<jane@example.com>",
            "Jane Doe <>",
            "Jane <a<b>",
            "",
        ] {
            assert!(
                matches!(Person::parse(input), Err(FilterError::InvalidPerson { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_signature() {
        let signature = git2::Signature::now("Jane Doe", "jane@example.com").expect("signature");
        let person = Person::from_signature(&signature).expect("person");
        assert_eq!(person, Person::new("Jane Doe", "jane@example.com").unwrap());
    }
}
