// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit message pattern filters

use git2::Repository;
use regex::Regex;

use crate::error::FilterError;
use crate::filter::CommitFilter;
use crate::person::Person;

/// Trailer key that precedes a sign-off identity
pub const SIGNED_OFF_BY_TAG: &str = "Signed-off-by: ";

/// Includes commits whose full message contains a match for a pattern
///
/// The search is unanchored: a match anywhere in the message, trailers
/// included, is enough.
#[derive(Debug, Clone)]
pub struct MessageFindFilter {
    pattern: Regex,
}

impl MessageFindFilter {
    /// Compile a message filter from a regular expression
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Pattern` if the expression does not compile.
    pub fn new(pattern: &str) -> Result<Self, FilterError> {
        Ok(Self::from_regex(Regex::new(pattern)?))
    }

    /// Wrap an already compiled pattern
    #[must_use]
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// The compiled pattern
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Whether a message contains a match
    #[must_use]
    pub fn matches(&self, message: &str) -> bool {
        self.pattern.is_match(message)
    }
}

impl CommitFilter for MessageFindFilter {
    fn include(&self, _repo: &Repository, commit: &git2::Commit<'_>) -> Result<bool, FilterError> {
        let message = String::from_utf8_lossy(commit.message_bytes());
        let included = self.matches(&message);
        tracing::debug!(commit = %commit.id(), included, "Evaluated message pattern");
        Ok(included)
    }
}

/// Includes commits carrying a `Signed-off-by` trailer for one person
///
/// The trailer text is matched literally and case-sensitively; characters
/// that are special in regular expressions (such as `.` or `+` in email
/// addresses) only ever match themselves.
#[derive(Debug, Clone)]
pub struct SignedOffByFilter {
    person: Person,
    inner: MessageFindFilter,
}

impl SignedOffByFilter {
    /// Build a sign-off filter for a person
    ///
    /// # Errors
    ///
    /// Returns `FilterError::Pattern` if the escaped trailer does not
    /// compile, which only happens if it exceeds the regex size limit.
    pub fn new(person: Person) -> Result<Self, FilterError> {
        let pattern = regex::RegexBuilder::new(&regex::escape(&Self::trailer(&person)))
            .multi_line(true)
            .build()?;
        Ok(Self {
            person,
            inner: MessageFindFilter::from_regex(pattern),
        })
    }

    /// The trailer line this filter looks for
    #[must_use]
    pub fn trailer(person: &Person) -> String {
        format!("{SIGNED_OFF_BY_TAG}{} <{}>", person.name(), person.email())
    }

    /// The person whose sign-off is matched
    #[must_use]
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// The compiled trailer pattern
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        self.inner.pattern()
    }

    /// Whether a message carries this person's sign-off
    #[must_use]
    pub fn matches(&self, message: &str) -> bool {
        self.inner.matches(message)
    }
}

impl CommitFilter for SignedOffByFilter {
    fn include(&self, repo: &Repository, commit: &git2::Commit<'_>) -> Result<bool, FilterError> {
        self.inner.include(repo, commit)
    }
}
