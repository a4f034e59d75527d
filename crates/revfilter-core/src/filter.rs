// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The commit filter trait and its and/or combinators
//!
//! A filter answers one question per commit: include it or not. Filters
//! hold no mutable state, so a single value can be shared by any number
//! of concurrent walks.

use git2::Repository;

use crate::error::FilterError;

/// Decides whether a commit is included in a walk
pub trait CommitFilter: Send + Sync {
    /// Evaluate the filter against a commit
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if reading the commit or its trees fails. A
    /// failed read aborts the evaluation; it is never reported as a
    /// rejection.
    fn include(&self, repo: &Repository, commit: &git2::Commit<'_>) -> Result<bool, FilterError>;
}

impl<F: CommitFilter + ?Sized> CommitFilter for Box<F> {
    fn include(&self, repo: &Repository, commit: &git2::Commit<'_>) -> Result<bool, FilterError> {
        (**self).include(repo, commit)
    }
}

impl<F: CommitFilter + ?Sized> CommitFilter for &F {
    fn include(&self, repo: &Repository, commit: &git2::Commit<'_>) -> Result<bool, FilterError> {
        (**self).include(repo, commit)
    }
}

/// Includes every commit
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCommits;

impl CommitFilter for AllCommits {
    fn include(&self, _repo: &Repository, _commit: &git2::Commit<'_>) -> Result<bool, FilterError> {
        Ok(true)
    }
}

/// Includes a commit only when every child filter includes it
///
/// Children are evaluated in order and evaluation stops at the first
/// rejection. An empty filter includes everything.
#[derive(Default)]
pub struct AllFilter {
    filters: Vec<Box<dyn CommitFilter>>,
}

impl AllFilter {
    /// Create a filter from child filters
    #[must_use]
    pub fn new(filters: Vec<Box<dyn CommitFilter>>) -> Self {
        Self { filters }
    }

    /// Append a child filter
    #[must_use]
    pub fn and(mut self, filter: impl CommitFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of child filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether there are no child filters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl CommitFilter for AllFilter {
    fn include(&self, repo: &Repository, commit: &git2::Commit<'_>) -> Result<bool, FilterError> {
        for filter in &self.filters {
            if !filter.include(repo, commit)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Includes a commit when any child filter includes it
///
/// Children are evaluated in order and evaluation stops at the first
/// inclusion. An empty filter includes nothing.
#[derive(Default)]
pub struct AnyFilter {
    filters: Vec<Box<dyn CommitFilter>>,
}

impl AnyFilter {
    /// Create a filter from child filters
    #[must_use]
    pub fn new(filters: Vec<Box<dyn CommitFilter>>) -> Self {
        Self { filters }
    }

    /// Append a child filter
    #[must_use]
    pub fn or(mut self, filter: impl CommitFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of child filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether there are no child filters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl CommitFilter for AnyFilter {
    fn include(&self, repo: &Repository, commit: &git2::Commit<'_>) -> Result<bool, FilterError> {
        for filter in &self.filters {
            if filter.include(repo, commit)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
