// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit walking driver
//!
//! This module opens repositories and runs commit filters over a revision
//! walk using the `git2` crate.

use std::path::Path;

use git2::{Repository, Sort};
use tracing::debug;

use crate::change::FileChange;
use crate::commit::Commit;
use crate::diff::compute_changes;
use crate::error::FilterError;
use crate::filter::CommitFilter;

/// Configuration for walking commits
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Maximum number of included commits to return
    pub limit: Option<usize>,
    /// Start from this commit (defaults to HEAD)
    pub from_ref: Option<String>,
}

impl WalkOptions {
    /// Create options returning at most N included commits
    #[must_use]
    pub fn latest(n: usize) -> Self {
        Self {
            limit: Some(n),
            ..Default::default()
        }
    }

    /// Set the starting reference
    #[must_use]
    pub fn from(mut self, reference: &str) -> Self {
        self.from_ref = Some(reference.to_string());
        self
    }
}

/// A git repository wrapper for filtering commits
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `FilterError::RepositoryNotFound` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| FilterError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::RepositoryNotFound` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, FilterError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| FilterError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// The underlying `git2` repository
    #[must_use]
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Walk commits newest first and keep those the filter includes
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if the walk cannot start, a commit cannot be
    /// read, or the filter fails. The walk stops at the first error.
    pub fn find_commits(
        &self,
        options: &WalkOptions,
        filter: &dyn CommitFilter,
    ) -> Result<Vec<Commit>, FilterError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;

        if let Some(ref from_ref) = options.from_ref {
            let oid = self.resolve(from_ref)?.id();
            revwalk.push(oid)?;
        } else {
            revwalk.push_head()?;
        }

        let limit = options.limit.unwrap_or(usize::MAX);
        let mut commits = Vec::new();
        let mut visited = 0usize;

        for oid_result in revwalk {
            if commits.len() >= limit {
                break;
            }

            let oid = oid_result?;
            let git_commit = self.repo.find_commit(oid)?;
            visited += 1;

            if filter.include(&self.repo, &git_commit)? {
                commits.push(Commit::from_git2(&git_commit));
            }
        }

        debug!(visited, included = commits.len(), "Finished commit walk");
        Ok(commits)
    }

    /// Resolve a reference and compute the change set of that commit
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidReference` if the reference cannot be
    /// resolved, or `FilterError::Git2` if a tree read fails.
    pub fn changes(&self, reference: &str) -> Result<(Commit, Vec<FileChange>), FilterError> {
        let git_commit = self.resolve(reference)?;
        let changes = compute_changes(&self.repo, &git_commit)?;
        Ok((Commit::from_git2(&git_commit), changes))
    }

    /// Get the HEAD commit SHA
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if HEAD cannot be resolved.
    pub fn head_sha(&self) -> Result<String, FilterError> {
        let head = self.repo.head()?;
        let oid = head.target().ok_or_else(|| FilterError::InvalidReference {
            reference: "HEAD".to_string(),
        })?;
        Ok(oid.to_string())
    }

    fn resolve(&self, reference: &str) -> Result<git2::Commit<'_>, FilterError> {
        self.repo
            .revparse_single(reference)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|_| FilterError::InvalidReference {
                reference: reference.to_string(),
            })
    }
}
