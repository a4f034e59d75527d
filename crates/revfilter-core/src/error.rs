// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for revfilter-core

use thiserror::Error;

/// Errors that can occur while filtering commits
#[derive(Debug, Error)]
pub enum FilterError {
    /// Error from git2 library, including failed tree and object reads
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },

    /// Person identity is missing a name or email
    #[error("Invalid person identity: {reason}")]
    InvalidPerson {
        /// What was wrong with the identity
        reason: String,
    },

    /// Message pattern failed to compile
    #[error("Invalid message pattern: {0}")]
    Pattern(#[from] regex::Error),
}
