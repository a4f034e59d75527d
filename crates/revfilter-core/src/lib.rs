// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! revfilter-core: commit filters over `git2`
//!
//! This library crate provides filters that decide, one commit at a time,
//! whether a commit belongs in a history walk: merge-aware change sets with
//! a pluggable decision, and `Signed-off-by` trailer matching.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use revfilter_core::{GitRepo, Person, SignedOffByFilter, WalkOptions};
//!
//! let repo = GitRepo::open(".").expect("open repo");
//! let person = Person::parse("Jane Doe <jane@example.com>").expect("person");
//! let filter = SignedOffByFilter::new(person).expect("filter");
//!
//! for c in repo.find_commits(&WalkOptions::latest(10), &filter).expect("walk") {
//!     println!("{} - {}", c.short_sha(), c.subject());
//! }
//! ```

pub mod change;
pub mod commit;
pub mod diff;
pub mod error;
pub mod filter;
pub mod message;
pub mod person;
pub mod walk;

pub use change::{ChangeKind, FileChange};
pub use commit::Commit;
pub use diff::{AcceptAll, CommitDiffFilter, DiffDecision, compute_changes};
pub use error::FilterError;
pub use filter::{AllCommits, AllFilter, AnyFilter, CommitFilter};
pub use message::{MessageFindFilter, SIGNED_OFF_BY_TAG, SignedOffByFilter};
pub use person::Person;
pub use walk::{GitRepo, WalkOptions};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::change::{ChangeKind, FileChange};
    pub use crate::diff::{CommitDiffFilter, compute_changes};
    pub use crate::error::FilterError;
    pub use crate::filter::{AllFilter, AnyFilter, CommitFilter};
    pub use crate::message::{MessageFindFilter, SignedOffByFilter};
    pub use crate::person::Person;
    pub use crate::walk::{GitRepo, WalkOptions};
}
