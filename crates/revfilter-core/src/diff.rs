// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-commit change sets
//!
//! Root and single-parent commits use `git2`'s tree-to-tree diff. Merge
//! commits walk every parent tree alongside the commit's own tree and keep
//! only the paths where the commit's entry differs from all parents: a
//! path that matches any one parent exactly was taken from that side as-is.

use std::collections::BTreeMap;

use git2::{Delta, DiffOptions, FileMode, Oid, Repository, Tree};
use tracing::{debug, trace};

use crate::change::{ChangeKind, FileChange};
use crate::error::FilterError;
use crate::filter::CommitFilter;

/// Compute the files a commit changed relative to its parents
///
/// The result is sorted by path and never lists a path twice.
///
/// # Errors
///
/// Returns `FilterError::Git2` if any commit, tree or diff read fails. No
/// partial change set is returned.
pub fn compute_changes(
    repo: &Repository,
    commit: &git2::Commit<'_>,
) -> Result<Vec<FileChange>, FilterError> {
    let tree = commit.tree()?;
    let mut changes = match commit.parent_count() {
        0 => diff_trees(repo, None, &tree)?,
        1 => {
            let parent_tree = commit.parent(0)?.tree()?;
            diff_trees(repo, Some(&parent_tree), &tree)?
        }
        count => {
            let mut sides = Vec::with_capacity(count + 1);
            for i in 0..count {
                sides.push(Some(commit.parent(i)?.tree()?));
            }
            sides.push(Some(tree));
            let mut walk = MergeWalk {
                repo,
                changes: Vec::new(),
            };
            walk.walk("", &sides)?;
            walk.changes
        }
    };
    changes.sort_by(|a, b| a.path.cmp(&b.path));

    debug!(
        commit = %commit.id(),
        parents = commit.parent_count(),
        changes = changes.len(),
        "Computed change set"
    );
    Ok(changes)
}

/// Two-tree diff; `None` stands for the empty tree
fn diff_trees(
    repo: &Repository,
    old: Option<&Tree<'_>>,
    new: &Tree<'_>,
) -> Result<Vec<FileChange>, FilterError> {
    let mut opts = DiffOptions::new();
    // Report a blob/symlink swap as one entry instead of a delete and an add
    opts.include_typechange(true);

    let diff = repo.diff_tree_to_tree(old, Some(new), Some(&mut opts))?;

    let changes = diff
        .deltas()
        .map(|delta| {
            let new_file = delta.new_file();
            let path = new_file
                .path_bytes()
                .or_else(|| delta.old_file().path_bytes())
                .map(|p| String::from_utf8_lossy(p).into_owned())
                .unwrap_or_default();

            // Renames and copies need similarity detection, which is never run
            let kind = match delta.status() {
                Delta::Added => ChangeKind::Added,
                Delta::Deleted => ChangeKind::Deleted,
                _ => ChangeKind::Modified,
            };

            FileChange {
                path,
                mode: u32::from(new_file.mode()),
                id: new_file.id(),
                kind,
            }
        })
        .collect();

    Ok(changes)
}

/// Mode and id of one side's entry at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Side {
    pub(crate) mode: u32,
    pub(crate) id: Oid,
}

impl Side {
    pub(crate) fn missing() -> Self {
        Self {
            mode: 0,
            id: Oid::zero(),
        }
    }

    fn is_tree(self) -> bool {
        self.mode == u32::from(FileMode::Tree)
    }
}

/// Reduce one leaf path across parents; the last side is the commit's own
///
/// Returns `None` when the commit's entry equals some parent's entry, with
/// parents checked in order. Otherwise the kind comes from the OR of the
/// parent modes seen against the commit's mode.
pub(crate) fn reduce_path(path: String, sides: &[Side]) -> Option<FileChange> {
    let (current, parents) = sides.split_last()?;

    let mut parent_mode = 0;
    for parent in parents {
        if parent == current {
            return None;
        }
        parent_mode |= parent.mode;
    }

    let kind = if parent_mode == 0 && current.mode != 0 {
        ChangeKind::Added
    } else if parent_mode != 0 && current.mode == 0 {
        ChangeKind::Deleted
    } else {
        ChangeKind::Modified
    };

    Some(FileChange {
        path,
        mode: current.mode,
        id: current.id,
        kind,
    })
}

/// Synchronized walk over N parent trees plus the commit tree
struct MergeWalk<'r> {
    repo: &'r Repository,
    changes: Vec<FileChange>,
}

impl<'r> MergeWalk<'r> {
    fn walk(&mut self, prefix: &str, trees: &[Option<Tree<'r>>]) -> Result<(), FilterError> {
        let mut entries: BTreeMap<Vec<u8>, Vec<Option<Side>>> = BTreeMap::new();
        for (index, tree) in trees.iter().enumerate() {
            let Some(tree) = tree else { continue };
            for entry in tree.iter() {
                let slots = entries
                    .entry(entry.name_bytes().to_vec())
                    .or_insert_with(|| vec![None; trees.len()]);
                slots[index] = Some(Side {
                    mode: entry.filemode() as u32,
                    id: entry.id(),
                });
            }
        }

        for (name, slots) in entries {
            let path = format!("{prefix}{}", String::from_utf8_lossy(&name));

            if slots.iter().all(|slot| *slot == slots[0]) {
                trace!(path = %path, "Skipping entry identical on every side");
                continue;
            }

            // A name can be a blob on some sides and a tree on others; the
            // blob view and the tree view are reduced independently.
            let leaves: Vec<Side> = slots
                .iter()
                .map(|slot| match slot {
                    Some(side) if !side.is_tree() => *side,
                    _ => Side::missing(),
                })
                .collect();
            if leaves.iter().any(|side| side.mode != 0) {
                if let Some(change) = reduce_path(path.clone(), &leaves) {
                    self.changes.push(change);
                }
            }

            if slots.iter().flatten().any(|side| side.is_tree()) {
                let mut subtrees = Vec::with_capacity(slots.len());
                for slot in &slots {
                    subtrees.push(match slot {
                        Some(side) if side.is_tree() => Some(self.repo.find_tree(side.id)?),
                        _ => None,
                    });
                }
                self.walk(&format!("{path}/"), &subtrees)?;
            }
        }

        Ok(())
    }
}

/// Decides whether a commit is included once its change set is known
pub trait DiffDecision: Send + Sync {
    /// Accept or reject a commit given the files it changed
    fn decide(&self, commit: &git2::Commit<'_>, changes: &[FileChange]) -> bool;
}

impl<F> DiffDecision for F
where
    F: Fn(&git2::Commit<'_>, &[FileChange]) -> bool + Send + Sync,
{
    fn decide(&self, commit: &git2::Commit<'_>, changes: &[FileChange]) -> bool {
        self(commit, changes)
    }
}

/// Accepts every commit
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl DiffDecision for AcceptAll {
    fn decide(&self, _commit: &git2::Commit<'_>, _changes: &[FileChange]) -> bool {
        true
    }
}

/// Filter that computes each commit's change set and hands it to a decision
#[derive(Debug, Clone, Default)]
pub struct CommitDiffFilter<D = AcceptAll> {
    decision: D,
}

impl CommitDiffFilter {
    /// A diff filter that accepts every commit
    #[must_use]
    pub fn new() -> Self {
        Self { decision: AcceptAll }
    }

    /// A diff filter with a custom decision
    #[must_use]
    pub fn with_decision<D: DiffDecision>(decision: D) -> CommitDiffFilter<D> {
        CommitDiffFilter { decision }
    }

    /// A diff filter deciding with a closure
    #[must_use]
    pub fn from_fn<F>(decide: F) -> CommitDiffFilter<F>
    where
        F: Fn(&git2::Commit<'_>, &[FileChange]) -> bool + Send + Sync,
    {
        CommitDiffFilter { decision: decide }
    }
}

impl<D: DiffDecision> CommitDiffFilter<D> {
    /// The installed decision
    #[must_use]
    pub fn decision(&self) -> &D {
        &self.decision
    }

    /// Compute a commit's change set without deciding
    ///
    /// # Errors
    ///
    /// See [`compute_changes`].
    pub fn changes(
        &self,
        repo: &Repository,
        commit: &git2::Commit<'_>,
    ) -> Result<Vec<FileChange>, FilterError> {
        compute_changes(repo, commit)
    }
}

impl<D: DiffDecision> CommitFilter for CommitDiffFilter<D> {
    fn include(&self, repo: &Repository, commit: &git2::Commit<'_>) -> Result<bool, FilterError> {
        let changes = compute_changes(repo, commit)?;
        Ok(self.decision.decide(commit, &changes))
    }
}
