// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Subcommand execution
//!
//! Each command writes its output to the given writer; logging goes through
//! `tracing` to stderr.

use std::io::Write;

use anyhow::{Context, Result, bail};
use revfilter_core::{
    AllFilter, AnyFilter, Commit, CommitDiffFilter, CommitFilter, FileChange, GitRepo,
    MessageFindFilter, Person, SignedOffByFilter, WalkOptions,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Command, Config};

/// Options of the `log` subcommand
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Start revision
    pub from: Option<String>,
    /// Maximum commits to print
    pub limit: Option<usize>,
    /// `Name <email>` identities, any of which must have signed off
    pub signed_off_by: Vec<String>,
    /// Message pattern
    pub grep: Option<String>,
    /// Path prefix a commit must change
    pub touches: Option<String>,
    /// Emit JSON
    pub json: bool,
}

/// A commit together with its change set, as printed by `changes --json`
#[derive(Debug, Serialize)]
struct CommitChanges<'a> {
    #[serde(flatten)]
    commit: &'a Commit,
    changes: &'a [FileChange],
}

/// Run the configured subcommand
///
/// # Errors
///
/// Returns an error if no subcommand was given, the repository cannot be
/// opened, or the command fails.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    let Some(ref command) = config.command else {
        bail!("no subcommand given; try `revfilter --help`");
    };
    let path = config
        .repo_path()
        .context("cannot determine the current directory")?;
    let repo = GitRepo::discover(&path)
        .with_context(|| format!("failed to open repository at {}", path.display()))?;

    match command {
        Command::Changes { revision, json } => changes(&repo, revision, *json, out),
        Command::Log {
            from,
            limit,
            signed_off_by,
            grep,
            touches,
            json,
        } => {
            let options = LogOptions {
                from: from.clone(),
                limit: *limit,
                signed_off_by: signed_off_by.clone(),
                grep: grep.clone(),
                touches: touches.clone(),
                json: *json,
            };
            log(&repo, &options, out)
        }
    }
}

/// Print the change set of one commit
///
/// # Errors
///
/// Returns an error if the revision does not resolve or a tree read fails.
pub fn changes(repo: &GitRepo, revision: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let (commit, changes) = repo
        .changes(revision)
        .with_context(|| format!("failed to compute changes of {revision}"))?;
    info!(commit = %commit.short_sha(), changes = changes.len(), "Computed changes");

    if json {
        let view = CommitChanges {
            commit: &commit,
            changes: &changes,
        };
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
    } else {
        for change in &changes {
            writeln!(out, "{}", format_change(change))?;
        }
    }
    Ok(())
}

/// Print the commits that pass every requested filter
///
/// # Errors
///
/// Returns an error if a filter cannot be built or the walk fails.
pub fn log(repo: &GitRepo, options: &LogOptions, out: &mut impl Write) -> Result<()> {
    let filter = build_filter(options)?;
    debug!(filters = filter.len(), "Built log filter");

    let walk = WalkOptions {
        limit: options.limit,
        from_ref: options.from.clone(),
    };
    let commits = repo
        .find_commits(&walk, &filter)
        .context("failed to walk commits")?;
    info!(commits = commits.len(), "Finished log");

    if options.json {
        serde_json::to_writer_pretty(&mut *out, &commits)?;
        writeln!(out)?;
    } else {
        for commit in &commits {
            writeln!(out, "{} {}", commit.short_sha(), commit.subject())?;
        }
    }
    Ok(())
}

/// Combine the `log` options into one filter
///
/// # Errors
///
/// Returns an error if an identity or the message pattern is invalid.
pub fn build_filter(options: &LogOptions) -> Result<AllFilter> {
    let mut filter = AllFilter::default();

    if !options.signed_off_by.is_empty() {
        let mut any = AnyFilter::default();
        for identity in &options.signed_off_by {
            let person = Person::parse(identity)
                .with_context(|| format!("invalid --signed-off-by value '{identity}'"))?;
            any = any.or(SignedOffByFilter::new(person)?);
        }
        filter = filter.and(any);
    }

    if let Some(ref pattern) = options.grep {
        let message = MessageFindFilter::new(pattern)
            .with_context(|| format!("invalid --grep pattern '{pattern}'"))?;
        filter = filter.and(message);
    }

    if let Some(ref prefix) = options.touches {
        filter = filter.and(touches(prefix.clone()));
    }

    Ok(filter)
}

/// A diff filter accepting commits that change a path under `prefix`
fn touches(prefix: String) -> impl CommitFilter + 'static {
    CommitDiffFilter::from_fn(move |_commit: &git2::Commit<'_>, changes: &[FileChange]| {
        changes.iter().any(|change| is_under(&change.path, &prefix))
    })
}

/// Whether `path` is `prefix` itself or lies inside it
fn is_under(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// One `changes` output line: status, octal mode, abbreviated id, path
#[must_use]
pub fn format_change(change: &FileChange) -> String {
    format!(
        "{} {:06o} {} {}",
        change.kind.letter(),
        change.mode,
        change.abbreviated_id(),
        change.path
    )
}
