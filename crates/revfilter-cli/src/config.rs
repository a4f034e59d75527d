//! Configuration for the revfilter command line
//!
//! This module provides the clap definitions for global options and
//! subcommands, plus validation and logging helpers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Revfilter - filter git history by change sets and sign-offs
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "revfilter")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path inside the git repository to use
    ///
    /// The repository is discovered by walking up from this path.
    /// Defaults to the current working directory.
    #[arg(short = 'C', long, env = "REVFILTER_REPO", global = true)]
    pub repo: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with command output.
    #[arg(short, long, default_value = "false", global = true)]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the files a commit changed
    ///
    /// Merge commits only list paths whose merged content differs from
    /// every parent.
    ///
    /// Example:
    ///   revfilter changes HEAD
    Changes {
        /// Commit to inspect (SHA, branch, tag or any revision expression)
        #[arg(default_value = "HEAD")]
        revision: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List commits matching every given filter
    ///
    /// Example:
    ///   revfilter log --signed-off-by "Jane Doe <jane@example.com>" --touches src/
    Log {
        /// Start walking from this revision (defaults to HEAD)
        #[arg(long)]
        from: Option<String>,

        /// Maximum number of commits to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only commits signed off by this person ("Name <email>"); repeat to
        /// accept any of several people
        #[arg(long = "signed-off-by", value_name = "NAME <EMAIL>")]
        signed_off_by: Vec<String>,

        /// Only commits whose message matches this regular expression
        #[arg(long, value_name = "REGEX")]
        grep: Option<String>,

        /// Only commits changing a path under this prefix
        #[arg(long, value_name = "PATH")]
        touches: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Config {
    /// Get the repository path, using current directory as default
    ///
    /// Returns `None` if no path is specified and the current directory
    /// cannot be determined.
    #[must_use]
    pub fn repo_path(&self) -> Option<PathBuf> {
        self.repo.clone().or_else(|| std::env::current_dir().ok())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository path is specified but doesn't exist
    /// - The repository path is not a directory
    /// - Both `--verbose` and `--quiet` are given
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoNotDirectory(repo.clone()));
            }
        }
        if self.verbose && self.quiet {
            return Err(ConfigError::ConflictingVerbosity);
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),

    /// Verbose and quiet requested together
    #[error("--verbose and --quiet cannot be used together")]
    ConflictingVerbosity,
}
