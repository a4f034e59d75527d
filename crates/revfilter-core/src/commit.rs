//! Commit snapshots handed back to callers of the walker

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A commit accepted by a filter, detached from the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The commit SHA (40 hex characters)
    pub sha: String,
    /// Full commit message, trailers included
    pub message: String,
    /// Author name
    pub author: String,
    /// Author email
    pub author_email: String,
    /// Committer name
    pub committer: String,
    /// Committer email
    pub committer_email: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Parent commit SHAs, in parent order
    pub parents: Vec<String>,
}

impl Commit {
    /// Snapshot a `git2` commit
    #[must_use]
    pub fn from_git2(git_commit: &git2::Commit<'_>) -> Self {
        let timestamp = Utc
            .timestamp_opt(git_commit.time().seconds(), 0)
            .single()
            .unwrap_or_else(Utc::now);
        let author = git_commit.author();
        let committer = git_commit.committer();

        Self {
            sha: git_commit.id().to_string(),
            message: String::from_utf8_lossy(git_commit.message_bytes()).into_owned(),
            author: author.name().unwrap_or("Unknown").to_string(),
            author_email: author.email().unwrap_or("").to_string(),
            committer: committer.name().unwrap_or("Unknown").to_string(),
            committer_email: committer.email().unwrap_or("").to_string(),
            timestamp,
            parents: git_commit.parent_ids().map(|id| id.to_string()).collect(),
        }
    }

    /// Validate that a SHA is a valid 40-character hex string
    #[must_use]
    pub fn is_valid_sha(sha: &str) -> bool {
        sha.len() == 40 && sha.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Get the short SHA (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> &str {
        &self.sha[..7.min(self.sha.len())]
    }

    /// Check if this is a merge commit (has multiple parents)
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Check if this is a root commit (has no parents)
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Get the first line of the commit message (subject)
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn sample_commit() -> Commit {
        Commit {
            sha: "1945ab9c752534e733c38ba0109dc3b741f0a6eb".to_string(),
            message: "Fix tree walk over gitlinks\n\nSigned-off-by: Jane Doe <jane@example.com>"
                .to_string(),
            author: "Jane Doe".to_string(),
            author_email: "jane@example.com".to_string(),
            committer: "Sam Roe".to_string(),
            committer_email: "sam@example.com".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 17, 2, 33, 6).unwrap(),
            parents: vec!["c460aeb7fb2d109c17e43de0ce681faec0b7374d".to_string()],
        }
    }

    #[test]
    fn test_commit_json_format() {
        let commit = sample_commit();
        let json = serde_json::to_string_pretty(&commit).expect("serialize");
        assert!(json.contains("\"sha\":"));
        assert!(json.contains("\"committer_email\":"));
        assert!(json.contains("2026-01-17"));

        let back: Commit = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(commit, back);
    }

    #[test]
    fn test_is_valid_sha() {
        assert!(Commit::is_valid_sha(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eb"
        ));
        assert!(Commit::is_valid_sha(
            "ABCDEF1234567890abcdef1234567890abcdef12"
        ));
        assert!(!Commit::is_valid_sha("1945ab9"));
        assert!(!Commit::is_valid_sha(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eg"
        ));
        assert!(!Commit::is_valid_sha(""));
    }

    #[test]
    fn test_short_sha() {
        let mut commit = sample_commit();
        assert_eq!(commit.short_sha(), "1945ab9");
        commit.sha = "abc".to_string();
        assert_eq!(commit.short_sha(), "abc");
    }

    #[test]
    fn test_parent_shape() {
        let mut commit = sample_commit();
        assert!(!commit.is_merge());
        assert!(!commit.is_root());

        commit.parents.push("b".repeat(40));
        assert!(commit.is_merge());

        commit.parents.clear();
        assert!(commit.is_root());
        assert!(!commit.is_merge());
    }

    #[test]
    fn test_subject() {
        let mut commit = sample_commit();
        assert_eq!(commit.subject(), "Fix tree walk over gitlinks");
        commit.message = String::new();
        assert_eq!(commit.subject(), "");
    }

    #[test]
    fn test_from_git2() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = git2::Repository::init(dir.path()).expect("init");
        let author = git2::Signature::new("Jane Doe", "jane@example.com", &git2::Time::new(1_700_000_000, 0))
            .expect("signature");
        let committer = git2::Signature::new("Sam Roe", "sam@example.com", &git2::Time::new(1_700_000_100, 0))
            .expect("signature");
        let tree_id = repo.treebuilder(None).unwrap().write().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let oid = repo
            .commit(None, &author, &committer, "Initial\n\nBody", &tree, &[])
            .expect("commit");

        let commit = Commit::from_git2(&repo.find_commit(oid).unwrap());
        assert_eq!(commit.sha, oid.to_string());
        assert_eq!(commit.author, "Jane Doe");
        assert_eq!(commit.committer_email, "sam@example.com");
        assert_eq!(commit.timestamp.timestamp(), 1_700_000_100);
        assert_eq!(commit.subject(), "Initial");
        assert!(commit.is_root());
    }
}
