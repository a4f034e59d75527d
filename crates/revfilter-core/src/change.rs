//! File-level change records

use git2::{FileMode, Oid};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Length of the displayed object id
pub const ABBREV_LEN: usize = 7;

/// How a path changed in a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// The path is new in the commit
    Added,
    /// The path is gone from the commit
    Deleted,
    /// The path exists on both sides with different content or mode
    Modified,
}

impl ChangeKind {
    /// Single-letter status, as printed by `git log --name-status`
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Added => 'A',
            Self::Deleted => 'D',
            Self::Modified => 'M',
        }
    }
}

/// One path changed by a commit, described from the commit's side
///
/// For a deleted path the mode is 0 and the id is the zero oid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChange {
    /// Slash-separated path from the repository root
    pub path: String,
    /// Raw git mode bits of the commit's entry
    pub mode: u32,
    /// Object id of the commit's entry
    #[serde(serialize_with = "serialize_oid", deserialize_with = "deserialize_oid")]
    pub id: Oid,
    /// How the path changed
    pub kind: ChangeKind,
}

impl FileChange {
    /// Abbreviated object id for display
    #[must_use]
    pub fn abbreviated_id(&self) -> String {
        let mut hex = self.id.to_string();
        hex.truncate(ABBREV_LEN);
        hex
    }

    /// The mode as a `git2::FileMode`, if it is one git knows
    #[must_use]
    pub fn file_mode(&self) -> Option<FileMode> {
        [
            FileMode::Unreadable,
            FileMode::Tree,
            FileMode::Blob,
            FileMode::BlobGroupWritable,
            FileMode::BlobExecutable,
            FileMode::Link,
            FileMode::Commit,
        ]
        .into_iter()
        .find(|mode| u32::from(*mode) == self.mode)
    }
}

fn serialize_oid<S: Serializer>(oid: &Oid, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(oid)
}

fn deserialize_oid<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Oid, D::Error> {
    let hex = String::deserialize(deserializer)?;
    Oid::from_str(&hex).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn sample() -> FileChange {
        FileChange {
            path: "src/lib.rs".to_string(),
            mode: 0o100644,
            id: Oid::from_str("1945ab9c752534e733c38ba0109dc3b741f0a6eb").unwrap(),
            kind: ChangeKind::Modified,
        }
    }

    #[test]
    fn test_abbreviated_id() {
        assert_eq!(sample().abbreviated_id(), "1945ab9");
    }

    #[test]
    fn test_file_mode() {
        let mut change = sample();
        assert_eq!(change.file_mode(), Some(FileMode::Blob));
        change.mode = 0o100755;
        assert_eq!(change.file_mode(), Some(FileMode::BlobExecutable));
        change.mode = 0;
        assert_eq!(change.file_mode(), Some(FileMode::Unreadable));
        change.mode = 0o777;
        assert_eq!(change.file_mode(), None);
    }

    #[test]
    fn test_letters() {
        assert_eq!(ChangeKind::Added.letter(), 'A');
        assert_eq!(ChangeKind::Deleted.letter(), 'D');
        assert_eq!(ChangeKind::Modified.letter(), 'M');
    }

    #[test]
    fn test_json_format() {
        let change = sample();
        let json = serde_json::to_value(&change).expect("serialize");
        assert_eq!(
            json["id"].as_str(),
            Some("1945ab9c752534e733c38ba0109dc3b741f0a6eb")
        );
        assert_eq!(json["kind"].as_str(), Some("modified"));
        assert_eq!(json["mode"].as_u64(), Some(0o100644));

        let back: FileChange = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, change);
    }

    #[test]
    fn test_json_rejects_bad_oid() {
        let json = serde_json::json!({
            "path": "a.txt",
            "mode": 0o100644,
            "id": "not-hex",
            "kind": "added",
        });
        assert!(serde_json::from_value::<FileChange>(json).is_err());
    }
}
