/// Commit information produced by the git collaborator.
///
/// Immutable value object; the classifier only ever reads the subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Shortened commit hash
    pub short_hash: String,
    /// First line of the commit message
    pub subject: String,
    /// Commit author name
    pub author_name: String,
}

impl CommitRecord {
    pub fn new(
        short_hash: impl Into<String>,
        subject: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        CommitRecord {
            short_hash: short_hash.into(),
            subject: subject.into(),
            author_name: author_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_record_new() {
        let commit = CommitRecord::new("abc1234", "fix the thing", "Test Author");
        assert_eq!(commit.short_hash, "abc1234");
        assert_eq!(commit.subject, "fix the thing");
        assert_eq!(commit.author_name, "Test Author");
    }
}
