use git2::Oid;
use std::collections::HashMap;

use crate::domain::CommitRecord;
use crate::error::Result;
use crate::git::{sort_tags_descending, CommitRange, Repository};

/// Mock repository for testing without actual git operations.
///
/// Tags, commits, and the diff text are scripted up front; `list_commits` and
/// `diff` answer the same for every range, which is all the engine needs.
pub struct MockRepository {
    tags: Vec<String>,
    tag_commits: HashMap<String, Oid>,
    commits: Vec<CommitRecord>,
    diff_text: String,
    first: Oid,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            tag_commits: HashMap::new(),
            commits: Vec::new(),
            diff_text: String::new(),
            first: Oid::zero(),
        }
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        let name = name.into();
        self.tags.push(name.clone());
        self.tag_commits.insert(name, oid);
    }

    /// Add a tag whose commit cannot be resolved
    pub fn add_unresolvable_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Append a commit to the scripted range answer
    pub fn add_commit(&mut self, commit: CommitRecord) {
        self.commits.push(commit);
    }

    /// Append a commit given only its subject line
    pub fn add_subject(&mut self, subject: impl Into<String>) {
        let index = self.commits.len();
        self.commits.push(CommitRecord::new(
            format!("{:07x}", index + 1),
            subject,
            "Test Author",
        ));
    }

    /// Set the diff text returned for any range
    pub fn set_diff(&mut self, diff: impl Into<String>) {
        self.diff_text = diff.into();
    }

    /// Set the repository's first commit
    pub fn set_first_commit(&mut self, oid: Oid) {
        self.first = oid;
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags = self.tags.clone();
        sort_tags_descending(&mut tags);
        Ok(tags)
    }

    fn resolve_tag_commit(&self, tag: &str) -> Result<Option<Oid>> {
        Ok(self.tag_commits.get(tag).copied())
    }

    fn first_commit(&self) -> Result<Oid> {
        Ok(self.first)
    }

    fn list_commits(&self, _range: &CommitRange) -> Result<Vec<CommitRecord>> {
        Ok(self.commits.clone())
    }

    fn diff(&self, _range: &CommitRange, _path_globs: &[String]) -> Result<String> {
        Ok(self.diff_text.clone())
    }
}
