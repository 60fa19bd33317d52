//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the narrow git surface
//! the resolution engine depends on, allowing for multiple implementations
//! including real repositories and a mock for testing.
//!
//! The primary abstraction is the [Repository] trait. Concrete implementations:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing
//!
//! Engine code depends on the trait rather than concrete implementations.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::cmp::Ordering;
use std::fmt;

use git2::Oid;

use crate::domain::{CommitRecord, ParsedVersion};
use crate::error::Result;

/// A commit range: everything reachable from `to` but not from `from`.
///
/// Formats as the familiar `{from}..{to}` log notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitRange {
    pub from: Oid,
    pub to: Oid,
}

impl CommitRange {
    pub fn new(from: Oid, to: Oid) -> Self {
        CommitRange { from, to }
    }

    /// An empty range selects no commits
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

/// Narrow git surface required by the version-resolution engine.
///
/// All implementors must be `Send + Sync`. Methods return
/// [crate::error::Result]; implementations map underlying errors (like
/// `git2::Error`) to [crate::error::NextverError] variants.
pub trait Repository: Send + Sync {
    /// All tags in descending version-aware order.
    ///
    /// Prerelease suffixes rank alpha < beta < rc < pre below the release
    /// with the same triple; see [compare_tags].
    fn list_tags(&self) -> Result<Vec<String>>;

    /// The commit a tag points at, or `None` for an unknown tag
    fn resolve_tag_commit(&self, tag: &str) -> Result<Option<Oid>>;

    /// The root commit of the repository
    fn first_commit(&self) -> Result<Oid>;

    /// Commits in the range, preserving the log's natural order.
    ///
    /// Order matters: the classifier's "first occurrence wins" tie-breaks on
    /// explicit markers depend on it for determinism.
    fn list_commits(&self, range: &CommitRange) -> Result<Vec<CommitRecord>>;

    /// Textual diff of the range restricted to the given path globs.
    ///
    /// Added/removed lines carry their `+`/`-` origin prefix so heuristics
    /// can match per line.
    fn diff(&self, range: &CommitRange, path_globs: &[String]) -> Result<String>;
}

/// Version-aware tag comparison (ascending).
///
/// Both implementations sort with this so the engine sees identical tag
/// rankings regardless of backend.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    ParsedVersion::parse(a)
        .cmp_precedence(&ParsedVersion::parse(b))
        .then_with(|| a.cmp(b))
}

/// Sort tags descending by version, newest first
pub fn sort_tags_descending(tags: &mut [String]) {
    tags.sort_by(|a, b| compare_tags(b, a));
}
