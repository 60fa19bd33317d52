use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

use crate::domain::CommitRecord;
use crate::error::{NextverError, Result};
use crate::git::{sort_tags_descending, CommitRange};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// OID of the current HEAD commit
    pub fn head_commit(&self) -> Result<Oid> {
        let head = self.repo.head()?;
        head.target()
            .ok_or_else(|| NextverError::tag("HEAD is detached or invalid"))
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        sort_tags_descending(&mut names);

        Ok(names)
    }

    fn resolve_tag_commit(&self, tag: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", tag);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                // Peels annotated tags through to their commit
                let commit = reference
                    .peel_to_commit()
                    .map_err(|e| NextverError::tag(format!("Cannot peel tag '{}': {}", tag, e)))?;

                Ok(Some(commit.id()))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(NextverError::tag(format!(
                "Cannot find tag '{}': {}",
                tag, e
            ))),
        }
    }

    fn first_commit(&self) -> Result<Oid> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::REVERSE)?;

        match revwalk.next() {
            Some(oid) => Ok(oid?),
            None => Err(NextverError::tag("repository has no commits")),
        }
    }

    fn list_commits(&self, range: &CommitRange) -> Result<Vec<CommitRecord>> {
        if range.is_empty() {
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(range.to)?;

        // A missing lower bound degrades to "everything reachable from to"
        if self.repo.find_commit(range.from).is_ok() {
            revwalk.hide(range.from)?;
        }

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let subject = commit.summary().unwrap_or("(empty message)").to_string();
            let author = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(CommitRecord {
                short_hash: oid.to_string()[..7].to_string(),
                subject,
                author_name: author,
            });
        }

        // Chronological order, oldest first
        commits.reverse();
        Ok(commits)
    }

    fn diff(&self, range: &CommitRange, path_globs: &[String]) -> Result<String> {
        if range.is_empty() {
            return Ok(String::new());
        }

        let from_tree = match self.repo.find_commit(range.from) {
            Ok(commit) => Some(commit.tree()?),
            Err(_) => None,
        };
        let to_tree = self.repo.find_commit(range.to)?.tree()?;

        let mut options = git2::DiffOptions::new();
        for glob in path_globs {
            options.pathspec(glob);
        }

        let diff = self.repo.diff_tree_to_tree(
            from_tree.as_ref(),
            Some(&to_tree),
            Some(&mut options),
        )?;

        let mut text = String::new();
        diff.print(git2::DiffFormat::Patch, |_delta, _hunk, line| {
            match line.origin() {
                '+' | '-' | ' ' => {
                    text.push(line.origin());
                    text.push_str(std::str::from_utf8(line.content()).unwrap_or(""));
                }
                _ => {}
            }
            true
        })?;

        Ok(text)
    }
}

// SAFETY: Git2Repository wraps git2::Repository, whose read operations are
// thread-safe via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
