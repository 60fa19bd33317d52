//! Version resolution orchestration.
//!
//! Ties tag discovery, commit classification, and version arithmetic into the
//! single entry point of the engine: [VersionResolver::resolve]. Every call
//! recomputes from the collaborator's current answers; no state is kept
//! between calls.

use git2::Oid;

use crate::analyzer::CommitClassifier;
use crate::cancel::CancelToken;
use crate::config::Config;
use crate::domain::{BumpKind, ParsedVersion};
use crate::error::Result;
use crate::git::{CommitRange, Repository};

/// Per-call inputs for a resolution
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Version assumed when the repository has no tags yet; falls back to the
    /// configured default ("1.0.0")
    pub initial_version: Option<String>,
    /// Caller-forced bump kind, bypassing the classifier
    pub forced_bump: Option<BumpKind>,
    /// Cooperative cancellation signal
    pub cancel: CancelToken,
}

/// Outcome of a resolution, consumed by the surrounding release pipeline to
/// decide release/no-release and to label artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionResolution {
    /// Formatted next version
    pub version: String,
    /// Parsed next version
    pub parsed: ParsedVersion,
    /// Tag the resolution was computed against (possibly synthetic)
    pub last_tag: String,
    /// `last_tag` without its leading "v"
    pub last_version: String,
    /// Whether the previous version was a prerelease
    pub was_prerelease: bool,
    /// How the version changed; `Skip` signals "no release this cycle"
    pub bump_kind: BumpKind,
    /// Human-readable classification reason
    pub reason: String,
    /// Root commit of the repository
    pub first_commit: String,
    /// Commit the resolution targets
    pub last_commit: String,
    /// Commit the last tag points at
    pub last_tag_commit: String,
    /// True when no real tag existed and the fallback tag was synthesized
    pub using_fallback_tag: bool,
    /// Analyzed range in `{from}..{to}` notation
    pub commit_range: String,
}

/// Orchestrates tag discovery, classification, and version arithmetic.
pub struct VersionResolver {
    classifier: CommitClassifier,
    initial_version: String,
}

impl VersionResolver {
    pub fn new(config: Config) -> Self {
        VersionResolver {
            classifier: CommitClassifier::new(config.classifier),
            initial_version: config.resolver.initial_version,
        }
    }

    /// Use a pre-built classifier (custom API-surface detection strategy)
    pub fn with_classifier(classifier: CommitClassifier, initial_version: impl Into<String>) -> Self {
        VersionResolver {
            classifier,
            initial_version: initial_version.into(),
        }
    }

    /// Resolve the next version for everything reachable from
    /// `current_commit` since the newest tag.
    ///
    /// "No data" conditions (no tags, untagged commit, empty diff) degrade to
    /// documented defaults; only cancellation aborts.
    pub fn resolve<R: Repository>(
        &self,
        repo: &R,
        current_commit: Oid,
        options: &ResolveOptions,
    ) -> Result<VersionResolution> {
        options.cancel.check()?;
        let tags = repo.list_tags()?;

        let (last_tag, using_fallback_tag) = match tags.first() {
            Some(tag) => (tag.clone(), false),
            None => {
                let initial = options
                    .initial_version
                    .as_deref()
                    .unwrap_or(&self.initial_version);
                (format!("v{}-pre.0", initial), true)
            }
        };

        let previous = ParsedVersion::parse(&last_tag);

        options.cancel.check()?;
        let first_commit = repo.first_commit()?;

        // The fallback tag anchors at the first commit; so does any tag whose
        // commit cannot be resolved.
        let last_tag_commit = if using_fallback_tag {
            first_commit
        } else {
            options.cancel.check()?;
            repo.resolve_tag_commit(&last_tag)?.unwrap_or(first_commit)
        };

        let range = CommitRange::new(last_tag_commit, current_commit);

        let (bump_kind, reason) = match options.forced_bump {
            Some(kind) => (kind, "forced".to_string()),
            None => self.classifier.classify(repo, &range, &options.cancel)?,
        };

        // Skip leaves the previous version untouched; bump() is the identity
        // for it, so the output equals the previous version verbatim.
        let parsed = previous.bump(bump_kind);

        Ok(VersionResolution {
            version: parsed.to_string(),
            last_version: last_tag
                .trim_start_matches('v')
                .trim_start_matches('V')
                .to_string(),
            last_tag,
            was_prerelease: previous.is_prerelease,
            bump_kind,
            reason,
            first_commit: first_commit.to_string(),
            last_commit: current_commit.to_string(),
            last_tag_commit: last_tag_commit.to_string(),
            using_fallback_tag,
            commit_range: range.to_string(),
            parsed,
        })
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        VersionResolver::new(Config::default())
    }
}
