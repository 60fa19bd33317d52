use regex::Regex;

use crate::analyzer::{ApiChangeDetector, KeywordApiDetector};
use crate::cancel::CancelToken;
use crate::config::ClassifierConfig;
use crate::domain::BumpKind;
use crate::error::Result;
use crate::git::{CommitRange, Repository};

/// Explicit subject markers, strongest first
const MARKERS: [(&str, BumpKind); 4] = [
    ("[major]", BumpKind::Major),
    ("[minor]", BumpKind::Minor),
    ("[patch]", BumpKind::Patch),
    ("[pre]", BumpKind::Prerelease),
];

/// Classifies a commit range into a bump kind and a human-readable reason.
///
/// Explicit author intent (subject markers) always overrides inference;
/// inference falls back to an API-diff heuristic only when commits carry no
/// marker and are not pure automation noise.
pub struct CommitClassifier {
    bot_substrings: Vec<String>,
    merge_patterns: Vec<Regex>,
    source_globs: Vec<String>,
    detector: Box<dyn ApiChangeDetector>,
}

impl CommitClassifier {
    /// Create a classifier with the default keyword-based API detector
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_detector(config, Box::new(KeywordApiDetector::new()))
    }

    /// Create a classifier with a custom API-surface detection strategy
    pub fn with_detector(config: ClassifierConfig, detector: Box<dyn ApiChangeDetector>) -> Self {
        let bot_substrings = config
            .bot_substrings
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        let merge_patterns = config
            .merge_patterns
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect();

        CommitClassifier {
            bot_substrings,
            merge_patterns,
            source_globs: config.source_globs,
            detector,
        }
    }

    /// Classify a commit range.
    ///
    /// Strict priority, first match wins:
    /// 1. empty range
    /// 2. every subject flagged `[skip ci]`/`[ci skip]`
    /// 3. any `[major]` marker
    /// 4. first-occurring `[minor]`/`[patch]`/`[pre]`, strongest wins
    /// 5. noise/meaningful partition with an API-surface diff heuristic
    pub fn classify<R: Repository>(
        &self,
        repo: &R,
        range: &CommitRange,
        cancel: &CancelToken,
    ) -> Result<(BumpKind, String)> {
        cancel.check()?;
        let commits = repo.list_commits(range)?;
        let subjects: Vec<&str> = commits.iter().map(|c| c.subject.as_str()).collect();

        if subjects.is_empty() {
            return Ok((BumpKind::Skip, "no commits found".to_string()));
        }

        if subjects.iter().all(|subject| is_skip_ci(subject)) {
            return Ok((
                BumpKind::Skip,
                "all commits flagged [skip ci]".to_string(),
            ));
        }

        // [major] wins over every other marker regardless of position
        if subjects
            .iter()
            .any(|subject| contains_marker(subject, "[major]"))
        {
            return Ok((BumpKind::Major, "explicit [major] marker".to_string()));
        }

        if let Some((kind, marker)) = self.first_markers(&subjects) {
            return Ok((kind, format!("explicit {} marker", marker)));
        }

        let meaningful: Vec<&&str> = subjects
            .iter()
            .filter(|subject| !self.is_noise(subject))
            .collect();

        if meaningful.is_empty() {
            return Ok((
                BumpKind::Prerelease,
                "no significant changes detected".to_string(),
            ));
        }

        cancel.check()?;
        let diff = repo.diff(range, &self.source_globs)?;

        if self.detector.api_surface_changed(&diff) {
            Ok((BumpKind::Minor, "public API surface changed".to_string()))
        } else {
            Ok((
                BumpKind::Patch,
                "code changes without API surface impact".to_string(),
            ))
        }
    }

    /// Single pass recording the first occurrence of each non-major marker,
    /// then resolving by fixed priority Minor > Patch > Prerelease.
    fn first_markers(&self, subjects: &[&str]) -> Option<(BumpKind, &'static str)> {
        let mut found: Vec<(BumpKind, &'static str)> = Vec::new();

        for subject in subjects {
            for &(marker, kind) in MARKERS.iter().skip(1) {
                if found.iter().any(|&(seen, _)| seen == kind) {
                    continue;
                }
                if contains_marker(subject, marker) {
                    found.push((kind, marker));
                }
            }
        }

        let strongest =
            BumpKind::strongest(&found.iter().map(|(kind, _)| *kind).collect::<Vec<_>>())?;
        found.into_iter().find(|(kind, _)| *kind == strongest)
    }

    /// True for automation output: bot commits and merge/PR bookkeeping
    fn is_noise(&self, subject: &str) -> bool {
        let lowered = subject.to_lowercase();
        if self
            .bot_substrings
            .iter()
            .any(|substring| lowered.contains(substring))
        {
            return true;
        }

        self.merge_patterns
            .iter()
            .any(|pattern| pattern.is_match(subject))
    }
}

fn is_skip_ci(subject: &str) -> bool {
    let lowered = subject.to_lowercase();
    lowered.contains("[skip ci]") || lowered.contains("[ci skip]")
}

fn contains_marker(subject: &str, marker: &str) -> bool {
    subject.to_lowercase().contains(marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;
    use crate::git::MockRepository;
    use git2::Oid;

    fn classify(repo: &MockRepository) -> (BumpKind, String) {
        let classifier = CommitClassifier::new(ClassifierConfig::default());
        let range = CommitRange::new(Oid::zero(), Oid::zero());
        classifier
            .classify(repo, &range, &CancelToken::new())
            .unwrap()
    }

    #[test]
    fn test_empty_range_is_skip() {
        let repo = MockRepository::new();
        let (kind, reason) = classify(&repo);
        assert_eq!(kind, BumpKind::Skip);
        assert!(reason.contains("no commits found"));
    }

    #[test]
    fn test_all_skip_ci_is_skip() {
        let mut repo = MockRepository::new();
        repo.add_subject("chore: bump [skip ci]");
        repo.add_subject("docs update [CI SKIP]");
        let (kind, _) = classify(&repo);
        assert_eq!(kind, BumpKind::Skip);
    }

    #[test]
    fn test_skip_ci_dominates_markers() {
        let mut repo = MockRepository::new();
        repo.add_subject("release prep [major] [skip ci]");
        let (kind, _) = classify(&repo);
        assert_eq!(kind, BumpKind::Skip);
    }

    #[test]
    fn test_major_marker() {
        let mut repo = MockRepository::new();
        repo.add_subject("fix typo");
        repo.add_subject("Breaking change [major]");
        let (kind, _) = classify(&repo);
        assert_eq!(kind, BumpKind::Major);
    }

    #[test]
    fn test_major_beats_minor() {
        let mut repo = MockRepository::new();
        repo.add_subject("new feature [minor]");
        repo.add_subject("rework [major]");
        let (kind, _) = classify(&repo);
        assert_eq!(kind, BumpKind::Major);
    }

    #[test]
    fn test_minor_beats_patch() {
        let mut repo = MockRepository::new();
        repo.add_subject("bugfix [patch]");
        repo.add_subject("feature [minor]");
        let (kind, _) = classify(&repo);
        assert_eq!(kind, BumpKind::Minor);
    }

    #[test]
    fn test_patch_beats_pre() {
        let mut repo = MockRepository::new();
        repo.add_subject("iterate [pre]");
        repo.add_subject("bugfix [patch]");
        let (kind, _) = classify(&repo);
        assert_eq!(kind, BumpKind::Patch);
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        for subject in ["go [MAJOR]", "go [Major]", "go [major]"] {
            let mut repo = MockRepository::new();
            repo.add_subject(subject);
            let (kind, _) = classify(&repo);
            assert_eq!(kind, BumpKind::Major, "subject: {}", subject);
        }
    }

    #[test]
    fn test_meaningful_commits_with_api_change_is_minor() {
        let mut repo = MockRepository::new();
        repo.add_subject("Add payment gateway");
        repo.set_diff("+public class PaymentGateway\n");
        let (kind, reason) = classify(&repo);
        assert_eq!(kind, BumpKind::Minor);
        assert!(reason.contains("API surface"));
    }

    #[test]
    fn test_meaningful_commits_without_api_change_is_patch() {
        let mut repo = MockRepository::new();
        repo.add_subject("Tune retry delay");
        repo.set_diff("-        var delay = 100;\n+        var delay = 250;\n");
        let (kind, _) = classify(&repo);
        assert_eq!(kind, BumpKind::Patch);
    }

    #[test]
    fn test_pure_noise_is_prerelease() {
        let mut repo = MockRepository::new();
        repo.add_subject("Merge pull request #42 from org/feature");
        repo.add_subject("Updated packages in src [bot]");
        let (kind, reason) = classify(&repo);
        assert_eq!(kind, BumpKind::Prerelease);
        assert!(reason.contains("no significant changes"));
    }

    #[test]
    fn test_package_version_update_is_noise() {
        let mut repo = MockRepository::new();
        repo.add_subject("Update Newtonsoft.Json package version");
        let (kind, _) = classify(&repo);
        assert_eq!(kind, BumpKind::Prerelease);
    }

    #[test]
    fn test_cancelled_classification_aborts() {
        let mut repo = MockRepository::new();
        repo.add_subject("anything");
        let classifier = CommitClassifier::new(ClassifierConfig::default());
        let range = CommitRange::new(Oid::zero(), Oid::zero());
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = classifier.classify(&repo, &range, &cancel).unwrap_err();
        assert!(err.is_cancelled());
    }
}
