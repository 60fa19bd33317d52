use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

use crate::domain::BumpKind;

/// Default qualifier used when a prerelease carries no recognizable label
pub const DEFAULT_PRERELEASE_LABEL: &str = "pre";

/// Semantic version parsed from a git tag, including prerelease state.
///
/// `prerelease_number` is meaningful only while `is_prerelease` is true; the
/// label is kept even on stable versions so a later prerelease cycle can
/// inherit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub is_prerelease: bool,
    pub prerelease_label: String,
    pub prerelease_number: u32,
}

impl ParsedVersion {
    /// Create a stable version
    pub fn stable(major: u32, minor: u32, patch: u32) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            is_prerelease: false,
            prerelease_label: DEFAULT_PRERELEASE_LABEL.to_string(),
            prerelease_number: 0,
        }
    }

    /// Create a prerelease version
    pub fn prerelease(major: u32, minor: u32, patch: u32, label: &str, number: u32) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            is_prerelease: true,
            prerelease_label: label.to_string(),
            prerelease_number: number,
        }
    }

    /// Parse a version from a tag string (e.g., "v1.2.3" or "v1.2.3-pre.4").
    ///
    /// Total: never fails. Unparseable or missing numeric fields degrade to 0,
    /// a missing prerelease label degrades to "pre", a missing counter to 0.
    pub fn parse(tag: &str) -> Self {
        // Remove 'v' or 'V' prefix
        let clean_tag = tag.trim_start_matches('v').trim_start_matches('V');

        let is_prerelease = clean_tag.contains('-');

        // Strip a "-{alpha|beta|rc|pre}..." suffix to recover the bare triple
        let bare = Regex::new(r"-(?:alpha|beta|rc|pre).*$")
            .ok()
            .map(|re| re.replace(clean_tag, "").into_owned())
            .unwrap_or_else(|| clean_tag.to_string());

        let mut numbers = bare.split('.').map(|part| part.parse::<u32>().unwrap_or(0));
        let major = numbers.next().unwrap_or(0);
        let minor = numbers.next().unwrap_or(0);
        let patch = numbers.next().unwrap_or(0);

        if !is_prerelease {
            return ParsedVersion::stable(major, minor, patch);
        }

        let (label, number) = parse_prerelease_suffix(clean_tag);
        ParsedVersion::prerelease(major, minor, patch, &label, number)
    }

    /// Apply a bump kind, producing the next version.
    ///
    /// `Patch` on a prerelease promotes it to stable without touching the
    /// patch number (finish the cycle and ship); `Prerelease` on a stable
    /// version starts a new cycle at patch+1 with the inherited label.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Skip => self.clone(),
            BumpKind::Major => ParsedVersion {
                major: self.major + 1,
                minor: 0,
                patch: 0,
                is_prerelease: false,
                prerelease_label: self.prerelease_label.clone(),
                prerelease_number: 0,
            },
            BumpKind::Minor => ParsedVersion {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
                is_prerelease: false,
                prerelease_label: self.prerelease_label.clone(),
                prerelease_number: 0,
            },
            BumpKind::Patch => ParsedVersion {
                major: self.major,
                minor: self.minor,
                patch: if self.is_prerelease {
                    self.patch
                } else {
                    self.patch + 1
                },
                is_prerelease: false,
                prerelease_label: self.prerelease_label.clone(),
                prerelease_number: 0,
            },
            BumpKind::Prerelease => {
                if self.is_prerelease {
                    ParsedVersion {
                        prerelease_number: self.prerelease_number + 1,
                        ..self.clone()
                    }
                } else {
                    ParsedVersion {
                        major: self.major,
                        minor: self.minor,
                        patch: self.patch + 1,
                        is_prerelease: true,
                        prerelease_label: self.prerelease_label.clone(),
                        prerelease_number: 1,
                    }
                }
            }
        }
    }

    /// Version-aware precedence comparison, prerelease suffixes included.
    ///
    /// A stable version ranks above any prerelease of the same triple;
    /// prerelease labels rank alpha < beta < rc < pre.
    pub fn cmp_precedence(&self, other: &ParsedVersion) -> Ordering {
        let triple = (self.major, self.minor, self.patch);
        let other_triple = (other.major, other.minor, other.patch);
        triple
            .cmp(&other_triple)
            .then_with(|| other.is_prerelease.cmp(&self.is_prerelease))
            .then_with(|| {
                if self.is_prerelease && other.is_prerelease {
                    label_rank(&self.prerelease_label)
                        .cmp(&label_rank(&other.prerelease_label))
                        .then(self.prerelease_number.cmp(&other.prerelease_number))
                } else {
                    Ordering::Equal
                }
            })
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prerelease {
            write!(
                f,
                "{}.{}.{}-{}.{}",
                self.major, self.minor, self.patch, self.prerelease_label, self.prerelease_number
            )
        } else {
            write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
        }
    }
}

/// Recover the label and counter from a "-{label}.{number}" suffix.
///
/// Falls back to a bare "-{label}" (counter 0) and finally to the default
/// label with counter 0 when nothing matches.
fn parse_prerelease_suffix(tag: &str) -> (String, u32) {
    if let Some(captures) = Regex::new(r"-([A-Za-z][0-9A-Za-z]*)\.(\d+)")
        .ok()
        .and_then(|re| re.captures(tag))
    {
        let label = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_PRERELEASE_LABEL.to_string());
        let number = captures
            .get(2)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0);
        return (label, number);
    }

    if let Some(captures) = Regex::new(r"-([A-Za-z][0-9A-Za-z]*)")
        .ok()
        .and_then(|re| re.captures(tag))
    {
        if let Some(label) = captures.get(1) {
            return (label.as_str().to_string(), 0);
        }
    }

    (DEFAULT_PRERELEASE_LABEL.to_string(), 0)
}

/// Ordering rank of a prerelease label relative to its release
fn label_rank(label: &str) -> u8 {
    match label {
        "alpha" => 0,
        "beta" => 1,
        "rc" => 2,
        _ => 3,
    }
}
