use std::fmt;

/// Classification of how a version must change for a commit range.
///
/// `Skip` means "no release this cycle" and is decided before any of the
/// other kinds; the remaining kinds carry a strength used only to resolve
/// multiple co-occurring explicit markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Skip,
    Prerelease,
    Patch,
    Minor,
    Major,
}

impl BumpKind {
    /// Relative strength of a bump for marker conflict resolution.
    ///
    /// Only meaningful between explicit markers; `Skip` is exclusive and is
    /// never compared against the others.
    fn strength(self) -> u8 {
        match self {
            BumpKind::Skip => 0,
            BumpKind::Prerelease => 1,
            BumpKind::Patch => 2,
            BumpKind::Minor => 3,
            BumpKind::Major => 4,
        }
    }

    /// Resolve co-occurring explicit markers to the strongest one.
    ///
    /// Returns `None` when no marker was seen at all, letting the caller fall
    /// through to heuristic classification.
    pub fn strongest(candidates: &[BumpKind]) -> Option<BumpKind> {
        candidates
            .iter()
            .copied()
            .max_by_key(|kind| kind.strength())
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Skip => "skip",
            BumpKind::Prerelease => "prerelease",
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strongest_prefers_major() {
        let resolved = BumpKind::strongest(&[BumpKind::Minor, BumpKind::Major, BumpKind::Patch]);
        assert_eq!(resolved, Some(BumpKind::Major));
    }

    #[test]
    fn test_strongest_minor_over_patch() {
        let resolved = BumpKind::strongest(&[BumpKind::Patch, BumpKind::Minor]);
        assert_eq!(resolved, Some(BumpKind::Minor));
    }

    #[test]
    fn test_strongest_patch_over_prerelease() {
        let resolved = BumpKind::strongest(&[BumpKind::Prerelease, BumpKind::Patch]);
        assert_eq!(resolved, Some(BumpKind::Patch));
    }

    #[test]
    fn test_strongest_empty_is_none() {
        assert_eq!(BumpKind::strongest(&[]), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(BumpKind::Major.to_string(), "major");
        assert_eq!(BumpKind::Skip.to_string(), "skip");
    }
}
