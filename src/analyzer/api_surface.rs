use regex::Regex;

/// Predicate deciding whether a diff touches the public API surface.
///
/// The detection is inherently heuristic and source-language-coupled, so it
/// lives behind a trait; the classifier's priority logic stays
/// language-independent.
pub trait ApiChangeDetector: Send + Sync {
    fn api_surface_changed(&self, diff: &str) -> bool;
}

/// Keyword-based detector matching added/removed declaration lines.
///
/// Flags top-level type declarations (class/interface/enum/struct/record)
/// and public/protected methods, property blocks, and constants. Each
/// pattern anchors on the diff's `+`/`-` origin column so context lines
/// never match.
pub struct KeywordApiDetector {
    patterns: Vec<Regex>,
}

impl KeywordApiDetector {
    pub fn new() -> Self {
        let sources = [
            // type declarations
            r"(?m)^[+-][ \t]*(?:(?:public|internal|protected|private|abstract|sealed|static|partial)[ \t]+)*(?:class|interface|enum|struct|record)[ \t]+\w+",
            // public/protected members: methods, property blocks, constants
            r"(?m)^[+-][ \t]*(?:public|protected)[ \t]+(?:(?:static|virtual|override|abstract|async|sealed|readonly|const|unsafe|extern|new|partial)[ \t]+)*\w[\w<>\[\],\.\? \t]*?[ \t]+\w+[ \t]*[({=]",
        ];

        let patterns = sources
            .iter()
            .filter_map(|source| Regex::new(source).ok())
            .collect();

        KeywordApiDetector { patterns }
    }
}

impl Default for KeywordApiDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiChangeDetector for KeywordApiDetector {
    fn api_surface_changed(&self, diff: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(diff))
    }
}
