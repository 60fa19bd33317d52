use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for nextver.
///
/// Controls the noise-filtering and API-surface heuristics of the commit
/// classifier and the defaults used by the resolver.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,
}

/// Returns the default substrings identifying automation (bot) commits.
fn default_bot_substrings() -> Vec<String> {
    vec![
        "[bot]".to_string(),
        "github".to_string(),
        "ProjectDirector".to_string(),
        "SyncFileContents".to_string(),
    ]
}

/// Returns the default patterns identifying merge/PR bookkeeping commits.
fn default_merge_patterns() -> Vec<String> {
    vec![
        r"^Merge pull request".to_string(),
        r"^Merge branch 'main'".to_string(),
        r"^Updated packages in".to_string(),
        r"^Update .+ package version".to_string(),
    ]
}

/// Returns the default path filter for source diffs.
fn default_source_globs() -> Vec<String> {
    vec!["*.cs".to_string()]
}

/// Configuration for commit classification heuristics.
///
/// Explicit `[major]`/`[minor]`/`[patch]`/`[pre]` markers are fixed; only the
/// noise-detection lists and the diff path filter are tunable.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClassifierConfig {
    #[serde(default = "default_bot_substrings")]
    pub bot_substrings: Vec<String>,

    #[serde(default = "default_merge_patterns")]
    pub merge_patterns: Vec<String>,

    #[serde(default = "default_source_globs")]
    pub source_globs: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            bot_substrings: default_bot_substrings(),
            merge_patterns: default_merge_patterns(),
            source_globs: default_source_globs(),
        }
    }
}

/// Returns the version assumed for repositories that have no tags yet.
fn default_initial_version() -> String {
    "1.0.0".to_string()
}

/// Configuration for version resolution defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolverConfig {
    #[serde(default = "default_initial_version")]
    pub initial_version: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            initial_version: default_initial_version(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            classifier: ClassifierConfig::default(),
            resolver: ResolverConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextver.toml` in current directory
/// 3. `.nextver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./nextver.toml").exists() {
        fs::read_to_string("./nextver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".nextver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classifier_lists() {
        let config = ClassifierConfig::default();
        assert!(config.bot_substrings.contains(&"[bot]".to_string()));
        assert!(config
            .merge_patterns
            .iter()
            .any(|p| p.contains("Merge pull request")));
        assert_eq!(config.source_globs, vec!["*.cs".to_string()]);
    }

    #[test]
    fn test_default_initial_version() {
        let config = Config::default();
        assert_eq!(config.resolver.initial_version, "1.0.0");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
            [resolver]
            initial_version = "0.1.0"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.resolver.initial_version, "0.1.0");
        // Unspecified sections keep their defaults
        assert!(config.classifier.bot_substrings.contains(&"[bot]".to_string()));
    }

    #[test]
    fn test_parse_custom_classifier() {
        let toml_str = r#"
            [classifier]
            bot_substrings = ["renovate"]
            source_globs = ["*.rs"]
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.classifier.bot_substrings, vec!["renovate".to_string()]);
        assert_eq!(config.classifier.source_globs, vec!["*.rs".to_string()]);
        assert!(!config.classifier.merge_patterns.is_empty());
    }
}
