use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{core::glossary::DuplicatePolicy, render::ReportFormat};

pub const CONFIG_FILE_NAME: &str = ".acrolintrc.json";

/// Parenthesised Roman numerals are numbering ("Part (II)"), not acronyms.
pub const ROMAN_NUMERALS: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV", "XV",
    "XVI", "XVII", "XVIII", "XIX", "XX",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_entry_file")]
    pub entry_file: String,
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_informal_threshold")]
    pub informal_threshold: usize,
    #[serde(default)]
    pub duplicate_definitions: DuplicatePolicy,
    #[serde(default)]
    pub scan_preamble: bool,
    #[serde(default = "default_ignored_acronyms")]
    pub ignored_acronyms: Vec<String>,
    #[serde(default = "default_max_locations")]
    pub max_locations: usize,
    #[serde(default)]
    pub excludes: Vec<String>,
}

fn default_entry_file() -> String {
    "main.tex".to_string()
}

fn default_root_dir() -> String {
    "./".to_string()
}

fn default_output() -> String {
    "acronym_report.html".to_string()
}

fn default_informal_threshold() -> usize {
    crate::core::analyzer::DEFAULT_INFORMAL_THRESHOLD
}

fn default_ignored_acronyms() -> Vec<String> {
    ROMAN_NUMERALS.iter().map(|s| s.to_string()).collect()
}

fn default_max_locations() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_file: default_entry_file(),
            root_dir: default_root_dir(),
            output: default_output(),
            informal_threshold: default_informal_threshold(),
            duplicate_definitions: DuplicatePolicy::default(),
            scan_preamble: false,
            ignored_acronyms: default_ignored_acronyms(),
            max_locations: default_max_locations(),
            excludes: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects zero counts, invalid glob patterns in `excludes` and output
    /// files whose extension has no report format.
    pub fn validate(&self) -> Result<()> {
        if self.informal_threshold == 0 {
            bail!("'informalThreshold' must be at least 1");
        }
        if self.max_locations == 0 {
            bail!("'maxLocations' must be at least 1");
        }

        for pattern in &self.excludes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'excludes': \"{}\"", pattern))?;
        }

        if ReportFormat::from_path(Path::new(&self.output)).is_none() {
            bail!(
                "Unsupported report format for 'output': \"{}\" (expected .html, .htm, .md or .markdown)",
                self.output
            );
        }

        Ok(())
    }

    /// Compiled `excludes` patterns. Call after `validate`.
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.excludes
            .iter()
            .map(|p| {
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'excludes': \"{}\"", p))
            })
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    // A relative start like "." cannot be popped towards its parents.
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.entry_file, "main.tex");
        assert_eq!(config.root_dir, "./");
        assert_eq!(config.output, "acronym_report.html");
        assert_eq!(config.informal_threshold, 2);
        assert_eq!(config.duplicate_definitions, DuplicatePolicy::LastWins);
        assert!(!config.scan_preamble);
        assert_eq!(config.ignored_acronyms.len(), 20);
        assert_eq!(config.max_locations, 5);
        assert!(config.excludes.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "entryFile": "thesis.tex",
              "informalThreshold": 3,
              "duplicateDefinitions": "first-wins",
              "excludes": ["drafts/**"]
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.entry_file, "thesis.tex");
        assert_eq!(config.informal_threshold, 3);
        assert_eq!(config.duplicate_definitions, DuplicatePolicy::FirstWins);
        assert_eq!(config.excludes, vec!["drafts/**"]);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "scanPreamble": true }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert!(config.scan_preamble);
        assert_eq!(config.entry_file, default_entry_file());
        assert_eq!(config.ignored_acronyms, default_ignored_acronyms());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("chapters").join("intro");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path.canonicalize().unwrap()));
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "output": "acronyms.md", "maxLocations": 2 }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.output, "acronyms.md");
        assert_eq!(result.config.max_locations, 2);
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config.entry_file, "main.tex");
    }

    #[test]
    fn test_validate_zero_threshold() {
        let config = Config {
            informal_threshold: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("informalThreshold"));
    }

    #[test]
    fn test_validate_zero_max_locations() {
        let config = Config {
            max_locations: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("maxLocations"));
    }

    #[test]
    fn test_validate_invalid_exclude_pattern() {
        let config = Config {
            excludes: vec!["[invalid".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("excludes"));
    }

    #[test]
    fn test_validate_unsupported_output() {
        let config = Config {
            output: "report.pdf".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("report.pdf"));

        let config = Config {
            output: "report.markdown".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_config_with_invalid_value_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "informalThreshold": 0 }"#,
        )
        .unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"entryFile\": \"main.tex\""));
        assert!(json.contains("\"duplicateDefinitions\": \"last-wins\""));
        assert!(json.contains("\"ignoredAcronyms\""));
        assert!(!json.contains("entry_file"));
    }
}
