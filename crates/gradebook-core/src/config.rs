//! Gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_DATA_FILE;

/// Environment variable that overrides the configured data file.
pub const DATA_FILE_ENV: &str = "GRADEBOOK_DATA_FILE";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// JSON document holding students and courses.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Save after every mutating command.
    #[serde(default = "default_true")]
    pub autosave: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_true() -> bool {
    true
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            autosave: true,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Expanded values are inserted as-is and never rescanned.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// An explicit path must exist. Without one the search order is:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// Defaults apply when neither exists. `GRADEBOOK_DATA_FILE` overrides
/// `data_file` in every case.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    if let Ok(file) = std::env::var(DATA_FILE_ENV) {
        if !file.is_empty() {
            config.data_file = PathBuf::from(file);
        }
    }

    config.data_file = PathBuf::from(resolve_env_vars(&config.data_file.to_string_lossy()));

    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<GradebookConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_GRADEBOOK_TEST_VAR", "term1");
        assert_eq!(resolve_env_vars("${_GRADEBOOK_TEST_VAR}"), "term1");
        assert_eq!(
            resolve_env_vars("data/${_GRADEBOOK_TEST_VAR}.json"),
            "data/term1.json"
        );
        assert_eq!(resolve_env_vars("no-vars.json"), "no-vars.json");
        assert_eq!(resolve_env_vars("broken${"), "broken${");
        std::env::remove_var("_GRADEBOOK_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_rescan_values() {
        std::env::set_var("_GRADEBOOK_SELF_REF", "${_GRADEBOOK_SELF_REF}");
        assert_eq!(
            resolve_env_vars("a/${_GRADEBOOK_SELF_REF}/b"),
            "a/${_GRADEBOOK_SELF_REF}/b"
        );
        std::env::remove_var("_GRADEBOOK_SELF_REF");
        assert_eq!(resolve_env_vars("${_GRADEBOOK_UNSET_VAR}x"), "x");
    }

    #[test]
    fn default_config() {
        let config = GradebookConfig::default();
        assert_eq!(config.data_file, PathBuf::from("gradebook_data.json"));
        assert!(config.autosave);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config("autosave = false\n").unwrap();
        assert!(!config.autosave);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));

        let config = parse_config("data_file = \"records/term.json\"\n").unwrap();
        assert_eq!(config.data_file, PathBuf::from("records/term.json"));
        assert!(config.autosave);
    }

    #[test]
    fn parse_invalid_config() {
        assert!(parse_config("autosave = \"sometimes\"").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradebook.toml");
        std::fs::write(&path, "data_file = \"books/main.json\"\nautosave = false\n").unwrap();

        std::env::remove_var(DATA_FILE_ENV);
        let config = load_config_from(Some(&path)).unwrap();
        assert!(!config.autosave);
        assert_eq!(config.data_file, PathBuf::from("books/main.json"));
    }
}
