// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management - data directory resolution and the
//! operator allow-list

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Operator emails allowed to run data commands. Compared trimmed and
    /// case-insensitively, exactly like the source's login gate: no
    /// sessions, no tokens, no hashing. An empty list leaves the gate
    /// open so a fresh install is usable.
    pub allowed_operators: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            allowed_operators: Vec::new(),
        }
    }
}

impl Config {
    /// Whether `operator` may run data commands.
    #[must_use]
    pub fn is_authorized(&self, operator: &str) -> bool {
        if self.allowed_operators.is_empty() {
            return true;
        }
        let operator = operator.trim();
        self.allowed_operators
            .iter()
            .any(|allowed| allowed.trim().eq_ignore_ascii_case(operator))
    }
}

/// Load configuration from `config.toml` in the data directory, falling
/// back to defaults when the file does not exist.
pub fn load(data_dir: &Path) -> Result<Config> {
    let path = data_dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write configuration to `config.toml` in the data directory.
pub fn save(config: &Config, data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create directory {}", data_dir.display()))?;
    let path = data_dir.join(CONFIG_FILE);
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Resolve the data directory: explicit value first (flag or env, wired
/// through clap), then the platform data dir, then `.musterbook` under
/// the current directory.
#[must_use]
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    directories::ProjectDirs::from("org", "hyperpolymath", "musterbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(".musterbook")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_allow_list_is_open() {
        let config = Config::default();
        assert!(config.is_authorized("anyone@example.org"));
        assert!(config.is_authorized(""));
    }

    #[test]
    fn test_allow_list_folds_case_and_whitespace() {
        let config = Config {
            allowed_operators: vec!["Inspector@Example.org".into()],
            ..Config::default()
        };
        assert!(config.is_authorized("inspector@example.org"));
        assert!(config.is_authorized("  INSPECTOR@EXAMPLE.ORG  "));
        assert!(!config.is_authorized("constable@example.org"));
    }

    #[test]
    fn test_load_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            log_level: "debug".into(),
            allowed_operators: vec!["a@b.c".into(), "d@e.f".into()],
        };
        save(&config, dir.path()).unwrap();
        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.allowed_operators, config.allowed_operators);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = load(dir.path()).unwrap();
        assert_eq!(loaded.log_level, "info");
        assert!(loaded.allowed_operators.is_empty());
    }
}
