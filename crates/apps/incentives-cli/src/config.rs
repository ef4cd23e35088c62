//! CLI configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::CliResult;

/// CLI configuration loaded from TOML, with flag overrides applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Node JSON-RPC endpoint.
    pub node: String,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Block height to pin queries to. Flag-only, never read from file.
    #[serde(skip)]
    pub height: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            node: default_node(),
            timeout_secs: default_timeout(),
            height: None,
        }
    }
}

fn default_node() -> String {
    "http://127.0.0.1:8545".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl CliConfig {
    /// Load configuration from a file. A missing file yields defaults.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Resolve the effective configuration for one invocation:
    /// defaults, then the config file, then command-line flags.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        let mut config = Self::load(&path)?;
        if let Some(ref node) = cli.node {
            config.node = node.clone();
        }
        config.height = cli.height;
        Ok(config)
    }
}

/// Get the default config file path.
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "incq")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("incq.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.node, "http://127.0.0.1:8545");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.height, None);
    }

    #[test]
    fn test_default_config_path() {
        let path = default_config_path();
        assert!(path.ends_with("config.toml") || path.ends_with("incq.toml"));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let path = Path::new("/tmp/incq_nonexistent_12345/config.toml");
        let config = CliConfig::load(path).unwrap();
        assert_eq!(config.node, CliConfig::default().node);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "node = \"https://node.example:8545\"\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.node, "https://node.example:8545");
        // Missing fields fall back to defaults
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();

        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn test_resolve_flag_overrides_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "node = \"https://node.example:8545\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "incq",
            "params",
            "--config",
            path.to_str().unwrap(),
            "--node",
            "http://10.0.0.1:8545",
            "--height",
            "77",
        ])
        .unwrap();

        let config = CliConfig::resolve(&cli).unwrap();
        assert_eq!(config.node, "http://10.0.0.1:8545");
        assert_eq!(config.height, Some(77));
    }

    #[test]
    fn test_resolve_uses_file_when_no_flag() {
        std::env::remove_var("INCQ_NODE");

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "node = \"https://node.example:8545\"\ntimeout_secs = 30\n")
            .unwrap();

        let cli =
            Cli::try_parse_from(["incq", "params", "--config", path.to_str().unwrap()]).unwrap();

        let config = CliConfig::resolve(&cli).unwrap();
        assert_eq!(config.node, "https://node.example:8545");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.height, None);
    }
}
