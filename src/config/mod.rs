pub mod schema;

pub use schema::AgentConfig;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default artifex home directory (~/.artifex).
pub fn default_home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|d| d.home_dir().join(".artifex"))
        .unwrap_or_else(|| PathBuf::from(".artifex"))
}

/// Default config file path (~/.artifex/artifex.toml).
pub fn default_config_path() -> PathBuf {
    default_home_dir().join("artifex.toml")
}

/// Resolve a path that may contain `~`.
pub fn resolve_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Load config from the given path, or return defaults.
pub fn load_config(path: &Path) -> Result<AgentConfig> {
    if path.exists() {
        let contents =
            std::fs::read_to_string(path).context("Failed to read artifex config file")?;
        let config: AgentConfig =
            toml::from_str(&contents).context("Failed to parse artifex config (TOML)")?;
        Ok(config)
    } else {
        Ok(AgentConfig::default())
    }
}

/// Save config to the given path (TOML format).
pub fn save_config(config: &AgentConfig, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents).context("Failed to write config file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_iterations, 5);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifex.toml");

        let config = AgentConfig {
            model: "gpt-4o-mini".into(),
            max_iterations: 3,
            ..AgentConfig::default()
        };
        save_config(&config, &path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.model, "gpt-4o-mini");
        assert_eq!(loaded.max_iterations, 3);
        assert_eq!(loaded.api_base_url, config.api_base_url);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artifex.toml");
        std::fs::write(&path, "model = \"local-llama\"\n").unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.model, "local-llama");
        assert_eq!(loaded.max_tokens, 1024);
    }

    #[test]
    fn effective_system_prompt_falls_back_to_builtin() {
        let config = AgentConfig::default();
        assert!(config
            .effective_system_prompt()
            .contains("function calling capabilities"));

        let custom = AgentConfig {
            system_prompt: "Be terse.".into(),
            ..AgentConfig::default()
        };
        assert_eq!(custom.effective_system_prompt(), "Be terse.");
    }
}
