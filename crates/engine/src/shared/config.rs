use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bounds of the synthetic daily revenue draws
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default = "default_min_value")]
    pub min_value: u64,
    #[serde(default = "default_max_value")]
    pub max_value: u64,
    /// Fixed seed for reproducible demo runs; unseeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive when RUST_LOG is unset
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Optional log file, written without ANSI colours
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_min_value() -> u64 {
    15_000
}

fn default_max_value() -> u64 {
    35_000
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_value: default_min_value(),
            max_value: default_max_value(),
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[generator]
min_value = 15000
max_value = 35000

[logging]
filter = "info"
"#;

/// Load configuration
///
/// Search order:
/// 1. Explicit path (from `--config`), which must exist
/// 2. `config.toml` next to the executable
/// 3. Embedded default config
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from: {}", path.display());
        return read_config(path);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return read_config(&config_path);
            } else {
                tracing::debug!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.generator.min_value > config.generator.max_value {
        anyhow::bail!(
            "generator.min_value ({}) exceeds generator.max_value ({})",
            config.generator.min_value,
            config.generator.max_value
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.generator.min_value, 15000);
        assert_eq!(config.generator.max_value, 35000);
        assert_eq!(config.generator.seed, None);
        assert_eq!(config.logging.filter, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, parse_config(DEFAULT_CONFIG).unwrap());

        let config = parse_config("[generator]\nseed = 7\n").unwrap();
        assert_eq!(config.generator.seed, Some(7));
        assert_eq!(config.generator.max_value, 35000);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = parse_config("[generator]\nmin_value = 500\nmax_value = 100\n").unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = Path::new("definitely/not/here/config.toml");
        assert!(load_config(Some(path)).is_err());
    }
}
