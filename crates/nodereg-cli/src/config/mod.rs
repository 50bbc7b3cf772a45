//! Configuration management.
//!
//! The signing credential is never stored here; it comes from
//! `SOLANA_PRIVATE_KEY` or `--private-key` only.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use nodereg::solana_sdk::commitment_config::CommitmentConfig;
use nodereg::solana_sdk::pubkey::Pubkey;
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "NODEREG_CONFIG";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON-RPC endpoint.
    pub endpoint: Option<String>,

    /// Registry program id (base58).
    pub program_id: Option<String>,

    /// Commitment level: processed, confirmed or finalized.
    pub commitment: Option<String>,

    /// Seconds to wait for a registration to be confirmed.
    pub confirm_timeout_secs: Option<u64>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("network", "netsepio", "nodereg")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Set a key from its string form, validating the value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" | "rpc_url" => self.endpoint = Some(value.to_string()),
            "program_id" => {
                parse_program_id(value)?;
                self.program_id = Some(value.to_string());
            }
            "commitment" => {
                parse_commitment(value)?;
                self.commitment = Some(value.to_lowercase());
            }
            "confirm_timeout_secs" | "confirm_timeout" => {
                self.confirm_timeout_secs = Some(value.parse()?);
            }
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 endpoint             - JSON-RPC endpoint URL\n  \
                 program_id           - Registry program id (base58)\n  \
                 commitment           - processed/confirmed/finalized\n  \
                 confirm_timeout_secs - Seconds to wait for confirmation\n  \
                 output_format        - Default output format (pretty/json/yaml)",
                key
            ),
        }
        Ok(())
    }

    /// Commitment from the file, `confirmed` when unset.
    pub fn commitment(&self) -> Result<CommitmentConfig> {
        self.commitment
            .as_deref()
            .map_or_else(|| Ok(CommitmentConfig::confirmed()), parse_commitment)
    }

    /// Confirmation timeout from the file, if set.
    pub fn confirm_timeout(&self) -> Option<Duration> {
        self.confirm_timeout_secs.map(Duration::from_secs)
    }
}

/// Parse a base58 program id.
pub fn parse_program_id(value: &str) -> Result<Pubkey> {
    value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid program id {value}: {e}"))
}

/// Parse a commitment level name.
pub fn parse_commitment(value: &str) -> Result<CommitmentConfig> {
    match value.to_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        _ => anyhow::bail!(
            "Unknown commitment: {}\n\
             Valid levels: processed, confirmed, finalized",
            value
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_validates_values() {
        let mut config = Config::default();

        config.set("commitment", "Finalized").unwrap();
        assert_eq!(config.commitment().unwrap(), CommitmentConfig::finalized());

        config.set("output", "json").unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));

        config.set("confirm_timeout", "90").unwrap();
        assert_eq!(config.confirm_timeout(), Some(Duration::from_secs(90)));

        assert!(config.set("commitment", "eventually").is_err());
        assert!(config.set("program_id", "not-base58!").is_err());
        assert!(config.set("private_key", "x").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.set("endpoint", "http://127.0.0.1:8899").unwrap();
        config
            .set("program_id", "3ypCkXQWiAFkNk7bo8bnZFxUVmVEWCqpBoY7v4vgPnHJ")
            .unwrap();

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn unset_commitment_is_confirmed() {
        assert_eq!(
            Config::default().commitment().unwrap(),
            CommitmentConfig::confirmed()
        );
    }
}
