//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use nodereg::VpnNodeAccount;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

impl OutputFormat {
    /// Print `value` in a machine-readable format.
    ///
    /// Returns false for [`OutputFormat::Pretty`], leaving the rendering to
    /// the caller.
    pub fn print_structured<T: Serialize>(self, value: &T) -> Result<bool> {
        match self {
            Self::Json => println!("{}", serde_json::to_string_pretty(value)?),
            Self::Yaml => print!("{}", serde_yaml::to_string(value)?),
            Self::Pretty => return Ok(false),
        }
        Ok(true)
    }
}

/// Print the fields of a node record, indented under a heading.
pub fn print_account_pretty(account: &VpnNodeAccount) {
    let details = &account.details;
    println!("  {} {}", "Node ID:".bold(), account.node_id);
    println!("  {} {}", "Owner:".bold(), account.owner);
    println!("  {} {}", "Identity:".bold(), details.identity);
    println!("  {} {}", "Name:".bold(), details.name);
    println!("  {} {}", "IP Address:".bold(), details.ip_address);
    println!("  {} {}", "ISP:".bold(), details.isp_info);
    println!("  {} {}", "Region:".bold(), details.region);
    println!("  {} {}", "Location:".bold(), details.location);
    println!("  {} {}", "Status:".bold(), account.status);
    println!("  {} {}", "Can Close:".bold(), account.can_close);
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
