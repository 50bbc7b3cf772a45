//! # nodereg-cli
//!
//! Command-line registrar for VPN nodes.
//!
//! ## Features
//!
//! - **Registration**: submit `registerVpnNode` and print the confirmed record
//! - **Network detection**: fill IP, ISP and location from ipinfo.io
//! - **Read-only lookups**: derive addresses, fetch records, query balances
//! - **Multiple output formats**: pretty, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
