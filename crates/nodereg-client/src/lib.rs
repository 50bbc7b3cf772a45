//! Ledger client for the VPN node registry.
//!
//! This crate provides the [`Registrar`] that submits `registerVpnNode`,
//! waits for confirmation and reads the record back, the [`Ledger`] trait it
//! talks through, and the [`RpcLedger`] implementation over Solana JSON-RPC.

#![doc(html_root_url = "https://docs.rs/nodereg-client/0.3.0")]

mod config;
mod credential;
mod ip_info;
mod ledger;
mod registrar;

pub use config::*;
pub use credential::keypair_from_base58;
pub use ip_info::{IpInfoClient, IpInfoClientBuilder, DEFAULT_IPINFO_URL};
pub use ledger::{lamports_to_sol, Ledger, RpcLedger};
pub use nodereg_core::{RegistrarError, Result};
pub use registrar::{register_node, Registrar};
