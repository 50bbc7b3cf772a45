//! Register VPN node metadata as an on-chain record.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nodereg::{register_node, RegistrarConfig};
//!
//! #[tokio::main]
//! async fn main() -> nodereg::Result<()> {
//!     let config = RegistrarConfig::builder()
//!         .credential(std::env::var("SOLANA_PRIVATE_KEY").unwrap_or_default())
//!         .identity("did:soon:2X8s...")
//!         .name("eu-west-1")
//!         .ip_address("203.0.113.7")
//!         .isp_info("AS3320 Deutsche Telekom AG")
//!         .region("DE")
//!         .location("Berlin, Berlin")
//!         .build()?;
//!
//!     let report = register_node(&config).await;
//!     std::process::exit(report.exit_code());
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/nodereg/0.3.0")]

// Re-export core types
pub use nodereg_core::*;

// Re-export client
pub use nodereg_client::{
    keypair_from_base58, lamports_to_sol, register_node, ConfirmationConfig, IpInfoClient,
    IpInfoClientBuilder, Ledger, RegistrarConfig, RegistrarConfigBuilder, Registrar, RpcLedger,
    DEFAULT_ENDPOINT, DEFAULT_IPINFO_URL, DEFAULT_REQUEST_TIMEOUT,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use solana_sdk;
pub use tokio;
