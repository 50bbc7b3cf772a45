//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use nodereg::{NodeDetails, DEFAULT_DID_LENGTH, DEFAULT_DID_METHOD};

use crate::output::OutputFormat;

/// Register VPN nodes on a Solana-compatible ledger
///
/// Each registration creates one record at an address derived from the
/// node number. Values not given as flags are read from the environment
/// (a `.env` file in the working directory is loaded first).
#[derive(Parser, Debug)]
#[command(name = "nodereg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON-RPC endpoint
    #[arg(short, long, env = "NODEREG_RPC_URL", global = true)]
    pub endpoint: Option<String>,

    /// Registry program id
    #[arg(long, env = "NODEREG_PROGRAM_ID", global = true)]
    pub program_id: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register this node and print the created record
    Register(RegisterArgs),

    /// Fetch the record of a node number
    Show(ShowArgs),

    /// Derive the record address of a node number (offline)
    Address(AddressArgs),

    /// Show the balance of the signer or another account
    Balance(BalanceArgs),

    /// Generate a random node DID
    Did(DidArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Register command
// ============================================================================

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Base58 keypair of the fee payer
    #[arg(long, env = "SOLANA_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Node identity (DID)
    #[arg(long, env = "NODE_DID")]
    pub identity: Option<String>,

    /// Human-readable node name
    #[arg(long, env = "NODE_NAME")]
    pub name: Option<String>,

    /// Public IP address
    #[arg(long, env = "IP_ADDRESS")]
    pub ip_address: Option<String>,

    /// ISP descriptor
    #[arg(long, env = "ISP_INFO")]
    pub isp_info: Option<String>,

    /// Region
    #[arg(long, env = "REGION")]
    pub region: Option<String>,

    /// Location
    #[arg(long, env = "LOCATION")]
    pub location: Option<String>,

    /// Register under this node number instead of the current time in ms
    #[arg(long)]
    pub node_number: Option<u64>,

    /// Fill missing IP, ISP, region and location from ipinfo.io
    #[arg(long)]
    pub detect: bool,

    /// Generate a DID when no identity is given
    #[arg(long)]
    pub generate_did: bool,

    /// Seconds to wait for confirmation
    #[arg(long)]
    pub confirm_timeout: Option<u64>,
}

impl RegisterArgs {
    /// Node details from the given flags; absent values are empty
    pub fn details(&self) -> NodeDetails {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        NodeDetails {
            identity: field(&self.identity),
            name: field(&self.name),
            ip_address: field(&self.ip_address),
            isp_info: field(&self.isp_info),
            region: field(&self.region),
            location: field(&self.location),
        }
    }
}

// ============================================================================
// Show command
// ============================================================================

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Node number the record was registered under
    pub node_number: u64,
}

// ============================================================================
// Address command
// ============================================================================

#[derive(Args, Debug)]
pub struct AddressArgs {
    /// Node number to derive the address for
    pub node_number: u64,
}

// ============================================================================
// Balance command
// ============================================================================

#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Account to query; defaults to the signer
    pub address: Option<String>,

    /// Base58 keypair of the signer
    #[arg(long, env = "SOLANA_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

// ============================================================================
// Did command
// ============================================================================

#[derive(Args, Debug)]
pub struct DidArgs {
    /// DID method
    #[arg(long, default_value = DEFAULT_DID_METHOD)]
    pub method: String,

    /// Number of random base58 characters
    #[arg(long, default_value_t = DEFAULT_DID_LENGTH)]
    pub length: usize,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
