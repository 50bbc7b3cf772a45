//! Command implementations.

pub mod address;
pub mod balance;
pub mod config;
pub mod did;
pub mod register;
pub mod show;

use nodereg::solana_sdk::commitment_config::CommitmentConfig;
use nodereg::solana_sdk::pubkey::Pubkey;
use nodereg::{ConfirmationConfig, RegistrarConfig, RegistrarConfigBuilder, RpcLedger, DEFAULT_REQUEST_TIMEOUT};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// JSON-RPC endpoint
    pub endpoint: String,

    /// Registry program
    pub program_id: Pubkey,

    /// Commitment for confirmation and reads
    pub commitment: CommitmentConfig,

    /// Confirmation wait policy
    pub confirmation: ConfirmationConfig,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Registrar configuration seeded with the connection settings.
    pub fn registrar_config(&self) -> RegistrarConfigBuilder {
        RegistrarConfig::builder()
            .endpoint(self.endpoint.clone())
            .program_id(self.program_id)
            .commitment(self.commitment)
            .confirmation(self.confirmation)
    }

    /// Ledger client for read-only commands.
    pub fn ledger(&self) -> RpcLedger {
        RpcLedger::with_options(self.endpoint.clone(), self.commitment, DEFAULT_REQUEST_TIMEOUT)
    }
}
