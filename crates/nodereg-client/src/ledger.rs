//! The ledger seam and its JSON-RPC implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use nodereg_core::{RegistrarError, Result};
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::{RpcError, RpcResponseErrorData};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, TransactionError};
use tracing::debug;

use crate::config::{RegistrarConfig, DEFAULT_REQUEST_TIMEOUT};

/// Convert lamports to SOL for display
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// The calls the registrar makes against the ledger.
///
/// Each call suspends until the node answers; none of them retry.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Balance of an account in lamports
    async fn balance(&self, pubkey: &Pubkey) -> Result<u64>;

    /// Blockhash to sign a new transaction against
    async fn latest_blockhash(&self) -> Result<Hash>;

    /// Submit a signed transaction
    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature>;

    /// Status of a signature at the ledger's commitment; `None` while not yet reached
    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<std::result::Result<(), TransactionError>>>;

    /// Raw data of an account, `None` if it does not exist
    async fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>>;
}

#[async_trait]
impl<T: Ledger + ?Sized> Ledger for Arc<T> {
    async fn balance(&self, pubkey: &Pubkey) -> Result<u64> {
        (**self).balance(pubkey).await
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        (**self).latest_blockhash().await
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature> {
        (**self).send_transaction(transaction).await
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<std::result::Result<(), TransactionError>>> {
        (**self).signature_status(signature).await
    }

    async fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        (**self).account_data(address).await
    }
}

/// [`Ledger`] backed by a Solana JSON-RPC endpoint
pub struct RpcLedger {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcLedger {
    /// Connect to an endpoint at `confirmed` commitment
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_options(endpoint, CommitmentConfig::confirmed(), DEFAULT_REQUEST_TIMEOUT)
    }

    /// Connect with an explicit commitment and request timeout
    #[must_use]
    pub fn with_options(
        endpoint: impl Into<String>,
        commitment: CommitmentConfig,
        timeout: Duration,
    ) -> Self {
        Self {
            client: RpcClient::new_with_timeout_and_commitment(endpoint.into(), timeout, commitment),
            commitment,
        }
    }

    /// Connect using the endpoint, commitment and timeout of a config
    #[must_use]
    pub fn from_config(config: &RegistrarConfig) -> Self {
        Self::with_options(config.endpoint.clone(), config.commitment, config.request_timeout)
    }

    /// Endpoint URL
    #[must_use]
    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl Ledger for RpcLedger {
    async fn balance(&self, pubkey: &Pubkey) -> Result<u64> {
        debug!(%pubkey, "getBalance");
        self.client
            .get_balance(pubkey)
            .await
            .map_err(|e| RegistrarError::BalanceQuery(e.to_string()))
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        debug!("getLatestBlockhash");
        self.client
            .get_latest_blockhash()
            .await
            .map_err(submission_error)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature> {
        debug!(signature = ?transaction.signatures.first(), "sendTransaction");
        self.client
            .send_transaction(transaction)
            .await
            .map_err(submission_error)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<std::result::Result<(), TransactionError>>> {
        debug!(%signature, "getSignatureStatuses");
        self.client
            .get_signature_status_with_commitment(signature, self.commitment)
            .await
            .map_err(|e| RegistrarError::Confirmation(e.to_string()))
    }

    async fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        debug!(%address, "getAccountInfo");
        self.client
            .get_account_with_commitment(address, self.commitment)
            .await
            .map(|response| response.value.map(|account| account.data))
            .map_err(|e| RegistrarError::Fetch(e.to_string()))
    }
}

/// Keep the preflight program logs of a rejected transaction
fn submission_error(err: ClientError) -> RegistrarError {
    let logs = match err.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError {
            data: RpcResponseErrorData::SendTransactionPreflightFailure(simulation),
            ..
        }) => simulation.logs.clone().unwrap_or_default(),
        _ => Vec::new(),
    };

    RegistrarError::Submission {
        message: err.to_string(),
        logs,
    }
}
