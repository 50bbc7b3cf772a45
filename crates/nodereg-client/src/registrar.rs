//! The node registration flow.

use nodereg_core::{
    derive_node_address, register_vpn_node_ix, timestamp_node_number, NodeDetails,
    NodeRegistration, Registration, RegistrarError, RegistrationReport, Result, VpnNodeAccount,
};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::{debug, error, info, warn};

use crate::config::{ConfirmationConfig, RegistrarConfig};
use crate::ledger::{lamports_to_sol, Ledger, RpcLedger};

/// Registers VPN nodes with the registry program
pub struct Registrar<L = RpcLedger> {
    ledger: L,
    signer: Keypair,
    program_id: Pubkey,
    confirmation: ConfirmationConfig,
}

impl Registrar<RpcLedger> {
    /// Resolve the credential and connect to the configured endpoint.
    ///
    /// The credential is checked before any connection is made.
    pub fn connect(config: &RegistrarConfig) -> Result<Self> {
        let signer = config.keypair()?;
        Ok(Self::with_signer(RpcLedger::from_config(config), signer, config))
    }
}

impl<L: Ledger> Registrar<L> {
    /// Resolve the credential from `config` and use `ledger` for all calls
    pub fn new(config: &RegistrarConfig, ledger: L) -> Result<Self> {
        let signer = config.keypair()?;
        Ok(Self::with_signer(ledger, signer, config))
    }

    /// Use an already decoded signer
    #[must_use]
    pub fn with_signer(ledger: L, signer: Keypair, config: &RegistrarConfig) -> Self {
        Self {
            ledger,
            signer,
            program_id: config.program_id,
            confirmation: config.confirmation,
        }
    }

    /// Public key of the signer
    #[must_use]
    pub fn pubkey(&self) -> Pubkey {
        self.signer.pubkey()
    }

    /// Record address for a node number
    #[must_use]
    pub fn node_address(&self, node_number: u64) -> Pubkey {
        derive_node_address(&self.program_id, node_number).0
    }

    /// Signer balance in lamports; a failed query reports zero
    pub async fn balance(&self) -> u64 {
        match self.ledger.balance(&self.pubkey()).await {
            Ok(lamports) => lamports,
            Err(err) => {
                warn!(error = %err, "balance unknown, reporting zero");
                0
            }
        }
    }

    /// Register under a node number taken from the wall clock
    pub async fn register(&self, details: &NodeDetails) -> Result<Registration> {
        self.register_with_number(timestamp_node_number(), details)
            .await
    }

    /// Register under an explicit node number.
    ///
    /// Submits `registerVpnNode`, waits for confirmation and returns the
    /// record as read back from the ledger. Any failure aborts the run.
    pub async fn register_with_number(
        &self,
        node_number: u64,
        details: &NodeDetails,
    ) -> Result<Registration> {
        let payer = self.pubkey();
        info!(wallet = %payer, "using wallet");

        let lamports = self.balance().await;
        info!(lamports, sol = lamports_to_sol(lamports), "current balance");

        info!(node_number, "node number");
        let (address, bump) = derive_node_address(&self.program_id, node_number);
        info!(%address, bump, "vpn node address");

        let registration = NodeRegistration::new(node_number, details.clone());
        let instruction = register_vpn_node_ix(&self.program_id, &payer, &registration)?;

        let blockhash = self.ledger.latest_blockhash().await?;
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&payer),
            &[&self.signer],
            blockhash,
        );

        let signature = match self.ledger.send_transaction(&transaction).await {
            Ok(signature) => signature,
            Err(err) => {
                for line in err.logs() {
                    error!(target: "nodereg::program", "{line}");
                }
                return Err(err);
            }
        };
        info!(%signature, "transaction submitted");

        self.await_confirmation(&signature).await?;
        let account = self.fetch_account(&address).await?;
        info!(
            node_id = account.node_id,
            owner = %account.owner,
            status = account.status,
            can_close = account.can_close,
            "created vpn node account"
        );

        Ok(Registration {
            signature,
            address,
            node_number,
            account,
        })
    }

    /// Wait until the signature reaches the ledger's commitment, bounded by
    /// the configured timeout
    pub async fn await_confirmation(&self, signature: &Signature) -> Result<()> {
        tokio::time::timeout(self.confirmation.timeout, self.poll_status(signature))
            .await
            .map_err(|_| RegistrarError::ConfirmationTimeout {
                signature: signature.to_string(),
                timeout_secs: self.confirmation.timeout.as_secs(),
            })?
    }

    async fn poll_status(&self, signature: &Signature) -> Result<()> {
        loop {
            match self.ledger.signature_status(signature).await? {
                Some(Ok(())) => return Ok(()),
                Some(Err(err)) => {
                    return Err(RegistrarError::TransactionFailed {
                        signature: signature.to_string(),
                        message: err.to_string(),
                    })
                }
                None => {
                    debug!(%signature, "not yet confirmed");
                    tokio::time::sleep(self.confirmation.poll_interval).await;
                }
            }
        }
    }

    /// Read the record of a node number
    pub async fn fetch_node(&self, node_number: u64) -> Result<VpnNodeAccount> {
        self.fetch_account(&self.node_address(node_number)).await
    }

    /// Read and decode the record at an address
    pub async fn fetch_account(&self, address: &Pubkey) -> Result<VpnNodeAccount> {
        let data = self
            .ledger
            .account_data(address)
            .await?
            .ok_or_else(|| RegistrarError::AccountNotFound {
                address: address.to_string(),
            })?;

        VpnNodeAccount::try_from_account_data(&data)
    }
}

/// Run one registration against the configured endpoint.
///
/// Never fails: errors are folded into the report, whose exit code mirrors
/// success.
pub async fn register_node(config: &RegistrarConfig) -> RegistrationReport {
    info!("starting vpn node registration");
    let report = RegistrationReport::from(try_register(config).await);

    if let RegistrationReport::Failed { kind, message, .. } = &report {
        error!(%kind, "registration failed: {message}");
    }
    report
}

async fn try_register(config: &RegistrarConfig) -> Result<Registration> {
    let registrar = Registrar::<RpcLedger>::connect(config)?;
    match config.node_number {
        Some(node_number) => {
            registrar
                .register_with_number(node_number, &config.details)
                .await
        }
        None => registrar.register(&config.details).await,
    }
}
