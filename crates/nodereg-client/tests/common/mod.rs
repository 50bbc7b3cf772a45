//! In-memory ledger that behaves like the registry program.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use nodereg_client::{Ledger, RegistrarConfig, RegistrarError, Result};
use nodereg_core::program::RegisterVpnNodeArgs;
use nodereg_core::{
    derive_node_address, NodeDetails, NodeRegistration, VpnNodeAccount, PROGRAM_ID,
    SYSTEM_PROGRAM_ID,
};
use solana_sdk::hash::Hash;
use solana_sdk::instruction::InstructionError;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::transaction::{Transaction, TransactionError};

/// Extra bytes the program allocates past the encoded record
const ACCOUNT_PADDING: usize = 128;

#[derive(Default)]
pub struct FakeLedger {
    accounts: Mutex<HashMap<Pubkey, Vec<u8>>>,
    confirmed: Mutex<HashSet<Signature>>,
    calls: AtomicUsize,
    pub lamports: u64,
    pub fail_balance: bool,
    pub never_confirm: bool,
    /// Transactions land but the program returns an error
    pub fail_on_chain: bool,
    /// Signature status queries fail
    pub fail_status: bool,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self {
            lamports: 2_000_000_000,
            ..Self::default()
        }
    }

    pub fn failing_balance() -> Self {
        Self {
            fail_balance: true,
            ..Self::new()
        }
    }

    pub fn never_confirming() -> Self {
        Self {
            never_confirm: true,
            ..Self::new()
        }
    }

    pub fn failing_on_chain() -> Self {
        Self {
            fail_on_chain: true,
            ..Self::new()
        }
    }

    pub fn failing_status() -> Self {
        Self {
            fail_status: true,
            ..Self::new()
        }
    }

    /// Number of ledger calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn insert_account(&self, address: Pubkey, data: Vec<u8>) {
        self.accounts.lock().unwrap().insert(address, data);
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn execute(&self, transaction: &Transaction) -> Result<()> {
        transaction
            .verify()
            .map_err(|e| RegistrarError::submission(format!("signature verification failed: {e}")))?;

        let message = &transaction.message;
        let [instruction] = message.instructions.as_slice() else {
            return Err(RegistrarError::submission("expected a single instruction"));
        };

        let program = message.account_keys[usize::from(instruction.program_id_index)];
        if program != PROGRAM_ID {
            return Err(RegistrarError::submission("unknown program"));
        }

        let accounts: Vec<Pubkey> = instruction
            .accounts
            .iter()
            .map(|&i| message.account_keys[usize::from(i)])
            .collect();
        let [node, user, system] = accounts.as_slice() else {
            return Err(RegistrarError::submission("wrong number of accounts"));
        };

        let registration = NodeRegistration::from(RegisterVpnNodeArgs::unpack(&instruction.data)?);
        let (expected, _) = derive_node_address(&PROGRAM_ID, registration.node_number);
        if *node != expected || *system != SYSTEM_PROGRAM_ID {
            return Err(RegistrarError::Submission {
                message: "custom program error: 0x7d6".into(),
                logs: vec!["Program log: AnchorError caused by account: vpn_node. Error Code: ConstraintSeeds.".into()],
            });
        }

        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(node) {
            return Err(RegistrarError::Submission {
                message: "Transaction simulation failed: Error processing Instruction 0: custom program error: 0x0".into(),
                logs: vec![
                    format!("Program {PROGRAM_ID} invoke [1]"),
                    "Program log: Instruction: RegisterVpnNode".into(),
                    format!("Allocate: account Address {{ address: {node}, base: None }} already in use"),
                    format!("Program {PROGRAM_ID} failed: custom program error: 0x0"),
                ],
            });
        }

        let record = VpnNodeAccount {
            node_id: registration.node_number,
            owner: *user,
            details: registration.details,
            status: 0,
            can_close: false,
        };
        let mut data = record.to_account_data()?;
        data.resize(data.len() + ACCOUNT_PADDING, 0);
        accounts.insert(*node, data);
        Ok(())
    }
}

#[async_trait]
impl Ledger for FakeLedger {
    async fn balance(&self, _pubkey: &Pubkey) -> Result<u64> {
        self.touch();
        if self.fail_balance {
            return Err(RegistrarError::BalanceQuery("connection reset by peer".into()));
        }
        Ok(self.lamports)
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        self.touch();
        Ok(Hash::new_unique())
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature> {
        self.touch();
        // A failed transaction leaves no account behind
        if !self.fail_on_chain {
            self.execute(transaction)?;
        }

        let signature = transaction.signatures[0];
        if !self.never_confirm {
            self.confirmed.lock().unwrap().insert(signature);
        }
        Ok(signature)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
    ) -> Result<Option<std::result::Result<(), TransactionError>>> {
        self.touch();
        if self.fail_status {
            return Err(RegistrarError::Confirmation("connection closed before message completed".into()));
        }
        if self.fail_on_chain {
            return Ok(Some(Err(TransactionError::InstructionError(
                0,
                InstructionError::Custom(6000),
            ))));
        }
        Ok(self
            .confirmed
            .lock()
            .unwrap()
            .contains(signature)
            .then_some(Ok(())))
    }

    async fn account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>> {
        self.touch();
        Ok(self.accounts.lock().unwrap().get(address).cloned())
    }
}

pub fn sample_details() -> NodeDetails {
    NodeDetails {
        identity: "did:x:1".into(),
        name: "N1".into(),
        ip_address: "10.0.0.1".into(),
        isp_info: "ISP1".into(),
        region: "R1".into(),
        location: "L1".into(),
    }
}

pub fn config_for(keypair: &Keypair) -> RegistrarConfig {
    RegistrarConfig::builder()
        .credential(keypair.to_base58_string())
        .details(sample_details())
        .build()
        .unwrap()
}
