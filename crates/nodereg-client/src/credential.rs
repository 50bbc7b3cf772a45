//! Signing credential decoding.

use nodereg_core::{RegistrarError, Result};
use solana_sdk::signature::Keypair;

/// Decode a base58 string holding the 64-byte secret+public keypair, the
/// format printed by wallets as "private key".
#[allow(deprecated)]
pub fn keypair_from_base58(encoded: &str) -> Result<Keypair> {
    let bytes = bs58::decode(encoded.trim())
        .into_vec()
        .map_err(|e| RegistrarError::InvalidCredential(e.to_string()))?;

    if bytes.len() != 64 {
        return Err(RegistrarError::InvalidCredential(format!(
            "expected 64 bytes, got {}",
            bytes.len()
        )));
    }

    Keypair::from_bytes(&bytes).map_err(|e| RegistrarError::InvalidCredential(e.to_string()))
}
