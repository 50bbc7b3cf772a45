//! Wire contract of the on-chain VPN registry program.
//!
//! The program is an Anchor program: every instruction is prefixed with an
//! 8-byte discriminator followed by the Borsh-encoded arguments, and every
//! account it owns starts with the 8-byte discriminator of its record type.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

use crate::error::{RegistrarError, Result};
use crate::types::{NodeDetails, NodeRegistration};

/// Deployed registry program
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("3ypCkXQWiAFkNk7bo8bnZFxUVmVEWCqpBoY7v4vgPnHJ");

/// Native system program, the third account of `registerVpnNode`
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");

/// Namespace tag of node record addresses
pub const VPN_SEED: &[u8] = b"vpn";

/// Selector of `registerVpnNode`
pub const REGISTER_VPN_NODE_DISCRIMINATOR: [u8; 8] = [254, 249, 109, 84, 232, 26, 70, 251];

/// Selector of the `VpnNode` record layout
pub const VPN_NODE_ACCOUNT_DISCRIMINATOR: [u8; 8] = [154, 255, 245, 194, 44, 120, 114, 244];

/// Derive the record address of a node: seeds are `"vpn"` and the
/// little-endian node number.
#[must_use]
pub fn derive_node_address(program_id: &Pubkey, node_number: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VPN_SEED, &node_number.to_le_bytes()], program_id)
}

/// Node number taken from the wall clock in milliseconds.
///
/// Two registrations in the same millisecond collide on the same address.
#[must_use]
pub fn timestamp_node_number() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Arguments of `registerVpnNode`, in wire order
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct RegisterVpnNodeArgs {
    pub user_node_num: u64,
    pub node_did: String,
    pub nodename: String,
    pub ipaddress: String,
    pub ispinfo: String,
    pub region: String,
    pub location: String,
}

impl RegisterVpnNodeArgs {
    /// Encode as instruction data: discriminator then Borsh arguments
    pub fn pack(&self) -> Result<Vec<u8>> {
        let mut data = REGISTER_VPN_NODE_DISCRIMINATOR.to_vec();
        self.serialize(&mut data)
            .map_err(|e| RegistrarError::Decode(e.to_string()))?;
        Ok(data)
    }

    /// Decode instruction data produced by [`pack`](Self::pack)
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let body = data
            .strip_prefix(&REGISTER_VPN_NODE_DISCRIMINATOR)
            .ok_or_else(|| RegistrarError::Decode("not a registerVpnNode instruction".into()))?;
        Self::try_from_slice(body).map_err(|e| RegistrarError::Decode(e.to_string()))
    }
}

impl From<&NodeRegistration> for RegisterVpnNodeArgs {
    fn from(registration: &NodeRegistration) -> Self {
        let d = &registration.details;
        Self {
            user_node_num: registration.node_number,
            node_did: d.identity.clone(),
            nodename: d.name.clone(),
            ipaddress: d.ip_address.clone(),
            ispinfo: d.isp_info.clone(),
            region: d.region.clone(),
            location: d.location.clone(),
        }
    }
}

impl From<RegisterVpnNodeArgs> for NodeRegistration {
    fn from(args: RegisterVpnNodeArgs) -> Self {
        Self {
            node_number: args.user_node_num,
            details: NodeDetails {
                identity: args.node_did,
                name: args.nodename,
                ip_address: args.ipaddress,
                isp_info: args.ispinfo,
                region: args.region,
                location: args.location,
            },
        }
    }
}

/// Build the `registerVpnNode` instruction.
///
/// Accounts: node record (writable), payer (writable, signer), system program.
pub fn register_vpn_node_ix(
    program_id: &Pubkey,
    payer: &Pubkey,
    registration: &NodeRegistration,
) -> Result<Instruction> {
    let (node_address, _) = derive_node_address(program_id, registration.node_number);
    let data = RegisterVpnNodeArgs::from(registration).pack()?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(node_address, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    })
}
