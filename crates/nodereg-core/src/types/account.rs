use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use super::{base58_string, NodeDetails};
use crate::error::{RegistrarError, Result};
use crate::program::VPN_NODE_ACCOUNT_DISCRIMINATOR;

/// The `VpnNode` record persisted by the registry program
///
/// Status and the close flag are assigned by the program; the registrar only
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpnNodeAccount {
    /// Node number the record was created with
    pub node_id: u64,

    /// Signer that paid for and owns the record
    #[serde(with = "base58_string")]
    pub owner: Pubkey,

    /// Identity and location strings as stored on chain
    #[serde(flatten)]
    pub details: NodeDetails,

    /// Program-assigned status byte
    pub status: u8,

    /// Program-assigned close permission
    pub can_close: bool,
}

/// On-chain layout, field order is significant
#[derive(BorshSerialize, BorshDeserialize)]
struct VpnNodeRecord {
    node_id: u64,
    user: [u8; 32],
    node_did: String,
    nodename: String,
    ipaddress: String,
    ispinfo: String,
    region: String,
    location: String,
    status: u8,
    can_close: bool,
}

impl VpnNodeAccount {
    /// Decode raw account data.
    ///
    /// Trailing bytes are ignored since the program allocates fixed space
    /// larger than the encoded record.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self> {
        let mut body = data
            .strip_prefix(&VPN_NODE_ACCOUNT_DISCRIMINATOR)
            .ok_or_else(|| RegistrarError::Decode("account is not a VpnNode record".into()))?;

        let record = VpnNodeRecord::deserialize(&mut body)
            .map_err(|e| RegistrarError::Decode(e.to_string()))?;

        Ok(Self {
            node_id: record.node_id,
            owner: Pubkey::new_from_array(record.user),
            details: NodeDetails {
                identity: record.node_did,
                name: record.nodename,
                ip_address: record.ipaddress,
                isp_info: record.ispinfo,
                region: record.region,
                location: record.location,
            },
            status: record.status,
            can_close: record.can_close,
        })
    }

    /// Encode into account data with the record discriminator
    pub fn to_account_data(&self) -> Result<Vec<u8>> {
        let record = VpnNodeRecord {
            node_id: self.node_id,
            user: self.owner.to_bytes(),
            node_did: self.details.identity.clone(),
            nodename: self.details.name.clone(),
            ipaddress: self.details.ip_address.clone(),
            ispinfo: self.details.isp_info.clone(),
            region: self.details.region.clone(),
            location: self.details.location.clone(),
            status: self.status,
            can_close: self.can_close,
        };

        let mut data = VPN_NODE_ACCOUNT_DISCRIMINATOR.to_vec();
        record
            .serialize(&mut data)
            .map_err(|e| RegistrarError::Decode(e.to_string()))?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> VpnNodeAccount {
        VpnNodeAccount {
            node_id: 1_700_000_000_000,
            owner: Pubkey::new_unique(),
            details: NodeDetails {
                identity: "did:x:1".into(),
                name: "N1".into(),
                ip_address: "10.0.0.1".into(),
                isp_info: "ISP1".into(),
                region: "R1".into(),
                location: "L1".into(),
            },
            status: 0,
            can_close: false,
        }
    }

    #[test]
    fn decodes_padded_account_data() {
        let original = account();
        let mut data = original.to_account_data().unwrap();
        data.resize(data.len() + 64, 0);

        let decoded = VpnNodeAccount::try_from_account_data(&data).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn owner_follows_node_id() {
        let original = account();
        let data = original.to_account_data().unwrap();
        assert_eq!(data[8..16], original.node_id.to_le_bytes());
        assert_eq!(data[16..48], original.owner.to_bytes());
    }

    #[test]
    fn rejects_wrong_discriminator() {
        let mut data = account().to_account_data().unwrap();
        data[..8].copy_from_slice(&[0; 8]);
        assert!(matches!(
            VpnNodeAccount::try_from_account_data(&data),
            Err(RegistrarError::Decode(_))
        ));
    }

    #[test]
    fn rejects_truncated_data() {
        let data = account().to_account_data().unwrap();
        assert!(VpnNodeAccount::try_from_account_data(&data[..20]).is_err());
    }

    #[test]
    fn serializes_owner_as_base58() {
        let original = account();
        let json = serde_json::to_value(&original).unwrap();
        assert_eq!(json["owner"], original.owner.to_string());
        assert_eq!(json["ip_address"], "10.0.0.1");

        let back: VpnNodeAccount = serde_json::from_value(json).unwrap();
        assert_eq!(back, original);
    }
}
