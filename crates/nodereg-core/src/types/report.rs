use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use super::{base58_string, VpnNodeAccount};
use crate::error::{ErrorKind, RegistrarError};

/// A confirmed registration and the record read back from chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Transaction signature
    #[serde(with = "base58_string")]
    pub signature: Signature,

    /// Derived record address
    #[serde(with = "base58_string")]
    pub address: Pubkey,

    /// Node number used for the address seeds
    pub node_number: u64,

    /// Record as persisted by the program
    pub account: VpnNodeAccount,
}

/// Outcome of a single registration run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RegistrationReport {
    /// The record was created and read back
    Registered(Registration),

    /// The run aborted
    Failed {
        /// Failure class
        kind: ErrorKind,
        /// Human-readable message
        message: String,
        /// Program log lines, when the program rejected the call
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        logs: Vec<String>,
    },
}

impl RegistrationReport {
    /// Returns true if the record was created
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Registered(_))
    }

    /// Process exit code mirroring success
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

impl From<crate::Result<Registration>> for RegistrationReport {
    fn from(result: crate::Result<Registration>) -> Self {
        match result {
            Ok(registration) => Self::Registered(registration),
            Err(err) => err.into(),
        }
    }
}

impl From<RegistrarError> for RegistrationReport {
    fn from(err: RegistrarError) -> Self {
        Self::Failed {
            kind: err.kind(),
            logs: err.logs().to_vec(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeDetails;

    #[test]
    fn failed_report_exits_non_zero() {
        let report = RegistrationReport::from(RegistrarError::MissingCredential);
        assert!(!report.is_success());
        assert_eq!(report.exit_code(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"], "failed");
        assert_eq!(json["kind"], "missing_credential");
        assert!(json.get("logs").is_none());
    }

    #[test]
    fn failed_report_keeps_program_logs() {
        let report = RegistrationReport::from(RegistrarError::Submission {
            message: "Transaction simulation failed".into(),
            logs: vec!["Program log: AnchorError".into()],
        });
        match report {
            RegistrationReport::Failed { kind, logs, .. } => {
                assert_eq!(kind, ErrorKind::SubmissionError);
                assert_eq!(logs, vec!["Program log: AnchorError".to_string()]);
            }
            RegistrationReport::Registered(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn registered_report_serializes_flat() {
        let owner = Pubkey::new_unique();
        let report = RegistrationReport::Registered(Registration {
            signature: Signature::default(),
            address: Pubkey::new_unique(),
            node_number: 5,
            account: VpnNodeAccount {
                node_id: 5,
                owner,
                details: NodeDetails::default(),
                status: 1,
                can_close: true,
            },
        });
        assert_eq!(report.exit_code(), 0);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"], "registered");
        assert_eq!(json["node_number"], 5);
        assert_eq!(json["account"]["owner"], owner.to_string());
    }
}
