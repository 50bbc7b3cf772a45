use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for registrar operations
pub type Result<T> = std::result::Result<T, RegistrarError>;

/// Errors that can occur while registering or reading a VPN node
#[derive(Error, Debug)]
pub enum RegistrarError {
    /// No signing credential was supplied
    #[error("signing credential missing: set SOLANA_PRIVATE_KEY to a base58 keypair")]
    MissingCredential,

    /// The credential could not be decoded into a keypair
    #[error("invalid signing credential: {0}")]
    InvalidCredential(String),

    /// Balance lookup failed (recoverable, reported as zero)
    #[error("balance query failed: {0}")]
    BalanceQuery(String),

    /// The transaction was rejected by the network, the signature check or the program
    #[error("submission failed: {message}")]
    Submission {
        /// Error message from the RPC node
        message: String,
        /// Program log lines emitted during preflight, if any
        logs: Vec<String>,
    },

    /// The transaction did not reach the requested commitment in time
    #[error("transaction {signature} not confirmed after {timeout_secs} seconds")]
    ConfirmationTimeout {
        /// Signature that was being waited on
        signature: String,
        /// Timeout that elapsed
        timeout_secs: u64,
    },

    /// Polling the signature status failed
    #[error("confirmation failed: {0}")]
    Confirmation(String),

    /// The transaction landed but the program returned an error
    #[error("transaction {signature} failed: {message}")]
    TransactionFailed {
        /// Signature of the failed transaction
        signature: String,
        /// Transaction error reported by the ledger
        message: String,
    },

    /// No account exists at the derived address
    #[error("account not found: {address}")]
    AccountNotFound {
        /// Address that was queried
        address: String,
    },

    /// Reading the account failed
    #[error("account fetch failed: {0}")]
    Fetch(String),

    /// Account data did not match the expected layout
    #[error("decode error: {0}")]
    Decode(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse failure classes surfaced in a [`RegistrationReport`](crate::RegistrationReport)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Credential absent or unusable, detected before any network call
    MissingCredential,
    /// Balance lookup failed
    BalanceQueryFailure,
    /// Transaction was not accepted
    SubmissionError,
    /// Waiting for confirmation or reading the record back failed
    ConfirmationOrFetchFailure,
    /// Local configuration or auxiliary lookup problem
    Configuration,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "missing_credential"),
            Self::BalanceQueryFailure => write!(f, "balance_query_failure"),
            Self::SubmissionError => write!(f, "submission_error"),
            Self::ConfirmationOrFetchFailure => write!(f, "confirmation_or_fetch_failure"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

impl RegistrarError {
    /// Classify the error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential | Self::InvalidCredential(_) => ErrorKind::MissingCredential,
            Self::BalanceQuery(_) => ErrorKind::BalanceQueryFailure,
            Self::Submission { .. } | Self::TransactionFailed { .. } => ErrorKind::SubmissionError,
            Self::ConfirmationTimeout { .. }
            | Self::Confirmation(_)
            | Self::AccountNotFound { .. }
            | Self::Fetch(_)
            | Self::Decode(_) => ErrorKind::ConfirmationOrFetchFailure,
            Self::Config(_) | Self::Http(_) | Self::Json(_) => ErrorKind::Configuration,
        }
    }

    /// Returns false only for failures the registration flow recovers from
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::BalanceQuery(_))
    }

    /// Program log lines attached to a rejected submission
    #[must_use]
    pub fn logs(&self) -> &[String] {
        match self {
            Self::Submission { logs, .. } => logs,
            _ => &[],
        }
    }

    /// Build a submission error without program logs
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
            logs: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_failure_is_recoverable() {
        let err = RegistrarError::BalanceQuery("connection refused".into());
        assert!(!err.is_fatal());
        assert_eq!(err.kind(), ErrorKind::BalanceQueryFailure);
    }

    #[test]
    fn submission_carries_logs() {
        let err = RegistrarError::Submission {
            message: "custom program error: 0x0".into(),
            logs: vec!["Program log: Error: already in use".into()],
        };
        assert!(err.is_fatal());
        assert_eq!(err.kind(), ErrorKind::SubmissionError);
        assert_eq!(err.logs().len(), 1);
        assert!(RegistrarError::MissingCredential.logs().is_empty());
    }

    #[test]
    fn confirmation_and_fetch_share_a_kind() {
        let timeout = RegistrarError::ConfirmationTimeout {
            signature: "sig".into(),
            timeout_secs: 60,
        };
        let missing = RegistrarError::AccountNotFound {
            address: "addr".into(),
        };
        assert_eq!(timeout.kind(), ErrorKind::ConfirmationOrFetchFailure);
        assert_eq!(missing.kind(), ErrorKind::ConfirmationOrFetchFailure);
        assert_eq!(timeout.to_string(), "transaction sig not confirmed after 60 seconds");
    }

    #[test]
    fn program_failure_after_landing_is_a_submission_error() {
        let err = RegistrarError::TransactionFailed {
            signature: "sig".into(),
            message: "Error processing Instruction 0: custom program error: 0x1770".into(),
        };
        assert_eq!(err.kind(), ErrorKind::SubmissionError);
        assert_eq!(
            RegistrarError::Confirmation("reset".into()).kind(),
            ErrorKind::ConfirmationOrFetchFailure
        );
    }
}
