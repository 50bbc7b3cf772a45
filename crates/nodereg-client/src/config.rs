//! Registrar configuration types.

use std::time::Duration;

use nodereg_core::{NodeDetails, RegistrarError, Result, PROGRAM_ID};
use secrecy::{ExposeSecret, SecretString};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

use crate::credential::keypair_from_base58;

/// RPC endpoint of the SOON devnet
pub const DEFAULT_ENDPOINT: &str = "https://rpc.devnet.soo.network/rpc";

/// Default per-request RPC timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long to wait for a submitted transaction to be confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationConfig {
    /// Give up after this long
    pub timeout: Duration,

    /// Delay between signature status polls
    pub poll_interval: Duration,
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationConfig {
    /// Create a new confirmation configuration
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
        }
    }

    /// Set the overall timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the poll interval
    #[must_use]
    pub const fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Everything a registration run needs
#[derive(Debug)]
pub struct RegistrarConfig {
    /// Base58-encoded 64-byte keypair
    pub credential: Option<SecretString>,

    /// Strings submitted with the registration
    pub details: NodeDetails,

    /// Node number to register under; the wall clock is used when unset
    pub node_number: Option<u64>,

    /// JSON-RPC endpoint
    pub endpoint: String,

    /// Registry program
    pub program_id: Pubkey,

    /// Commitment used for preflight, confirmation and reads
    pub commitment: CommitmentConfig,

    /// Per-request RPC timeout
    pub request_timeout: Duration,

    /// Confirmation wait policy
    pub confirmation: ConfirmationConfig,
}

impl RegistrarConfig {
    /// Create a builder with default endpoint, program and commitment
    #[must_use]
    pub fn builder() -> RegistrarConfigBuilder {
        RegistrarConfigBuilder::new()
    }

    /// Decode the signing keypair.
    ///
    /// An absent or empty credential is [`RegistrarError::MissingCredential`].
    pub fn keypair(&self) -> Result<Keypair> {
        let secret = self
            .credential
            .as_ref()
            .map(|s| s.expose_secret())
            .filter(|s| !s.trim().is_empty())
            .ok_or(RegistrarError::MissingCredential)?;

        keypair_from_base58(secret)
    }
}

/// Builder for [`RegistrarConfig`]
#[derive(Debug)]
pub struct RegistrarConfigBuilder {
    credential: Option<SecretString>,
    details: NodeDetails,
    node_number: Option<u64>,
    endpoint: String,
    program_id: Pubkey,
    commitment: CommitmentConfig,
    request_timeout: Duration,
    confirmation: ConfirmationConfig,
}

impl Default for RegistrarConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrarConfigBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            credential: None,
            details: NodeDetails::default(),
            node_number: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            program_id: PROGRAM_ID,
            commitment: CommitmentConfig::confirmed(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            confirmation: ConfirmationConfig::default(),
        }
    }

    /// Set the base58 signing credential
    #[must_use]
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(SecretString::from(credential.into()));
        self
    }

    /// Set the credential from an optional source (e.g. an env var)
    #[must_use]
    pub fn credential_opt(mut self, credential: Option<String>) -> Self {
        self.credential = credential.map(SecretString::from);
        self
    }

    /// Set all node details at once
    #[must_use]
    pub fn details(mut self, details: NodeDetails) -> Self {
        self.details = details;
        self
    }

    /// Set the node identity (DID)
    #[must_use]
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.details.identity = identity.into();
        self
    }

    /// Set the node name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.details.name = name.into();
        self
    }

    /// Set the IP address
    #[must_use]
    pub fn ip_address(mut self, ip: impl Into<String>) -> Self {
        self.details.ip_address = ip.into();
        self
    }

    /// Set the ISP descriptor
    #[must_use]
    pub fn isp_info(mut self, isp: impl Into<String>) -> Self {
        self.details.isp_info = isp.into();
        self
    }

    /// Set the region
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.details.region = region.into();
        self
    }

    /// Set the location
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.details.location = location.into();
        self
    }

    /// Pin the node number instead of taking it from the clock
    #[must_use]
    pub fn node_number(mut self, node_number: u64) -> Self {
        self.node_number = Some(node_number);
        self
    }

    /// Set the RPC endpoint
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Set the registry program
    #[must_use]
    pub fn program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    /// Set the commitment level
    #[must_use]
    pub fn commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    /// Set the per-request RPC timeout
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the confirmation policy
    #[must_use]
    pub fn confirmation(mut self, confirmation: ConfirmationConfig) -> Self {
        self.confirmation = confirmation;
        self
    }

    /// Build the configuration, checking the endpoint URL
    pub fn build(self) -> Result<RegistrarConfig> {
        let url = url::Url::parse(&self.endpoint)
            .map_err(|e| RegistrarError::Config(format!("invalid endpoint {}: {e}", self.endpoint)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RegistrarError::Config(format!(
                "endpoint must be http(s), got {}",
                url.scheme()
            )));
        }

        Ok(RegistrarConfig {
            credential: self.credential,
            details: self.details,
            node_number: self.node_number,
            endpoint: self.endpoint,
            program_id: self.program_id,
            commitment: self.commitment,
            request_timeout: self.request_timeout,
            confirmation: self.confirmation,
        })
    }
}
