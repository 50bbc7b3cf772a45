//! Core types and wire contract for the VPN node registrar.
//!
//! This crate provides the pieces shared by the client and the CLI:
//!
//! - **Types**: node details, the on-chain [`VpnNodeAccount`] record and the
//!   [`RegistrationReport`] returned by a registration run
//! - **Program**: the fixed `registerVpnNode` call, its discriminators, seeds
//!   and the program-derived address of a node record
//! - **Errors**: the registrar failure taxonomy with [`RegistrarError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use nodereg_core::{derive_node_address, PROGRAM_ID};
//!
//! let (address, bump) = derive_node_address(&PROGRAM_ID, 1_700_000_000_000);
//! println!("node record lives at {address} (bump {bump})");
//! ```

#![doc(html_root_url = "https://docs.rs/nodereg-core/0.3.0")]

mod error;
mod identity;
pub mod program;
pub mod types;

pub use error::{ErrorKind, RegistrarError, Result};
pub use identity::{generate_did, DEFAULT_DID_LENGTH, DEFAULT_DID_METHOD};
pub use program::{
    derive_node_address, register_vpn_node_ix, timestamp_node_number, PROGRAM_ID,
    REGISTER_VPN_NODE_DISCRIMINATOR, SYSTEM_PROGRAM_ID, VPN_NODE_ACCOUNT_DISCRIMINATOR,
    VPN_SEED,
};
pub use types::*;
