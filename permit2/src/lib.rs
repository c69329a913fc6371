#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! EIP-712 typed-data construction and hashing for Uniswap's Permit2.
//!
//! This crate builds the `{domain, types, values}` records that wallets sign
//! to authorize Permit2 token transfers, and computes their canonical EIP-712
//! signing hashes. It covers both halves of the contract suite:
//!
//! - [`signature_transfer`] - Single and batch transfer permits over
//!   unordered nonces, optionally extended with application-defined witness
//!   data bound into the same signature
//! - [`allowance_transfer`] - `PermitSingle` / `PermitBatch` allowance
//!   updates with packed `uint160`/`uint48` fields
//!
//! Every operation is a pure, synchronous function of its arguments: no I/O,
//! no shared state, and safe to call concurrently. Signature creation,
//! verification, and on-chain submission are out of scope; pair this crate
//! with a signer (e.g. `alloy-signer`) to produce signatures over the hashes.
//!
//! # Example
//!
//! ```
//! use alloy_primitives::{address, U256};
//! use permit2::constants::PERMIT2_ADDRESS;
//! use permit2::{PermitTransferFrom, SignatureTransfer, TokenPermissions};
//!
//! # fn main() -> Result<(), permit2::Permit2Error> {
//! let permit = SignatureTransfer::from(PermitTransferFrom {
//!     permitted: TokenPermissions {
//!         token: address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
//!         amount: U256::from(1_000_000u64),
//!     },
//!     spender: address!("0x4020615294c913F045dc10f0a5cdEbd86c280001"),
//!     nonce: U256::ZERO,
//!     deadline: U256::from(1_700_000_000u64),
//! });
//!
//! // The record handed to a typed-data signing request...
//! let data = permit.permit_data(PERMIT2_ADDRESS, 1)?;
//! assert_eq!(data.primary_type, "PermitTransferFrom");
//!
//! // ...and its EIP-712 signing hash (0x-prefixed, 64 hex digits).
//! let hash = permit.signing_hash(PERMIT2_ADDRESS, 1)?;
//! assert_eq!(hash.to_string().len(), 66);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`allowance_transfer`] - Allowance-transfer permit types and hashing
//! - [`constants`] - Protocol-fixed maxima and the canonical contract address
//! - [`domain`] - EIP-712 signing domain construction
//! - [`error`] - The [`Permit2Error`] taxonomy
//! - [`signature_transfer`] - Signature-transfer permit types and hashing
//! - [`typed_data`] - Shared typed-data record, type declarations, witnesses
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation of hashing operations

pub mod allowance_transfer;
pub mod constants;
pub mod domain;
pub mod error;
pub mod signature_transfer;
pub mod typed_data;

pub use allowance_transfer::{AllowanceTransfer, PermitBatch, PermitDetails, PermitSingle};
pub use domain::{PERMIT2_DOMAIN_NAME, canonical_permit2_domain, permit2_domain};
pub use error::Permit2Error;
pub use signature_transfer::{
    PermitBatchTransferFrom, PermitTransferFrom, SignatureTransfer, TokenPermissions,
};
pub use typed_data::{DynamicWitness, PermitData, TypeDeclarations, TypeField, WitnessData};
