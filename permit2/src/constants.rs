//! Protocol-fixed constants for the Permit2 contract suite.
//!
//! The maxima here bound the numeric fields of signed permits. On the
//! signature-transfer side every bound is the full `uint256` range; the
//! allowance-transfer side packs its fields tighter (`uint160` amounts,
//! `uint48` expirations and nonces) to fit a single storage slot.

use alloy_primitives::{Address, U256, address};

/// Canonical Uniswap Permit2 contract address (same on all EVM chains via CREATE2).
pub const PERMIT2_ADDRESS: Address = address!("0x000000000022D473030F116dDEE9F6B43aC78BA3");

/// Maximum value of a `uint48` field.
pub const MAX_UINT48: u64 = (1 << 48) - 1;

/// Maximum value of a `uint160` field.
pub const MAX_UINT160: U256 = U256::from_limbs([u64::MAX, u64::MAX, 0xFFFF_FFFF, 0]);

/// Maximum value of a `uint256` field.
pub const MAX_UINT256: U256 = U256::MAX;

/// Highest deadline accepted on a signature-transfer permit.
pub const MAX_SIG_DEADLINE: U256 = MAX_UINT256;

/// Highest unordered nonce accepted on a signature-transfer permit.
pub const MAX_UNORDERED_NONCE: U256 = MAX_UINT256;

/// Highest amount transferable through a signature transfer.
pub const MAX_SIGNATURE_TRANSFER_AMOUNT: U256 = MAX_UINT256;

/// Highest amount grantable through an allowance transfer (`uint160`).
pub const MAX_ALLOWANCE_TRANSFER_AMOUNT: U256 = MAX_UINT160;

/// Highest allowance expiration timestamp (`uint48`).
pub const MAX_ALLOWANCE_EXPIRATION: u64 = MAX_UINT48;

/// Highest ordered nonce accepted on an allowance permit (`uint48`).
pub const MAX_ORDERED_NONCE: u64 = MAX_UINT48;

/// Expiration value marking an allowance as valid only for the block it lands in.
pub const INSTANT_EXPIRATION: u64 = 0;
