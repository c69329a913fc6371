//! Error types for Permit2 typed-data construction and hashing.

use alloy_primitives::U256;

/// Errors raised while validating or hashing a Permit2 permit.
///
/// Range violations are precondition failures: the offending call aborts
/// immediately with the first violation found and produces no partial result.
#[derive(Debug, thiserror::Error)]
pub enum Permit2Error {
    /// A permitted amount exceeds the maximum for its transfer kind.
    #[error("amount {0} exceeds the maximum permitted transfer amount")]
    AmountOutOfRange(U256),

    /// A permit nonce exceeds the maximum for its transfer kind.
    #[error("nonce {0} exceeds the maximum permitted nonce")]
    NonceOutOfRange(U256),

    /// A signature deadline exceeds [`MAX_SIG_DEADLINE`](crate::constants::MAX_SIG_DEADLINE).
    #[error("signature deadline {0} exceeds the maximum permitted deadline")]
    SigDeadlineOutOfRange(U256),

    /// An allowance expiration exceeds
    /// [`MAX_ALLOWANCE_EXPIRATION`](crate::constants::MAX_ALLOWANCE_EXPIRATION).
    #[error("allowance expiration {0} exceeds the maximum permitted expiration")]
    ExpirationOutOfRange(u64),

    /// The permit or witness payload could not be serialized into a
    /// typed-data message.
    #[error("failed to encode typed-data message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The assembled typed data could not be resolved or hashed, typically
    /// because a witness declared an inconsistent type graph.
    #[error("failed to hash typed data: {0}")]
    TypedData(#[from] alloy_dyn_abi::Error),
}
