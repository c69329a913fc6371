//! Typed-data construction for Permit2 `AllowanceTransfer` permits.
//!
//! Mirrors the `IAllowanceTransfer` half of the Permit2 contract: standing
//! allowances granted per (token, spender) pair with a `uint160` amount, a
//! `uint48` expiration, and a `uint48` ordered nonce, all packed into one
//! storage slot on chain. The permits here only authorize updating those
//! allowances; there is no witness extension on this half.

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::constants::{
    MAX_ALLOWANCE_EXPIRATION, MAX_ALLOWANCE_TRANSFER_AMOUNT, MAX_ORDERED_NONCE, MAX_SIG_DEADLINE,
};
use crate::domain::permit2_domain;
use crate::error::Permit2Error;
use crate::typed_data::{PermitData, TypeDeclarations, TypeField};

const PERMIT_DETAILS: &str = "PermitDetails";
const PERMIT_SINGLE: &str = "PermitSingle";
const PERMIT_BATCH: &str = "PermitBatch";

/// Allowance parameters for one (token, spender) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitDetails {
    /// ERC-20 token contract address.
    pub token: Address,
    /// Allowance amount (`uint160`), in the token's smallest unit.
    pub amount: U256,
    /// Unix timestamp at which the allowance expires (`uint48`).
    pub expiration: u64,
    /// Ordered nonce for this (token, spender) pair (`uint48`).
    pub nonce: u64,
}

/// Permit updating a single allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitSingle {
    /// Allowance being granted.
    pub details: PermitDetails,
    /// Address receiving the allowance.
    pub spender: Address,
    /// Unix timestamp after which the signature is no longer valid.
    pub sig_deadline: U256,
}

/// Permit updating several allowances for the same spender at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitBatch {
    /// Ordered allowances being granted; the order is part of the signed payload.
    pub details: Vec<PermitDetails>,
    /// Address receiving the allowances.
    pub spender: Address,
    /// Unix timestamp after which the signature is no longer valid.
    pub sig_deadline: U256,
}

/// An allowance-transfer permit, either single or batch.
///
/// As with signature transfers, the variant selects the EIP-712 primary type;
/// a batch of one stays a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllowanceTransfer {
    /// Single-allowance permit.
    Single(PermitSingle),
    /// Batch permit over an ordered allowance list.
    Batch(PermitBatch),
}

impl From<PermitSingle> for AllowanceTransfer {
    fn from(permit: PermitSingle) -> Self {
        Self::Single(permit)
    }
}

impl From<PermitBatch> for AllowanceTransfer {
    fn from(permit: PermitBatch) -> Self {
        Self::Batch(permit)
    }
}

impl AllowanceTransfer {
    /// Assembles the typed-data record for this permit without hashing it.
    ///
    /// # Errors
    ///
    /// Returns the field-specific range error if the signature deadline or
    /// any details entry exceeds its protocol maximum, or
    /// [`Permit2Error::Encode`] if the permit cannot be serialized.
    pub fn permit_data(
        &self,
        verifying_contract: Address,
        chain_id: u64,
    ) -> Result<PermitData, Permit2Error> {
        self.validate()?;
        Ok(PermitData {
            domain: permit2_domain(verifying_contract, chain_id),
            types: allowance_types(self.is_batch()),
            primary_type: primary_type(self.is_batch()),
            values: serde_json::to_value(self)?,
        })
    }

    /// Computes the EIP-712 signing hash for this permit.
    ///
    /// # Errors
    ///
    /// Same as [`AllowanceTransfer::permit_data`], plus
    /// [`Permit2Error::TypedData`] if the assembled record fails to hash.
    pub fn signing_hash(
        &self,
        verifying_contract: Address,
        chain_id: u64,
    ) -> Result<B256, Permit2Error> {
        self.permit_data(verifying_contract, chain_id)?.signing_hash()
    }

    const fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Bounds-checks the signature deadline and every details entry, failing
    /// on the first violation.
    fn validate(&self) -> Result<(), Permit2Error> {
        let sig_deadline = match self {
            Self::Single(p) => p.sig_deadline,
            Self::Batch(p) => p.sig_deadline,
        };
        if sig_deadline > MAX_SIG_DEADLINE {
            return Err(Permit2Error::SigDeadlineOutOfRange(sig_deadline));
        }
        match self {
            Self::Single(p) => check_details(&p.details),
            Self::Batch(p) => p.details.iter().try_for_each(check_details),
        }
    }
}

fn check_details(details: &PermitDetails) -> Result<(), Permit2Error> {
    if details.amount > MAX_ALLOWANCE_TRANSFER_AMOUNT {
        return Err(Permit2Error::AmountOutOfRange(details.amount));
    }
    if details.expiration > MAX_ALLOWANCE_EXPIRATION {
        return Err(Permit2Error::ExpirationOutOfRange(details.expiration));
    }
    if details.nonce > MAX_ORDERED_NONCE {
        return Err(Permit2Error::NonceOutOfRange(U256::from(details.nonce)));
    }
    Ok(())
}

fn permit_details_fields() -> Vec<TypeField> {
    vec![
        TypeField::new("token", "address"),
        TypeField::new("amount", "uint160"),
        TypeField::new("expiration", "uint48"),
        TypeField::new("nonce", "uint48"),
    ]
}

fn allowance_types(batch: bool) -> TypeDeclarations {
    let details_ty = if batch {
        "PermitDetails[]"
    } else {
        "PermitDetails"
    };
    let mut types = TypeDeclarations::new();
    types.insert(PERMIT_DETAILS.to_owned(), permit_details_fields());
    types.insert(
        primary_type(batch).to_owned(),
        vec![
            TypeField::new("details", details_ty),
            TypeField::new("spender", "address"),
            TypeField::new("sigDeadline", "uint256"),
        ],
    );
    types
}

const fn primary_type(batch: bool) -> &'static str {
    if batch { PERMIT_BATCH } else { PERMIT_SINGLE }
}
