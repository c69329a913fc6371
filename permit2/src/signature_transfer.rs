//! Typed-data construction for Permit2 `SignatureTransfer` permits.
//!
//! Mirrors the `ISignatureTransfer` half of the Permit2 contract: single and
//! batch token transfers authorized by an EIP-712 signature over an unordered
//! nonce, optionally extended with caller-supplied witness data that is bound
//! into the same signature.
//!
//! The entry points are [`SignatureTransfer::permit_data`] (assemble the
//! signing request without hashing) and [`SignatureTransfer::signing_hash`]
//! (assemble and hash), plus their `_with_witness` variants.

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SIG_DEADLINE, MAX_SIGNATURE_TRANSFER_AMOUNT, MAX_UNORDERED_NONCE};
use crate::domain::permit2_domain;
use crate::error::Permit2Error;
use crate::typed_data::{PermitData, TypeDeclarations, TypeField, WitnessData};

const TOKEN_PERMISSIONS: &str = "TokenPermissions";
const PERMIT_TRANSFER_FROM: &str = "PermitTransferFrom";
const PERMIT_BATCH_TRANSFER_FROM: &str = "PermitBatchTransferFrom";
const PERMIT_WITNESS_TRANSFER_FROM: &str = "PermitWitnessTransferFrom";
const PERMIT_BATCH_WITNESS_TRANSFER_FROM: &str = "PermitBatchWitnessTransferFrom";

/// A single token and the maximum amount the spender may transfer from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPermissions {
    /// ERC-20 token contract address.
    pub token: Address,
    /// Maximum transferable amount, in the token's smallest unit.
    pub amount: U256,
}

/// Permit authorizing a single-token signature transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitTransferFrom {
    /// Token and amount being permitted.
    pub permitted: TokenPermissions,
    /// Address allowed to execute the transfer.
    pub spender: Address,
    /// Unordered nonce consumed by this permit.
    pub nonce: U256,
    /// Unix timestamp after which the signature is no longer valid.
    pub deadline: U256,
}

/// Permit authorizing a batch signature transfer over an ordered token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermitBatchTransferFrom {
    /// Ordered token permissions; the order is part of the signed payload.
    pub permitted: Vec<TokenPermissions>,
    /// Address allowed to execute the transfers.
    pub spender: Address,
    /// Unordered nonce consumed by this permit.
    pub nonce: U256,
    /// Unix timestamp after which the signature is no longer valid.
    pub deadline: U256,
}

/// A signature-transfer permit, either single or batch.
///
/// The two shapes are distinct EIP-712 primary types. A batch with exactly
/// one entry still hashes as a batch; the variant, not the entry count,
/// selects the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignatureTransfer {
    /// Single-token permit.
    Single(PermitTransferFrom),
    /// Batch permit over an ordered token list.
    Batch(PermitBatchTransferFrom),
}

impl From<PermitTransferFrom> for SignatureTransfer {
    fn from(permit: PermitTransferFrom) -> Self {
        Self::Single(permit)
    }
}

impl From<PermitBatchTransferFrom> for SignatureTransfer {
    fn from(permit: PermitBatchTransferFrom) -> Self {
        Self::Batch(permit)
    }
}

impl SignatureTransfer {
    /// Assembles the typed-data record for this permit without hashing it.
    ///
    /// # Errors
    ///
    /// Returns the field-specific range error if the deadline, nonce, or any
    /// permitted amount exceeds its protocol maximum, or
    /// [`Permit2Error::Encode`] if the permit cannot be serialized.
    pub fn permit_data(
        &self,
        verifying_contract: Address,
        chain_id: u64,
    ) -> Result<PermitData, Permit2Error> {
        self.validate()?;
        Ok(PermitData {
            domain: permit2_domain(verifying_contract, chain_id),
            types: base_types(self.is_batch()),
            primary_type: primary_type(self.is_batch(), false),
            values: serde_json::to_value(self)?,
        })
    }

    /// Assembles the typed-data record for this permit extended with witness
    /// data.
    ///
    /// The witness payload is merged into the message under the `witness` key
    /// by building a fresh value; the permit itself is never mutated. The
    /// schema replaces the plain primary struct with its witness-extended
    /// variant and merges in the witness's own type declarations.
    ///
    /// # Errors
    ///
    /// Same as [`SignatureTransfer::permit_data`].
    pub fn permit_data_with_witness<W: WitnessData>(
        &self,
        verifying_contract: Address,
        chain_id: u64,
        witness: &W,
    ) -> Result<PermitData, Permit2Error> {
        self.validate()?;
        let mut values = serde_json::to_value(self)?;
        if let Some(message) = values.as_object_mut() {
            // Permits always serialize to JSON objects.
            message.insert("witness".to_owned(), serde_json::to_value(witness)?);
        }
        Ok(PermitData {
            domain: permit2_domain(verifying_contract, chain_id),
            types: witness_types(self.is_batch(), witness),
            primary_type: primary_type(self.is_batch(), true),
            values,
        })
    }

    /// Computes the EIP-712 signing hash for this permit.
    ///
    /// # Errors
    ///
    /// Same as [`SignatureTransfer::permit_data`], plus
    /// [`Permit2Error::TypedData`] if the assembled record fails to hash.
    pub fn signing_hash(
        &self,
        verifying_contract: Address,
        chain_id: u64,
    ) -> Result<B256, Permit2Error> {
        self.permit_data(verifying_contract, chain_id)?.signing_hash()
    }

    /// Computes the EIP-712 signing hash for this permit extended with
    /// witness data.
    ///
    /// # Errors
    ///
    /// Same as [`SignatureTransfer::permit_data_with_witness`], plus
    /// [`Permit2Error::TypedData`] if the assembled record fails to hash.
    pub fn signing_hash_with_witness<W: WitnessData>(
        &self,
        verifying_contract: Address,
        chain_id: u64,
        witness: &W,
    ) -> Result<B256, Permit2Error> {
        self.permit_data_with_witness(verifying_contract, chain_id, witness)?
            .signing_hash()
    }

    const fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Bounds-checks deadline, nonce, and every permitted amount, failing on
    /// the first violation.
    fn validate(&self) -> Result<(), Permit2Error> {
        let (nonce, deadline) = match self {
            Self::Single(p) => (p.nonce, p.deadline),
            Self::Batch(p) => (p.nonce, p.deadline),
        };
        if deadline > MAX_SIG_DEADLINE {
            return Err(Permit2Error::SigDeadlineOutOfRange(deadline));
        }
        if nonce > MAX_UNORDERED_NONCE {
            return Err(Permit2Error::NonceOutOfRange(nonce));
        }
        match self {
            Self::Single(p) => check_amount(&p.permitted),
            Self::Batch(p) => p.permitted.iter().try_for_each(check_amount),
        }
    }
}

fn check_amount(entry: &TokenPermissions) -> Result<(), Permit2Error> {
    if entry.amount > MAX_SIGNATURE_TRANSFER_AMOUNT {
        return Err(Permit2Error::AmountOutOfRange(entry.amount));
    }
    Ok(())
}

fn token_permissions_fields() -> Vec<TypeField> {
    vec![
        TypeField::new("token", "address"),
        TypeField::new("amount", "uint256"),
    ]
}

/// Field list of the primary struct, before any witness extension.
fn permit_fields(batch: bool) -> Vec<TypeField> {
    let permitted_ty = if batch {
        "TokenPermissions[]"
    } else {
        "TokenPermissions"
    };
    vec![
        TypeField::new("permitted", permitted_ty),
        TypeField::new("spender", "address"),
        TypeField::new("nonce", "uint256"),
        TypeField::new("deadline", "uint256"),
    ]
}

fn base_types(batch: bool) -> TypeDeclarations {
    let mut types = TypeDeclarations::new();
    types.insert(TOKEN_PERMISSIONS.to_owned(), token_permissions_fields());
    types.insert(primary_type(batch, false).to_owned(), permit_fields(batch));
    types
}

/// Witness-extended declarations: the witness's own types, `TokenPermissions`,
/// and the extended primary struct. The plain primary struct name does not
/// appear.
fn witness_types<W: WitnessData>(batch: bool, witness: &W) -> TypeDeclarations {
    let mut types = witness.type_declarations();
    types.insert(TOKEN_PERMISSIONS.to_owned(), token_permissions_fields());
    let mut fields = permit_fields(batch);
    fields.push(TypeField::new("witness", witness.type_name()));
    types.insert(primary_type(batch, true).to_owned(), fields);
    types
}

/// Primary-type selection is a pure function of permit shape.
const fn primary_type(batch: bool, witness: bool) -> &'static str {
    match (batch, witness) {
        (false, false) => PERMIT_TRANSFER_FROM,
        (true, false) => PERMIT_BATCH_TRANSFER_FROM,
        (false, true) => PERMIT_WITNESS_TRANSFER_FROM,
        (true, true) => PERMIT_BATCH_WITNESS_TRANSFER_FROM,
    }
}
