//! Typed-data assembly shared by the signature-transfer and allowance-transfer
//! permits.
//!
//! [`PermitData`] is the `{domain, types, primaryType, values}` record a
//! signing request is built from. Hashing goes through
//! [`alloy_dyn_abi::TypedData`], which performs the standard EIP-712
//! canonicalization: per-type struct hashes, the domain-separator hash, and
//! the final `keccak256("\x19\x01" || domainSeparator || structHash)`
//! combination. The dynamic path is required because witness schemas are open
//! at runtime and cannot be expressed with compile-time `sol!` types.

use std::collections::BTreeMap;

use alloy_dyn_abi::TypedData;
use alloy_primitives::B256;
use alloy_sol_types::Eip712Domain;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};

use crate::error::Permit2Error;

/// A single field declaration inside an EIP-712 struct type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeField {
    /// Field name as it appears in the signed struct.
    pub name: String,
    /// Solidity type of the field, e.g. `uint256`, `address`, `TokenPermissions[]`.
    #[serde(rename = "type")]
    pub ty: String,
}

impl TypeField {
    /// Creates a field declaration from a name and a Solidity type.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Named struct type declarations for a typed-data signing request.
///
/// Keyed by struct name; a `BTreeMap` keeps serialization deterministic.
pub type TypeDeclarations = BTreeMap<String, Vec<TypeField>>;

/// Structured payload that extends a Permit2 signature transfer with
/// application-defined data.
///
/// Implementors declare the EIP-712 name of the witness struct and the type
/// declarations for it plus any structs it references. The payload itself is
/// serialized into the signed message under the `witness` key. Declarations
/// that do not match the serialized payload surface as
/// [`Permit2Error::TypedData`] when hashing.
pub trait WitnessData: Serialize {
    /// EIP-712 type name of the witness struct, e.g. `"SaleOrder"`.
    fn type_name(&self) -> &str;

    /// Type declarations for the witness struct and every struct it references.
    fn type_declarations(&self) -> TypeDeclarations;
}

/// A witness whose schema is only known at runtime.
///
/// Used when the extension shape arrives from configuration or over the wire
/// rather than from a Rust struct. Statically shaped witnesses are better
/// served by implementing [`WitnessData`] on a `Serialize` struct directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicWitness {
    /// EIP-712 type name of the witness struct.
    pub type_name: String,
    /// Declarations for the witness struct and every struct it references.
    pub types: TypeDeclarations,
    /// The witness payload, matching the declared shape.
    pub value: Value,
}

impl Serialize for DynamicWitness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl WitnessData for DynamicWitness {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn type_declarations(&self) -> TypeDeclarations {
        self.types.clone()
    }
}

/// Assembled typed-data record for a Permit2 signing request.
///
/// This is the `{domain, types, values}` triple handed to a wallet or signer,
/// plus the primary-type name the downstream hasher needs. No hashing has
/// happened yet; call [`PermitData::signing_hash`] for the digest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PermitData {
    /// EIP-712 signing domain: protocol name, chain id, verifying contract.
    pub domain: Eip712Domain,
    /// Every named struct type referenced by the message.
    pub types: TypeDeclarations,
    /// Name of the struct type the signature is computed over.
    #[serde(rename = "primaryType")]
    pub primary_type: &'static str,
    /// The message payload, shaped like `primary_type`.
    pub values: Value,
}

impl PermitData {
    /// Computes the EIP-712 signing hash of the assembled record.
    ///
    /// Deterministic in all inputs; the returned [`B256`] renders as the
    /// `0x`-prefixed 64-hex-digit string via `Display`.
    ///
    /// # Errors
    ///
    /// Returns [`Permit2Error::Encode`] if the record cannot be serialized
    /// into typed-data JSON, or [`Permit2Error::TypedData`] if the type graph
    /// does not resolve against the message (e.g. inconsistent witness
    /// declarations).
    pub fn signing_hash(&self) -> Result<B256, Permit2Error> {
        #[cfg(feature = "telemetry")]
        tracing::trace!(primary_type = self.primary_type, "hashing Permit2 typed data");

        let typed: TypedData = serde_json::from_value(json!({
            "types": &self.types,
            "primaryType": self.primary_type,
            "domain": &self.domain,
            "message": &self.values,
        }))?;
        Ok(typed.eip712_signing_hash()?)
    }
}
