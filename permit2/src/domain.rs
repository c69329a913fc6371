//! EIP-712 signing domain construction for Permit2 deployments.

use alloy_primitives::Address;
use alloy_sol_types::{Eip712Domain, eip712_domain};

use crate::constants::PERMIT2_ADDRESS;

/// EIP-712 domain name shared by every Permit2 deployment.
pub const PERMIT2_DOMAIN_NAME: &str = "Permit2";

/// Builds the EIP-712 signing domain for a Permit2 deployment.
///
/// Permit2 domains carry no `version` field: the separator binds only the
/// protocol name, the chain id, and the verifying contract address.
#[must_use]
pub fn permit2_domain(verifying_contract: Address, chain_id: u64) -> Eip712Domain {
    eip712_domain! {
        name: PERMIT2_DOMAIN_NAME,
        chain_id: chain_id,
        verifying_contract: verifying_contract,
    }
}

/// Builds the signing domain for the canonical Permit2 deployment on `chain_id`.
#[must_use]
pub fn canonical_permit2_domain(chain_id: u64) -> Eip712Domain {
    permit2_domain(PERMIT2_ADDRESS, chain_id)
}
