//! Contract artifacts and deployment files for exporter and deployment
//! tests.

use alloy::primitives::{Address, B256};
use nftmarket_deploy::{
    load_artifact, Deployment, DeployError, DeploymentLayout, CONTRACT_NAME,
    DEFAULT_ARTIFACT_PATH,
};
use nftmarket_types::ContractArtifact;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Environment variable overriding the location of the compiled
/// marketplace artifact.
pub const ARTIFACT_PATH_VAR: &str = "NFTMARKET_ARTIFACT";

/// A small artifact in the compiler's output format.
pub fn sample_artifact() -> Value {
    json!({
        "_format": "hh-sol-artifact-1",
        "contractName": CONTRACT_NAME,
        "sourceName": "contracts/NftMarketplace.sol",
        "abi": [
            {
                "type": "function",
                "name": "getSupportedPayments",
                "inputs": [],
                "outputs": [{ "name": "", "type": "address[]", "internalType": "address[]" }],
                "stateMutability": "view"
            }
        ],
        "bytecode": "0x6080604052",
        "deployedBytecode": "0x6080604052",
        "linkReferences": {},
        "deployedLinkReferences": {}
    })
}

/// Record a deployment of [`sample_artifact`] at `address` for `chain_id`.
pub fn write_sample_deployment(
    layout: &DeploymentLayout,
    chain_id: u64,
    address: Address,
) -> Result<Deployment, DeployError> {
    let deployment =
        Deployment { address, tx_hash: B256::ZERO, block_number: Some(1), gas_used: 0 };
    deployment.persist(layout, chain_id, &sample_artifact())?;
    Ok(deployment)
}

/// Load the compiled marketplace, from `NFTMARKET_ARTIFACT` or the
/// default artifact path under the workspace root. Returns `None`, after
/// reporting why, when there is no deployable artifact.
pub fn compiled_marketplace() -> Option<(Value, ContractArtifact)> {
    let path = std::env::var(ARTIFACT_PATH_VAR).map(PathBuf::from).unwrap_or_else(|_| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..").join(DEFAULT_ARTIFACT_PATH)
    });

    match load_artifact(&path) {
        Ok((raw, artifact)) if artifact.is_deployable() => Some((raw, artifact)),
        Ok(_) => {
            eprintln!("skipping: {} has no creation bytecode", path.display());
            None
        }
        Err(err) => {
            eprintln!("skipping: no compiled marketplace: {err}");
            None
        }
    }
}
