use alloy::{
    json_abi::JsonAbi,
    primitives::{Address, Bytes},
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Build the key a deployment module records a contract under:
/// `<ModuleId>#<ContractName>`.
pub fn future_id(module_id: &str, contract_name: &str) -> String {
    format!("{module_id}#{contract_name}")
}

/// Deployed contract addresses for one chain, keyed by future ID.
///
/// Serializes as the flat JSON object found in `deployed_addresses.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct DeploymentRecord(BTreeMap<String, Address>);

impl DeploymentRecord {
    /// Create an empty record.
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Get the address deployed under a future ID.
    pub fn get(&self, future_id: &str) -> Option<Address> {
        self.0.get(future_id).copied()
    }

    /// Record an address under a future ID, returning the address it
    /// replaces.
    pub fn insert(&mut self, future_id: impl Into<String>, address: Address) -> Option<Address> {
        self.0.insert(future_id.into(), address)
    }

    /// Iterate over `(future_id, address)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of recorded contracts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A compiled contract artifact as emitted by the Solidity toolchain.
///
/// Fields the tooling does not interpret are preserved in `extra`, so an
/// artifact can be re-serialized without loss.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Contract name.
    pub contract_name: String,
    /// Path of the source file the contract was compiled from.
    pub source_name: String,
    /// Contract ABI.
    pub abi: JsonAbi,
    /// Creation bytecode.
    pub bytecode: Bytes,
    /// Runtime bytecode.
    pub deployed_bytecode: Bytes,
    /// Other fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// True if the artifact carries creation bytecode. Interfaces and
    /// abstract contracts compile to empty bytecode.
    pub fn is_deployable(&self) -> bool {
        !self.bytecode.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_is_flat_json() {
        let mut record = DeploymentRecord::new();
        let id = future_id("NftMarketplaceModule", "NftMarketplace");
        assert_eq!(id, "NftMarketplaceModule#NftMarketplace");
        assert_eq!(record.insert(id.clone(), Address::repeat_byte(1)), None);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            json!({ "NftMarketplaceModule#NftMarketplace": Address::repeat_byte(1) })
        );

        let back: DeploymentRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.get(&id), Some(Address::repeat_byte(1)));
    }

    #[test]
    fn artifact_keeps_unknown_fields() {
        let value = json!({
            "_format": "hh-sol-artifact-1",
            "contractName": "NftMarketplace",
            "sourceName": "contracts/NftMarketplace.sol",
            "abi": [],
            "bytecode": "0x6080",
            "deployedBytecode": "0x",
            "linkReferences": {},
            "deployedLinkReferences": {}
        });
        let artifact = ContractArtifact::from_value(value.clone()).unwrap();
        assert!(artifact.is_deployable());
        assert_eq!(artifact.extra.get("_format"), Some(&json!("hh-sol-artifact-1")));
        assert_eq!(serde_json::to_value(&artifact).unwrap(), value);
    }
}
