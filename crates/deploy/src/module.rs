use crate::{DeployError, DeploymentLayout};
use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, TxHash, U256},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol_types::SolConstructor,
};
use nftmarket_bindings::NftMarketplace;
use nftmarket_constants::mainnet::PAYMENTS;
use nftmarket_types::{future_id, ContractArtifact};
use serde_json::Value;
use std::{fs, path::Path};
use tracing::{info, instrument};

/// ID of the deployment module.
pub const MODULE_ID: &str = "NftMarketplaceModule";

/// Name of the deployed contract.
pub const CONTRACT_NAME: &str = "NftMarketplace";

/// Default location of the compiled marketplace artifact.
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/NftMarketplace.sol/NftMarketplace.json";

/// 1 gwei, the value attached to the deployment by default.
pub const ONE_GWEI: U256 = U256::from_limbs([1_000_000_000, 0, 0, 0]);

/// Declares the marketplace deployment: one contract, constructed with the
/// ordered supported-payment list, with a fixed native value attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftMarketplaceModule {
    supported_payments: Vec<Address>,
    value: U256,
}

impl NftMarketplaceModule {
    /// Create a new module.
    pub const fn new(supported_payments: Vec<Address>, value: U256) -> Self {
        Self { supported_payments, value }
    }

    /// The mainnet module: the registry's payment tokens, in registry
    /// order, and [`ONE_GWEI`].
    pub fn mainnet() -> Self {
        Self::new(PAYMENTS.supported_payments(), ONE_GWEI)
    }

    /// Replace the attached value.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// The key the contract is recorded under: `NftMarketplaceModule#NftMarketplace`.
    pub fn future_id() -> String {
        future_id(MODULE_ID, CONTRACT_NAME)
    }

    /// Get the constructor's supported-payment list.
    pub fn supported_payments(&self) -> &[Address] {
        &self.supported_payments
    }

    /// Get the value attached to the deployment.
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Creation bytecode followed by the ABI-encoded constructor argument.
    pub fn deploy_code(&self, artifact: &ContractArtifact) -> Result<Bytes, DeployError> {
        if !artifact.is_deployable() {
            return Err(DeployError::NotDeployable(artifact.contract_name.clone()));
        }
        let args = NftMarketplace::constructorCall {
            supportedPayments: self.supported_payments.clone(),
        }
        .abi_encode();

        let mut code = Vec::with_capacity(artifact.bytecode.len() + args.len());
        code.extend_from_slice(&artifact.bytecode);
        code.extend_from_slice(&args);
        Ok(code.into())
    }

    /// Send the deployment transaction from `deployer` and wait for it to
    /// be mined.
    #[instrument(skip(self, provider, artifact), fields(value = %self.value))]
    pub async fn deploy<P: Provider>(
        &self,
        provider: &P,
        deployer: Address,
        artifact: &ContractArtifact,
    ) -> Result<Deployment, DeployError> {
        let tx = TransactionRequest::default()
            .with_from(deployer)
            .with_deploy_code(self.deploy_code(artifact)?)
            .with_value(self.value);

        let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
        let tx_hash = receipt.transaction_hash;
        if !receipt.status() {
            return Err(DeployError::Reverted(tx_hash));
        }
        let address = receipt.contract_address.ok_or(DeployError::NoContractAddress(tx_hash))?;

        info!(%address, %tx_hash, gas_used = receipt.gas_used, "deployed {CONTRACT_NAME}");
        Ok(Deployment {
            address,
            tx_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}

/// A mined marketplace deployment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Deployment {
    /// Address of the deployed contract.
    pub address: Address,
    /// Hash of the deployment transaction.
    pub tx_hash: TxHash,
    /// Block the deployment was mined in.
    pub block_number: Option<u64>,
    /// Gas used by the deployment.
    pub gas_used: u64,
}

impl Deployment {
    /// Record the deployment for `chain_id`: add it to the chain's
    /// deployed-address record, keeping other entries, and store a copy of
    /// the artifact next to it.
    pub fn persist(
        &self,
        layout: &DeploymentLayout,
        chain_id: u64,
        artifact: &Value,
    ) -> Result<(), DeployError> {
        let future_id = NftMarketplaceModule::future_id();

        let mut record = layout.read_record(chain_id)?;
        if let Some(previous) = record.insert(future_id.clone(), self.address) {
            info!(%previous, current = %self.address, "replacing recorded deployment");
        }
        layout.write_record(chain_id, &record)?;
        layout.write_artifact(chain_id, &future_id, artifact)?;
        Ok(())
    }
}

/// First unlocked account of the node, used as deployer on local networks.
pub async fn first_account<P: Provider>(provider: &P) -> Result<Address, DeployError> {
    provider.get_accounts().await?.first().copied().ok_or(DeployError::NoDeployer)
}

/// Load a compiled artifact, returning both the raw JSON (to be copied
/// verbatim) and its typed view.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<(Value, ContractArtifact), DeployError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| DeployError::io(path, err))?;
    let raw: Value = serde_json::from_str(&contents).map_err(|err| DeployError::json(path, err))?;
    let artifact =
        ContractArtifact::from_value(raw.clone()).map_err(|err| DeployError::json(path, err))?;
    Ok((raw, artifact))
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::{json_abi::JsonAbi, primitives::bytes, sol_types::SolValue};
    use serde_json::Map;

    fn artifact(bytecode: Bytes) -> ContractArtifact {
        ContractArtifact {
            contract_name: CONTRACT_NAME.to_string(),
            source_name: "contracts/NftMarketplace.sol".to_string(),
            abi: JsonAbi::default(),
            bytecode,
            deployed_bytecode: Bytes::new(),
            extra: Map::new(),
        }
    }

    #[test]
    fn mainnet_module_uses_registry_order() {
        let module = NftMarketplaceModule::mainnet();
        assert_eq!(module.supported_payments(), PAYMENTS.supported_payments().as_slice());
        assert_eq!(module.value(), ONE_GWEI);
        assert_eq!(NftMarketplaceModule::future_id(), "NftMarketplaceModule#NftMarketplace");
    }

    #[test]
    fn deploy_code_appends_constructor_args() {
        let module = NftMarketplaceModule::mainnet();
        let creation = bytes!("6080604052");
        let code = module.deploy_code(&artifact(creation.clone())).unwrap();

        let (prefix, args) = code.split_at(creation.len());
        assert_eq!(prefix, &creation[..]);

        let decoded = <(Vec<Address>,)>::abi_decode_params(args).unwrap();
        assert_eq!(decoded.0, PAYMENTS.supported_payments());
    }

    #[test]
    fn empty_bytecode_is_not_deployable() {
        let module = NftMarketplaceModule::mainnet();
        assert!(matches!(
            module.deploy_code(&artifact(Bytes::new())),
            Err(DeployError::NotDeployable(name)) if name == CONTRACT_NAME
        ));
    }

    #[test]
    fn load_artifact_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("NftMarketplace.json");
        assert!(matches!(load_artifact(&missing), Err(DeployError::Io { .. })));
    }
}
