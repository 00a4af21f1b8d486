use crate::DeployError;
use nftmarket_types::DeploymentRecord;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Default root of per-chain deployment directories.
pub const DEFAULT_DEPLOYMENTS_DIR: &str = "ignition/deployments";

/// File holding the [`DeploymentRecord`] of a chain.
pub const DEPLOYED_ADDRESSES_FILE: &str = "deployed_addresses.json";

/// Directory, inside a chain directory, holding deployed artifacts.
pub const ARTIFACTS_DIR: &str = "artifacts";

/// On-disk layout of deployment results:
///
/// ```text
/// <root>/chain-<chainId>/deployed_addresses.json
/// <root>/chain-<chainId>/artifacts/<futureId>.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentLayout {
    root: PathBuf,
}

impl Default for DeploymentLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DEPLOYMENTS_DIR)
    }
}

impl DeploymentLayout {
    /// Create a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a chain's deployment results.
    pub fn chain_dir(&self, chain_id: u64) -> PathBuf {
        self.root.join(format!("chain-{chain_id}"))
    }

    /// Path of a chain's deployed-address record.
    pub fn addresses_path(&self, chain_id: u64) -> PathBuf {
        self.chain_dir(chain_id).join(DEPLOYED_ADDRESSES_FILE)
    }

    /// Path of the artifact deployed under `future_id` on a chain.
    pub fn artifact_path(&self, chain_id: u64, future_id: &str) -> PathBuf {
        self.chain_dir(chain_id).join(ARTIFACTS_DIR).join(format!("{future_id}.json"))
    }

    /// Read a chain's record. A chain with nothing deployed yet has an
    /// empty record.
    pub fn read_record(&self, chain_id: u64) -> Result<DeploymentRecord, DeployError> {
        let path = self.addresses_path(chain_id);
        match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|err| DeployError::json(path, err))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(DeploymentRecord::new()),
            Err(err) => Err(DeployError::io(path, err)),
        }
    }

    /// Write a chain's record, replacing the previous one.
    pub fn write_record(
        &self,
        chain_id: u64,
        record: &DeploymentRecord,
    ) -> Result<PathBuf, DeployError> {
        let path = self.addresses_path(chain_id);
        write_json(&path, record)?;
        Ok(path)
    }

    /// Write the artifact deployed under `future_id` on a chain.
    pub fn write_artifact(
        &self,
        chain_id: u64,
        future_id: &str,
        artifact: &Value,
    ) -> Result<PathBuf, DeployError> {
        let path = self.artifact_path(chain_id, future_id);
        write_json(&path, artifact)?;
        Ok(path)
    }
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DeployError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| DeployError::io(parent, err))?;
    }
    let contents = serde_json::to_string_pretty(value).map_err(|err| DeployError::json(path, err))?;
    fs::write(path, contents).map_err(|err| DeployError::io(path, err))?;
    debug!(path = %path.display(), "wrote deployment file");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::primitives::Address;

    #[test]
    fn paths_follow_chain_layout() {
        let layout = DeploymentLayout::new("ignition/deployments");
        assert_eq!(
            layout.addresses_path(31337),
            Path::new("ignition/deployments/chain-31337/deployed_addresses.json")
        );
        assert_eq!(
            layout.artifact_path(1, "NftMarketplaceModule#NftMarketplace"),
            Path::new("ignition/deployments/chain-1/artifacts/NftMarketplaceModule#NftMarketplace.json")
        );
    }

    #[test]
    fn missing_record_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DeploymentLayout::new(dir.path());
        assert!(layout.read_record(5).unwrap().is_empty());
    }

    #[test]
    fn record_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DeploymentLayout::new(dir.path());

        let mut record = DeploymentRecord::new();
        record.insert("M#C", Address::repeat_byte(0xab));
        layout.write_record(7, &record).unwrap();

        assert_eq!(layout.read_record(7).unwrap(), record);
    }

    #[test]
    fn malformed_record_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let layout = DeploymentLayout::new(dir.path());
        fs::create_dir_all(layout.chain_dir(7)).unwrap();
        fs::write(layout.addresses_path(7), "{ not json").unwrap();

        assert!(matches!(layout.read_record(7), Err(DeployError::Json { .. })));
    }
}
