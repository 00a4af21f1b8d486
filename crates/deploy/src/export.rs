//! Export of the deployed address record and marketplace artifact as
//! JavaScript modules for the front end.
//!
//! Given a chain ID and a target directory, the exporter writes
//!
//! ```text
//! <dir>/assets/artifacts/addresses.js    export const addresses = {...};
//! <dir>/assets/artifacts/artifacts.js    export const artifacts = {...};
//! ```
//!
//! from the chain's [`DeploymentLayout`] entries. Both modules are
//! overwritten on every export.

use crate::{DeploymentLayout, ExportError, NftMarketplaceModule};
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument};

/// Directory, relative to the export target, holding generated modules.
pub const EXPORT_SUBDIR: &str = "assets/artifacts";

/// Generated module holding the deployed address record.
pub const ADDRESSES_MODULE: &str = "addresses.js";

/// Generated module holding the marketplace artifact.
pub const ARTIFACTS_MODULE: &str = "artifacts.js";

const MODULE_HEADER: &str = "// Generated by `nftmarket export`. Do not edit.";

/// Arguments of an export. Both are required; they are optional here so
/// that absent arguments are reported as [`ExportError::MissingArgument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRequest {
    /// Decimal chain ID of the deployment to export.
    pub chain_id: Option<String>,
    /// Directory of the consuming project.
    pub dir: Option<PathBuf>,
}

impl ExportRequest {
    /// Create a request with both arguments set.
    pub fn new(chain_id: impl ToString, dir: impl Into<PathBuf>) -> Self {
        Self { chain_id: Some(chain_id.to_string()), dir: Some(dir.into()) }
    }

    fn validate(&self) -> Result<(u64, &Path), ExportError> {
        let chain_id = self.chain_id.as_deref().ok_or(ExportError::MissingArgument("chain_id"))?;
        let dir = self.dir.as_deref().ok_or(ExportError::MissingArgument("dir"))?;

        let chain_id = chain_id.trim().parse::<u64>().map_err(|err| {
            ExportError::InvalidArgument { name: "chain_id", reason: err.to_string() }
        })?;
        if dir.as_os_str().is_empty() {
            return Err(ExportError::InvalidArgument {
                name: "dir",
                reason: "empty path".to_string(),
            });
        }
        Ok((chain_id, dir))
    }
}

/// Paths of the modules written by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedArtifacts {
    /// Path of the generated address module.
    pub addresses_path: PathBuf,
    /// Path of the generated artifact module.
    pub artifacts_path: PathBuf,
}

/// Export the deployment of the marketplace on a chain into `dir`.
///
/// Arguments are validated before anything is touched. The target
/// directory is created before the sources are read, so it exists even
/// when a source turns out to be missing.
#[instrument(skip(layout), fields(root = %layout.root().display()))]
pub fn export_contract_artifacts(
    layout: &DeploymentLayout,
    request: &ExportRequest,
) -> Result<ExportedArtifacts, ExportError> {
    let (chain_id, dir) = request.validate()?;

    let target = dir.join(EXPORT_SUBDIR);
    fs::create_dir_all(&target).map_err(|err| ExportError::io(&target, err))?;
    debug!(target = %target.display(), "created export directory");

    let addresses = read_source(&layout.addresses_path(chain_id))?;
    let artifact =
        read_source(&layout.artifact_path(chain_id, &NftMarketplaceModule::future_id()))?;

    let addresses_path = target.join(ADDRESSES_MODULE);
    write_module(&addresses_path, "addresses", &addresses)?;
    let artifacts_path = target.join(ARTIFACTS_MODULE);
    write_module(&artifacts_path, "artifacts", &artifact)?;

    info!(chain_id, target = %target.display(), "exported contract artifacts");
    Ok(ExportedArtifacts { addresses_path, artifacts_path })
}

fn read_source(path: &Path) -> Result<Value, ExportError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExportError::MissingSource { path: path.to_path_buf() })
        }
        Err(err) => return Err(ExportError::io(path, err)),
    };
    serde_json::from_str(&contents).map_err(|err| ExportError::json(path, err))
}

fn write_module(path: &Path, name: &str, value: &Value) -> Result<(), ExportError> {
    let module = render_module(name, value).map_err(|err| ExportError::json(path, err))?;
    fs::write(path, module).map_err(|err| ExportError::io(path, err))
}

/// Render `value` as a module exporting it under `name`.
pub fn render_module(name: &str, value: &Value) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(format!("{MODULE_HEADER}\nexport const {name} = {json};\n"))
}

/// Read a generated module back, returning the exported name and value.
///
/// Comment lines before the export are ignored.
pub fn parse_generated_module(src: &str) -> Result<(String, Value), ExportError> {
    let body = src
        .lines()
        .skip_while(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with("//")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let rest = body
        .strip_prefix("export const ")
        .ok_or(ExportError::MalformedModule("expected `export const`"))?;
    let (name, value) =
        rest.split_once('=').ok_or(ExportError::MalformedModule("expected `=`"))?;
    let value = value
        .trim_end()
        .strip_suffix(';')
        .ok_or(ExportError::MalformedModule("expected trailing `;`"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ExportError::MalformedModule("empty export name"));
    }
    let value = serde_json::from_str(value).map_err(ExportError::ModuleValue)?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn rendered_module_parses_back() {
        let value = json!({
            "NftMarketplaceModule#NftMarketplace": "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        });
        let module = render_module("addresses", &value).unwrap();
        assert!(module.contains("export const addresses = {"));

        let (name, parsed) = parse_generated_module(&module).unwrap();
        assert_eq!(name, "addresses");
        assert_eq!(parsed, value);
    }

    #[test]
    fn malformed_modules_are_rejected() {
        assert!(matches!(
            parse_generated_module("const addresses = {};"),
            Err(ExportError::MalformedModule(_))
        ));
        assert!(matches!(
            parse_generated_module("export const addresses = {}"),
            Err(ExportError::MalformedModule(_))
        ));
        assert!(matches!(
            parse_generated_module("export const addresses = {;"),
            Err(ExportError::ModuleValue(_))
        ));
    }

    #[test]
    fn arguments_are_validated() {
        let missing_chain = ExportRequest { chain_id: None, dir: Some("frontend".into()) };
        assert!(matches!(missing_chain.validate(), Err(ExportError::MissingArgument("chain_id"))));

        let missing_dir = ExportRequest { chain_id: Some("31337".into()), dir: None };
        assert!(matches!(missing_dir.validate(), Err(ExportError::MissingArgument("dir"))));

        let bad_chain = ExportRequest::new("mainnet", "frontend");
        assert!(matches!(
            bad_chain.validate(),
            Err(ExportError::InvalidArgument { name: "chain_id", .. })
        ));

        let empty_dir = ExportRequest::new(1, "");
        assert!(matches!(
            empty_dir.validate(),
            Err(ExportError::InvalidArgument { name: "dir", .. })
        ));

        let request = ExportRequest::new(31337, "frontend");
        assert_eq!(request.validate().unwrap(), (31337, Path::new("frontend")));
    }
}
