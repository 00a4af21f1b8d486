use alloy::primitives::Address;
use nftmarket_deploy::{
    export_contract_artifacts, parse_generated_module, DeploymentLayout, ExportError,
    ExportRequest, NftMarketplaceModule, EXPORT_SUBDIR,
};
use nftmarket_test_utils::artifacts::{sample_artifact, write_sample_deployment};
use serde_json::{json, Value};
use std::fs;

const CHAIN_ID: u64 = 31_337;

fn read_module(path: &std::path::Path) -> (String, Value) {
    parse_generated_module(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn missing_arguments_touch_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let layout = DeploymentLayout::new(dir.path().join("deployments"));
    let target = dir.path().join("frontend");

    let no_chain = ExportRequest { chain_id: None, dir: Some(target.clone()) };
    let err = export_contract_artifacts(&layout, &no_chain).unwrap_err();
    assert!(matches!(err, ExportError::MissingArgument("chain_id")));
    assert!(err.is_missing_input());

    let no_dir = ExportRequest { chain_id: Some(CHAIN_ID.to_string()), dir: None };
    assert!(matches!(
        export_contract_artifacts(&layout, &no_dir),
        Err(ExportError::MissingArgument("dir"))
    ));

    let bad_chain = ExportRequest::new("0x7a69", &target);
    assert!(matches!(
        export_contract_artifacts(&layout, &bad_chain),
        Err(ExportError::InvalidArgument { name: "chain_id", .. })
    ));

    assert!(!target.exists());
}

#[test]
fn missing_source_still_creates_target() {
    let dir = tempfile::tempdir().unwrap();
    let layout = DeploymentLayout::new(dir.path().join("deployments"));
    let target = dir.path().join("frontend");

    let err = export_contract_artifacts(&layout, &ExportRequest::new(CHAIN_ID, &target))
        .unwrap_err();

    match &err {
        ExportError::MissingSource { path } => assert_eq!(path, &layout.addresses_path(CHAIN_ID)),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.is_missing_input());
    assert!(target.join(EXPORT_SUBDIR).is_dir());
}

#[test]
fn missing_artifact_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let layout = DeploymentLayout::new(dir.path().join("deployments"));
    write_sample_deployment(&layout, CHAIN_ID, Address::repeat_byte(0x5f)).unwrap();
    fs::remove_file(layout.artifact_path(CHAIN_ID, &NftMarketplaceModule::future_id())).unwrap();

    let err = export_contract_artifacts(
        &layout,
        &ExportRequest::new(CHAIN_ID, dir.path().join("frontend")),
    )
    .unwrap_err();
    assert!(matches!(err, ExportError::MissingSource { .. }));
}

#[test]
fn exported_modules_match_sources() {
    let dir = tempfile::tempdir().unwrap();
    let layout = DeploymentLayout::new(dir.path().join("deployments"));
    let address = Address::repeat_byte(0x5f);
    write_sample_deployment(&layout, CHAIN_ID, address).unwrap();

    let exported = export_contract_artifacts(
        &layout,
        &ExportRequest::new(CHAIN_ID, dir.path().join("frontend")),
    )
    .unwrap();

    let (name, addresses) = read_module(&exported.addresses_path);
    assert_eq!(name, "addresses");
    assert_eq!(addresses.as_object().unwrap().len(), 1);
    assert_eq!(addresses[NftMarketplaceModule::future_id().as_str()], json!(address));

    let (name, artifacts) = read_module(&exported.artifacts_path);
    assert_eq!(name, "artifacts");
    assert_eq!(artifacts, sample_artifact());
}

#[test]
fn export_overwrites_previous_modules() {
    let dir = tempfile::tempdir().unwrap();
    let layout = DeploymentLayout::new(dir.path().join("deployments"));
    let request = ExportRequest::new(CHAIN_ID, dir.path().join("frontend"));

    write_sample_deployment(&layout, CHAIN_ID, Address::repeat_byte(1)).unwrap();
    export_contract_artifacts(&layout, &request).unwrap();

    let second = Address::repeat_byte(2);
    write_sample_deployment(&layout, CHAIN_ID, second).unwrap();
    let exported = export_contract_artifacts(&layout, &request).unwrap();

    let (_, addresses) = read_module(&exported.addresses_path);
    assert_eq!(addresses[NftMarketplaceModule::future_id().as_str()], json!(second));
}
