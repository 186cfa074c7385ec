//! Filesystem round-trip tests for the deploy log store

use deploy_log::{
    keys::{ARBITRATOR_KEY, DEPLOY_ARBITRATOR_LOG_PREFIX},
    resolve_log_name, DeployLogStore, FsStorage,
};
use tempfile::tempdir;

/// Deploying the arbitrator on a fresh network: no file exists, the store
/// starts an empty document, the script records the address, and a re-run
/// reads back exactly what was persisted.
#[test]
fn test_fresh_deployment_round_trip() {
    let dir = tempdir().unwrap();
    let store = DeployLogStore::new(FsStorage::new(dir.path()));

    let resolved_name = resolve_log_name(DEPLOY_ARBITRATOR_LOG_PREFIX, Some("ETHEREUM"));
    assert_eq!(resolved_name, "deploy_arbitrator_ETHEREUM");

    let mut log = store.load_or_create(&resolved_name).unwrap();
    assert!(log.is_empty());

    let address = "0x1111111111111111111111111111111111111111";
    assert!(log.record(ARBITRATOR_KEY, address, false));
    store.persist(&resolved_name, &log).unwrap();

    let reloaded = store.load_or_create(&resolved_name).unwrap();
    assert_eq!(reloaded, log);
    assert_eq!(reloaded.get_str(ARBITRATOR_KEY), Some(address));
}

/// Documents are written pretty-printed with two-space indentation, one
/// file per resolved log name
#[test]
fn test_on_disk_format() {
    let dir = tempdir().unwrap();
    let storage = FsStorage::new(dir.path());
    let file_path = storage.log_path("deploy_zklink_SCROLL");
    let store = DeployLogStore::new(storage);

    let mut log = store.load_or_create("deploy_zklink_SCROLL").unwrap();
    log.record("zkLink proxy", "0x2222222222222222222222222222222222222222", false);
    store.persist("deploy_zklink_SCROLL", &log).unwrap();

    let contents = std::fs::read_to_string(file_path).unwrap();
    assert_eq!(
        contents,
        "{\n  \"zkLink proxy\": \"0x2222222222222222222222222222222222222222\"\n}"
    );
}
