//! Missing-precondition behavior of the operations commands
//!
//! A command whose precondition address is not yet recorded aborts
//! gracefully with a logged message before any transaction is sent, so a
//! pipeline of commands fails fast at its first unmet dependency instead
//! of crashing.

use std::path::Path;

use deploy_log::{DeployLogStore, FsStorage};
use scripts::{
    cli::{Command, DeployL1GatewayArgs, SetArbitratorGatewayArgs, UpgradeArgs},
    utils::setup_client,
};
use tempfile::tempdir;

/// A deployer key for the test client; never used to sign anything since
/// every command under test aborts before reaching the network
const TEST_PRIV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// An RPC URL no command under test may reach
const UNROUTABLE_RPC_URL: &str = "http://127.0.0.1:1";

/// Runs `command` against an empty deploy log store and asserts the
/// graceful-abort (success) path
async fn assert_soft_fails(command: Command) {
    let dir = tempdir().unwrap();
    let store = DeployLogStore::new(FsStorage::new(dir.path()));
    let client = setup_client(TEST_PRIV_KEY, UNROUTABLE_RPC_URL).unwrap();

    let result = command
        .run(client, &store, Path::new("artifacts"), "ETHEREUM")
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_set_gateway_without_recorded_addresses() {
    assert_soft_fails(Command::SetGateway).await;
}

#[tokio::test]
async fn test_set_arbitrator_gateway_without_recorded_addresses() {
    assert_soft_fails(Command::SetArbitratorGateway(SetArbitratorGatewayArgs {
        target: "ARBITRUM".to_string(),
    }))
    .await;
}

#[tokio::test]
async fn test_deploy_l1_gateway_without_recorded_arbitrator() {
    assert_soft_fails(Command::DeployL1Gateway(DeployL1GatewayArgs {
        target: "ARBITRUM".to_string(),
        artifact: "ArbitrumL1Gateway".to_string(),
        force: false,
    }))
    .await;
}

#[tokio::test]
async fn test_upgrade_without_recorded_proxy() {
    assert_soft_fails(Command::Upgrade(UpgradeArgs {
        log_prefix: "deploy_zklink".to_string(),
        proxy_key: "zkLink proxy".to_string(),
        target_key: "zkLink target".to_string(),
        artifact: "ZkLink".to_string(),
    }))
    .await;
}
