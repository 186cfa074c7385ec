//! Implementations of the deployment & operations commands
//!
//! Every command follows the same shape as the original operational scripts:
//! resolve preconditions out of the deploy logs, send the transactions, and
//! record the outcome back into the logs. A missing precondition aborts the
//! command with a logged message rather than an error, so a pipeline of
//! commands fails fast at its first unmet dependency.

use std::path::Path;

use alloy::{
    primitives::Bytes,
    providers::DynProvider,
    sol_types::{SolCall, SolValue},
};
use deploy_log::{
    keys::{
        ARBITRATOR_KEY, ARBITRATOR_TARGET_KEY, DEPLOY_ARBITRATOR_LOG_PREFIX,
        DEPLOY_BLOCK_NUMBER_KEY, DEPLOY_GOVERNANCE_LOG_PREFIX, DEPLOY_L1_GATEWAY_LOG_PREFIX,
        DEPLOY_L2_GATEWAY_LOG_PREFIX, DEPLOY_TX_HASH_KEY, DEPLOY_ZKLINK_LOG_PREFIX,
        GOVERNANCE_KEY, GOVERNANCE_TARGET_KEY, L1_GATEWAY_KEY, L1_GATEWAY_TARGET_KEY,
        L2_GATEWAY_KEY, L2_GATEWAY_TARGET_KEY, ZKLINK_PROXY_KEY, ZKLINK_TARGET_KEY,
    },
    resolve_log_name, DeployLogStore, FsStorage,
};
use tracing::{info, warn};

use crate::{
    cli::{
        DeployArgs, DeployL1GatewayArgs, DeployL2GatewayArgs, SetArbitratorGatewayArgs,
        UpgradeArgs,
    },
    constants::{ARBITRATOR_ARTIFACT, GOVERNANCE_ARTIFACT, PROXY_ARTIFACT, ZKLINK_ARTIFACT},
    errors::ScriptError,
    solidity::{self, arbitrator::IArbitrator, gateway, proxy::IUUPSUpgradeable, zklink::IZkLink},
    utils::{deploy_contract, load_artifact, parse_recorded_address},
};

/// One upgradeable deployment: which artifact to deploy, which log keys to
/// record it under, and the calldata its proxy initializes it with
struct UpgradeableDeployment<'a> {
    /// The resolved name of the deploy log recording this deployment
    resolved_name: &'a str,
    /// The implementation contract artifact
    artifact: &'a str,
    /// The field key of the implementation address
    target_key: &'a str,
    /// The field key of the proxy address
    proxy_key: &'a str,
    /// The `initialize` calldata forwarded by the proxy constructor
    init_calldata: Vec<u8>,
    /// Whether to redeploy over already-recorded addresses
    force: bool,
}

/// Deploys an implementation and the ERC1967 proxy fronting it, recording
/// both in the deployment's log.
///
/// Skips entirely when the proxy is already recorded and `force` is unset;
/// the log is persisted after each step so a rerun picks up where a failed
/// run stopped.
async fn deploy_upgradeable(
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    artifacts_path: &Path,
    deployment: UpgradeableDeployment<'_>,
) -> Result<(), ScriptError> {
    let UpgradeableDeployment {
        resolved_name,
        artifact,
        target_key,
        proxy_key,
        init_calldata,
        force,
    } = deployment;

    let mut log = store.load_or_create(resolved_name)?;
    if log.contains(proxy_key) && !force {
        info!(
            "{proxy_key} already recorded in {resolved_name} at {}, skipping (use --force to redeploy)",
            log.get_str(proxy_key).unwrap_or_default()
        );
        return Ok(());
    }

    // A partial earlier run may already have recorded the implementation;
    // reuse it so the log stays consistent with what the proxy points at
    let recorded_target = if force {
        None
    } else {
        log.get_str(target_key).map(String::from)
    };
    let implementation_address = match recorded_target {
        Some(addr) => {
            info!("{target_key} already recorded in {resolved_name} at {addr}, reusing");
            parse_recorded_address(&addr)?
        }
        None => {
            let implementation_artifact = load_artifact(artifacts_path, artifact)?;
            let implementation =
                deploy_contract(client, implementation_artifact.creation_code()?).await?;
            info!(
                "{artifact} implementation deployed at {:#x}",
                implementation.address
            );
            log.record(target_key, format!("{:#x}", implementation.address), force);
            store.persist(resolved_name, &log)?;
            implementation.address
        }
    };

    let proxy_artifact = load_artifact(artifacts_path, PROXY_ARTIFACT)?;
    let mut creation_code = proxy_artifact.creation_code()?;
    let constructor_args =
        (implementation_address, Bytes::from(init_calldata)).abi_encode_params();
    creation_code.extend_from_slice(&constructor_args);

    let proxy = deploy_contract(client, creation_code).await?;
    info!("{artifact} proxy deployed at {:#x}", proxy.address);

    log.record(proxy_key, format!("{:#x}", proxy.address), force);
    log.record(DEPLOY_TX_HASH_KEY, format!("{:#x}", proxy.tx_hash), force);
    log.record(DEPLOY_BLOCK_NUMBER_KEY, proxy.block_number, force);
    store.persist(resolved_name, &log)?;

    Ok(())
}

/// Deploys the arbitrator behind an upgradeable proxy on the current network
pub async fn deploy_arbitrator(
    args: DeployArgs,
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    artifacts_path: &Path,
    net: &str,
) -> Result<(), ScriptError> {
    let resolved_name = resolve_log_name(DEPLOY_ARBITRATOR_LOG_PREFIX, Some(net));
    deploy_upgradeable(
        client,
        store,
        artifacts_path,
        UpgradeableDeployment {
            resolved_name: &resolved_name,
            artifact: ARBITRATOR_ARTIFACT,
            target_key: ARBITRATOR_TARGET_KEY,
            proxy_key: ARBITRATOR_KEY,
            init_calldata: solidity::initializeCall {}.abi_encode(),
            force: args.force,
        },
    )
    .await
}

/// Deploys the zkLink contract behind an upgradeable proxy on the current
/// network
pub async fn deploy_zklink(
    args: DeployArgs,
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    artifacts_path: &Path,
    net: &str,
) -> Result<(), ScriptError> {
    let resolved_name = resolve_log_name(DEPLOY_ZKLINK_LOG_PREFIX, Some(net));
    deploy_upgradeable(
        client,
        store,
        artifacts_path,
        UpgradeableDeployment {
            resolved_name: &resolved_name,
            artifact: ZKLINK_ARTIFACT,
            target_key: ZKLINK_TARGET_KEY,
            proxy_key: ZKLINK_PROXY_KEY,
            init_calldata: solidity::initializeCall {}.abi_encode(),
            force: args.force,
        },
    )
    .await
}

/// Deploys the governance contract behind an upgradeable proxy on the
/// current network
pub async fn deploy_governance(
    args: DeployArgs,
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    artifacts_path: &Path,
    net: &str,
) -> Result<(), ScriptError> {
    let resolved_name = resolve_log_name(DEPLOY_GOVERNANCE_LOG_PREFIX, Some(net));
    deploy_upgradeable(
        client,
        store,
        artifacts_path,
        UpgradeableDeployment {
            resolved_name: &resolved_name,
            artifact: GOVERNANCE_ARTIFACT,
            target_key: GOVERNANCE_TARGET_KEY,
            proxy_key: GOVERNANCE_KEY,
            init_calldata: solidity::initializeCall {}.abi_encode(),
            force: args.force,
        },
    )
    .await
}

/// Deploys the L1 gateway for a target rollup, bound to the recorded
/// arbitrator
pub async fn deploy_l1_gateway(
    args: DeployL1GatewayArgs,
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    artifacts_path: &Path,
    net: &str,
) -> Result<(), ScriptError> {
    let Some(arbitrator) =
        store.read_str_field(DEPLOY_ARBITRATOR_LOG_PREFIX, ARBITRATOR_KEY, Some(net))?
    else {
        warn!("no arbitrator recorded for {net}, deploy the arbitrator first");
        return Ok(());
    };

    let resolved_name = resolve_log_name(DEPLOY_L1_GATEWAY_LOG_PREFIX, Some(&args.target));
    let init_calldata = gateway::initializeCall {
        remote: parse_recorded_address(&arbitrator)?,
    }
    .abi_encode();

    deploy_upgradeable(
        client,
        store,
        artifacts_path,
        UpgradeableDeployment {
            resolved_name: &resolved_name,
            artifact: &args.artifact,
            target_key: L1_GATEWAY_TARGET_KEY,
            proxy_key: L1_GATEWAY_KEY,
            init_calldata,
            force: args.force,
        },
    )
    .await
}

/// Deploys the L2 gateway on the current network, bound to the recorded
/// zkLink proxy
pub async fn deploy_l2_gateway(
    args: DeployL2GatewayArgs,
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    artifacts_path: &Path,
    net: &str,
) -> Result<(), ScriptError> {
    let Some(zklink_proxy) =
        store.read_str_field(DEPLOY_ZKLINK_LOG_PREFIX, ZKLINK_PROXY_KEY, Some(net))?
    else {
        warn!("no zkLink proxy recorded for {net}, deploy zkLink first");
        return Ok(());
    };

    let resolved_name = resolve_log_name(DEPLOY_L2_GATEWAY_LOG_PREFIX, Some(net));
    let init_calldata = gateway::initializeCall {
        remote: parse_recorded_address(&zklink_proxy)?,
    }
    .abi_encode();

    deploy_upgradeable(
        client,
        store,
        artifacts_path,
        UpgradeableDeployment {
            resolved_name: &resolved_name,
            artifact: &args.artifact,
            target_key: L2_GATEWAY_TARGET_KEY,
            proxy_key: L2_GATEWAY_KEY,
            init_calldata,
            force: args.force,
        },
    )
    .await
}

/// Points the zkLink contract at its recorded L2 gateway
pub async fn set_gateway(
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    net: &str,
) -> Result<(), ScriptError> {
    let Some(zklink_proxy) =
        store.read_str_field(DEPLOY_ZKLINK_LOG_PREFIX, ZKLINK_PROXY_KEY, Some(net))?
    else {
        warn!("no zkLink proxy recorded for {net}, deploy zkLink first");
        return Ok(());
    };
    let Some(l2_gateway) =
        store.read_str_field(DEPLOY_L2_GATEWAY_LOG_PREFIX, L2_GATEWAY_KEY, Some(net))?
    else {
        warn!("no L2 gateway recorded for {net}, deploy the gateway first");
        return Ok(());
    };

    let zklink = IZkLink::new(parse_recorded_address(&zklink_proxy)?, client.clone());
    let receipt = zklink
        .setGateway(parse_recorded_address(&l2_gateway)?)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    info!(
        "setGateway({l2_gateway}) on zkLink confirmed in tx {:#x}",
        receipt.transaction_hash
    );
    Ok(())
}

/// Points the arbitrator at the recorded L1 gateway of a target rollup
pub async fn set_arbitrator_gateway(
    args: SetArbitratorGatewayArgs,
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    net: &str,
) -> Result<(), ScriptError> {
    let Some(arbitrator) =
        store.read_str_field(DEPLOY_ARBITRATOR_LOG_PREFIX, ARBITRATOR_KEY, Some(net))?
    else {
        warn!("no arbitrator recorded for {net}, deploy the arbitrator first");
        return Ok(());
    };
    let Some(l1_gateway) = store.read_str_field(
        DEPLOY_L1_GATEWAY_LOG_PREFIX,
        L1_GATEWAY_KEY,
        Some(&args.target),
    )?
    else {
        warn!(
            "no L1 gateway recorded for {}, deploy the gateway first",
            args.target
        );
        return Ok(());
    };

    let arbitrator = IArbitrator::new(parse_recorded_address(&arbitrator)?, client.clone());
    let receipt = arbitrator
        .setGateway(parse_recorded_address(&l1_gateway)?)
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    info!(
        "setGateway({l1_gateway}) on the arbitrator confirmed in tx {:#x}",
        receipt.transaction_hash
    );
    Ok(())
}

/// Deploys a new implementation and upgrades a recorded proxy to it
pub async fn upgrade(
    args: UpgradeArgs,
    client: &DynProvider,
    store: &DeployLogStore<FsStorage>,
    artifacts_path: &Path,
    net: &str,
) -> Result<(), ScriptError> {
    let Some(proxy) = store.read_str_field(&args.log_prefix, &args.proxy_key, Some(net))? else {
        warn!(
            "no {} recorded in {}_{net}, nothing to upgrade",
            args.proxy_key, args.log_prefix
        );
        return Ok(());
    };

    let artifact = load_artifact(artifacts_path, &args.artifact)?;
    let implementation = deploy_contract(client, artifact.creation_code()?).await?;
    info!(
        "new {} implementation deployed at {:#x}",
        args.artifact, implementation.address
    );

    let proxy_contract = IUUPSUpgradeable::new(parse_recorded_address(&proxy)?, client.clone());
    let receipt = proxy_contract
        .upgradeToAndCall(implementation.address, Bytes::new())
        .send()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;

    info!(
        "upgrade of {proxy} confirmed in tx {:#x}",
        receipt.transaction_hash
    );

    // An upgrade always supersedes the recorded implementation
    let resolved_name = resolve_log_name(&args.log_prefix, Some(net));
    let mut log = store.load_or_create(&resolved_name)?;
    log.record(
        &args.target_key,
        format!("{:#x}", implementation.address),
        true,
    );
    store.persist(&resolved_name, &log)?;

    Ok(())
}
