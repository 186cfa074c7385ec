//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::{Path, PathBuf};

use alloy::providers::DynProvider;
use clap::{Args, Parser, Subcommand};
use deploy_log::{DeployLogStore, FsStorage};

use crate::{
    commands::{
        deploy_arbitrator, deploy_governance, deploy_l1_gateway, deploy_l2_gateway, deploy_zklink,
        set_arbitrator_gateway, set_gateway, upgrade,
    },
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOY_LOGS_DIR, DEPLOYER_PRIVATE_KEY_ENV_VAR, NET_ENV_VAR,
        RPC_URL_ENV_VAR,
    },
    errors::ScriptError,
};

/// Deployment & operations scripts for the zkLink cross-rollup contracts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = DEPLOYER_PRIVATE_KEY_ENV_VAR)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = RPC_URL_ENV_VAR)]
    pub rpc_url: String,

    /// Name of the network the scripts run against (e.g. ETHEREUM, ARBITRUM)
    #[arg(short, long, env = NET_ENV_VAR)]
    pub net: String,

    /// Directory holding the deploy log documents
    #[arg(long, default_value = DEFAULT_DEPLOY_LOGS_DIR)]
    pub deploy_logs_path: PathBuf,

    /// Directory holding the compiled contract artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_path: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deployment & operations commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the arbitrator behind an upgradeable proxy
    DeployArbitrator(DeployArgs),
    /// Deploy the zkLink contract behind an upgradeable proxy
    #[command(name = "deploy-zklink")]
    DeployZkLink(DeployArgs),
    /// Deploy the governance contract behind an upgradeable proxy
    DeployGovernance(DeployArgs),
    /// Deploy the L1 gateway for a target rollup
    DeployL1Gateway(DeployL1GatewayArgs),
    /// Deploy the L2 gateway on the current network
    DeployL2Gateway(DeployL2GatewayArgs),
    /// Point the zkLink contract at its recorded L2 gateway
    SetGateway,
    /// Point the arbitrator at the recorded L1 gateway of a target rollup
    SetArbitratorGateway(SetArbitratorGatewayArgs),
    /// Upgrade a recorded proxy to a freshly deployed implementation
    Upgrade(UpgradeArgs),
}

/// Arguments shared by the upgradeable-contract deployments
#[derive(Args)]
pub struct DeployArgs {
    /// Redeploy and overwrite the recorded addresses
    #[arg(long)]
    pub force: bool,
}

/// Deploy the L1 gateway through which the arbitrator forwards messages to
/// a target rollup
#[derive(Args)]
pub struct DeployL1GatewayArgs {
    /// The target rollup the gateway forwards messages to
    #[arg(short, long)]
    pub target: String,

    /// The gateway contract artifact to deploy (e.g. ArbitrumL1Gateway)
    #[arg(short, long)]
    pub artifact: String,

    /// Redeploy and overwrite the recorded addresses
    #[arg(long)]
    pub force: bool,
}

/// Deploy the L2 gateway paired with the zkLink contract on this network
#[derive(Args)]
pub struct DeployL2GatewayArgs {
    /// The gateway contract artifact to deploy (e.g. ArbitrumL2Gateway)
    #[arg(short, long)]
    pub artifact: String,

    /// Redeploy and overwrite the recorded addresses
    #[arg(long)]
    pub force: bool,
}

/// Wire a target rollup's L1 gateway into the arbitrator
#[derive(Args)]
pub struct SetArbitratorGatewayArgs {
    /// The target rollup whose L1 gateway is wired into the arbitrator
    #[arg(short, long)]
    pub target: String,
}

/// Upgrade the implementation behind a recorded proxy
#[derive(Args)]
pub struct UpgradeArgs {
    /// The log prefix of the deployment being upgraded (e.g. deploy_zklink)
    #[arg(long)]
    pub log_prefix: String,

    /// The field key of the recorded proxy address (e.g. "zkLink proxy")
    #[arg(long)]
    pub proxy_key: String,

    /// The field key under which the new implementation is recorded
    #[arg(long)]
    pub target_key: String,

    /// The implementation contract artifact to deploy
    #[arg(short, long)]
    pub artifact: String,
}

impl Command {
    /// Dispatches the parsed command
    pub async fn run(
        self,
        client: DynProvider,
        store: &DeployLogStore<FsStorage>,
        artifacts_path: &Path,
        net: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::DeployArbitrator(args) => {
                deploy_arbitrator(args, &client, store, artifacts_path, net).await
            }
            Command::DeployZkLink(args) => {
                deploy_zklink(args, &client, store, artifacts_path, net).await
            }
            Command::DeployGovernance(args) => {
                deploy_governance(args, &client, store, artifacts_path, net).await
            }
            Command::DeployL1Gateway(args) => {
                deploy_l1_gateway(args, &client, store, artifacts_path, net).await
            }
            Command::DeployL2Gateway(args) => {
                deploy_l2_gateway(args, &client, store, artifacts_path, net).await
            }
            Command::SetGateway => set_gateway(&client, store, net).await,
            Command::SetArbitratorGateway(args) => {
                set_arbitrator_gateway(args, &client, store, net).await
            }
            Command::Upgrade(args) => upgrade(args, &client, store, artifacts_path, net).await,
        }
    }
}
