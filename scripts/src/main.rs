use clap::Parser;
use deploy_log::{DeployLogStore, FsStorage};
use scripts::{cli::Cli, errors::ScriptError, utils::setup_client};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        net,
        deploy_logs_path,
        artifacts_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url)?;
    let store = DeployLogStore::new(FsStorage::new(deploy_logs_path));

    command.run(client, &store, &artifacts_path, &net).await
}
