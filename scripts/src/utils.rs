//! Utilities for the deploy scripts

use std::{fs, path::Path};

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{Address, B256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{TransactionReceipt, TransactionRequest},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use serde::Deserialize;

use crate::errors::ScriptError;

/// A compiled contract artifact in the build system's JSON layout
#[derive(Deserialize)]
pub struct ContractArtifact {
    /// The creation bytecode, 0x-prefixed hex
    pub bytecode: String,
}

impl ContractArtifact {
    /// The creation bytecode as raw bytes
    pub fn creation_code(&self) -> Result<Vec<u8>, ScriptError> {
        hex::decode(self.bytecode.trim_start_matches("0x"))
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
    }
}

/// The outcome of a contract deployment transaction
pub struct Deployment {
    /// The address the contract was deployed at
    pub address: Address,
    /// The hash of the deployment transaction
    pub tx_hash: B256,
    /// The block the deployment transaction was included in
    pub block_number: u64,
}

/// Sets up the provider with which to send transactions, from the deployer
/// private key and the network RPC URL
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let signer: PrivateKeySigner = priv_key
        .parse()
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid private key: {e}")))?;
    let url = Url::parse(rpc_url)
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid rpc url: {e}")))?;

    Ok(ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(url)
        .erased())
}

/// Loads the compiled artifact for `contract_name` from the artifacts
/// directory
pub fn load_artifact(
    artifacts_path: &Path,
    contract_name: &str,
) -> Result<ContractArtifact, ScriptError> {
    let path = artifacts_path.join(contract_name).with_extension("json");
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {e}", path.display())))?;

    serde_json::from_str(&contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))
}

/// Sends a deployment transaction carrying `creation_code` and waits for
/// its receipt
pub async fn deploy_contract(
    client: &DynProvider,
    creation_code: Vec<u8>,
) -> Result<Deployment, ScriptError> {
    let tx = TransactionRequest::default().with_deploy_code(creation_code);
    let receipt = client
        .send_transaction(tx)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

    deployment_from_receipt(receipt)
}

/// Extracts the recorded deployment from a deploy transaction receipt.
///
/// A receipt missing the contract address or the inclusion block number is
/// an error; the deploy log never records fabricated values.
fn deployment_from_receipt(receipt: TransactionReceipt) -> Result<Deployment, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::ContractDeployment(format!(
            "deploy transaction {:#x} reverted",
            receipt.transaction_hash
        )));
    }

    let address = receipt.contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment("no contract address in deploy receipt".to_string())
    })?;
    let block_number = receipt.block_number.ok_or_else(|| {
        ScriptError::ContractDeployment("no block number in deploy receipt".to_string())
    })?;

    Ok(Deployment {
        address,
        tx_hash: receipt.transaction_hash,
        block_number,
    })
}

/// Parses an address recorded in a deploy log
pub fn parse_recorded_address(value: &str) -> Result<Address, ScriptError> {
    value
        .parse()
        .map_err(|e| ScriptError::AddressParsing(format!("{value}: {e}")))
}
