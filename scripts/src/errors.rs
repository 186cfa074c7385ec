//! Definitions of errors that can occur during execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use deploy_log::LogStoreError;

/// Errors that can occur during execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading or writing a deploy log document
    DeployLog(String),
    /// Error loading or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error parsing an address recorded in a deploy log
    AddressParsing(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::DeployLog(s) => write!(f, "error accessing deploy log: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::AddressParsing(s) => write!(f, "error parsing recorded address: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}

impl From<LogStoreError> for ScriptError {
    fn from(e: LogStoreError) -> Self {
        ScriptError::DeployLog(e.to_string())
    }
}
