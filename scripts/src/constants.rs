//! Constants used in the deploy scripts

/// The artifact name of the ERC1967 proxy fronting every upgradeable
/// contract
pub const PROXY_ARTIFACT: &str = "ERC1967Proxy";

/// The artifact name of the arbitrator contract
pub const ARBITRATOR_ARTIFACT: &str = "Arbitrator";

/// The artifact name of the zkLink contract
pub const ZKLINK_ARTIFACT: &str = "ZkLink";

/// The artifact name of the governance contract
pub const GOVERNANCE_ARTIFACT: &str = "Governance";

/// The default directory holding the deploy log documents
pub const DEFAULT_DEPLOY_LOGS_DIR: &str = "deploy-logs";

/// The default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The name of the environment variable holding the deployer private key
pub const DEPLOYER_PRIVATE_KEY_ENV_VAR: &str = "DEPLOYER_PRIVATE_KEY";

/// The name of the environment variable holding the network RPC URL
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";

/// The name of the environment variable holding the network name
pub const NET_ENV_VAR: &str = "NET";
