//! Well-known log prefixes and field keys recorded by the deploy scripts

/// The log prefix for the arbitrator deployment
pub const DEPLOY_ARBITRATOR_LOG_PREFIX: &str = "deploy_arbitrator";

/// The log prefix for the zkLink deployment
pub const DEPLOY_ZKLINK_LOG_PREFIX: &str = "deploy_zklink";

/// The log prefix for L1 gateway deployments, qualified by the target rollup
pub const DEPLOY_L1_GATEWAY_LOG_PREFIX: &str = "deploy_l1_gateway";

/// The log prefix for L2 gateway deployments
pub const DEPLOY_L2_GATEWAY_LOG_PREFIX: &str = "deploy_l2_gateway";

/// The log prefix for the governance deployment
pub const DEPLOY_GOVERNANCE_LOG_PREFIX: &str = "deploy_governance";

/// The field key of the arbitrator proxy address
pub const ARBITRATOR_KEY: &str = "arbitrator";

/// The field key of the arbitrator implementation address
pub const ARBITRATOR_TARGET_KEY: &str = "arbitrator target";

/// The field key of the zkLink proxy address
pub const ZKLINK_PROXY_KEY: &str = "zkLink proxy";

/// The field key of the zkLink implementation address
pub const ZKLINK_TARGET_KEY: &str = "zkLink target";

/// The field key of an L1 gateway proxy address
pub const L1_GATEWAY_KEY: &str = "l1 gateway";

/// The field key of an L1 gateway implementation address
pub const L1_GATEWAY_TARGET_KEY: &str = "l1 gateway target";

/// The field key of an L2 gateway proxy address
pub const L2_GATEWAY_KEY: &str = "l2 gateway";

/// The field key of an L2 gateway implementation address
pub const L2_GATEWAY_TARGET_KEY: &str = "l2 gateway target";

/// The field key of the governance proxy address
pub const GOVERNANCE_KEY: &str = "governance";

/// The field key of the governance implementation address
pub const GOVERNANCE_TARGET_KEY: &str = "governance target";

/// The field key of the proxy deployment transaction hash
pub const DEPLOY_TX_HASH_KEY: &str = "deploy tx hash";

/// The field key of the proxy deployment block number
pub const DEPLOY_BLOCK_NUMBER_KEY: &str = "deploy block number";

/// The suffix appended to a contract key to record its source-verification
/// status on the network's explorer
pub const VERIFIED_SUFFIX: &str = " verified";

/// The verification-flag key for a contract key
pub fn verified_key(contract_key: &str) -> String {
    format!("{contract_key}{VERIFIED_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::{verified_key, ARBITRATOR_KEY};

    #[test]
    fn test_verified_key() {
        assert_eq!(verified_key(ARBITRATOR_KEY), "arbitrator verified");
    }
}
