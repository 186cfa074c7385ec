//! Definitions of Solidity functions called during deployment

use alloy::sol;

sol! {
    /// `initialize` on a freshly deployed upgradeable target with no
    /// initialization arguments
    function initialize() external;
}

/// Calls made on gateway contracts
pub mod gateway {
    use alloy::sol;

    sol! {
        /// `initialize` on a gateway target, binding it to the contract it
        /// fronts for (the arbitrator for L1 gateways, zkLink for L2 ones)
        function initialize(address remote) external;
    }
}

/// Calls made on deployed proxies
pub mod proxy {
    use alloy::sol;

    sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        interface IUUPSUpgradeable {
            function upgradeToAndCall(address newImplementation, bytes calldata data) external payable;
        }
    );
}

/// Calls made on the zkLink contract
pub mod zklink {
    use alloy::sol;

    sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        interface IZkLink {
            function setGateway(address gateway) external;
        }
    );
}

/// Calls made on the arbitrator contract
pub mod arbitrator {
    use alloy::sol;

    sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        interface IArbitrator {
            function setGateway(address gateway) external;
        }
    );
}
