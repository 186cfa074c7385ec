//! File-backed registry of deployed contract addresses and deployment
//! metadata, keyed by a log prefix and an optional network qualifier.
//!
//! Each deploy log is a flat JSON document recording the outcome of one
//! contract-family deployment (proxy & implementation addresses, the deploy
//! transaction hash & block number, verification flags). Scripts read these
//! documents to resolve the addresses their preconditions depend on, and
//! append to them as deployment steps complete.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod errors;
pub mod keys;
pub mod name;
pub mod storage;
pub mod store;

pub use errors::LogStoreError;
pub use name::resolve_log_name;
pub use storage::{FsStorage, LogStorage, MemStorage};
pub use store::{DeployLog, DeployLogStore};
