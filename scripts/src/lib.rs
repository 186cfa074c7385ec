//! Scripts for deploying and operating the zkLink cross-rollup contracts

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
mod solidity;
pub mod utils;
