#![no_std]

pub mod contract;
mod errors;
mod storage;
mod types;


pub use contract::{OracleAdapterContract, OracleAdapterContractClient};
pub use errors::Error;
pub use types::{AdapterConfig, LastGood, OracleReading};
