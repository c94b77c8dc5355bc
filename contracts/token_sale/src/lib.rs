#![no_std]
#![allow(clippy::too_many_arguments)]

mod contract;
mod errors;
mod events;
mod external;
pub mod pricing;
mod storage;
mod types;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::Error;
pub use types::{PriceFeedConfig, RateMode, RateSnapshot, SaleConfig, SaleStatus};
