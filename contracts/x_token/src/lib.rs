#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod types;


pub use contract::{XToken, XTokenClient};
pub use errors::Error;
pub use types::{AllowanceKey, TokenMetadata};
