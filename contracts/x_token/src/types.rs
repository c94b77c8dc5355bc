use soroban_sdk::{contracttype, Address, String};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
pub enum DataKey {
    // Instance storage
    Metadata,
    Cap,
    Owner,
    TotalSupply,

    // Persistent storage
    Balance(Address),
    Allowance(AllowanceKey),
}
