use soroban_sdk::{contracttype, Address, Env};

/// How a configured price feed is consulted by purchases.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum RateMode {
    /// Purchases use whatever the last explicit refresh stored.
    Cached = 0,
    /// Every purchase refreshes the rate before pricing.
    Live = 1,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PriceFeedConfig {
    pub feed: Address,
    pub decimals: u32, // fixed-point precision of the feed's answer
    pub mode: RateMode,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub rate: i128,             // tokens per unit of value, or per whole quoted unit with a feed
    pub beneficiary: Address,   // receives forwarded value
    pub token: Address,         // XToken ledger the sale mints into
    pub payment_token: Address, // asset contract used as value
    pub cap: i128,              // max tokens mintable through the sale
    pub opening_time: u64,
    pub closing_time: u64,
    pub price_feed: Option<PriceFeedConfig>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RateSnapshot {
    pub rate: i128,
    pub fetched_at: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    Pending = 0,
    Open = 1,
    Closed = 2,
}

impl SaleConfig {
    /// Status over the half-open window `[opening_time, closing_time)`.
    pub fn status_at(&self, now: u64) -> SaleStatus {
        if now < self.opening_time {
            SaleStatus::Pending
        } else if now < self.closing_time {
            SaleStatus::Open
        } else {
            SaleStatus::Closed
        }
    }
}

#[contracttype]
pub enum DataKey {
    Config,
    TokensSold,
    ValueRaised,
    CachedRate,
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
