use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const TOPIC: Symbol = symbol_short!("SALE");

#[derive(Clone)]
#[contracttype]
pub struct SaleInitializedEvent {
    pub token: Address,
    pub beneficiary: Address,
    pub cap: i128,
    pub opening_time: u64,
    pub closing_time: u64,
}

#[derive(Clone)]
#[contracttype]
pub struct TokensPurchasedEvent {
    pub purchaser: Address,
    pub recipient: Address,
    pub value: i128,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct RateRefreshedEvent {
    pub rate: i128,
    pub fetched_at: u64,
}

pub fn emit_sale_initialized(
    env: &Env,
    token: Address,
    beneficiary: Address,
    cap: i128,
    opening_time: u64,
    closing_time: u64,
) {
    env.events().publish(
        (TOPIC, symbol_short!("init")),
        SaleInitializedEvent {
            token,
            beneficiary,
            cap,
            opening_time,
            closing_time,
        },
    );
}

pub fn emit_tokens_purchased(
    env: &Env,
    purchaser: Address,
    recipient: Address,
    value: i128,
    amount: i128,
) {
    env.events().publish(
        (TOPIC, symbol_short!("purchase")),
        TokensPurchasedEvent {
            purchaser,
            recipient,
            value,
            amount,
        },
    );
}

pub fn emit_rate_refreshed(env: &Env, rate: i128, fetched_at: u64) {
    env.events().publish(
        (TOPIC, symbol_short!("rate_upd")),
        RateRefreshedEvent { rate, fetched_at },
    );
}
