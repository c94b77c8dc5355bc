use crate::errors::Error;
use crate::types::*;
use soroban_sdk::Env;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_tokens_sold(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TokensSold)
        .unwrap_or(0)
}

pub fn set_tokens_sold(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TokensSold, &amount);
}

pub fn get_value_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::ValueRaised)
        .unwrap_or(0)
}

pub fn set_value_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::ValueRaised, &amount);
}

pub fn get_cached_rate(env: &Env) -> Option<RateSnapshot> {
    env.storage().instance().get(&DataKey::CachedRate)
}

pub fn set_cached_rate(env: &Env, snapshot: &RateSnapshot) {
    env.storage().instance().set(&DataKey::CachedRate, snapshot);
}
