use soroban_sdk::{Address, Env, Vec as SVec};

use crate::errors::Error;
use crate::types::{AdapterConfig, DataKey, LastGood};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<AdapterConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, cfg: &AdapterConfig) {
    env.storage().instance().set(&DataKey::Config, cfg);
}

pub fn get_last_good(env: &Env) -> Option<LastGood> {
    env.storage().instance().get(&DataKey::LastGood)
}

pub fn set_last_good(env: &Env, lg: &LastGood) {
    env.storage().instance().set(&DataKey::LastGood, lg);
}

/// Loads the config after checking that `caller` is its owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<AdapterConfig, Error> {
    caller.require_auth();
    let cfg = get_config(env)?;
    if &cfg.owner != caller {
        return Err(Error::Unauthorized);
    }
    Ok(cfg)
}

pub fn validate_providers(providers: &SVec<Address>, min_required: u32) -> Result<(), Error> {
    if providers.is_empty() || min_required == 0 || min_required > providers.len() {
        return Err(Error::InvalidConfig);
    }
    // Deduplicate check (gas friendly for small N)
    for i in 0..providers.len() {
        for j in (i + 1)..providers.len() {
            if providers.get_unchecked(i) == providers.get_unchecked(j) {
                return Err(Error::InvalidConfig);
            }
        }
    }
    Ok(())
}
