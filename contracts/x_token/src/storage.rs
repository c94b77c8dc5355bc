use crate::errors::Error;
use crate::types::{AllowanceKey, DataKey, TokenMetadata};
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_cap(env: &Env) -> Result<i128, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Cap)
        .ok_or(Error::NotInitialized)
}

pub fn set_cap(env: &Env, cap: i128) {
    env.storage().instance().set(&DataKey::Cap, &cap);
}

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(Error::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}

pub fn get_balance(env: &Env, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, holder: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(holder.clone()), &amount);
}

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(AllowanceKey {
            from: from.clone(),
            spender: spender.clone(),
        }))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}
