use crate::errors::Error;
use crate::events;
use crate::storage::*;
use crate::types::TokenMetadata;
use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, Env, String};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "XToken - owner-minted fungible token with an immutable supply cap"
);

#[contract]
pub struct XToken;

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_owner(env)? {
        log!(env, "caller is not the token owner", caller.clone());
        return Err(Error::Unauthorized);
    }
    Ok(())
}

fn require_non_negative(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(())
}

/// Moves `amount` between two holders. Both new balances are computed before
/// anything is written, so a failure leaves the ledger untouched.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }
    if from == to {
        return Ok(());
    }

    let new_from = from_balance
        .checked_sub(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    let new_to = get_balance(env, to)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    set_balance(env, from, new_from);
    set_balance(env, to, new_to);
    Ok(())
}

#[contractimpl]
impl XToken {
    /// Deploy-time setup. `owner` becomes the single identity allowed to mint.
    pub fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        decimals: u32,
        cap: i128,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if cap <= 0 {
            return Err(Error::InvalidAmount);
        }

        set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        set_cap(&env, cap);
        set_total_supply(&env, 0);
        set_owner(&env, &owner);
        Ok(())
    }

    /// Creates `amount` new units for `to`. Only the owner may mint, and the
    /// resulting supply can never exceed the cap.
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        require_non_negative(amount)?;

        let supply = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if supply > get_cap(&env)? {
            log!(&env, "mint rejected by supply cap", amount);
            return Err(Error::CapExceeded);
        }
        let balance = get_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        set_balance(&env, &to, balance);
        set_total_supply(&env, supply);

        events::emit_mint(&env, to, amount, supply);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        require_non_negative(amount)?;

        move_balance(&env, &from, &to, amount)?;

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        require_non_negative(amount)?;

        set_allowance(&env, &from, &spender, amount);

        events::emit_approval(&env, from, spender, amount);
        Ok(())
    }

    /// Spends an allowance previously granted by `from` to `spender`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        require_non_negative(amount)?;

        let allowance = get_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }

        move_balance(&env, &from, &to, amount)?;
        set_allowance(&env, &from, &spender, allowance - amount);

        events::emit_transfer(&env, from, to, amount);
        Ok(())
    }

    /// Hands the mint capability to `new_owner`. There is always exactly one
    /// owner; the deployment uses this to let a sale contract mint.
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;

        set_owner(&env, &new_owner);

        events::emit_ownership_transferred(&env, caller, new_owner);
        Ok(())
    }

    // View functions
    pub fn balance_of(env: Env, holder: Address) -> i128 {
        get_balance(&env, &holder)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn cap(env: Env) -> Result<i128, Error> {
        get_cap(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(get_metadata(&env)?.decimals)
    }
}
