use crate::errors::Error;
use crate::events;
use crate::external;
use crate::pricing::{self, MAX_FEED_DECIMALS};
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, log, token, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped, time-gated token sale minting XToken at a fixed or oracle-derived rate"
);

#[contract]
pub struct TokenSaleContract;

fn require_open(env: &Env, config: &SaleConfig) -> Result<(), Error> {
    let now = get_ledger_timestamp(env);
    if config.status_at(now) != SaleStatus::Open {
        log!(env, "purchase outside the sale window", now);
        return Err(Error::SaleNotOpen);
    }
    Ok(())
}

fn refresh(env: &Env, feed: &PriceFeedConfig) -> Result<RateSnapshot, Error> {
    let snapshot = external::fetch_rate(env, feed)?;
    set_cached_rate(env, &snapshot);
    events::emit_rate_refreshed(env, snapshot.rate, snapshot.fetched_at);
    Ok(snapshot)
}

/// Tokens owed for `value` under the configured pricing. A feed in
/// `RateMode::Live` is refreshed first; a missing or zero quote is unusable.
fn tokens_owed(env: &Env, config: &SaleConfig, value: i128) -> Result<i128, Error> {
    let Some(feed) = &config.price_feed else {
        return pricing::tokens_for_value(value, config.rate);
    };

    let quote = match feed.mode {
        RateMode::Live => refresh(env, feed)?.rate,
        RateMode::Cached => get_cached_rate(env).map(|s| s.rate).unwrap_or(0),
    };
    if quote <= 0 {
        return Err(Error::InvalidRate);
    }
    pricing::tokens_for_quoted_value(value, quote, config.rate, feed.decimals)
}

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale. The window is `[opening_time, closing_time)`;
    /// `price_feed = None` sells at the fixed `rate`.
    pub fn initialize(
        env: Env,
        rate: i128,
        beneficiary: Address,
        token: Address,
        payment_token: Address,
        cap: i128,
        opening_time: u64,
        closing_time: u64,
        price_feed: Option<PriceFeedConfig>,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        if rate <= 0 || cap <= 0 {
            return Err(Error::InvalidConfig);
        }
        if let Some(feed) = &price_feed {
            if feed.decimals > MAX_FEED_DECIMALS {
                return Err(Error::InvalidConfig);
            }
        }
        if opening_time >= closing_time || opening_time < get_ledger_timestamp(&env) {
            return Err(Error::InvalidTimeWindow);
        }

        let config = SaleConfig {
            rate,
            beneficiary: beneficiary.clone(),
            token: token.clone(),
            payment_token,
            cap,
            opening_time,
            closing_time,
            price_feed,
        };

        set_config(&env, &config);
        set_tokens_sold(&env, 0);
        set_value_raised(&env, 0);

        events::emit_sale_initialized(&env, token, beneficiary, cap, opening_time, closing_time);
        Ok(())
    }

    /// `purchaser` pays `value` of the payment token straight to the
    /// beneficiary and `recipient` receives the minted tokens. Returns the
    /// number of tokens minted. Either everything happens or nothing does.
    pub fn buy_tokens(
        env: Env,
        purchaser: Address,
        recipient: Address,
        value: i128,
    ) -> Result<i128, Error> {
        purchaser.require_auth();
        if value <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = get_config(&env)?;
        require_open(&env, &config)?;

        let amount = tokens_owed(&env, &config, value)?;
        if amount == 0 {
            return Err(Error::InvalidAmount);
        }

        // Both ceilings are independent; check the sale's first, then the ledger's.
        let sold = get_tokens_sold(&env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        if sold > config.cap {
            log!(&env, "purchase rejected by sale cap", amount);
            return Err(Error::SaleCapExceeded);
        }
        if amount > external::ledger_headroom(&env, &config.token)? {
            log!(&env, "purchase rejected by token cap", amount);
            return Err(Error::CapExceeded);
        }
        let raised = get_value_raised(&env)
            .checked_add(value)
            .ok_or(Error::ArithmeticOverflow)?;

        external::mint(&env, &config.token, &recipient, amount)?;

        let payment = token::Client::new(&env, &config.payment_token);
        if !matches!(
            payment.try_transfer(&purchaser, &config.beneficiary, &value),
            Ok(Ok(()))
        ) {
            return Err(Error::PaymentFailed);
        }

        set_tokens_sold(&env, sold);
        set_value_raised(&env, raised);

        events::emit_tokens_purchased(&env, purchaser, recipient, value, amount);
        Ok(amount)
    }

    /// Queries the price feed and caches its answer. On failure the cached
    /// rate is left as it was. Zero is a valid answer and is stored.
    pub fn refresh_rate(env: Env) -> Result<i128, Error> {
        let config = get_config(&env)?;
        let feed = config.price_feed.ok_or(Error::OracleUnavailable)?;
        Ok(refresh(&env, &feed)?.rate)
    }

    pub fn get_oracle_data(env: Env) -> Result<i128, Error> {
        Self::refresh_rate(env)
    }

    /// Bare payments are refused; value only enters through `buy_tokens`.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        log!(&env, "direct payment rejected", from, amount);
        Err(Error::DirectPaymentRejected)
    }

    // View functions
    pub fn is_open(env: Env) -> Result<bool, Error> {
        Ok(Self::status(env)? == SaleStatus::Open)
    }

    pub fn has_closed(env: Env) -> Result<bool, Error> {
        Ok(Self::status(env)? == SaleStatus::Closed)
    }

    pub fn status(env: Env) -> Result<SaleStatus, Error> {
        Ok(get_config(&env)?.status_at(get_ledger_timestamp(&env)))
    }

    /// Last cached feed answer, `0` if the feed was never queried.
    pub fn eth_to_usd(env: Env) -> i128 {
        get_cached_rate(&env).map(|s| s.rate).unwrap_or(0)
    }

    pub fn get_cached_rate(env: Env) -> Option<RateSnapshot> {
        get_cached_rate(&env)
    }

    pub fn cap(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.cap)
    }

    pub fn rate(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.rate)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.token)
    }

    pub fn beneficiary(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.beneficiary)
    }

    pub fn payment_token(env: Env) -> Result<Address, Error> {
        Ok(get_config(&env)?.payment_token)
    }

    pub fn opening_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.opening_time)
    }

    pub fn closing_time(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.closing_time)
    }

    pub fn tokens_sold(env: Env) -> i128 {
        get_tokens_sold(&env)
    }

    pub fn value_raised(env: Env) -> i128 {
        get_value_raised(&env)
    }

    pub fn remaining(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.cap - get_tokens_sold(&env))
    }

    pub fn cap_reached(env: Env) -> Result<bool, Error> {
        Ok(get_tokens_sold(&env) >= get_config(&env)?.cap)
    }

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }
}
