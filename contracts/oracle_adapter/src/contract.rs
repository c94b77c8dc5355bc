use soroban_sdk::{contract, contractclient, contractimpl, contractmeta, log, Address, Env, Vec};

use crate::errors::Error;
use crate::storage::{
    get_config, get_last_good, has_config, require_owner, set_config, set_last_good,
    validate_providers,
};
use crate::types::{AdapterConfig, LastGood, OracleReading};

/// Interface for provider contracts.
#[contractclient(name = "ProviderClient")]
pub trait OracleProvider {
    fn latest(env: Env) -> (i128, u64);
}

/// A provider that traps or returns garbage is skipped; the call is not retried.
fn call_latest(env: &Env, addr: &Address) -> Option<OracleReading> {
    match ProviderClient::new(env, addr).try_latest() {
        Ok(Ok((value, timestamp))) => Some(OracleReading { value, timestamp }),
        _ => {
            log!(env, "oracle provider call failed", addr.clone());
            None
        }
    }
}

fn median_of_sorted(values: &Vec<i128>) -> i128 {
    let n = values.len();
    if n % 2 == 1 {
        values.get_unchecked(n / 2)
    } else {
        let a = values.get_unchecked(n / 2 - 1);
        let b = values.get_unchecked(n / 2);
        // midpoint without overflowing on large readings, rounds toward zero
        a / 2 + b / 2 + (a % 2 + b % 2) / 2
    }
}

fn sort_in_place(mut arr: Vec<i128>) -> Vec<i128> {
    // Simple insertion sort, small N expected
    for i in 1..arr.len() {
        let key = arr.get_unchecked(i);
        let mut j = i;
        while j > 0 && arr.get_unchecked(j - 1) > key {
            let prev = arr.get_unchecked(j - 1);
            arr.set(j, prev);
            j -= 1;
        }
        arr.set(j, key);
    }
    arr
}

fn apply_ema(prev: Option<i128>, curr: i128, ema_bps: u32) -> i128 {
    if ema_bps == 0 {
        return curr;
    }
    let p = prev.unwrap_or(curr);
    // new = (ema_bps*p + (10000-ema_bps)*curr)/10000
    let a = (ema_bps as i128).saturating_mul(p);
    let b = ((10_000u32 - ema_bps) as i128).saturating_mul(curr);
    a.saturating_add(b) / 10_000i128
}

fn validate_ema(ema_bps: u32) -> Result<(), Error> {
    if ema_bps > 10_000 {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

#[contract]
pub struct OracleAdapterContract;

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Price feed adapter: median of fresh provider readings with TTL and fallback"
);

#[contractimpl]
impl OracleAdapterContract {
    pub fn init(
        env: Env,
        owner: Address,
        ttl_secs: u64,
        providers: Vec<Address>,
        min_required: u32,
        fallback_to_last_good: bool,
        ema_bps: u32,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        validate_ema(ema_bps)?;
        if ttl_secs == 0 {
            return Err(Error::InvalidConfig);
        }
        validate_providers(&providers, min_required)?;

        let cfg = AdapterConfig {
            owner,
            ttl_secs,
            providers,
            min_required,
            fallback_to_last_good,
            ema_bps,
        };
        set_config(&env, &cfg);
        Ok(())
    }

    // Admin
    pub fn set_ttl(env: Env, caller: Address, ttl_secs: u64) -> Result<(), Error> {
        let mut c = require_owner(&env, &caller)?;
        if ttl_secs == 0 {
            return Err(Error::InvalidConfig);
        }
        c.ttl_secs = ttl_secs;
        set_config(&env, &c);
        Ok(())
    }

    pub fn set_min_required(env: Env, caller: Address, min_required: u32) -> Result<(), Error> {
        let mut c = require_owner(&env, &caller)?;
        validate_providers(&c.providers, min_required)?;
        c.min_required = min_required;
        set_config(&env, &c);
        Ok(())
    }

    pub fn set_providers(env: Env, caller: Address, providers: Vec<Address>) -> Result<(), Error> {
        let mut c = require_owner(&env, &caller)?;
        validate_providers(&providers, c.min_required)?;
        c.providers = providers;
        set_config(&env, &c);
        Ok(())
    }

    pub fn set_fallback(env: Env, caller: Address, enabled: bool) -> Result<(), Error> {
        let mut c = require_owner(&env, &caller)?;
        c.fallback_to_last_good = enabled;
        set_config(&env, &c);
        Ok(())
    }

    pub fn set_ema_bps(env: Env, caller: Address, ema_bps: u32) -> Result<(), Error> {
        let mut c = require_owner(&env, &caller)?;
        validate_ema(ema_bps)?;
        c.ema_bps = ema_bps;
        set_config(&env, &c);
        Ok(())
    }

    /// Aggregated reading `(value, timestamp)`. Readings older than the TTL,
    /// from the future, or non-positive are ignored.
    pub fn get_latest_data(env: Env) -> Result<(i128, u64), Error> {
        let cfg = get_config(&env)?;
        let now = env.ledger().timestamp();
        let min_ts = now.saturating_sub(cfg.ttl_secs);

        let mut fresh_values: Vec<i128> = Vec::new(&env);
        let mut newest_ts: u64 = 0;

        for addr in cfg.providers.iter() {
            let Some(r) = call_latest(&env, &addr) else {
                continue;
            };
            if r.value > 0 && r.timestamp >= min_ts && r.timestamp <= now {
                fresh_values.push_back(r.value);
                if r.timestamp > newest_ts {
                    newest_ts = r.timestamp;
                }
            }
        }

        if fresh_values.len() < cfg.min_required {
            if cfg.fallback_to_last_good {
                if let Some(last) = get_last_good(&env) {
                    return Ok((last.value, last.timestamp));
                }
            }
            log!(&env, "not enough fresh oracle readings", fresh_values.len());
            return Err(Error::StaleOrInsufficientSources);
        }

        let sorted = sort_in_place(fresh_values);
        let median = median_of_sorted(&sorted);
        let smoothed = apply_ema(get_last_good(&env).map(|l| l.value), median, cfg.ema_bps);
        set_last_good(
            &env,
            &LastGood {
                value: smoothed,
                timestamp: newest_ts,
            },
        );
        Ok((smoothed, newest_ts))
    }

    /// Price feed entry point consumed by the sale contract.
    pub fn latest_rate(env: Env) -> Result<i128, Error> {
        Ok(Self::get_latest_data(env)?.0)
    }

    // Views
    pub fn get_config_view(env: Env) -> Result<AdapterConfig, Error> {
        get_config(&env)
    }

    pub fn get_last_good_view(env: Env) -> Option<LastGood> {
        get_last_good(&env)
    }
}
