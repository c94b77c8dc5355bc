//! Contracts the sale talks to. Only the functions the sale calls are
//! declared, so any contract exposing them can be plugged in.

use crate::errors::Error;
use crate::types::{get_ledger_timestamp, PriceFeedConfig, RateSnapshot};
use soroban_sdk::{contractclient, log, Address, Env};

#[contractclient(name = "TokenLedgerClient")]
pub trait TokenLedger {
    fn mint(env: Env, caller: Address, to: Address, amount: i128);
    fn total_supply(env: Env) -> i128;
    fn cap(env: Env) -> i128;
}

#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn latest_rate(env: Env) -> i128;
}

// Error codes of the ledger contract that map onto sale errors.
const LEDGER_UNAUTHORIZED: u32 = 3;
const LEDGER_CAP_EXCEEDED: u32 = 5;
const LEDGER_ARITHMETIC_OVERFLOW: u32 = 8;

/// Units the ledger can still mint before hitting its own cap.
pub fn ledger_headroom(env: &Env, token: &Address) -> Result<i128, Error> {
    let ledger = TokenLedgerClient::new(env, token);
    let cap = match ledger.try_cap() {
        Ok(Ok(cap)) => cap,
        _ => return Err(Error::MintFailed),
    };
    let supply = match ledger.try_total_supply() {
        Ok(Ok(supply)) => supply,
        _ => return Err(Error::MintFailed),
    };
    cap.checked_sub(supply).ok_or(Error::ArithmeticOverflow)
}

/// Mints through the ledger with this contract as the calling owner.
pub fn mint(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let ledger = TokenLedgerClient::new(env, token);
    match ledger.try_mint(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        Err(Ok(err)) if err == soroban_sdk::Error::from_contract_error(LEDGER_CAP_EXCEEDED) => {
            Err(Error::CapExceeded)
        }
        Err(Ok(err)) if err == soroban_sdk::Error::from_contract_error(LEDGER_UNAUTHORIZED) => {
            log!(env, "sale is not the token owner", token.clone());
            Err(Error::Unauthorized)
        }
        Err(Ok(err))
            if err == soroban_sdk::Error::from_contract_error(LEDGER_ARITHMETIC_OVERFLOW) =>
        {
            Err(Error::ArithmeticOverflow)
        }
        _ => Err(Error::MintFailed),
    }
}

/// Single bounded query of the feed. Negative answers are treated as no answer.
pub fn fetch_rate(env: &Env, feed: &PriceFeedConfig) -> Result<RateSnapshot, Error> {
    match PriceFeedClient::new(env, &feed.feed).try_latest_rate() {
        Ok(Ok(rate)) if rate >= 0 => Ok(RateSnapshot {
            rate,
            fetched_at: get_ledger_timestamp(env),
        }),
        _ => {
            log!(env, "price feed unavailable", feed.feed.clone());
            Err(Error::OracleUnavailable)
        }
    }
}
