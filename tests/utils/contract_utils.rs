//! Helpers for driving the ledger clock and standing in for external contracts
use soroban_sdk::{contract, contractimpl, contracttype, testutils::Ledger as _, Address, Env};

/// Ledger time every fixture starts from.
pub const START: u64 = 1_700_000_000;

/// Move the ledger clock to an absolute timestamp.
pub fn jump_to(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|l| l.timestamp = timestamp);
}

#[derive(Clone)]
#[contracttype]
enum ProviderKey {
    Reading,
}

/// Price provider answering `latest()` with whatever it was last told.
#[contract]
pub struct MockProvider;

#[contractimpl]
impl MockProvider {
    pub fn set(env: Env, value: i128, timestamp: u64) {
        env.storage()
            .instance()
            .set(&ProviderKey::Reading, &(value, timestamp));
    }

    pub fn latest(env: Env) -> (i128, u64) {
        env.storage()
            .instance()
            .get(&ProviderKey::Reading)
            .unwrap_or((0, 0))
    }
}

/// Register a provider already reporting `value` at `timestamp`.
pub fn mock_provider(env: &Env, value: i128, timestamp: u64) -> Address {
    let id = env.register_contract(None, MockProvider);
    MockProviderClient::new(env, &id).set(&value, &timestamp);
    id
}
