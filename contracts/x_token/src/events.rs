use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

const TOPIC: Symbol = symbol_short!("XTOKEN");

// ==================== Event Payload Structs ====================

#[derive(Clone)]
#[contracttype]
pub struct MintEvent {
    pub to: Address,
    pub amount: i128,
    pub total_supply: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct TransferEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct ApprovalEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub struct OwnershipEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

// ==================== Emit Functions ====================

pub fn emit_mint(env: &Env, to: Address, amount: i128, total_supply: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("mint")),
        MintEvent {
            to,
            amount,
            total_supply,
        },
    );
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("transfer")),
        TransferEvent { from, to, amount },
    );
}

pub fn emit_approval(env: &Env, from: Address, spender: Address, amount: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("approve")),
        ApprovalEvent {
            from,
            spender,
            amount,
        },
    );
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (TOPIC, symbol_short!("own_xfer")),
        OwnershipEvent {
            previous_owner,
            new_owner,
        },
    );
}
