use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1-2) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // --- Authorization (3) ---
    Unauthorized = 3,

    // --- Ledger rules (4-8) ---
    InvalidAmount = 4,
    CapExceeded = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    ArithmeticOverflow = 8,
}
