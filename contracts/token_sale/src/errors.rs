use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1-5) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidConfig = 4,
    InvalidTimeWindow = 5,

    // --- Purchase preconditions (6-9) ---
    InvalidAmount = 6,
    SaleNotOpen = 7,
    InvalidRate = 8,
    OracleUnavailable = 9,

    // --- Supply ceilings (10-11) ---
    SaleCapExceeded = 10,
    CapExceeded = 11,

    // --- Value handling and arithmetic (12-15) ---
    DirectPaymentRejected = 12,
    ArithmeticOverflow = 13,
    MintFailed = 14,
    PaymentFailed = 15,
}
