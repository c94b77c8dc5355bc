//! Value to token conversion. All results round down.

use crate::errors::Error;

/// Largest feed precision whose scale factor still fits in an `i128`.
pub const MAX_FEED_DECIMALS: u32 = 38;

/// Fixed pricing: `value * rate`.
pub fn tokens_for_value(value: i128, rate: i128) -> Result<i128, Error> {
    value.checked_mul(rate).ok_or(Error::ArithmeticOverflow)
}

/// Oracle pricing: `value * quote * rate / 10^decimals`, where `quote` is the
/// feed's fixed-point answer and `rate` is tokens per whole quoted unit.
pub fn tokens_for_quoted_value(
    value: i128,
    quote: i128,
    rate: i128,
    decimals: u32,
) -> Result<i128, Error> {
    let scale = 10i128
        .checked_pow(decimals)
        .ok_or(Error::ArithmeticOverflow)?;
    value
        .checked_mul(quote)
        .and_then(|v| v.checked_mul(rate))
        .map(|v| v / scale)
        .ok_or(Error::ArithmeticOverflow)
}
