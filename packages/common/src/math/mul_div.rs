use soroban_sdk::{log, Env};

use crate::{
    error::{BasketResult, ErrorCode},
    math::{
        bn::U256,
        safe_math::{SafeDivCeil, SafeMath},
    },
};

/// Computes `ceil(a * b / denominator)`.
///
/// A zero product returns zero without touching the denominator. The product
/// is evaluated in u128 when it fits and in 256 bits otherwise, so the only
/// failure is a quotient that does not fit back into u128 (or a zero
/// denominator).
pub fn ceil_div(env: &Env, a: u128, b: u128, denominator: u128) -> BasketResult<u128> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    if denominator == 0 {
        log!(env, "ceil_div: zero denominator");
        return Err(ErrorCode::ArithmeticOverflow);
    }

    match a.checked_mul(b) {
        Some(product) => product.safe_div_ceil(denominator, env),
        None => {
            let (quotient, remainder) =
                (U256::from(a) * U256::from(b)).div_mod(U256::from(denominator));

            let quotient = if remainder.is_zero() {
                quotient
            } else {
                quotient + U256::one()
            };

            quotient.try_to_u128(env)
        }
    }
}

/// Computes `floor(a * b / denominator)` with the same overflow policy as
/// [`ceil_div`].
pub fn floor_div(env: &Env, a: u128, b: u128, denominator: u128) -> BasketResult<u128> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    if denominator == 0 {
        log!(env, "floor_div: zero denominator");
        return Err(ErrorCode::ArithmeticOverflow);
    }

    match a.checked_mul(b) {
        Some(product) => product.safe_div(denominator, env),
        None => (U256::from(a) * U256::from(b) / U256::from(denominator)).try_to_u128(env),
    }
}
