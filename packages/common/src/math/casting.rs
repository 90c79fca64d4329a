use soroban_sdk::{log, Env};

use crate::error::{BasketResult, ErrorCode};

pub trait Cast: Sized {
    /// Checked conversion between integer types
    #[track_caller]
    #[inline(always)]
    fn cast<T: TryFrom<Self>>(self, env: &Env) -> BasketResult<T> {
        match self.try_into() {
            Ok(result) => Ok(result),
            Err(_) => {
                log!(env, "Casting error thrown at line", line!());
                Err(ErrorCode::ArithmeticOverflow)
            }
        }
    }
}

impl Cast for u128 {}
impl Cast for i128 {}
