use soroban_sdk::{log, Env};

use crate::error::{BasketResult, ErrorCode};
use crate::math::ceil_div::CheckedCeilDiv;

pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self, env: &Env) -> BasketResult<Self>;
    fn safe_sub(self, rhs: Self, env: &Env) -> BasketResult<Self>;
    fn safe_div(self, rhs: Self, env: &Env) -> BasketResult<Self>;
}

pub trait SafeDivCeil: Sized {
    fn safe_div_ceil(self, rhs: Self, env: &Env) -> BasketResult<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_add(self, v: $t, env: &Env) -> BasketResult<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line", line!());
                        Err(ErrorCode::ArithmeticOverflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_sub(self, v: $t, env: &Env) -> BasketResult<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line", line!());
                        Err(ErrorCode::ArithmeticOverflow)
                    }
                }
            }

            #[track_caller]
            #[inline(always)]
            fn safe_div(self, v: $t, env: &Env) -> BasketResult<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line", line!());
                        Err(ErrorCode::ArithmeticOverflow)
                    }
                }
            }
        }
    };
}

checked_impl!(u128);
checked_impl!(u32);
checked_impl!(i128);

macro_rules! div_ceil_impl {
    ($t:ty) => {
        impl SafeDivCeil for $t {
            #[track_caller]
            #[inline(always)]
            fn safe_div_ceil(self, v: $t, env: &Env) -> BasketResult<$t> {
                match self.checked_ceil_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        log!(env, "Math error thrown at line", line!());
                        Err(ErrorCode::ArithmeticOverflow)
                    }
                }
            }
        }
    };
}

div_ceil_impl!(u128);

#[cfg(test)]
mod test {
    use crate::error::ErrorCode;
    use crate::math::safe_math::{SafeDivCeil, SafeMath};
    use soroban_sdk::Env;

    #[test]
    fn safe_add() {
        let env = Env::default();
        assert_eq!((1_u128).safe_add(1, &env).unwrap(), 2);
        assert_eq!((7_u32).safe_add(1, &env), Ok(8));
        assert_eq!(u32::MAX.safe_add(1, &env), Err(ErrorCode::ArithmeticOverflow));
        assert_eq!(
            (1_u128).safe_add(u128::MAX, &env),
            Err(ErrorCode::ArithmeticOverflow)
        );
    }

    #[test]
    fn safe_sub() {
        let env = Env::default();
        assert_eq!((1_i128).safe_sub(1, &env).unwrap(), 0);
        assert_eq!((0_u32).safe_sub(1, &env), Err(ErrorCode::ArithmeticOverflow));
        assert_eq!(
            (0_u128).safe_sub(1, &env),
            Err(ErrorCode::ArithmeticOverflow)
        );
    }

    #[test]
    fn safe_div() {
        let env = Env::default();
        assert_eq!((159_u128).safe_div(8, &env).unwrap(), 19);
        assert_eq!((160_u128).safe_div(8, &env).unwrap(), 20);
        assert_eq!((1_u128).safe_div(0, &env), Err(ErrorCode::ArithmeticOverflow));
    }

    #[test]
    fn safe_div_ceil() {
        let env = Env::default();
        assert_eq!((155_u128).safe_div_ceil(8, &env).unwrap(), 20);
        assert_eq!((160_u128).safe_div_ceil(8, &env).unwrap(), 20);
        assert_eq!(
            (1_u128).safe_div_ceil(0, &env),
            Err(ErrorCode::ArithmeticOverflow)
        );
    }
}
