use basket_common::{
    constants::BPS_DENOMINATOR,
    error::{BasketResult, ErrorCode},
    math::{casting::Cast, mul_div::ceil_div, safe_math::SafeMath},
    validate,
};
use soroban_sdk::{contracttype, Env};

/// How the shares of a single mint are distributed.
///
/// `user_shares + fee_shares` always equals the minted amount and
/// `creator_cut + protocol_cut` always equals `fee_shares`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub user_shares: i128,
    pub fee_shares: i128,
    pub creator_cut: i128,
    pub protocol_cut: i128,
}

impl FeeSplit {
    /// Fee and creator cut both round up; the protocol cut is the remainder.
    pub fn compute(
        env: &Env,
        shares: i128,
        mint_fee_bps: u32,
        creator_fee_share_bps: u32,
    ) -> BasketResult<FeeSplit> {
        let fee_shares = apply_bps(env, shares, mint_fee_bps)?;

        let user_shares = shares.safe_sub(fee_shares, env)?;
        validate!(
            env,
            user_shares > 0,
            ErrorCode::FeeExceedsShares,
            "Basket: mint fee consumes every share"
        )?;

        let creator_cut = apply_bps(env, fee_shares, creator_fee_share_bps)?;
        let protocol_cut = fee_shares.safe_sub(creator_cut, env)?;

        Ok(FeeSplit {
            user_shares,
            fee_shares,
            creator_cut,
            protocol_cut,
        })
    }
}

fn apply_bps(env: &Env, amount: i128, bps: u32) -> BasketResult<i128> {
    if bps == 0 {
        return Ok(0);
    }

    ceil_div(
        env,
        amount.cast::<u128>(env)?,
        u128::from(bps),
        u128::from(BPS_DENOMINATOR),
    )?
    .cast::<i128>(env)
}

#[cfg(test)]
mod test {
    use basket_common::{
        constants::{MIN_SHARE, ONE},
        error::ErrorCode,
    };
    use soroban_sdk::Env;
    use test_case::test_case;

    use super::FeeSplit;

    #[test]
    fn splits_one_percent_evenly() {
        let env = Env::default();

        let split = FeeSplit::compute(&env, ONE, 100, 5_000).unwrap();

        assert_eq!(
            split,
            FeeSplit {
                user_shares: 990_000_000_000_000_000,
                fee_shares: 10_000_000_000_000_000,
                creator_cut: 5_000_000_000_000_000,
                protocol_cut: 5_000_000_000_000_000,
            }
        );
    }

    #[test_case(ONE, 0, 5_000 ; "no fee")]
    #[test_case(ONE, 1_000, 0 ; "protocol takes everything")]
    #[test_case(ONE, 1_000, 10_000 ; "creator takes everything")]
    #[test_case(MIN_SHARE, 1, 1 ; "dust fee rounds up")]
    #[test_case(MIN_SHARE + 7, 333, 3_333 ; "odd amounts")]
    #[test_case(123_456_789_012_345_678_901, 999, 6_667 ; "large amount")]
    fn split_is_conservative(shares: i128, mint_fee_bps: u32, creator_fee_share_bps: u32) {
        let env = Env::default();

        let split = FeeSplit::compute(&env, shares, mint_fee_bps, creator_fee_share_bps).unwrap();

        assert_eq!(split.user_shares + split.fee_shares, shares);
        assert_eq!(split.creator_cut + split.protocol_cut, split.fee_shares);
        assert!(split.creator_cut >= 0 && split.protocol_cut >= 0);
        if mint_fee_bps == 0 {
            assert_eq!(split.fee_shares, 0);
        }
        if creator_fee_share_bps == 0 {
            assert_eq!(split.creator_cut, 0);
        }
    }

    #[test]
    fn dust_fee_is_never_zero() {
        let env = Env::default();

        let split = FeeSplit::compute(&env, MIN_SHARE, 1, 5_000).unwrap();

        // 1e12 * 1 / 10_000 = 1e8 exactly, creator half of it
        assert_eq!(split.fee_shares, 100_000_000);
        assert_eq!(split.creator_cut, 50_000_000);

        let split = FeeSplit::compute(&env, 3, 1, 5_000).unwrap();
        assert_eq!(split.fee_shares, 1);
        assert_eq!(split.creator_cut, 1);
        assert_eq!(split.protocol_cut, 0);
    }

    #[test]
    fn rejects_fee_consuming_every_share() {
        let env = Env::default();

        assert_eq!(
            FeeSplit::compute(&env, 1, 1_000, 0),
            Err(ErrorCode::FeeExceedsShares)
        );
    }
}
