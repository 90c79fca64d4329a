use basket_common::{
    constants::{MIN_SHARE, ONE},
    error::{BasketResult, ErrorCode},
    math::{
        casting::Cast,
        mul_div::{ceil_div, floor_div},
    },
    validate,
};
use soroban_sdk::{contracttype, Address, Env, Vec};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::state::fees::FeeSplit;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Component {
    /// Address of the underlying SEP-41 token
    pub asset: Address,
    /// Amount of the asset backing one full share (`ONE`)
    pub units_per_share: i128,
}

/// Per-asset amount moved by a basket operation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Leg {
    pub asset: Address,
    pub amount: i128,
}

/// Creation-time audit record, stored apart from the live basket
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasketSnapshot {
    pub creator: Address,
    pub mint_fee_bps: u32,
    pub creator_fee_share_bps: u32,
    pub protocol_fee_recipient: Address,
}

/// Frozen configuration of one basket. Written once by `create_basket`,
/// never updated afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Basket {
    pub composition: Vec<Component>,
    pub mint_fee_bps: u32,
    pub creator_fee_share_bps: u32,
    pub creator: Address,
    pub protocol_fee_recipient: Address,
    /// Account that submitted the creation. Recorded only.
    pub deployer: Address,
    /// Share token metadata
    pub metadata: TokenMetadata,
}

impl Basket {
    pub fn snapshot(&self) -> BasketSnapshot {
        BasketSnapshot {
            creator: self.creator.clone(),
            mint_fee_bps: self.mint_fee_bps,
            creator_fee_share_bps: self.creator_fee_share_bps,
            protocol_fee_recipient: self.protocol_fee_recipient.clone(),
        }
    }

    /// Amounts a depositor must transfer to mint `shares`. Rounds up; a leg
    /// that rounds to zero is rejected.
    pub fn preview_deposit(&self, env: &Env, shares: i128) -> BasketResult<Vec<Leg>> {
        validate_share_amount(env, shares)?;
        let shares = shares.cast::<u128>(env)?;
        let one = ONE.cast::<u128>(env)?;

        let mut legs = Vec::new(env);
        for component in self.composition.iter() {
            let amount = ceil_div(
                env,
                component.units_per_share.cast::<u128>(env)?,
                shares,
                one,
            )?;

            validate!(
                env,
                amount > 0,
                ErrorCode::ZeroLeg,
                "Basket: deposit leg rounds to zero"
            )?;

            legs.push_back(Leg {
                asset: component.asset,
                amount: amount.cast::<i128>(env)?,
            });
        }

        Ok(legs)
    }

    /// Amounts released when `shares` are redeemed. Rounds down; zero legs
    /// are allowed.
    pub fn preview_redeem(&self, env: &Env, shares: i128) -> BasketResult<Vec<Leg>> {
        validate_share_amount(env, shares)?;
        let shares = shares.cast::<u128>(env)?;
        let one = ONE.cast::<u128>(env)?;

        let mut legs = Vec::new(env);
        for component in self.composition.iter() {
            let amount = floor_div(
                env,
                component.units_per_share.cast::<u128>(env)?,
                shares,
                one,
            )?;

            legs.push_back(Leg {
                asset: component.asset,
                amount: amount.cast::<i128>(env)?,
            });
        }

        Ok(legs)
    }

    pub fn split_mint_fee(&self, env: &Env, shares: i128) -> BasketResult<FeeSplit> {
        FeeSplit::compute(env, shares, self.mint_fee_bps, self.creator_fee_share_bps)
    }
}

pub fn validate_share_amount(env: &Env, shares: i128) -> BasketResult {
    validate!(
        env,
        shares >= MIN_SHARE,
        ErrorCode::SharesTooSmall,
        "Basket: share amount below minimum",
        shares
    )
}

#[cfg(test)]
mod test {
    use basket_common::{
        constants::{MIN_SHARE, ONE, SHARE_DECIMALS},
        error::ErrorCode,
    };
    use pretty_assertions::assert_eq;
    use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};
    use soroban_token_sdk::metadata::TokenMetadata;

    use super::{Basket, Component, Leg};

    fn basket(env: &Env, composition: &[(Address, i128)]) -> Basket {
        let mut components = vec![env];
        for (asset, units_per_share) in composition.iter() {
            components.push_back(Component {
                asset: asset.clone(),
                units_per_share: *units_per_share,
            });
        }

        Basket {
            composition: components,
            mint_fee_bps: 100,
            creator_fee_share_bps: 5_000,
            creator: Address::generate(env),
            protocol_fee_recipient: Address::generate(env),
            deployer: Address::generate(env),
            metadata: TokenMetadata {
                decimal: SHARE_DECIMALS,
                name: String::from_str(env, "Test Basket"),
                symbol: String::from_str(env, "TB"),
            },
        }
    }

    #[test]
    fn deposit_of_one_share_matches_units() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let basket = basket(&env, &[(a.clone(), 2 * ONE), (b.clone(), ONE / 10)]);

        assert_eq!(
            basket.preview_deposit(&env, ONE).unwrap(),
            vec![
                &env,
                Leg {
                    asset: a,
                    amount: 2 * ONE
                },
                Leg {
                    asset: b,
                    amount: ONE / 10
                },
            ]
        );
    }

    #[test]
    fn deposit_rounds_up_and_redeem_rounds_down() {
        let env = Env::default();
        let a = Address::generate(&env);
        // 1 unit per full share: any fraction of a share bills 1 unit, returns 0
        let basket = basket(&env, &[(a.clone(), 1)]);

        let deposit = basket.preview_deposit(&env, MIN_SHARE).unwrap();
        let redeem = basket.preview_redeem(&env, MIN_SHARE).unwrap();

        assert_eq!(deposit.get(0).unwrap().amount, 1);
        assert_eq!(redeem.get(0).unwrap().amount, 0);
    }

    #[test]
    fn redeem_never_exceeds_deposit() {
        let env = Env::default();
        let basket = basket(
            &env,
            &[
                (Address::generate(&env), 3_333_333_333_333_333_333),
                (Address::generate(&env), 7),
                (Address::generate(&env), ONE),
            ],
        );

        for shares in [MIN_SHARE, MIN_SHARE + 1, ONE / 3, ONE, 17 * ONE + 11] {
            let deposit = basket.preview_deposit(&env, shares).unwrap();
            let redeem = basket.preview_redeem(&env, shares).unwrap();

            for (paid, released) in deposit.iter().zip(redeem.iter()) {
                assert!(released.amount <= paid.amount);
            }
        }
    }

    #[test]
    fn previews_reject_dust_share_amounts() {
        let env = Env::default();
        let basket = basket(&env, &[(Address::generate(&env), ONE)]);

        assert_eq!(
            basket.preview_deposit(&env, MIN_SHARE / 10),
            Err(ErrorCode::SharesTooSmall)
        );
        assert_eq!(
            basket.preview_redeem(&env, MIN_SHARE - 1),
            Err(ErrorCode::SharesTooSmall)
        );
        assert_eq!(
            basket.preview_deposit(&env, -ONE),
            Err(ErrorCode::SharesTooSmall)
        );
    }

    #[test]
    fn zero_unit_component_is_a_zero_leg() {
        let env = Env::default();
        // unreachable through create_basket, which rejects zero units
        let basket = basket(
            &env,
            &[(Address::generate(&env), ONE), (Address::generate(&env), 0)],
        );

        assert_eq!(basket.preview_deposit(&env, ONE), Err(ErrorCode::ZeroLeg));
    }

    #[test]
    fn overflowing_leg_is_reported() {
        let env = Env::default();
        let basket = basket(&env, &[(Address::generate(&env), i128::MAX)]);

        assert_eq!(
            basket.preview_deposit(&env, 10 * ONE),
            Err(ErrorCode::ArithmeticOverflow)
        );
    }

    #[test]
    fn snapshot_mirrors_frozen_fees() {
        let env = Env::default();
        let basket = basket(&env, &[(Address::generate(&env), ONE)]);

        let snapshot = basket.snapshot();

        assert_eq!(snapshot.creator, basket.creator);
        assert_eq!(snapshot.mint_fee_bps, 100);
        assert_eq!(snapshot.creator_fee_share_bps, 5_000);
        assert_eq!(snapshot.protocol_fee_recipient, basket.protocol_fee_recipient);
    }
}
