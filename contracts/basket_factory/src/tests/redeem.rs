use basket_common::{error::ErrorCode, utils::zero_address};
use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, IntoVal, Symbol, TryFromVal, Val, Vec,
};

use super::setup::{token_balance, Fixture, INITIAL_BALANCE, MIN_SHARE, ONE, UNITS_A, UNITS_B};
use crate::{state::basket::Leg, storage::write_reserve};

const USER_SHARES: i128 = 990_000_000_000_000_000;

fn minted_fixture<'a>() -> Fixture<'a> {
    let fixture = Fixture::new();
    fixture
        .factory
        .mint(&fixture.basket_id, &fixture.user, &ONE, &fixture.user);
    fixture
}

#[test]
fn redeem_returns_proportional_amounts() {
    let fixture = minted_fixture();
    let env = &fixture.env;
    let basket_id = &fixture.basket_id;

    let legs = fixture
        .factory
        .redeem(basket_id, &fixture.user, &USER_SHARES, &fixture.user);

    assert_eq!(
        legs,
        vec![
            env,
            Leg {
                asset: fixture.asset_a.clone(),
                amount: 1_980_000_000_000_000_000,
            },
            Leg {
                asset: fixture.asset_b.clone(),
                amount: 99_000_000_000_000_000,
            },
        ]
    );

    assert_eq!(fixture.factory.balance(basket_id, &fixture.user), 0);
    assert_eq!(fixture.factory.total_shares(basket_id), ONE - USER_SHARES);
    assert_eq!(
        token_balance(env, &fixture.asset_a, &fixture.user),
        INITIAL_BALANCE - UNITS_A + 1_980_000_000_000_000_000
    );
    assert_eq!(
        token_balance(env, &fixture.asset_b, &fixture.user),
        INITIAL_BALANCE - UNITS_B + 99_000_000_000_000_000
    );
    assert_eq!(
        fixture.factory.query_reserve(basket_id, &fixture.asset_a),
        20_000_000_000_000_000
    );
    assert_eq!(
        fixture.factory.query_reserve(basket_id, &fixture.asset_b),
        1_000_000_000_000_000
    );
}

#[test]
fn redeem_to_other_recipient_emits_event() {
    let fixture = minted_fixture();
    let env = &fixture.env;
    let recipient = Address::generate(env);

    fixture
        .factory
        .redeem(&fixture.basket_id, &fixture.user, &(ONE / 2), &recipient);

    let (contract_id, topics, data) = env.events().all().last().unwrap();
    let expected_topics: Vec<Val> = (
        Symbol::new(env, "redeem"),
        fixture.basket_id.clone(),
        fixture.user.clone(),
        recipient.clone(),
    )
        .into_val(env);

    assert_eq!(contract_id, fixture.factory.address);
    assert_eq!(topics, expected_topics);

    let (shares, legs) = <(i128, Vec<Leg>)>::try_from_val(env, &data).unwrap();
    assert_eq!(shares, ONE / 2);
    assert_eq!(legs.get(0).unwrap().amount, UNITS_A / 2);
    assert_eq!(token_balance(env, &fixture.asset_a, &recipient), UNITS_A / 2);
    assert_eq!(token_balance(env, &fixture.asset_b, &recipient), UNITS_B / 2);
}

#[test]
fn fee_recipients_can_redeem_their_cut() {
    let fixture = minted_fixture();
    let env = &fixture.env;
    let cut = 5_000_000_000_000_000;

    fixture
        .factory
        .redeem(&fixture.basket_id, &fixture.creator, &cut, &fixture.creator);
    fixture
        .factory
        .redeem(&fixture.basket_id, &fixture.protocol, &cut, &fixture.protocol);

    assert_eq!(token_balance(env, &fixture.asset_a, &fixture.creator), 10_000_000_000_000_000);
    assert_eq!(token_balance(env, &fixture.asset_b, &fixture.protocol), 500_000_000_000_000);
    assert_eq!(fixture.factory.total_shares(&fixture.basket_id), USER_SHARES);
}

#[test]
fn full_round_trip_drains_reserves() {
    let fixture = minted_fixture();
    let env = &fixture.env;
    let basket_id = &fixture.basket_id;

    fixture
        .factory
        .redeem(basket_id, &fixture.user, &USER_SHARES, &fixture.user);
    fixture
        .factory
        .redeem(basket_id, &fixture.creator, &5_000_000_000_000_000, &fixture.creator);
    fixture
        .factory
        .redeem(basket_id, &fixture.protocol, &5_000_000_000_000_000, &fixture.protocol);

    assert_eq!(fixture.factory.total_shares(basket_id), 0);
    assert_eq!(fixture.factory.query_reserve(basket_id, &fixture.asset_a), 0);
    assert_eq!(fixture.factory.query_reserve(basket_id, &fixture.asset_b), 0);
    assert_eq!(
        token_balance(env, &fixture.asset_a, &fixture.factory.address),
        0
    );
}

#[test]
fn redeem_skips_zero_legs() {
    let fixture = Fixture::new();
    let env = &fixture.env;
    let basket_id = fixture.create_basket("DUST", 1, ONE);

    fixture
        .factory
        .mint(&basket_id, &fixture.user, &ONE, &fixture.user);
    let before = token_balance(env, &fixture.asset_a, &fixture.user);

    let legs = fixture
        .factory
        .redeem(&basket_id, &fixture.user, &MIN_SHARE, &fixture.user);

    assert_eq!(legs.get(0).unwrap().amount, 0);
    assert_eq!(legs.get(1).unwrap().amount, 1_000_000_000_000);
    assert_eq!(token_balance(env, &fixture.asset_a, &fixture.user), before);
    assert_eq!(fixture.factory.query_reserve(&basket_id, &fixture.asset_a), 1);
}

#[test]
fn redeem_more_than_balance_fails() {
    let fixture = minted_fixture();

    assert_eq!(
        fixture
            .factory
            .try_redeem(&fixture.basket_id, &fixture.user, &ONE, &fixture.user),
        Err(Ok(ErrorCode::InsufficientShares))
    );
    assert_eq!(fixture.factory.balance(&fixture.basket_id, &fixture.user), USER_SHARES);
}

#[test]
fn redeem_rejects_dust_and_zero_recipient() {
    let fixture = minted_fixture();
    let env = &fixture.env;

    assert_eq!(
        fixture.factory.try_redeem(
            &fixture.basket_id,
            &fixture.user,
            &(MIN_SHARE - 1),
            &fixture.user
        ),
        Err(Ok(ErrorCode::SharesTooSmall))
    );
    assert_eq!(
        fixture.factory.try_redeem(
            &fixture.basket_id,
            &fixture.user,
            &ONE,
            &zero_address(env)
        ),
        Err(Ok(ErrorCode::InvalidRecipient))
    );
}

#[test]
fn redeem_against_short_reserve_fails() {
    let fixture = minted_fixture();
    let env = &fixture.env;

    env.as_contract(&fixture.factory.address, || {
        write_reserve(env, &fixture.basket_id, &fixture.asset_b, 1);
    });

    assert_eq!(
        fixture
            .factory
            .try_redeem(&fixture.basket_id, &fixture.user, &(ONE / 2), &fixture.user),
        Err(Ok(ErrorCode::InsufficientReserve))
    );

    // the burn is rolled back with the failed call
    assert_eq!(fixture.factory.balance(&fixture.basket_id, &fixture.user), USER_SHARES);
    assert_eq!(fixture.factory.total_shares(&fixture.basket_id), ONE);
}

#[test]
fn reserves_cover_outstanding_shares() {
    let fixture = Fixture::new();
    let basket_id = fixture.create_basket("COVER", 333_333_333_333_333_333, 7);

    for shares in [MIN_SHARE, ONE / 3, ONE + 1, 3 * MIN_SHARE + 17] {
        fixture
            .factory
            .mint(&basket_id, &fixture.user, &shares, &fixture.user);
    }
    fixture
        .factory
        .redeem(&basket_id, &fixture.user, &(ONE / 7), &fixture.user);

    let total = fixture.factory.total_shares(&basket_id);
    let owed = fixture.factory.preview_redeem(&basket_id, &total);

    assert!(fixture.factory.query_reserve(&basket_id, &fixture.asset_a) >= owed.get(0).unwrap().amount);
    assert!(fixture.factory.query_reserve(&basket_id, &fixture.asset_b) >= owed.get(1).unwrap().amount);
}

#[test]
fn redeem_one_full_share() {
    let fixture = minted_fixture();
    let env = &fixture.env;
    let basket_id = &fixture.basket_id;
    let cut = 5_000_000_000_000_000;

    fixture
        .factory
        .transfer(basket_id, &fixture.creator, &fixture.user, &cut);
    fixture
        .factory
        .transfer(basket_id, &fixture.protocol, &fixture.user, &cut);
    assert_eq!(fixture.factory.balance(basket_id, &fixture.user), ONE);

    let preview = fixture.factory.preview_redeem(basket_id, &ONE);
    let legs = fixture
        .factory
        .redeem(basket_id, &fixture.user, &ONE, &fixture.user);

    assert_eq!(legs, preview);
    assert_eq!(legs.get(0).unwrap().amount, UNITS_A);
    assert_eq!(legs.get(1).unwrap().amount, UNITS_B);
    assert_eq!(
        token_balance(env, &fixture.asset_a, &fixture.user),
        INITIAL_BALANCE
    );
    assert_eq!(
        token_balance(env, &fixture.asset_b, &fixture.user),
        INITIAL_BALANCE
    );
    assert_eq!(fixture.factory.total_shares(basket_id), 0);
}
