use basket_common::{
    error::{BasketResult, ErrorCode},
    math::safe_math::SafeMath,
    utils::is_zero_address,
    validate,
};
use soroban_sdk::{token, Address, BytesN, Env, Vec};

use crate::{
    balance::{receive_balance, spend_balance},
    events::BasketEvents,
    state::{basket::Leg, fees::FeeSplit},
    storage::{
        acquire_lock, get_basket, read_reserve, read_total_shares, release_lock, write_reserve,
        write_total_shares,
    },
};

/// Runs `op` while holding the basket's lock. The lock is released whatever
/// `op` returns.
pub fn with_lock<T>(
    env: &Env,
    basket_id: &BytesN<32>,
    op: impl FnOnce() -> BasketResult<T>,
) -> BasketResult<T> {
    acquire_lock(env, basket_id)?;
    let result = op();
    release_lock(env, basket_id);
    result
}

fn validate_recipient(env: &Env, to: &Address) -> BasketResult {
    validate!(
        env,
        !is_zero_address(env, to),
        ErrorCode::InvalidRecipient,
        "Basket: recipient is the zero address"
    )
}

pub fn mint(
    env: &Env,
    basket_id: &BytesN<32>,
    sender: &Address,
    shares: i128,
    to: &Address,
) -> BasketResult<FeeSplit> {
    let basket = get_basket(env, basket_id)?;
    validate_recipient(env, to)?;

    let legs = basket.preview_deposit(env, shares)?;
    let fees = basket.split_mint_fee(env, shares)?;

    let total_shares = read_total_shares(env, basket_id).safe_add(shares, env)?;

    // Every leg is checked and every new reserve computed before the first pull
    let mut reserves: Vec<i128> = Vec::new(env);
    for leg in legs.iter() {
        let available = token::Client::new(env, &leg.asset).balance(sender);
        validate!(
            env,
            available >= leg.amount,
            ErrorCode::InsufficientAssetBalance,
            "Basket: sender cannot cover deposit leg",
            available,
            leg.amount
        )?;

        reserves.push_back(read_reserve(env, basket_id, &leg.asset).safe_add(leg.amount, env)?);
    }

    let contract = env.current_contract_address();
    for leg in legs.iter() {
        token::Client::new(env, &leg.asset).transfer(sender, &contract, &leg.amount);
    }

    for (leg, reserve) in legs.iter().zip(reserves.iter()) {
        write_reserve(env, basket_id, &leg.asset, reserve);
    }

    receive_balance(env, basket_id, to, fees.user_shares)?;
    if fees.creator_cut > 0 {
        receive_balance(env, basket_id, &basket.creator, fees.creator_cut)?;
    }
    if fees.protocol_cut > 0 {
        receive_balance(
            env,
            basket_id,
            &basket.protocol_fee_recipient,
            fees.protocol_cut,
        )?;
    }
    write_total_shares(env, basket_id, total_shares);

    BasketEvents::mint(
        env,
        basket_id.clone(),
        sender.clone(),
        to.clone(),
        shares,
        fees.clone(),
        legs,
    );

    Ok(fees)
}

pub fn redeem(
    env: &Env,
    basket_id: &BytesN<32>,
    sender: &Address,
    shares: i128,
    to: &Address,
) -> BasketResult<Vec<Leg>> {
    let basket = get_basket(env, basket_id)?;
    validate_recipient(env, to)?;

    let legs = basket.preview_redeem(env, shares)?;

    // Burn before any asset leaves the contract
    spend_balance(env, basket_id, sender, shares)?;
    let total_shares = read_total_shares(env, basket_id).safe_sub(shares, env)?;
    write_total_shares(env, basket_id, total_shares);

    let contract = env.current_contract_address();
    for leg in legs.iter() {
        if leg.amount == 0 {
            continue;
        }

        let reserve = read_reserve(env, basket_id, &leg.asset);
        validate!(
            env,
            reserve >= leg.amount,
            ErrorCode::InsufficientReserve,
            "Basket: reserve cannot cover redemption leg",
            reserve,
            leg.amount
        )?;
        write_reserve(env, basket_id, &leg.asset, reserve.safe_sub(leg.amount, env)?);

        token::Client::new(env, &leg.asset).transfer(&contract, to, &leg.amount);
    }

    BasketEvents::redeem(
        env,
        basket_id.clone(),
        sender.clone(),
        to.clone(),
        shares,
        legs.clone(),
    );

    Ok(legs)
}

pub fn transfer(
    env: &Env,
    basket_id: &BytesN<32>,
    from: &Address,
    to: &Address,
    amount: i128,
) -> BasketResult {
    validate!(
        env,
        amount >= 0,
        ErrorCode::NegativeAmount,
        "Basket: negative transfer amount",
        amount
    )?;
    get_basket(env, basket_id)?;
    validate_recipient(env, to)?;

    spend_balance(env, basket_id, from, amount)?;
    receive_balance(env, basket_id, to, amount)?;

    BasketEvents::transfer(env, basket_id.clone(), from.clone(), to.clone(), amount);
    Ok(())
}
