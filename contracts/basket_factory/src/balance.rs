use basket_common::{
    constants::{BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD},
    error::{BasketResult, ErrorCode},
    safe_decrement, safe_increment, validate,
};
use soroban_sdk::{Address, BytesN, Env};

use crate::storage::DataKey;

pub fn read_balance(env: &Env, basket_id: &BytesN<32>, addr: &Address) -> i128 {
    let key = DataKey::Balance(basket_id.clone(), addr.clone());
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(
            &key,
            BALANCE_LIFETIME_THRESHOLD,
            BALANCE_BUMP_AMOUNT,
        );
        balance
    } else {
        0
    }
}

fn write_balance(env: &Env, basket_id: &BytesN<32>, addr: &Address, amount: i128) {
    let key = DataKey::Balance(basket_id.clone(), addr.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(
    env: &Env,
    basket_id: &BytesN<32>,
    addr: &Address,
    amount: i128,
) -> BasketResult {
    let mut balance = read_balance(env, basket_id, addr);
    safe_increment!(env, balance, amount);
    write_balance(env, basket_id, addr, balance);
    Ok(())
}

pub fn spend_balance(
    env: &Env,
    basket_id: &BytesN<32>,
    addr: &Address,
    amount: i128,
) -> BasketResult {
    let mut balance = read_balance(env, basket_id, addr);
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientShares,
        "Basket: insufficient share balance",
        balance,
        amount
    )?;
    safe_decrement!(env, balance, amount);
    write_balance(env, basket_id, addr, balance);
    Ok(())
}
