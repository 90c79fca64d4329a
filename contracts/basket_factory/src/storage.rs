use basket_common::{
    constants::{
        INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{BasketResult, ErrorCode},
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{contracttype, log, Address, BytesN, Env, Vec};

use crate::state::{
    basket::{Basket, BasketSnapshot},
    config::Config,
};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    BasketCount,
    BasketAt(u32),
    Basket(BytesN<32>),
    Snapshot(BytesN<32>),
    TotalShares(BytesN<32>),
    Balance(BytesN<32>, Address),
    Reserve(BytesN<32>, Address),
    Lock(BytesN<32>),
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ################################################################
//                             Config
// ################################################################

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    bump_persistent(env, &DataKey::Config);
}

pub fn get_config(env: &Env) -> BasketResult<Config> {
    match env.storage().persistent().get(&DataKey::Config) {
        Some(config) => {
            bump_persistent(env, &DataKey::Config);
            Ok(config)
        }
        None => {
            log!(env, "Basket Factory: config not set");
            Err(ErrorCode::NotInitialized)
        }
    }
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    bump_persistent(env, &DataKey::Initialized);
}

// ################################################################
//                            Registry
// ################################################################

pub fn get_basket_count(env: &Env) -> u32 {
    match env.storage().persistent().get(&DataKey::BasketCount) {
        Some(count) => {
            bump_persistent(env, &DataKey::BasketCount);
            count
        }
        None => 0,
    }
}

fn save_basket_count(env: &Env, count: u32) {
    env.storage().persistent().set(&DataKey::BasketCount, &count);
    bump_persistent(env, &DataKey::BasketCount);
}

/// Appends `basket_id` at the next registry index. One entry per id.
pub fn push_basket_id(env: &Env, basket_id: &BytesN<32>) -> BasketResult {
    let index = get_basket_count(env);

    let key = DataKey::BasketAt(index);
    env.storage().persistent().set(&key, basket_id);
    bump_persistent(env, &key);

    save_basket_count(env, index.safe_add(1, env)?);
    Ok(())
}

/// Registry ids at indices `[start, end)`, clamped to the registry size.
pub fn read_basket_ids(env: &Env, start: u32, end: u32) -> Vec<BytesN<32>> {
    let end = end.min(get_basket_count(env));

    let mut ids = Vec::new(env);
    for index in start..end {
        let key = DataKey::BasketAt(index);
        if let Some(basket_id) = env.storage().persistent().get(&key) {
            bump_persistent(env, &key);
            ids.push_back(basket_id);
        }
    }
    ids
}

pub fn has_basket(env: &Env, basket_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Basket(basket_id.clone()))
}

pub fn get_basket(env: &Env, basket_id: &BytesN<32>) -> BasketResult<Basket> {
    let key = DataKey::Basket(basket_id.clone());
    match env.storage().persistent().get(&key) {
        Some(basket) => {
            bump_persistent(env, &key);
            Ok(basket)
        }
        None => {
            log!(env, "Basket Factory: unknown basket", basket_id.clone());
            Err(ErrorCode::BasketNotFound)
        }
    }
}

pub fn save_basket(env: &Env, basket_id: &BytesN<32>, basket: &Basket) {
    let key = DataKey::Basket(basket_id.clone());
    env.storage().persistent().set(&key, basket);
    bump_persistent(env, &key);
}

pub fn get_snapshot(env: &Env, basket_id: &BytesN<32>) -> Option<BasketSnapshot> {
    let key = DataKey::Snapshot(basket_id.clone());
    let snapshot = env.storage().persistent().get(&key);
    if snapshot.is_some() {
        bump_persistent(env, &key);
    }
    snapshot
}

pub fn save_snapshot(env: &Env, basket_id: &BytesN<32>, snapshot: &BasketSnapshot) {
    let key = DataKey::Snapshot(basket_id.clone());
    env.storage().persistent().set(&key, snapshot);
    bump_persistent(env, &key);
}

// ################################################################
//                       Supply and reserves
// ################################################################

pub fn read_total_shares(env: &Env, basket_id: &BytesN<32>) -> i128 {
    let key = DataKey::TotalShares(basket_id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(total) => {
            bump_persistent(env, &key);
            total
        }
        None => 0,
    }
}

pub fn write_total_shares(env: &Env, basket_id: &BytesN<32>, total: i128) {
    let key = DataKey::TotalShares(basket_id.clone());
    env.storage().persistent().set(&key, &total);
    bump_persistent(env, &key);
}

pub fn read_reserve(env: &Env, basket_id: &BytesN<32>, asset: &Address) -> i128 {
    let key = DataKey::Reserve(basket_id.clone(), asset.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(reserve) => {
            bump_persistent(env, &key);
            reserve
        }
        None => 0,
    }
}

pub fn write_reserve(env: &Env, basket_id: &BytesN<32>, asset: &Address, amount: i128) {
    let key = DataKey::Reserve(basket_id.clone(), asset.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ################################################################
//                              Lock
// ################################################################

pub fn is_locked(env: &Env, basket_id: &BytesN<32>) -> bool {
    env.storage()
        .temporary()
        .get(&DataKey::Lock(basket_id.clone()))
        .unwrap_or(false)
}

pub fn acquire_lock(env: &Env, basket_id: &BytesN<32>) -> BasketResult {
    validate!(
        env,
        !is_locked(env, basket_id),
        ErrorCode::BasketLocked,
        "Basket: operation already in progress"
    )?;

    env.storage()
        .temporary()
        .set(&DataKey::Lock(basket_id.clone()), &true);

    Ok(())
}

pub fn release_lock(env: &Env, basket_id: &BytesN<32>) {
    env.storage()
        .temporary()
        .remove(&DataKey::Lock(basket_id.clone()));
}
