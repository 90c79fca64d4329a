use basket_common::error::ErrorCode;
use soroban_sdk::{Address, BytesN, Env, String, Vec};

use crate::state::{
    basket::{Basket, Component, Leg},
    fees::FeeSplit,
};

pub trait BasketTrait {
    // ################################################################
    //                             User
    // ################################################################

    /// Pulls the deposit legs from `sender` and issues exactly `shares`,
    /// split between `to`, the creator and the protocol fee recipient.
    fn mint(
        env: Env,
        basket_id: BytesN<32>,
        sender: Address,
        shares: i128,
        to: Address,
    ) -> Result<FeeSplit, ErrorCode>;

    /// Burns `shares` from `sender` and releases the proportional
    /// underlying amounts to `to`.
    fn redeem(
        env: Env,
        basket_id: BytesN<32>,
        sender: Address,
        shares: i128,
        to: Address,
    ) -> Result<Vec<Leg>, ErrorCode>;

    fn transfer(
        env: Env,
        basket_id: BytesN<32>,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn preview_deposit(
        env: Env,
        basket_id: BytesN<32>,
        shares: i128,
    ) -> Result<Vec<Leg>, ErrorCode>;

    fn preview_redeem(env: Env, basket_id: BytesN<32>, shares: i128)
        -> Result<Vec<Leg>, ErrorCode>;

    fn preview_mint_fee(
        env: Env,
        basket_id: BytesN<32>,
        shares: i128,
    ) -> Result<FeeSplit, ErrorCode>;

    fn get_composition(env: Env, basket_id: BytesN<32>) -> Result<Vec<Component>, ErrorCode>;

    fn query_basket(env: Env, basket_id: BytesN<32>) -> Result<Basket, ErrorCode>;

    fn query_reserve(env: Env, basket_id: BytesN<32>, asset: Address) -> i128;

    fn balance(env: Env, basket_id: BytesN<32>, id: Address) -> i128;

    fn total_shares(env: Env, basket_id: BytesN<32>) -> i128;

    fn name(env: Env, basket_id: BytesN<32>) -> Result<String, ErrorCode>;

    fn symbol(env: Env, basket_id: BytesN<32>) -> Result<String, ErrorCode>;

    fn decimals(env: Env, basket_id: BytesN<32>) -> Result<u32, ErrorCode>;
}
