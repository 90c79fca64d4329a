use basket_common::error::ErrorCode;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, BytesN, Env, String, Vec};

use crate::{
    balance::read_balance,
    controller,
    interface::{basket::BasketTrait, factory::BasketFactoryTrait},
    state::{
        basket::{Basket, BasketSnapshot, Component, Leg},
        config::Config,
        fees::FeeSplit,
    },
    storage::{
        self, bump_instance, get_basket, get_basket_count, get_config, has_basket, read_basket_ids,
        read_reserve, read_total_shares,
    },
};

contractmeta!(
    key = "Description",
    val = "Factory and share ledger for fixed-ratio asset baskets"
);

#[contract]
pub struct BasketFactory;

#[contractimpl]
impl BasketFactoryTrait for BasketFactory {
    // ################################################################
    //                             Admin
    // ################################################################

    fn initialize(
        env: Env,
        owner: Address,
        protocol_fee_recipient: Address,
        mint_fee_bps: u32,
        creator_fee_share_bps: u32,
    ) -> Result<(), ErrorCode> {
        bump_instance(&env);

        controller::factory::initialize(
            &env,
            Config {
                owner,
                protocol_fee_recipient,
                mint_fee_bps,
                creator_fee_share_bps,
            },
        )
    }

    fn set_owner(env: Env, sender: Address, owner: Address) -> Result<(), ErrorCode> {
        bump_instance(&env);
        controller::factory::set_owner(&env, &sender, owner)
    }

    fn set_protocol_fee_recipient(
        env: Env,
        sender: Address,
        protocol_fee_recipient: Address,
    ) -> Result<(), ErrorCode> {
        bump_instance(&env);
        controller::factory::set_protocol_fee_recipient(&env, &sender, protocol_fee_recipient)
    }

    fn set_mint_fee_bps(env: Env, sender: Address, mint_fee_bps: u32) -> Result<(), ErrorCode> {
        bump_instance(&env);
        controller::factory::set_mint_fee_bps(&env, &sender, mint_fee_bps)
    }

    fn set_creator_fee_share_bps(
        env: Env,
        sender: Address,
        creator_fee_share_bps: u32,
    ) -> Result<(), ErrorCode> {
        bump_instance(&env);
        controller::factory::set_creator_fee_share_bps(&env, &sender, creator_fee_share_bps)
    }

    // ################################################################
    //                             User
    // ################################################################

    fn create_basket(
        env: Env,
        sender: Address,
        assets: Vec<Address>,
        units_per_share: Vec<i128>,
        name: String,
        symbol: String,
        creator: Address,
    ) -> Result<BytesN<32>, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::factory::create_basket(
            &env,
            &sender,
            &assets,
            &units_per_share,
            name,
            symbol,
            &creator,
        )
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn basket_count(env: Env) -> u32 {
        bump_instance(&env);
        get_basket_count(&env)
    }

    fn list_baskets(env: Env) -> Vec<BytesN<32>> {
        bump_instance(&env);
        read_basket_ids(&env, 0, get_basket_count(&env))
    }

    fn list_baskets_paged(env: Env, offset: u32, limit: u32) -> Vec<BytesN<32>> {
        bump_instance(&env);
        if offset >= get_basket_count(&env) {
            return Vec::new(&env);
        }

        read_basket_ids(&env, offset, offset.saturating_add(limit))
    }

    fn get_snapshot(env: Env, basket_id: BytesN<32>) -> Option<BasketSnapshot> {
        bump_instance(&env);
        storage::get_snapshot(&env, &basket_id)
    }

    fn is_basket(env: Env, basket_id: BytesN<32>) -> bool {
        bump_instance(&env);
        has_basket(&env, &basket_id)
    }

    fn creator_of(env: Env, basket_id: BytesN<32>) -> Option<Address> {
        bump_instance(&env);
        storage::get_snapshot(&env, &basket_id).map(|snapshot| snapshot.creator)
    }

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        bump_instance(&env);
        get_config(&env)
    }

    fn get_owner(env: Env) -> Result<Address, ErrorCode> {
        bump_instance(&env);
        Ok(get_config(&env)?.owner)
    }
}

#[contractimpl]
impl BasketTrait for BasketFactory {
    // ################################################################
    //                             User
    // ################################################################

    fn mint(
        env: Env,
        basket_id: BytesN<32>,
        sender: Address,
        shares: i128,
        to: Address,
    ) -> Result<FeeSplit, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::basket::with_lock(&env, &basket_id, || {
            controller::basket::mint(&env, &basket_id, &sender, shares, &to)
        })
    }

    fn redeem(
        env: Env,
        basket_id: BytesN<32>,
        sender: Address,
        shares: i128,
        to: Address,
    ) -> Result<Vec<Leg>, ErrorCode> {
        sender.require_auth();
        bump_instance(&env);

        controller::basket::with_lock(&env, &basket_id, || {
            controller::basket::redeem(&env, &basket_id, &sender, shares, &to)
        })
    }

    fn transfer(
        env: Env,
        basket_id: BytesN<32>,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), ErrorCode> {
        from.require_auth();
        bump_instance(&env);

        controller::basket::transfer(&env, &basket_id, &from, &to, amount)
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn preview_deposit(
        env: Env,
        basket_id: BytesN<32>,
        shares: i128,
    ) -> Result<Vec<Leg>, ErrorCode> {
        bump_instance(&env);
        get_basket(&env, &basket_id)?.preview_deposit(&env, shares)
    }

    fn preview_redeem(
        env: Env,
        basket_id: BytesN<32>,
        shares: i128,
    ) -> Result<Vec<Leg>, ErrorCode> {
        bump_instance(&env);
        get_basket(&env, &basket_id)?.preview_redeem(&env, shares)
    }

    fn preview_mint_fee(
        env: Env,
        basket_id: BytesN<32>,
        shares: i128,
    ) -> Result<FeeSplit, ErrorCode> {
        bump_instance(&env);
        get_basket(&env, &basket_id)?.split_mint_fee(&env, shares)
    }

    fn get_composition(env: Env, basket_id: BytesN<32>) -> Result<Vec<Component>, ErrorCode> {
        bump_instance(&env);
        Ok(get_basket(&env, &basket_id)?.composition)
    }

    fn query_basket(env: Env, basket_id: BytesN<32>) -> Result<Basket, ErrorCode> {
        bump_instance(&env);
        get_basket(&env, &basket_id)
    }

    fn query_reserve(env: Env, basket_id: BytesN<32>, asset: Address) -> i128 {
        bump_instance(&env);
        read_reserve(&env, &basket_id, &asset)
    }

    fn balance(env: Env, basket_id: BytesN<32>, id: Address) -> i128 {
        bump_instance(&env);
        read_balance(&env, &basket_id, &id)
    }

    fn total_shares(env: Env, basket_id: BytesN<32>) -> i128 {
        bump_instance(&env);
        read_total_shares(&env, &basket_id)
    }

    fn name(env: Env, basket_id: BytesN<32>) -> Result<String, ErrorCode> {
        bump_instance(&env);
        Ok(get_basket(&env, &basket_id)?.metadata.name)
    }

    fn symbol(env: Env, basket_id: BytesN<32>) -> Result<String, ErrorCode> {
        bump_instance(&env);
        Ok(get_basket(&env, &basket_id)?.metadata.symbol)
    }

    fn decimals(env: Env, basket_id: BytesN<32>) -> Result<u32, ErrorCode> {
        bump_instance(&env);
        Ok(get_basket(&env, &basket_id)?.metadata.decimal)
    }
}
