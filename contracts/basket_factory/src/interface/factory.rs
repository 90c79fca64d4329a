use basket_common::error::ErrorCode;
use soroban_sdk::{Address, BytesN, Env, String, Vec};

use crate::state::{basket::BasketSnapshot, config::Config};

pub trait BasketFactoryTrait {
    // ################################################################
    //                             Admin
    // ################################################################

    fn initialize(
        env: Env,
        owner: Address,
        protocol_fee_recipient: Address,
        mint_fee_bps: u32,
        creator_fee_share_bps: u32,
    ) -> Result<(), ErrorCode>;

    fn set_owner(env: Env, sender: Address, owner: Address) -> Result<(), ErrorCode>;

    fn set_protocol_fee_recipient(
        env: Env,
        sender: Address,
        protocol_fee_recipient: Address,
    ) -> Result<(), ErrorCode>;

    fn set_mint_fee_bps(env: Env, sender: Address, mint_fee_bps: u32) -> Result<(), ErrorCode>;

    fn set_creator_fee_share_bps(
        env: Env,
        sender: Address,
        creator_fee_share_bps: u32,
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             User
    // ################################################################

    /// Registers a new basket with a frozen composition and the current fee
    /// parameters. Returns the basket id.
    fn create_basket(
        env: Env,
        sender: Address,
        assets: Vec<Address>,
        units_per_share: Vec<i128>,
        name: String,
        symbol: String,
        creator: Address,
    ) -> Result<BytesN<32>, ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn basket_count(env: Env) -> u32;

    fn list_baskets(env: Env) -> Vec<BytesN<32>>;

    /// Ids in `[offset, min(offset + limit, count))`
    fn list_baskets_paged(env: Env, offset: u32, limit: u32) -> Vec<BytesN<32>>;

    fn get_snapshot(env: Env, basket_id: BytesN<32>) -> Option<BasketSnapshot>;

    fn is_basket(env: Env, basket_id: BytesN<32>) -> bool;

    fn creator_of(env: Env, basket_id: BytesN<32>) -> Option<Address>;

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn get_owner(env: Env) -> Result<Address, ErrorCode>;
}
