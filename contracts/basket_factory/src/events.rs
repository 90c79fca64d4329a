use soroban_sdk::{contracttype, Address, BytesN, Env, String, Symbol, Vec};

use crate::state::{
    basket::{Component, Leg},
    fees::FeeSplit,
};

/// Data payload of the `basket_created` event
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasketCreated {
    pub name: String,
    pub symbol: String,
    pub composition: Vec<Component>,
    pub mint_fee_bps: u32,
    pub creator_fee_share_bps: u32,
    pub protocol_fee_recipient: Address,
}

pub struct BasketEvents {}

impl BasketEvents {
    /// Emitted when the factory is initialized
    ///
    /// - topics - `["initialize", owner: Address]`
    /// - data - `[protocol_fee_recipient: Address, mint_fee_bps: u32, creator_fee_share_bps: u32]`
    pub fn initialize(
        env: &Env,
        owner: Address,
        protocol_fee_recipient: Address,
        mint_fee_bps: u32,
        creator_fee_share_bps: u32,
    ) {
        let topics = (Symbol::new(env, "initialize"), owner);
        env.events().publish(
            topics,
            (protocol_fee_recipient, mint_fee_bps, creator_fee_share_bps),
        );
    }

    /// Emitted when a new basket is registered
    ///
    /// - topics - `["basket_created", basket_id: BytesN<32>, creator: Address]`
    /// - data - `BasketCreated`
    pub fn basket_created(
        env: &Env,
        basket_id: BytesN<32>,
        creator: Address,
        details: BasketCreated,
    ) {
        let topics = (Symbol::new(env, "basket_created"), basket_id, creator);
        env.events().publish(topics, details);
    }

    /// Emitted when shares are minted
    ///
    /// - topics - `["mint", basket_id: BytesN<32>, sender: Address, to: Address]`
    /// - data - `[shares: i128, fees: FeeSplit, legs: Vec<Leg>]`
    pub fn mint(
        env: &Env,
        basket_id: BytesN<32>,
        sender: Address,
        to: Address,
        shares: i128,
        fees: FeeSplit,
        legs: Vec<Leg>,
    ) {
        let topics = (Symbol::new(env, "mint"), basket_id, sender, to);
        env.events().publish(topics, (shares, fees, legs));
    }

    /// Emitted when shares are redeemed for the underlying assets
    ///
    /// - topics - `["redeem", basket_id: BytesN<32>, sender: Address, to: Address]`
    /// - data - `[shares: i128, legs: Vec<Leg>]`
    pub fn redeem(
        env: &Env,
        basket_id: BytesN<32>,
        sender: Address,
        to: Address,
        shares: i128,
        legs: Vec<Leg>,
    ) {
        let topics = (Symbol::new(env, "redeem"), basket_id, sender, to);
        env.events().publish(topics, (shares, legs));
    }

    /// - topics - `["transfer", basket_id: BytesN<32>, from: Address, to: Address]`
    /// - data - `amount: i128`
    pub fn transfer(env: &Env, basket_id: BytesN<32>, from: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "transfer"), basket_id, from, to);
        env.events().publish(topics, amount);
    }

    /// - topics - `["set_owner", previous: Address]`
    /// - data - `owner: Address`
    pub fn set_owner(env: &Env, previous: Address, owner: Address) {
        let topics = (Symbol::new(env, "set_owner"), previous);
        env.events().publish(topics, owner);
    }

    /// - topics - `["set_fee_recipient", owner: Address]`
    /// - data - `protocol_fee_recipient: Address`
    pub fn set_fee_recipient(env: &Env, owner: Address, protocol_fee_recipient: Address) {
        let topics = (Symbol::new(env, "set_fee_recipient"), owner);
        env.events().publish(topics, protocol_fee_recipient);
    }

    /// - topics - `["set_mint_fee", owner: Address]`
    /// - data - `mint_fee_bps: u32`
    pub fn set_mint_fee(env: &Env, owner: Address, mint_fee_bps: u32) {
        let topics = (Symbol::new(env, "set_mint_fee"), owner);
        env.events().publish(topics, mint_fee_bps);
    }

    /// - topics - `["set_creator_share", owner: Address]`
    /// - data - `creator_fee_share_bps: u32`
    pub fn set_creator_share(env: &Env, owner: Address, creator_fee_share_bps: u32) {
        let topics = (Symbol::new(env, "set_creator_share"), owner);
        env.events().publish(topics, creator_fee_share_bps);
    }
}
