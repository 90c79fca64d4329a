use basket_common::{
    constants::{MAX_CREATOR_FEE_SHARE_BPS, MAX_MINT_FEE_BPS},
    error::{BasketResult, ErrorCode},
    utils::is_zero_address,
    validate,
};
use soroban_sdk::{contracttype, Address, Env};

/// Factory-wide parameters. Fee values are copied into each basket when it
/// is created and never read again for that basket.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub owner: Address,
    /// Receives the protocol part of every mint fee
    pub protocol_fee_recipient: Address,
    /// Mint fee charged in shares, at most `MAX_MINT_FEE_BPS`
    pub mint_fee_bps: u32,
    /// Part of the mint fee routed to the basket creator
    pub creator_fee_share_bps: u32,
}

impl Config {
    pub fn validate(&self, env: &Env) -> BasketResult {
        validate_identity(env, &self.owner)?;
        validate_identity(env, &self.protocol_fee_recipient)?;
        validate_mint_fee_bps(env, self.mint_fee_bps)?;
        validate_creator_fee_share_bps(env, self.creator_fee_share_bps)
    }
}

pub fn validate_identity(env: &Env, address: &Address) -> BasketResult {
    validate!(
        env,
        !is_zero_address(env, address),
        ErrorCode::ZeroAddress,
        "Basket Factory: identity must not be the zero address"
    )
}

pub fn validate_mint_fee_bps(env: &Env, mint_fee_bps: u32) -> BasketResult {
    validate!(
        env,
        mint_fee_bps <= MAX_MINT_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "Basket Factory: mint fee above maximum",
        mint_fee_bps
    )
}

pub fn validate_creator_fee_share_bps(env: &Env, creator_fee_share_bps: u32) -> BasketResult {
    validate!(
        env,
        creator_fee_share_bps <= MAX_CREATOR_FEE_SHARE_BPS,
        ErrorCode::BadBps,
        "Basket Factory: creator fee share above 100%",
        creator_fee_share_bps
    )
}
