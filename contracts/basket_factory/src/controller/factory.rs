use basket_common::{
    constants::{MAX_BASKET_ASSETS, SHARE_DECIMALS},
    error::{BasketResult, ErrorCode},
    utils::is_zero_address,
    validate,
};
use soroban_sdk::{log, xdr::ToXdr, Address, Bytes, BytesN, Env, String, Vec};
use soroban_token_sdk::metadata::TokenMetadata;

use crate::{
    events::{BasketCreated, BasketEvents},
    state::{
        basket::{Basket, Component},
        config::{
            validate_creator_fee_share_bps, validate_identity, validate_mint_fee_bps, Config,
        },
    },
    storage::{
        get_basket_count, get_config, is_initialized, push_basket_id, save_basket, save_config,
        save_snapshot, set_initialized,
    },
};

pub fn initialize(env: &Env, config: Config) -> BasketResult {
    if is_initialized(env) {
        log!(
            env,
            "Basket Factory: Initialize: initializing contract twice is not allowed"
        );
        return Err(ErrorCode::AlreadyInitialized);
    }

    config.validate(env)?;

    set_initialized(env);
    save_config(env, &config);

    BasketEvents::initialize(
        env,
        config.owner,
        config.protocol_fee_recipient,
        config.mint_fee_bps,
        config.creator_fee_share_bps,
    );

    Ok(())
}

/// Authenticates `sender` and checks it against the configured owner.
pub fn require_owner(env: &Env, sender: &Address) -> BasketResult<Config> {
    sender.require_auth();
    let config = get_config(env)?;

    validate!(
        env,
        config.owner == *sender,
        ErrorCode::NotOwner,
        "Basket Factory: sender is not the owner"
    )?;

    Ok(config)
}

/// Checks run in a fixed order so each malformed input maps to exactly one
/// error.
pub fn validate_composition(
    env: &Env,
    assets: &Vec<Address>,
    units_per_share: &Vec<i128>,
    creator: &Address,
) -> BasketResult<Vec<Component>> {
    validate!(
        env,
        !assets.is_empty(),
        ErrorCode::InvalidComposition,
        "Basket Factory: basket needs at least one asset"
    )?;
    validate!(
        env,
        assets.len() <= MAX_BASKET_ASSETS,
        ErrorCode::TooManyAssets,
        "Basket Factory: too many assets",
        assets.len()
    )?;
    validate!(
        env,
        units_per_share.len() == assets.len(),
        ErrorCode::InvalidArrayLengths,
        "Basket Factory: assets and units lengths differ"
    )?;
    validate!(
        env,
        !is_zero_address(env, creator),
        ErrorCode::ZeroAddress,
        "Basket Factory: creator is the zero address"
    )?;

    let mut composition = Vec::new(env);
    for (asset, units) in assets.iter().zip(units_per_share.iter()) {
        validate!(
            env,
            !is_zero_address(env, &asset),
            ErrorCode::ZeroAddress,
            "Basket Factory: asset is the zero address"
        )?;
        validate!(
            env,
            units > 0,
            ErrorCode::BadUnit,
            "Basket Factory: units per share must be positive",
            units
        )?;

        composition.push_back(Component {
            asset,
            units_per_share: units,
        });
    }

    for i in 0..assets.len() {
        for j in (i + 1)..assets.len() {
            validate!(
                env,
                assets.get_unchecked(i) != assets.get_unchecked(j),
                ErrorCode::DuplicateToken,
                "Basket Factory: duplicate asset",
                i,
                j
            )?;
        }
    }

    Ok(composition)
}

pub fn derive_basket_id(env: &Env, name: &String, symbol: &String, nonce: u32) -> BytesN<32> {
    let mut salt = Bytes::new(env);
    salt.append(&name.clone().to_xdr(env));
    salt.append(&symbol.clone().to_xdr(env));
    salt.extend_from_array(&nonce.to_be_bytes());
    env.crypto().sha256(&salt).to_bytes()
}

pub fn create_basket(
    env: &Env,
    sender: &Address,
    assets: &Vec<Address>,
    units_per_share: &Vec<i128>,
    name: String,
    symbol: String,
    creator: &Address,
) -> BasketResult<BytesN<32>> {
    let config = get_config(env)?;
    let composition = validate_composition(env, assets, units_per_share, creator)?;

    let basket_id = derive_basket_id(env, &name, &symbol, get_basket_count(env));

    let basket = Basket {
        composition: composition.clone(),
        mint_fee_bps: config.mint_fee_bps,
        creator_fee_share_bps: config.creator_fee_share_bps,
        creator: creator.clone(),
        protocol_fee_recipient: config.protocol_fee_recipient.clone(),
        deployer: sender.clone(),
        metadata: TokenMetadata {
            decimal: SHARE_DECIMALS,
            name: name.clone(),
            symbol: symbol.clone(),
        },
    };

    save_basket(env, &basket_id, &basket);
    save_snapshot(env, &basket_id, &basket.snapshot());

    push_basket_id(env, &basket_id)?;

    BasketEvents::basket_created(
        env,
        basket_id.clone(),
        creator.clone(),
        BasketCreated {
            name,
            symbol,
            composition,
            mint_fee_bps: config.mint_fee_bps,
            creator_fee_share_bps: config.creator_fee_share_bps,
            protocol_fee_recipient: config.protocol_fee_recipient,
        },
    );

    Ok(basket_id)
}

// ################################################################
//                             Admin
// ################################################################

pub fn set_owner(env: &Env, sender: &Address, owner: Address) -> BasketResult {
    let mut config = require_owner(env, sender)?;
    validate_identity(env, &owner)?;

    config.owner = owner.clone();
    save_config(env, &config);

    BasketEvents::set_owner(env, sender.clone(), owner);
    Ok(())
}

pub fn set_protocol_fee_recipient(
    env: &Env,
    sender: &Address,
    protocol_fee_recipient: Address,
) -> BasketResult {
    let mut config = require_owner(env, sender)?;
    validate_identity(env, &protocol_fee_recipient)?;

    config.protocol_fee_recipient = protocol_fee_recipient.clone();
    save_config(env, &config);

    BasketEvents::set_fee_recipient(env, sender.clone(), protocol_fee_recipient);
    Ok(())
}

pub fn set_mint_fee_bps(env: &Env, sender: &Address, mint_fee_bps: u32) -> BasketResult {
    let mut config = require_owner(env, sender)?;
    validate_mint_fee_bps(env, mint_fee_bps)?;

    config.mint_fee_bps = mint_fee_bps;
    save_config(env, &config);

    BasketEvents::set_mint_fee(env, sender.clone(), mint_fee_bps);
    Ok(())
}

pub fn set_creator_fee_share_bps(
    env: &Env,
    sender: &Address,
    creator_fee_share_bps: u32,
) -> BasketResult {
    let mut config = require_owner(env, sender)?;
    validate_creator_fee_share_bps(env, creator_fee_share_bps)?;

    config.creator_fee_share_bps = creator_fee_share_bps;
    save_config(env, &config);

    BasketEvents::set_creator_share(env, sender.clone(), creator_fee_share_bps);
    Ok(())
}
