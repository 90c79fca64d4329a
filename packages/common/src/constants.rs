// ################################################################
//                             TTL
// ################################################################

pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ################################################################
//                             SHARES
// ################################################################

/// One full share. Shares and units per share use this fixed-point scale.
pub const ONE: i128 = 1_000_000_000_000_000_000; // expo -18
/// Smallest share amount accepted by preview, mint and redeem (1e-6 of a share)
pub const MIN_SHARE: i128 = 1_000_000_000_000; // expo -12
pub const SHARE_DECIMALS: u32 = 18;

// ################################################################
//                             FEES
// ################################################################

pub const BPS_DENOMINATOR: u32 = 10_000;
/// 10%
pub const MAX_MINT_FEE_BPS: u32 = 1_000;
pub const MAX_CREATOR_FEE_SHARE_BPS: u32 = BPS_DENOMINATOR;

// ################################################################
//                             COMPOSITION
// ################################################################

pub const MAX_BASKET_ASSETS: u32 = 10;
