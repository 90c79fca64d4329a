use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Lifecycle
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    // Composition / parameters
    ZeroAddress = 10,
    InvalidComposition = 11,
    TooManyAssets = 12,
    InvalidArrayLengths = 13,
    BadUnit = 14,
    DuplicateToken = 15,
    FeeTooHigh = 16,
    BadBps = 17,
    // Basket operations
    BasketNotFound = 20,
    InvalidRecipient = 21,
    SharesTooSmall = 22,
    ZeroLeg = 23,
    FeeExceedsShares = 24,
    InsufficientShares = 25,
    InsufficientAssetBalance = 26,
    InsufficientReserve = 27,
    BasketLocked = 28,
    NegativeAmount = 29,
    // Math
    ArithmeticOverflow = 30,
}

pub type BasketResult<T = ()> = core::result::Result<T, ErrorCode>;
