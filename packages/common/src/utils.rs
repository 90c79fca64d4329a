use soroban_sdk::{Address, Env, String};

/// Strkey of the contract id made of 32 zero bytes. Soroban has no null
/// address, so this value stands in for "unset" wherever an identity is
/// required to be non-null.
pub const ZERO_ADDRESS: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ADDRESS))
}

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == zero_address(env)
}
