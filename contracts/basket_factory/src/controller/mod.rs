pub mod basket;
pub mod factory;
