pub mod basket;
pub mod config;
pub mod fees;
