#![no_std]

mod balance;
mod contract;
mod controller;
mod events;
mod interface;
mod state;
mod storage;

pub use crate::contract::{BasketFactory, BasketFactoryClient};
pub use crate::events::BasketCreated;
pub use crate::state::{
    basket::{Basket, BasketSnapshot, Component, Leg},
    config::Config,
    fees::FeeSplit,
};

#[cfg(test)]
mod tests;
