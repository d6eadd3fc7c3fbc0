#![no_std]

mod constants;
mod contract;
mod errors;
mod events;
mod guard;
mod helpers;
mod ledger;
mod math;
mod rates;
mod receiver;
mod storage;

pub use crate::contract::{LendingMarket, LendingMarketClient};
pub use crate::errors::MarketError;
pub use crate::events::*;
pub use crate::receiver::{FlashLoanReceiver, FlashLoanReceiverClient};
pub use crate::storage::{MarketConfig, Position};
