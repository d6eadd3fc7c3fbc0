use soroban_sdk::{contracttype, Address, Env};

use crate::constants::{TTL_EXTEND_TO, TTL_THRESHOLD};
use crate::errors::MarketError;

// Storage key types for the contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,                      // MarketConfig, instance
    Locked,                      // reentrancy flag, instance; absent when free
    Position(Address),           // Position per account, persistent
    TotalDeposits,               // u128, persistent
    TotalBorrows,                // u128, persistent
    FlashFeesCollected(Address), // u128 per asset, persistent
}

/// Fixed at construction; there is no setter.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketConfig {
    pub collateral_asset: Address,
    pub borrow_asset: Address,
    pub collateral_ratio_percent: u128,
}

impl MarketConfig {
    pub fn supports(&self, asset: &Address) -> bool {
        *asset == self.collateral_asset || *asset == self.borrow_asset
    }
}

/// An account's balances. A missing entry reads as all zeroes.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub deposit_balance: u128,
    pub borrow_balance: u128,
}

pub fn bump_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn bump_persistent_ttl(env: &Env, key: &DataKey) {
    let persistent = env.storage().persistent();
    if persistent.has(key) {
        persistent.extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

pub fn write_config(env: &Env, config: &MarketConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance_ttl(env);
}

pub fn read_config(env: &Env) -> Result<MarketConfig, MarketError> {
    let config: MarketConfig = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(MarketError::NotInitialized)?;
    bump_instance_ttl(env);
    Ok(config)
}

pub fn read_position(env: &Env, account: &Address) -> Position {
    let key = DataKey::Position(account.clone());
    let position: Position = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_default();
    bump_persistent_ttl(env, &key);
    position
}

pub fn write_position(env: &Env, account: &Address, position: &Position) {
    let key = DataKey::Position(account.clone());
    env.storage().persistent().set(&key, position);
    bump_persistent_ttl(env, &key);
}

fn read_amount(env: &Env, key: &DataKey) -> u128 {
    let amount = env.storage().persistent().get(key).unwrap_or(0u128);
    bump_persistent_ttl(env, key);
    amount
}

fn write_amount(env: &Env, key: &DataKey, amount: u128) {
    env.storage().persistent().set(key, &amount);
    bump_persistent_ttl(env, key);
}

pub fn read_total_deposits(env: &Env) -> u128 {
    read_amount(env, &DataKey::TotalDeposits)
}

pub fn write_total_deposits(env: &Env, amount: u128) {
    write_amount(env, &DataKey::TotalDeposits, amount);
}

pub fn read_total_borrows(env: &Env) -> u128 {
    read_amount(env, &DataKey::TotalBorrows)
}

pub fn write_total_borrows(env: &Env, amount: u128) {
    write_amount(env, &DataKey::TotalBorrows, amount);
}

pub fn read_flash_fees_collected(env: &Env, asset: &Address) -> u128 {
    read_amount(env, &DataKey::FlashFeesCollected(asset.clone()))
}

pub fn write_flash_fees_collected(env: &Env, asset: &Address, amount: u128) {
    write_amount(env, &DataKey::FlashFeesCollected(asset.clone()), amount);
}
