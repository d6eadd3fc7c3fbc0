//! Position and total bookkeeping. Each function validates before its first
//! write, so a rejected call leaves storage untouched. Zero amounts are the
//! caller's responsibility.

use soroban_sdk::{Address, Env};

use crate::errors::MarketError;
use crate::storage::{
    read_position, read_total_borrows, read_total_deposits, write_position, write_total_borrows,
    write_total_deposits, Position,
};

pub fn credit(env: &Env, account: &Address, amount: u128) -> Result<Position, MarketError> {
    let mut position = read_position(env, account);
    position.deposit_balance = position
        .deposit_balance
        .checked_add(amount)
        .ok_or(MarketError::MathOverflow)?;
    let total = read_total_deposits(env)
        .checked_add(amount)
        .ok_or(MarketError::MathOverflow)?;
    write_position(env, account, &position);
    write_total_deposits(env, total);
    Ok(position)
}

pub fn debit(env: &Env, account: &Address, amount: u128) -> Result<Position, MarketError> {
    let mut position = read_position(env, account);
    if position.deposit_balance < amount {
        return Err(MarketError::InsufficientBalance);
    }
    position.deposit_balance -= amount;
    let total = read_total_deposits(env)
        .checked_sub(amount)
        .ok_or(MarketError::MathOverflow)?;
    write_position(env, account, &position);
    write_total_deposits(env, total);
    Ok(position)
}

pub fn add_borrow(env: &Env, account: &Address, amount: u128) -> Result<Position, MarketError> {
    let mut position = read_position(env, account);
    position.borrow_balance = position
        .borrow_balance
        .checked_add(amount)
        .ok_or(MarketError::MathOverflow)?;
    let total = read_total_borrows(env)
        .checked_add(amount)
        .ok_or(MarketError::MathOverflow)?;
    write_position(env, account, &position);
    write_total_borrows(env, total);
    Ok(position)
}

pub fn reduce_borrow(env: &Env, account: &Address, amount: u128) -> Result<Position, MarketError> {
    let mut position = read_position(env, account);
    if position.borrow_balance < amount {
        return Err(MarketError::RepayAmountExceedsBorrowed);
    }
    position.borrow_balance -= amount;
    let total = read_total_borrows(env)
        .checked_sub(amount)
        .ok_or(MarketError::MathOverflow)?;
    write_position(env, account, &position);
    write_total_borrows(env, total);
    Ok(position)
}

/// Zeroes both balances in place and returns what was cleared.
pub fn clear(env: &Env, account: &Address) -> Result<Position, MarketError> {
    let position = read_position(env, account);
    let deposits = read_total_deposits(env)
        .checked_sub(position.deposit_balance)
        .ok_or(MarketError::MathOverflow)?;
    let borrows = read_total_borrows(env)
        .checked_sub(position.borrow_balance)
        .ok_or(MarketError::MathOverflow)?;
    write_position(env, account, &Position::default());
    write_total_deposits(env, deposits);
    write_total_borrows(env, borrows);
    Ok(position)
}
