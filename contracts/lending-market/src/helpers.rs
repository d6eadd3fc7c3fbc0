use soroban_sdk::{token, Address, Env};

use crate::errors::MarketError;

pub fn ensure_non_zero(amount: u128) -> Result<(), MarketError> {
    if amount == 0 {
        return Err(MarketError::ZeroAmount);
    }
    Ok(())
}

pub fn to_i128(amount: u128) -> Result<i128, MarketError> {
    i128::try_from(amount).map_err(|_| MarketError::MathOverflow)
}

/// Balance of `owner` in `asset`. A negative SEP-41 balance is not a
/// representable ledger amount and is reported as an arithmetic failure.
pub fn token_balance(env: &Env, asset: &Address, owner: &Address) -> Result<u128, MarketError> {
    let balance = token::Client::new(env, asset).balance(owner);
    u128::try_from(balance).map_err(|_| MarketError::MathOverflow)
}

/// Pulls `amount` from `from` into the market using the allowance `from` granted
/// to the market. Any token-side failure is reported as `TransferFailed` so the
/// token's own error codes never reach the caller.
pub fn pull(env: &Env, asset: &Address, from: &Address, amount: u128) -> Result<(), MarketError> {
    let market = env.current_contract_address();
    let client = token::Client::new(env, asset);
    let result = client.try_transfer_from(&market, from, &market, &to_i128(amount)?);
    if !matches!(result, Ok(Ok(()))) {
        return Err(MarketError::TransferFailed);
    }
    Ok(())
}

/// Pushes `amount` from the market to `to`.
pub fn push(env: &Env, asset: &Address, to: &Address, amount: u128) -> Result<(), MarketError> {
    let market = env.current_contract_address();
    let client = token::Client::new(env, asset);
    let result = client.try_transfer(&market, to, &to_i128(amount)?);
    if !matches!(result, Ok(Ok(()))) {
        return Err(MarketError::TransferFailed);
    }
    Ok(())
}
