use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Bytes, Env};

use crate::constants::{FLASH_LOAN_FEE_BPS, FLASH_LOAN_FEE_PRECISION};
use crate::errors::MarketError;
use crate::events::*;
use crate::guard::ReentrancyGuard;
use crate::helpers::*;
use crate::ledger;
use crate::math::{scale_by_basis_points, scale_by_percent};
use crate::rates;
use crate::receiver::FlashLoanReceiverClient;
use crate::storage::*;

#[contract]
pub struct LendingMarket;

#[contractimpl]
impl LendingMarket {
    /// Fix the asset pair and the collateralization ratio (percent, e.g. 150)
    /// for the lifetime of the market.
    pub fn __constructor(
        env: Env,
        collateral_asset: Address,
        borrow_asset: Address,
        collateral_ratio_percent: u128,
    ) {
        if collateral_asset == borrow_asset || collateral_ratio_percent == 0 {
            panic_with_error!(&env, MarketError::InvalidConfig);
        }
        write_config(
            &env,
            &MarketConfig {
                collateral_asset,
                borrow_asset,
                collateral_ratio_percent,
            },
        );
        write_total_deposits(&env, 0);
        write_total_borrows(&env, 0);
    }

    /// Deposit collateral. `user` must have approved the market for `amount`.
    pub fn deposit(env: Env, user: Address, amount: u128) -> Result<(), MarketError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        ensure_non_zero(amount)?;
        user.require_auth();
        let config = read_config(&env)?;

        pull(&env, &config.collateral_asset, &user, amount)?;
        let position = ledger::credit(&env, &user, amount)?;

        Deposited {
            account: user,
            amount,
            deposit_balance: position.deposit_balance,
        }
        .publish(&env);
        Ok(())
    }

    /// Borrow against deposited collateral.
    ///
    /// Eligibility compares the requested `amount` alone against the deposit
    /// balance; debt already outstanding is not counted. Repeated borrows can
    /// therefore push a position below the ratio, at which point it becomes
    /// liquidatable.
    pub fn borrow(env: Env, user: Address, amount: u128) -> Result<(), MarketError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        ensure_non_zero(amount)?;
        user.require_auth();
        let config = read_config(&env)?;

        let required = scale_by_percent(amount, config.collateral_ratio_percent)?;
        if read_position(&env, &user).deposit_balance < required {
            return Err(MarketError::InsufficientCollateral);
        }
        let position = ledger::add_borrow(&env, &user, amount)?;
        push(&env, &config.borrow_asset, &user, amount)?;

        Borrowed {
            account: user,
            amount,
            borrow_balance: position.borrow_balance,
            total_borrows: read_total_borrows(&env),
        }
        .publish(&env);
        Ok(())
    }

    /// Repay outstanding debt. Over-repayment is rejected rather than capped.
    pub fn repay(env: Env, user: Address, amount: u128) -> Result<(), MarketError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        ensure_non_zero(amount)?;
        user.require_auth();
        let config = read_config(&env)?;

        if read_position(&env, &user).borrow_balance < amount {
            return Err(MarketError::RepayAmountExceedsBorrowed);
        }
        pull(&env, &config.borrow_asset, &user, amount)?;
        let position = ledger::reduce_borrow(&env, &user, amount)?;

        Repaid {
            account: user,
            amount,
            borrow_balance: position.borrow_balance,
            total_borrows: read_total_borrows(&env),
        }
        .publish(&env);
        Ok(())
    }

    /// Withdraw collateral, keeping what remains at or above the ratio for any
    /// outstanding debt.
    pub fn withdraw(env: Env, user: Address, amount: u128) -> Result<(), MarketError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        ensure_non_zero(amount)?;
        user.require_auth();
        let config = read_config(&env)?;

        let current = read_position(&env, &user);
        if current.deposit_balance < amount {
            return Err(MarketError::InsufficientBalance);
        }
        let required = scale_by_percent(current.borrow_balance, config.collateral_ratio_percent)?;
        if current.deposit_balance - amount < required {
            return Err(MarketError::WithdrawalLeavesInsufficientCollateral);
        }
        let position = ledger::debit(&env, &user, amount)?;
        push(&env, &config.collateral_asset, &user, amount)?;

        Withdrawn {
            account: user,
            amount,
            deposit_balance: position.deposit_balance,
        }
        .publish(&env);
        Ok(())
    }

    /// Liquidate an undercollateralized position in full: `liquidator` repays the
    /// whole debt and receives the whole deposit. No bonus, no partial fills.
    pub fn liquidate(env: Env, liquidator: Address, borrower: Address) -> Result<(), MarketError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        liquidator.require_auth();
        let config = read_config(&env)?;

        let position = read_position(&env, &borrower);
        if !Self::undercollateralized(&position, &config)? {
            return Err(MarketError::PositionNotUndercollateralized);
        }
        pull(
            &env,
            &config.borrow_asset,
            &liquidator,
            position.borrow_balance,
        )?;
        if position.deposit_balance > 0 {
            push(
                &env,
                &config.collateral_asset,
                &liquidator,
                position.deposit_balance,
            )?;
        }
        let cleared = ledger::clear(&env, &borrower)?;

        Liquidated {
            liquidator,
            borrower,
            repaid_amount: cleared.borrow_balance,
            seized_collateral: cleared.deposit_balance,
        }
        .publish(&env);
        Ok(())
    }

    /// Lend `amount` of `asset` to `receiver` for the duration of its
    /// `execute_operation` callback. The market's balance must have grown by at
    /// least the fee once the callback returns, or the whole call is reverted.
    pub fn flash_loan(
        env: Env,
        initiator: Address,
        receiver: Address,
        asset: Address,
        amount: u128,
        params: Bytes,
    ) -> Result<(), MarketError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        ensure_non_zero(amount)?;
        initiator.require_auth();
        let config = read_config(&env)?;
        if !config.supports(&asset) {
            return Err(MarketError::UnsupportedAsset);
        }

        let market = env.current_contract_address();
        let balance_before = token_balance(&env, &asset, &market)?;
        if balance_before < amount {
            return Err(MarketError::InsufficientLiquidity);
        }
        let fee = Self::fee_for(amount)?;

        push(&env, &asset, &receiver, amount)?;

        // A receiver that traps is treated the same as one that reports failure.
        let reported = FlashLoanReceiverClient::new(&env, &receiver)
            .try_execute_operation(&asset, &amount, &fee, &initiator, &params);
        if !matches!(reported, Ok(Ok(true))) {
            log!(&env, "flash loan receiver reported failure", receiver);
            return Err(MarketError::FlashLoanRepaymentFailed);
        }

        let balance_after = token_balance(&env, &asset, &market)?;
        let required = balance_before
            .checked_add(fee)
            .ok_or(MarketError::MathOverflow)?;
        if balance_after < required {
            log!(&env, "flash loan short", balance_after, required);
            return Err(MarketError::FlashLoanNotRepaid);
        }

        let fee_paid = balance_after - balance_before;
        if fee_paid > 0 {
            let collected = read_flash_fees_collected(&env, &asset);
            write_flash_fees_collected(&env, &asset, collected.saturating_add(fee_paid));
        }

        FlashLoan {
            receiver,
            initiator,
            asset,
            amount,
            fee,
        }
        .publish(&env);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<MarketConfig, MarketError> {
        read_config(&env)
    }

    pub fn get_collateral_asset(env: Env) -> Result<Address, MarketError> {
        Ok(read_config(&env)?.collateral_asset)
    }

    pub fn get_borrow_asset(env: Env) -> Result<Address, MarketError> {
        Ok(read_config(&env)?.borrow_asset)
    }

    pub fn get_collateral_ratio(env: Env) -> Result<u128, MarketError> {
        Ok(read_config(&env)?.collateral_ratio_percent)
    }

    pub fn get_position(env: Env, account: Address) -> Position {
        read_position(&env, &account)
    }

    pub fn get_deposit_balance(env: Env, account: Address) -> u128 {
        read_position(&env, &account).deposit_balance
    }

    pub fn get_borrow_balance(env: Env, account: Address) -> u128 {
        read_position(&env, &account).borrow_balance
    }

    pub fn get_total_deposits(env: Env) -> u128 {
        read_total_deposits(&env)
    }

    pub fn get_total_borrows(env: Env) -> u128 {
        read_total_borrows(&env)
    }

    /// Utilization in whole percent over the current totals.
    pub fn get_utilization(env: Env) -> u128 {
        rates::utilization(read_total_borrows(&env), read_total_deposits(&env))
    }

    pub fn get_borrow_rate(env: Env) -> u128 {
        rates::borrow_rate(read_total_borrows(&env), read_total_deposits(&env))
    }

    pub fn get_supply_rate(env: Env) -> u128 {
        rates::supply_rate(read_total_borrows(&env), read_total_deposits(&env))
    }

    /// Whether `liquidate` would currently accept `account`.
    pub fn is_liquidatable(env: Env, account: Address) -> Result<bool, MarketError> {
        let config = read_config(&env)?;
        Self::undercollateralized(&read_position(&env, &account), &config)
    }

    /// Fee charged on a flash loan of `amount` of `asset`.
    pub fn flash_fee(env: Env, asset: Address, amount: u128) -> Result<u128, MarketError> {
        if !read_config(&env)?.supports(&asset) {
            return Err(MarketError::UnsupportedAsset);
        }
        Self::fee_for(amount)
    }

    /// Largest flash loan currently available in `asset`; zero for foreign assets.
    pub fn max_flash_loan(env: Env, asset: Address) -> Result<u128, MarketError> {
        if !read_config(&env)?.supports(&asset) {
            return Ok(0);
        }
        token_balance(&env, &asset, &env.current_contract_address())
    }

    pub fn get_flash_fees_collected(env: Env, asset: Address) -> u128 {
        read_flash_fees_collected(&env, &asset)
    }
}

impl LendingMarket {
    fn undercollateralized(
        position: &Position,
        config: &MarketConfig,
    ) -> Result<bool, MarketError> {
        let required = scale_by_percent(position.borrow_balance, config.collateral_ratio_percent)?;
        Ok(position.deposit_balance < required)
    }

    fn fee_for(amount: u128) -> Result<u128, MarketError> {
        scale_by_basis_points(amount, FLASH_LOAN_FEE_BPS, FLASH_LOAN_FEE_PRECISION)
    }
}
