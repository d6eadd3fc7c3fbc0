use soroban_sdk::contracterror;

/// Every rejection aborts the whole invocation; codes are stable for off-chain callers.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    ZeroAmount = 1,
    InsufficientCollateral = 2,
    WithdrawalLeavesInsufficientCollateral = 3,
    PositionNotUndercollateralized = 4,
    InsufficientBalance = 5,
    RepayAmountExceedsBorrowed = 6,
    UnsupportedAsset = 7,
    InsufficientLiquidity = 8,
    FlashLoanRepaymentFailed = 9,
    FlashLoanNotRepaid = 10,
    Reentrancy = 11,
    InvalidConfig = 12,
    MathOverflow = 13,
    NotInitialized = 14,
    TransferFailed = 15,
}
