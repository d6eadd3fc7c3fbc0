use soroban_sdk::{contractevent, Address};

/// Collateral credited to `account`.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    #[topic]
    pub account: Address,
    pub amount: u128,
    pub deposit_balance: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Borrowed {
    #[topic]
    pub account: Address,
    pub amount: u128,
    pub borrow_balance: u128,
    pub total_borrows: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Repaid {
    #[topic]
    pub account: Address,
    pub amount: u128,
    pub borrow_balance: u128,
    pub total_borrows: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    #[topic]
    pub account: Address,
    pub amount: u128,
    pub deposit_balance: u128,
}

/// Full-position liquidation: the liquidator paid `repaid_amount` of the borrow
/// asset and received `seized_collateral` of the collateral asset.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Liquidated {
    #[topic]
    pub liquidator: Address,
    #[topic]
    pub borrower: Address,
    pub repaid_amount: u128,
    pub seized_collateral: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlashLoan {
    #[topic]
    pub receiver: Address,
    #[topic]
    pub initiator: Address,
    pub asset: Address,
    pub amount: u128,
    pub fee: u128,
}
