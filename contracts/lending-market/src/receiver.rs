use soroban_sdk::{Address, Bytes, Env};

/// Callback a flash-loan receiver contract must expose.
///
/// The market transfers `amount` of `asset` to the receiver before invoking
/// `execute_operation`. The receiver is expected to send `amount + fee` back to
/// the market before returning `true`; returning `false` (or failing) aborts the
/// loan.
#[soroban_sdk::contractclient(name = "FlashLoanReceiverClient")]
pub trait FlashLoanReceiver {
    fn execute_operation(
        env: Env,
        asset: Address,
        amount: u128,
        fee: u128,
        initiator: Address,
        params: Bytes,
    ) -> bool;
}
