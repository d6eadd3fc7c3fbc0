use soroban_sdk::Env;

use crate::errors::MarketError;
use crate::storage::DataKey;

/// Scoped hold on the market-wide lock. Every mutating entry point takes one
/// before touching state; dropping it frees the lock on both the success and the
/// early-return error paths.
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    pub fn acquire(env: &Env) -> Result<Self, MarketError> {
        let instance = env.storage().instance();
        if instance.has(&DataKey::Locked) {
            return Err(MarketError::Reentrancy);
        }
        instance.set(&DataKey::Locked, &true);
        Ok(Self { env: env.clone() })
    }

    pub fn is_held(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Locked)
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::Locked);
    }
}
