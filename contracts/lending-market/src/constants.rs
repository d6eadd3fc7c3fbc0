pub const PERCENT_PRECISION: u128 = 100;

pub const FLASH_LOAN_FEE_BPS: u128 = 9;
pub const FLASH_LOAN_FEE_PRECISION: u128 = 10_000;

// Kinked borrow-rate curve, all in whole percent.
pub const OPTIMAL_UTILIZATION_PERCENT: u128 = 80;
pub const BASE_RATE_PERCENT: u128 = 0;
pub const SLOPE1_PERCENT: u128 = 4;
pub const SLOPE2_PERCENT: u128 = 75;
pub const UTILIZATION_PRECISION: u128 = 100;

pub const TTL_THRESHOLD: u32 = 100_000;
pub const TTL_EXTEND_TO: u32 = 200_000;
