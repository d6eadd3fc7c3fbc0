//! Kinked utilization curve. Read-only: rates are a pricing signal and never
//! accrue into stored balances.

use crate::constants::{
    BASE_RATE_PERCENT, OPTIMAL_UTILIZATION_PERCENT, SLOPE1_PERCENT, SLOPE2_PERCENT,
    UTILIZATION_PRECISION,
};

/// Borrows as a whole percent of deposits; zero for an empty market.
pub fn utilization(total_borrows: u128, total_deposits: u128) -> u128 {
    if total_deposits == 0 {
        return 0;
    }
    total_borrows.saturating_mul(UTILIZATION_PRECISION) / total_deposits
}

pub fn borrow_rate(total_borrows: u128, total_deposits: u128) -> u128 {
    borrow_rate_at(utilization(total_borrows, total_deposits))
}

pub fn supply_rate(total_borrows: u128, total_deposits: u128) -> u128 {
    let util = utilization(total_borrows, total_deposits);
    util.saturating_mul(borrow_rate_at(util)) / UTILIZATION_PRECISION
}

fn borrow_rate_at(util: u128) -> u128 {
    if util <= OPTIMAL_UTILIZATION_PERCENT {
        below_kink(util)
    } else {
        above_kink(util)
    }
}

fn below_kink(util: u128) -> u128 {
    BASE_RATE_PERCENT
        .saturating_add(util.saturating_mul(SLOPE1_PERCENT) / OPTIMAL_UTILIZATION_PERCENT)
}

fn above_kink(util: u128) -> u128 {
    let excess = util.saturating_sub(OPTIMAL_UTILIZATION_PERCENT);
    BASE_RATE_PERCENT
        .saturating_add(SLOPE1_PERCENT)
        .saturating_add(
            excess.saturating_mul(SLOPE2_PERCENT)
                / (UTILIZATION_PRECISION - OPTIMAL_UTILIZATION_PERCENT),
        )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_market_has_zero_rates() {
        assert_eq!(utilization(0, 0), 0);
        assert_eq!(utilization(500, 0), 0);
        assert_eq!(borrow_rate(500, 0), BASE_RATE_PERCENT);
        assert_eq!(supply_rate(500, 0), 0);
    }

    #[test]
    fn curve_points() {
        assert_eq!(utilization(50, 100), 50);
        assert_eq!(borrow_rate(50, 100), 2);
        assert_eq!(supply_rate(50, 100), 1);

        assert_eq!(borrow_rate(80, 100), 4);
        assert_eq!(borrow_rate(90, 100), 41);
        assert_eq!(borrow_rate(100, 100), 79);
        assert_eq!(supply_rate(100, 100), 79);
    }

    #[test]
    fn branches_agree_at_kink() {
        assert_eq!(
            below_kink(OPTIMAL_UTILIZATION_PERCENT),
            above_kink(OPTIMAL_UTILIZATION_PERCENT)
        );
    }

    #[test]
    fn supply_never_exceeds_borrow() {
        for borrows in 0..=100u128 {
            assert!(supply_rate(borrows, 100) <= borrow_rate(borrows, 100));
        }
    }

    #[test]
    fn steeper_above_kink() {
        let below = borrow_rate(80, 100) - borrow_rate(70, 100);
        let above = borrow_rate(90, 100) - borrow_rate(80, 100);
        assert!(above > below);
    }

    #[test]
    fn utilization_saturates() {
        assert_eq!(utilization(u128::MAX, 1), u128::MAX);
        assert!(borrow_rate(u128::MAX, 1) > 0);
    }
}
