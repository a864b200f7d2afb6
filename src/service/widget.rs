//! Widget statistics
//!
//! Percent changes against previous days and their spread.

use rust_decimal::{Decimal, MathematicalOps};

/// Percent change from `past` to `current`. `None` when `past` is zero.
pub fn percent_diff(current: Decimal, past: Decimal) -> Option<Decimal> {
    if past.is_zero() {
        return None;
    }
    (current - past)
        .checked_div(past)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

/// Population standard deviation of `diffs`. Zero for fewer than two values.
///
/// `None` when the squared deviations do not fit in a `Decimal`.
pub fn volatility(diffs: &[Decimal]) -> Option<Decimal> {
    if diffs.len() < 2 {
        return Some(Decimal::ZERO);
    }

    let n = Decimal::from(diffs.len());
    let mean = diffs
        .iter()
        .try_fold(Decimal::ZERO, |acc, d| acc.checked_add(*d))?
        .checked_div(n)?;
    let variance = diffs
        .iter()
        .try_fold(Decimal::ZERO, |acc, d| {
            let dev = d.checked_sub(mean)?;
            acc.checked_add(dev.checked_mul(dev)?)
        })?
        .checked_div(n)?;

    variance.sqrt()
}
