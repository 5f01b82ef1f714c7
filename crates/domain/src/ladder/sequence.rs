//! Arithmetic sequences over rounds.

/// Value of the 1-based `round` of the sequence starting at `first` that changes by `step`
/// per round.
pub(super) fn term(first: u32, step: i64, round: u32) -> i64 {
    i64::from(first).saturating_add((i64::from(round) - 1).saturating_mul(step))
}

/// Sum of `rounds` terms from `first` to `last`, `rounds × (first + last) / 2`.
#[allow(clippy::cast_precision_loss)]
pub(super) fn sum(rounds: u32, first: i64, last: i64) -> f64 {
    (i128::from(rounds) * (i128::from(first) + i128::from(last))) as f64 / 2.0
}

/// Sum of the first `rounds` terms of the sequence starting at `first` with step `step`.
pub(super) fn series(first: u32, step: i64, rounds: u32) -> f64 {
    if rounds == 0 {
        return 0.0;
    }
    sum(rounds, i64::from(first), term(first, step, rounds))
}
