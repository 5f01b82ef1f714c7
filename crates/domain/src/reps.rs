use std::{
    iter::Sum,
    ops::{Add, Mul},
};

use derive_more::{Display, Into};

/// Number of repetitions (or units) performed in a single round.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reps(u32);

impl Reps {
    pub const ZERO: Reps = Reps(0);

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..10_000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Saturates a computed rep count into the representable range. Negative values become zero.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        Self(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

impl From<Reps> for i64 {
    fn from(value: Reps) -> Self {
        i64::from(value.0)
    }
}

impl From<Reps> for f64 {
    fn from(value: Reps) -> Self {
        f64::from(value.0)
    }
}

impl Add for Reps {
    type Output = Reps;

    fn add(self, rhs: Self) -> Self::Output {
        Reps(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Reps {
    type Output = Reps;

    fn mul(self, rhs: u32) -> Self::Output {
        Reps(self.0.saturating_mul(rhs))
    }
}

impl Sum for Reps {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Reps::ZERO, Add::add)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 9999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}
