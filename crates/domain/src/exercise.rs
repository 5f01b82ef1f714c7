use derive_more::{AsRef, Deref, Display};

use crate::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub position: Position,
    pub name: Name,
    pub unit: Unit,
    pub prescription: Prescription,
}

impl Exercise {
    #[must_use]
    pub fn new(position: Position, name: Name) -> Self {
        Self {
            position,
            name,
            unit: Unit::default(),
            prescription: Prescription::Uniform,
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    #[must_use]
    pub fn with_prescription(mut self, prescription: Prescription) -> Self {
        self.prescription = prescription;
        self
    }
}

/// 1-based slot of an exercise within a workout.
#[derive(Deref, Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u32);

impl Position {
    pub const FIRST: Position = Position(1);

    pub fn new(value: u32) -> Result<Self, PositionError> {
        if value == 0 {
            return Err(PositionError::Zero);
        }

        Ok(Self(value))
    }

    /// Positions for a list of `len` exercises.
    pub fn iter(len: u32) -> impl Iterator<Item = Position> {
        (1..=len).map(Position)
    }
}

impl From<Position> for u32 {
    fn from(value: Position) -> Self {
        value.0
    }
}

impl From<Position> for i64 {
    fn from(value: Position) -> Self {
        i64::from(value.0)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Position must be at least 1")]
    Zero,
}

/// Free text unit label. An empty unit means repetitions.
#[derive(AsRef, Debug, Default, Display, Clone, PartialEq, Eq, Hash)]
pub struct Unit(String);

impl Unit {
    #[must_use]
    pub fn new(unit: &str) -> Self {
        Self(unit.trim().to_string())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        if self.0.is_empty() { "reps" } else { &self.0 }
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
    Constant,
}

/// Ladder type specific parameters of an exercise.
///
/// Every field is optional. Fields may be missing for exercises that were created for a
/// different ladder type, and each strategy substitutes its own defaults in that case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Prescription {
    /// No per-exercise parameters; reps are derived from the workout configuration.
    #[default]
    Uniform,
    /// Independent progression (flexible and AMRAP ladders).
    Progression {
        direction: Option<Direction>,
        starting_reps: Option<u32>,
        step_size: Option<u32>,
    },
    /// One-shot count performed in the exercise's single round (chipper).
    Fixed { reps: Option<u32> },
    /// Constant count performed every round (for reps).
    PerRound { reps: Option<u32> },
}

impl Prescription {
    #[must_use]
    pub const fn progression(direction: Direction, starting_reps: u32, step_size: u32) -> Self {
        Prescription::Progression {
            direction: Some(direction),
            starting_reps: Some(starting_reps),
            step_size: Some(step_size),
        }
    }

    #[must_use]
    pub const fn fixed(reps: u32) -> Self {
        Prescription::Fixed { reps: Some(reps) }
    }

    #[must_use]
    pub const fn per_round(reps: u32) -> Self {
        Prescription::PerRound { reps: Some(reps) }
    }
}
