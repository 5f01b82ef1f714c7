//! Ladder progression engine.
//!
//! A [`Ladder`] is constructed from a [`LadderType`] and the global [`LadderParams`] of a
//! workout. It resolves which exercises are performed in a given round at which rep count, and
//! computes the cumulative reps of an exercise over a number of completed rounds. Both
//! operations are pure: a ladder holds no state besides its parameters.

use std::str::FromStr;

use log::error;

use crate::{Exercise, LadderParams, LadderType, Reps};

mod christmas;
mod chipper;
mod flexible;
mod pyramid;
mod repeated;
mod sequence;
mod uniform;

pub use christmas::Christmas;
pub use chipper::Chipper;
pub use flexible::Flexible;
pub use pyramid::Pyramid;
pub use repeated::{Amrap, ForReps};
pub use uniform::{Ascending, Descending};

pub trait LadderStrategy {
    /// Exercises performed in `round` (1-based) with their reps.
    ///
    /// Rounds outside of the configured range never fail. They yield an empty or clamped
    /// result.
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>>;

    /// Cumulative reps of `exercise` over `completed_rounds` rounds.
    fn total_reps(&self, exercise: &Exercise, completed_rounds: u32) -> f64;

    /// Human readable summary of the progression rule.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEntry<'a> {
    pub exercise: &'a Exercise,
    pub reps: Reps,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LadderError {
    #[error("unsupported ladder type: {0}")]
    UnsupportedLadderType(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ladder {
    Christmas(Christmas),
    Ascending(Ascending),
    Descending(Descending),
    Pyramid(Pyramid),
    Flexible(Flexible),
    Chipper(Chipper),
    Amrap(Amrap),
    ForReps(ForReps),
}

impl Ladder {
    #[must_use]
    pub fn new(ladder_type: LadderType, params: LadderParams) -> Self {
        let LadderParams {
            step_size,
            starting_reps,
            max_rounds,
        } = params;
        match ladder_type {
            LadderType::Christmas => Ladder::Christmas(Christmas),
            LadderType::Ascending => Ladder::Ascending(Ascending::new(starting_reps, step_size)),
            LadderType::Descending => {
                Ladder::Descending(Descending::new(starting_reps, step_size))
            }
            LadderType::Pyramid => Ladder::Pyramid(Pyramid::new(step_size, max_rounds)),
            LadderType::Flexible => Ladder::Flexible(Flexible),
            LadderType::Chipper => Ladder::Chipper(Chipper),
            LadderType::Amrap => Ladder::Amrap(Amrap),
            LadderType::ForReps => Ladder::ForReps(ForReps),
        }
    }

    /// Constructs the ladder for a persisted ladder type tag.
    pub fn from_tag(tag: &str, params: LadderParams) -> Result<Self, LadderError> {
        let ladder_type = LadderType::from_str(tag).map_err(|_| {
            error!("unsupported ladder type \"{tag}\"");
            LadderError::UnsupportedLadderType(tag.to_string())
        })?;
        Ok(Self::new(ladder_type, params))
    }

    #[must_use]
    pub fn ladder_type(&self) -> LadderType {
        match self {
            Ladder::Christmas(_) => LadderType::Christmas,
            Ladder::Ascending(_) => LadderType::Ascending,
            Ladder::Descending(_) => LadderType::Descending,
            Ladder::Pyramid(_) => LadderType::Pyramid,
            Ladder::Flexible(_) => LadderType::Flexible,
            Ladder::Chipper(_) => LadderType::Chipper,
            Ladder::Amrap(_) => LadderType::Amrap,
            Ladder::ForReps(_) => LadderType::ForReps,
        }
    }

    fn strategy(&self) -> &dyn LadderStrategy {
        match self {
            Ladder::Christmas(s) => s,
            Ladder::Ascending(s) => s,
            Ladder::Descending(s) => s,
            Ladder::Pyramid(s) => s,
            Ladder::Flexible(s) => s,
            Ladder::Chipper(s) => s,
            Ladder::Amrap(s) => s,
            Ladder::ForReps(s) => s,
        }
    }
}

impl LadderStrategy for Ladder {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        self.strategy().resolve_round(round, exercises)
    }

    fn total_reps(&self, exercise: &Exercise, completed_rounds: u32) -> f64 {
        self.strategy().total_reps(exercise, completed_rounds)
    }

    fn describe(&self) -> String {
        self.strategy().describe()
    }
}

/// Exercises ordered by ascending position.
fn by_position(exercises: &[Exercise]) -> Vec<&Exercise> {
    let mut result = exercises.iter().collect::<Vec<_>>();
    result.sort_by_key(|e| e.position);
    result
}

/// Every exercise at the same rep count. Round 0 does not exist.
fn uniform_round(round: u32, exercises: &[Exercise], reps: Reps) -> Vec<RoundEntry<'_>> {
    if round == 0 {
        return vec![];
    }
    by_position(exercises)
        .into_iter()
        .map(|exercise| RoundEntry { exercise, reps })
        .collect()
}
