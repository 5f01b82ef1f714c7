use log::debug;

use crate::{Direction, Exercise, Prescription, Reps};

use super::{LadderStrategy, RoundEntry, by_position, sequence};

const DEFAULT_STARTING_REPS: u32 = 1;
const DEFAULT_STEP_SIZE: u32 = 1;

/// Every exercise follows its own progression given by its direction, starting reps and step
/// size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Flexible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Progression {
    direction: Direction,
    starting_reps: u32,
    step_size: u32,
}

impl Progression {
    fn of(exercise: &Exercise) -> Self {
        match exercise.prescription {
            Prescription::Progression {
                direction,
                starting_reps,
                step_size,
            } => Progression {
                direction: direction.unwrap_or_default(),
                starting_reps: starting_reps.unwrap_or(DEFAULT_STARTING_REPS),
                step_size: step_size.unwrap_or(DEFAULT_STEP_SIZE),
            },
            Prescription::Uniform
            | Prescription::Fixed { .. }
            | Prescription::PerRound { .. } => {
                debug!(
                    "no progression defined for exercise {}, using defaults",
                    exercise.position
                );
                Progression {
                    direction: Direction::default(),
                    starting_reps: DEFAULT_STARTING_REPS,
                    step_size: DEFAULT_STEP_SIZE,
                }
            }
        }
    }

    fn step(self) -> i64 {
        match self.direction {
            Direction::Ascending => i64::from(self.step_size),
            Direction::Descending => -i64::from(self.step_size),
            Direction::Constant => 0,
        }
    }
}

impl LadderStrategy for Flexible {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        if round == 0 {
            return vec![];
        }
        by_position(exercises)
            .into_iter()
            .map(|exercise| {
                let progression = Progression::of(exercise);
                RoundEntry {
                    exercise,
                    reps: Reps::clamped(sequence::term(
                        progression.starting_reps,
                        progression.step(),
                        round,
                    )),
                }
            })
            .collect()
    }

    /// Closed-form total of the progression.
    ///
    /// For descending progressions the last term is clamped to zero before summation. This
    /// deviates from the resolved rounds once the sequence crosses zero before
    /// `completed_rounds` and may yield a fractional total.
    fn total_reps(&self, exercise: &Exercise, completed_rounds: u32) -> f64 {
        let progression = Progression::of(exercise);
        if completed_rounds == 0 {
            return 0.0;
        }
        match progression.direction {
            Direction::Constant => {
                f64::from(progression.starting_reps) * f64::from(completed_rounds)
            }
            Direction::Ascending | Direction::Descending => {
                let last = sequence::term(
                    progression.starting_reps,
                    progression.step(),
                    completed_rounds,
                )
                .max(0);
                sequence::sum(
                    completed_rounds,
                    i64::from(progression.starting_reps),
                    last,
                )
            }
        }
    }

    fn describe(&self) -> String {
        "Each exercise follows its own progression".to_string()
    }
}
