use log::debug;

use crate::{Exercise, Prescription, Reps};

use super::{LadderStrategy, RoundEntry, by_position, sequence};

/// Every exercise is performed each round at its own constant rep count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForReps;

fn reps_per_round(exercise: &Exercise) -> u32 {
    if let Prescription::PerRound { reps: Some(reps) } = exercise.prescription {
        reps
    } else {
        debug!("no reps per round defined for exercise {}", exercise.position);
        0
    }
}

impl LadderStrategy for ForReps {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        if round == 0 {
            return vec![];
        }
        by_position(exercises)
            .into_iter()
            .map(|exercise| RoundEntry {
                exercise,
                reps: Reps::clamped(i64::from(reps_per_round(exercise))),
            })
            .collect()
    }

    fn total_reps(&self, exercise: &Exercise, completed_rounds: u32) -> f64 {
        f64::from(reps_per_round(exercise)) * f64::from(completed_rounds)
    }

    fn describe(&self) -> String {
        "Perform every exercise each round at its own rep count".to_string()
    }
}

const AMRAP_DEFAULT_STARTING_REPS: u32 = 1;
const AMRAP_DEFAULT_STEP_SIZE: u32 = 0;

/// As many rounds as possible. Every exercise is performed each round, starting at its own
/// rep count and increasing by its own step size. A step size of zero keeps the reps fixed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Amrap;

fn amrap_progression(exercise: &Exercise) -> (u32, u32) {
    if let Prescription::Progression {
        starting_reps,
        step_size,
        ..
    } = exercise.prescription
    {
        (
            starting_reps.unwrap_or(AMRAP_DEFAULT_STARTING_REPS),
            step_size.unwrap_or(AMRAP_DEFAULT_STEP_SIZE),
        )
    } else {
        debug!("no progression defined for exercise {}", exercise.position);
        (AMRAP_DEFAULT_STARTING_REPS, AMRAP_DEFAULT_STEP_SIZE)
    }
}

impl LadderStrategy for Amrap {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        if round == 0 {
            return vec![];
        }
        by_position(exercises)
            .into_iter()
            .map(|exercise| {
                let (starting_reps, step_size) = amrap_progression(exercise);
                RoundEntry {
                    exercise,
                    reps: Reps::clamped(sequence::term(
                        starting_reps,
                        i64::from(step_size),
                        round,
                    )),
                }
            })
            .collect()
    }

    fn total_reps(&self, exercise: &Exercise, completed_rounds: u32) -> f64 {
        let (starting_reps, step_size) = amrap_progression(exercise);
        sequence::series(starting_reps, i64::from(step_size), completed_rounds)
    }

    fn describe(&self) -> String {
        "As many rounds as possible".to_string()
    }
}
