use crate::{Exercise, Reps};

use super::{LadderStrategy, RoundEntry};

/// Round `n` introduces the exercise at position `n`. Every introduced exercise is repeated in
/// each later round at a rep count equal to its position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Christmas;

impl LadderStrategy for Christmas {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        let mut result = exercises
            .iter()
            .filter(|e| u32::from(e.position) <= round)
            .map(|exercise| RoundEntry {
                exercise,
                reps: Reps::clamped(i64::from(exercise.position)),
            })
            .collect::<Vec<_>>();
        result.sort_by(|a, b| b.exercise.position.cmp(&a.exercise.position));
        result
    }

    fn total_reps(&self, exercise: &Exercise, completed_rounds: u32) -> f64 {
        let position = u32::from(exercise.position);
        if completed_rounds < position {
            return 0.0;
        }
        f64::from(position) * f64::from(completed_rounds - position + 1)
    }

    fn describe(&self) -> String {
        "Each round adds the next exercise at as many reps as its position and repeats all \
         earlier exercises"
            .to_string()
    }
}
