use log::debug;

use crate::{Exercise, Prescription, Reps};

use super::{LadderStrategy, RoundEntry};

/// Round `n` consists of the single exercise at position `n`, performed once at its fixed rep
/// count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Chipper;

fn fixed_reps(exercise: &Exercise) -> u32 {
    if let Prescription::Fixed { reps: Some(reps) } = exercise.prescription {
        reps
    } else {
        debug!("no fixed reps defined for exercise {}", exercise.position);
        0
    }
}

impl LadderStrategy for Chipper {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        exercises
            .iter()
            .find(|e| u32::from(e.position) == round)
            .map(|exercise| RoundEntry {
                exercise,
                reps: Reps::clamped(i64::from(fixed_reps(exercise))),
            })
            .into_iter()
            .collect()
    }

    fn total_reps(&self, exercise: &Exercise, completed_rounds: u32) -> f64 {
        if completed_rounds >= u32::from(exercise.position) {
            f64::from(fixed_reps(exercise))
        } else {
            0.0
        }
    }

    fn describe(&self) -> String {
        "Work through the exercises one by one, one exercise per round".to_string()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use crate::ladder::tests::{exercise, iterated_total, reps};

    use super::*;

    fn exercises() -> Vec<Exercise> {
        vec![
            exercise(1, Prescription::fixed(50)),
            exercise(2, Prescription::fixed(15)),
            exercise(3, Prescription::fixed(30)),
        ]
    }

    #[test]
    fn test_resolve_round() {
        let exercises = exercises();
        assert_eq!(reps(&Chipper.resolve_round(2, &exercises)), vec![(2, 15)]);
        assert_eq!(reps(&Chipper.resolve_round(1, &exercises)), vec![(1, 50)]);
    }

    #[test]
    fn test_resolve_round_without_exercise() {
        let exercises = exercises();
        assert!(Chipper.resolve_round(0, &exercises).is_empty());
        assert!(Chipper.resolve_round(4, &exercises).is_empty());
        assert!(Chipper.resolve_round(1, &[]).is_empty());
    }

    #[test]
    fn test_total_reps() {
        let e = &exercises()[1];
        assert_approx_eq!(Chipper.total_reps(e, 0), 0.0);
        assert_approx_eq!(Chipper.total_reps(e, 1), 0.0);
        assert_approx_eq!(Chipper.total_reps(e, 2), 15.0);
        assert_approx_eq!(Chipper.total_reps(e, 3), 15.0);
    }

    #[test]
    fn test_total_reps_matches_resolved_rounds() {
        for e in exercises() {
            for rounds in 0..=4 {
                assert_approx_eq!(
                    Chipper.total_reps(&e, rounds),
                    iterated_total(&Chipper, &e, rounds)
                );
            }
        }
    }

    #[test]
    fn test_missing_fixed_reps() {
        let exercises = vec![
            exercise(1, Prescription::Fixed { reps: None }),
            exercise(2, Prescription::per_round(8)),
        ];
        assert_eq!(reps(&Chipper.resolve_round(1, &exercises)), vec![(1, 0)]);
        assert_eq!(reps(&Chipper.resolve_round(2, &exercises)), vec![(2, 0)]);
        assert_approx_eq!(Chipper.total_reps(&exercises[1], 2), 0.0);
    }
}
