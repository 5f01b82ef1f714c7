use crate::{Exercise, Reps};

use super::{LadderStrategy, RoundEntry, sequence, uniform_round};

/// All exercises share the rep count `starting_reps + (round − 1) × step_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ascending {
    starting_reps: u32,
    step_size: u32,
}

impl Ascending {
    #[must_use]
    pub fn new(starting_reps: u32, step_size: u32) -> Self {
        Self {
            starting_reps,
            step_size,
        }
    }

    fn step(self) -> i64 {
        i64::from(self.step_size)
    }
}

impl LadderStrategy for Ascending {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        let reps = Reps::clamped(sequence::term(self.starting_reps, self.step(), round));
        uniform_round(round, exercises, reps)
    }

    fn total_reps(&self, _: &Exercise, completed_rounds: u32) -> f64 {
        sequence::series(self.starting_reps, self.step(), completed_rounds)
    }

    fn describe(&self) -> String {
        format!(
            "Start with {} reps and add {} each round",
            self.starting_reps, self.step_size
        )
    }
}

/// All exercises share the rep count `starting_reps − (round − 1) × step_size`.
///
/// The configuration is expected to be sized so that the final round stays non-negative.
/// Rounds beyond that resolve to zero reps and add nothing to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descending {
    starting_reps: u32,
    step_size: u32,
}

impl Descending {
    #[must_use]
    pub fn new(starting_reps: u32, step_size: u32) -> Self {
        Self {
            starting_reps,
            step_size,
        }
    }

    fn step(self) -> i64 {
        -i64::from(self.step_size)
    }

    /// Last round with a non-negative rep count.
    fn last_round(self) -> Option<u32> {
        self.starting_reps
            .checked_div(self.step_size)
            .map(|rounds| rounds.saturating_add(1))
    }
}

impl LadderStrategy for Descending {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        let reps = Reps::clamped(sequence::term(self.starting_reps, self.step(), round));
        uniform_round(round, exercises, reps)
    }

    fn total_reps(&self, _: &Exercise, completed_rounds: u32) -> f64 {
        let rounds = self
            .last_round()
            .map_or(completed_rounds, |last| completed_rounds.min(last));
        sequence::series(self.starting_reps, self.step(), rounds)
    }

    fn describe(&self) -> String {
        format!(
            "Start with {} reps and remove {} each round",
            self.starting_reps, self.step_size
        )
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        Prescription,
        ladder::tests::{exercise, iterated_total, reps},
    };

    use super::*;

    fn exercises() -> Vec<Exercise> {
        vec![
            exercise(1, Prescription::Uniform),
            exercise(2, Prescription::fixed(100)),
        ]
    }

    #[rstest]
    #[case(1, 3)]
    #[case(2, 5)]
    #[case(4, 9)]
    fn test_ascending_resolve_round(#[case] round: u32, #[case] expected: u32) {
        assert_eq!(
            reps(&Ascending::new(3, 2).resolve_round(round, &exercises())),
            vec![(1, expected), (2, expected)]
        );
    }

    #[test]
    fn test_ascending_total_reps() {
        let ladder = Ascending::new(3, 2);
        assert_approx_eq!(ladder.total_reps(&exercises()[0], 4), 24.0);
        assert_approx_eq!(ladder.total_reps(&exercises()[0], 0), 0.0);
        for rounds in 0..=10 {
            assert_approx_eq!(
                ladder.total_reps(&exercises()[1], rounds),
                iterated_total(&ladder, &exercises()[1], rounds)
            );
        }
    }

    #[test]
    fn test_ascending_large_round() {
        assert_eq!(
            reps(&Ascending::new(1, 1).resolve_round(100_000, &exercises()[..1])),
            vec![(1, 100_000)]
        );
        assert_eq!(
            reps(&Ascending::new(u32::MAX, u32::MAX).resolve_round(u32::MAX, &exercises()[..1])),
            vec![(1, u32::MAX)]
        );
    }

    #[test]
    fn test_descending_fran() {
        let ladder = Descending::new(21, 6);
        let exercises = exercises();
        assert_eq!(
            (1..=3)
                .map(|r| reps(&ladder.resolve_round(r, &exercises[..1]))[0].1)
                .collect::<Vec<_>>(),
            vec![21, 15, 9]
        );
        assert_approx_eq!(ladder.total_reps(&exercises[0], 3), 45.0);
        assert_approx_eq!(
            ladder.total_reps(&exercises[0], 3),
            iterated_total(&ladder, &exercises[0], 3)
        );
    }

    #[test]
    fn test_descending_reaches_zero() {
        let ladder = Descending::new(3, 1);
        let exercises = exercises();
        assert_eq!(reps(&ladder.resolve_round(3, &exercises[..1])), vec![(1, 1)]);
        assert_eq!(reps(&ladder.resolve_round(4, &exercises[..1])), vec![(1, 0)]);
        assert_approx_eq!(ladder.total_reps(&exercises[0], 4), 6.0);
    }

    #[test]
    fn test_descending_beyond_final_round() {
        let ladder = Descending::new(21, 6);
        let exercises = exercises();
        assert_eq!(reps(&ladder.resolve_round(5, &exercises[..1])), vec![(1, 0)]);
        assert_eq!(reps(&ladder.resolve_round(u32::MAX, &exercises[..1])), vec![(1, 0)]);
        assert!(ladder.total_reps(&exercises[0], 100) >= 0.0);
    }

    #[rstest]
    #[case(10, 3)]
    #[case(3, 2)]
    #[case(21, 6)]
    #[case(5, 0)]
    fn test_descending_total_beyond_zero_crossing(
        #[case] starting_reps: u32,
        #[case] step_size: u32,
    ) {
        let ladder = Descending::new(starting_reps, step_size);
        let exercises = exercises();
        let mut previous = 0.0;
        for rounds in 0..=12 {
            let total = ladder.total_reps(&exercises[0], rounds);
            assert_approx_eq!(total, iterated_total(&ladder, &exercises[0], rounds));
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn test_descending_total_saturates() {
        let ladder = Descending::new(10, 3);
        let exercises = exercises();
        assert_approx_eq!(ladder.total_reps(&exercises[0], 4), 22.0);
        assert_approx_eq!(ladder.total_reps(&exercises[0], 7), 22.0);
        assert_approx_eq!(ladder.total_reps(&exercises[0], u32::MAX), 22.0);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Descending::new(21, 6).describe(),
            "Start with 21 reps and remove 6 each round"
        );
        assert_eq!(
            Ascending::new(1, 2).describe(),
            "Start with 1 reps and add 2 each round"
        );
    }
}
