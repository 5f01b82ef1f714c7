use crate::{Exercise, Reps};

use super::{LadderStrategy, RoundEntry, uniform_round};

/// Rep counts rise by `step_size` each round up to the peak round `⌈max_rounds / 2⌉` and fall
/// symmetrically afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pyramid {
    step_size: u32,
    max_rounds: u32,
}

impl Pyramid {
    #[must_use]
    pub fn new(step_size: u32, max_rounds: u32) -> Self {
        Self {
            step_size,
            max_rounds,
        }
    }

    #[must_use]
    pub fn peak(self) -> u32 {
        self.max_rounds.div_ceil(2)
    }

    fn reps(self, round: u32) -> Reps {
        let level = if round <= self.peak() {
            i64::from(round)
        } else {
            i64::from(self.max_rounds) - i64::from(round) + 1
        };
        Reps::clamped(level.saturating_mul(i64::from(self.step_size)))
    }
}

impl LadderStrategy for Pyramid {
    fn resolve_round<'a>(&self, round: u32, exercises: &'a [Exercise]) -> Vec<RoundEntry<'a>> {
        uniform_round(round, exercises, self.reps(round))
    }

    /// Total of a pyramid of `completed_rounds` rounds.
    ///
    /// The peak is derived from `completed_rounds`, not from the configured number of rounds,
    /// so the result equals the resolved reps only for a fully completed workout.
    fn total_reps(&self, _: &Exercise, completed_rounds: u32) -> f64 {
        let peak = f64::from(completed_rounds.div_ceil(2));
        let step_size = f64::from(self.step_size);
        if completed_rounds % 2 == 1 {
            peak * peak * step_size
        } else {
            peak * (peak + 1.0) * step_size
        }
    }

    fn describe(&self) -> String {
        format!(
            "Add {} reps each round up to round {}, then remove {} each round until round {}",
            self.step_size,
            self.peak(),
            self.step_size,
            self.max_rounds
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

    fn rounds(ladder: Pyramid, rounds: u32) -> Vec<u32> {
        let exercises = vec![exercise(1, Prescription::Uniform)];
        (1..=rounds)
            .map(|r| reps(&ladder.resolve_round(r, &exercises))[0].1)
            .collect()
    }

    #[rstest]
    #[case(5, 1, vec![1, 2, 3, 2, 1])]
    #[case(4, 1, vec![1, 2, 2, 1])]
    #[case(1, 3, vec![3])]
    #[case(6, 5, vec![5, 10, 15, 15, 10, 5])]
    fn test_resolve_round(
        #[case] max_rounds: u32,
        #[case] step_size: u32,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(rounds(Pyramid::new(step_size, max_rounds), max_rounds), expected);
    }

    #[test]
    fn test_resolve_round_shares_reps() {
        let exercises = vec![
            exercise(1, Prescription::Uniform),
            exercise(2, Prescription::Uniform),
        ];
        assert_eq!(
            reps(&Pyramid::new(2, 5).resolve_round(3, &exercises)),
            vec![(1, 6), (2, 6)]
        );
    }

    #[test]
    fn test_resolve_round_beyond_max_rounds() {
        assert_eq!(rounds(Pyramid::new(1, 3), 5), vec![1, 2, 1, 0, 0]);
    }

    #[rstest]
    #[case(5, 1, 9.0)]
    #[case(4, 1, 6.0)]
    #[case(6, 5, 60.0)]
    #[case(1, 3, 3.0)]
    #[case(0, 3, 0.0)]
    fn test_total_reps(#[case] max_rounds: u32, #[case] step_size: u32, #[case] expected: f64) {
        let ladder = Pyramid::new(step_size, max_rounds);
        let e = exercise(1, Prescription::Uniform);
        assert_approx_eq!(ladder.total_reps(&e, max_rounds), expected);
        assert_approx_eq!(
            ladder.total_reps(&e, max_rounds),
            iterated_total(&ladder, &e, max_rounds)
        );
    }

    #[test]
    fn test_total_reps_derives_peak_from_completed_rounds() {
        let ladder = Pyramid::new(1, 5);
        let e = exercise(1, Prescription::Uniform);
        // A pyramid of three rounds (1, 2, 1), although the first three rounds of the
        // configured pyramid are 1, 2, 3.
        assert_approx_eq!(ladder.total_reps(&e, 3), 4.0);
        assert_approx_eq!(iterated_total(&ladder, &e, 3), 6.0);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            Pyramid::new(1, 5).describe(),
            "Add 1 reps each round up to round 3, then remove 1 each round until round 5"
        );
    }
}
