use std::collections::BTreeSet;

use crate::{Exercise, Ladder, ValidationError};

/// Named workout progression pattern.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LadderType {
    Christmas,
    Ascending,
    Descending,
    Pyramid,
    Flexible,
    Chipper,
    Amrap,
    ForReps,
}

impl LadderType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LadderType::Christmas => "Christmas",
            LadderType::Ascending => "Ascending",
            LadderType::Descending => "Descending",
            LadderType::Pyramid => "Pyramid",
            LadderType::Flexible => "Flexible",
            LadderType::Chipper => "Chipper",
            LadderType::Amrap => "AMRAP",
            LadderType::ForReps => "For reps",
        }
    }

    /// AMRAP workouts have no round ceiling.
    #[must_use]
    pub fn is_bounded(self) -> bool {
        self != LadderType::Amrap
    }

    /// Whether the global starting reps are part of the progression.
    #[must_use]
    pub fn uses_starting_reps(self) -> bool {
        matches!(self, LadderType::Ascending | LadderType::Descending)
    }

    /// Whether the global step size is part of the progression.
    #[must_use]
    pub fn uses_step_size(self) -> bool {
        matches!(
            self,
            LadderType::Ascending | LadderType::Descending | LadderType::Pyramid
        )
    }
}

/// Global progression parameters. Each ladder type only reads the subset relevant to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderParams {
    pub step_size: u32,
    pub starting_reps: u32,
    pub max_rounds: u32,
}

impl Default for LadderParams {
    fn default() -> Self {
        Self {
            step_size: 1,
            starting_reps: 1,
            max_rounds: 1,
        }
    }
}

/// Snapshot of the configuration a workout is performed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutConfig {
    pub ladder_type: LadderType,
    pub params: LadderParams,
}

impl WorkoutConfig {
    #[must_use]
    pub fn default_for(ladder_type: LadderType) -> Self {
        let params = match ladder_type {
            LadderType::Christmas => LadderParams {
                max_rounds: 12,
                ..LadderParams::default()
            },
            LadderType::Ascending => LadderParams {
                max_rounds: 10,
                ..LadderParams::default()
            },
            LadderType::Descending => {
                let step_size = 1;
                let max_rounds = 10;
                LadderParams {
                    step_size,
                    starting_reps: max_rounds * step_size,
                    max_rounds,
                }
            }
            LadderType::Pyramid => LadderParams {
                max_rounds: 5,
                ..LadderParams::default()
            },
            LadderType::Flexible
            | LadderType::Chipper
            | LadderType::Amrap
            | LadderType::ForReps => LadderParams::default(),
        };
        Self {
            ladder_type,
            params,
        }
    }

    #[must_use]
    pub fn ladder(&self) -> Ladder {
        Ladder::new(self.ladder_type, self.params)
    }

    /// Number of rounds a completed workout consists of, if bounded.
    ///
    /// Christmas and chipper ladders end once every exercise has been introduced or performed.
    #[must_use]
    pub fn rounds(&self, exercises: &[Exercise]) -> Option<u32> {
        match self.ladder_type {
            LadderType::Amrap => None,
            LadderType::Christmas | LadderType::Chipper => {
                exercises.iter().map(|e| u32::from(e.position)).max()
            }
            _ => Some(self.params.max_rounds),
        }
    }

    pub fn validate(&self, exercises: &[Exercise]) -> Result<(), ValidationError> {
        let LadderParams {
            step_size,
            starting_reps,
            max_rounds,
        } = self.params;

        if self.ladder_type.uses_step_size() && step_size < 1 {
            return Err(ValidationError::StepSize);
        }

        if self.ladder_type.uses_starting_reps() && starting_reps < 1 {
            return Err(ValidationError::StartingReps);
        }

        if self.ladder_type.is_bounded() && max_rounds < 1 {
            return Err(ValidationError::Rounds);
        }

        if exercises.is_empty() {
            return Err(ValidationError::NoExercises);
        }

        let positions = exercises
            .iter()
            .map(|e| u32::from(e.position))
            .collect::<BTreeSet<_>>();
        let len = u32::try_from(exercises.len()).unwrap_or(u32::MAX);
        let expected: BTreeSet<u32> = (1..=len).collect();
        if positions != expected {
            return Err(ValidationError::Positions(exercises.len()));
        }

        if self.ladder_type == LadderType::Descending {
            let last = i64::from(starting_reps)
                - (i64::from(max_rounds) - 1) * i64::from(step_size);
            if last < 0 {
                return Err(ValidationError::NegativeFinalRound(last));
            }
        }

        Ok(())
    }
}

impl Default for WorkoutConfig {
    fn default() -> Self {
        Self::default_for(LadderType::Christmas)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use crate::{Name, Position};

    use super::*;

    fn exercises(positions: &[u32]) -> Vec<Exercise> {
        positions
            .iter()
            .map(|p| Exercise::new(Position::new(*p).unwrap(), Name::new("A").unwrap()))
            .collect()
    }

    #[rstest]
    #[case("christmas", LadderType::Christmas)]
    #[case("Ascending", LadderType::Ascending)]
    #[case("descending", LadderType::Descending)]
    #[case("pyramid", LadderType::Pyramid)]
    #[case("flexible", LadderType::Flexible)]
    #[case("chipper", LadderType::Chipper)]
    #[case("AMRAP", LadderType::Amrap)]
    #[case("for_reps", LadderType::ForReps)]
    fn test_ladder_type_from_str(#[case] tag: &str, #[case] expected: LadderType) {
        assert_eq!(tag.parse::<LadderType>(), Ok(expected));
    }

    #[test]
    fn test_ladder_type_tag_round_trip() {
        for ladder_type in LadderType::iter() {
            assert_eq!(ladder_type.as_ref().parse::<LadderType>(), Ok(ladder_type));
        }
    }

    #[rstest]
    #[case(LadderType::Christmas, "Christmas")]
    #[case(LadderType::Amrap, "AMRAP")]
    #[case(LadderType::ForReps, "For reps")]
    fn test_ladder_type_name(#[case] ladder_type: LadderType, #[case] expected: &str) {
        assert_eq!(ladder_type.name(), expected);
    }

    #[test]
    fn test_ladder_type_unknown_tag() {
        assert!("emom".parse::<LadderType>().is_err());
    }

    #[test]
    fn test_default_for_descending() {
        let config = WorkoutConfig::default_for(LadderType::Descending);
        assert_eq!(
            config.params,
            LadderParams {
                step_size: 1,
                starting_reps: 10,
                max_rounds: 10,
            }
        );
        assert!(config.validate(&exercises(&[1])).is_ok());
    }

    #[test]
    fn test_default_configs_are_valid() {
        for ladder_type in LadderType::iter() {
            assert!(
                WorkoutConfig::default_for(ladder_type)
                    .validate(&exercises(&[1, 2]))
                    .is_ok(),
                "{ladder_type}"
            );
        }
    }

    #[rstest]
    #[case(LadderType::Amrap, None)]
    #[case(LadderType::Christmas, Some(3))]
    #[case(LadderType::Chipper, Some(3))]
    #[case(LadderType::Pyramid, Some(5))]
    fn test_rounds(#[case] ladder_type: LadderType, #[case] expected: Option<u32>) {
        assert_eq!(
            WorkoutConfig::default_for(ladder_type).rounds(&exercises(&[2, 1, 3])),
            expected
        );
    }

    #[test]
    fn test_validate_params() {
        let mut config = WorkoutConfig::default_for(LadderType::Ascending);
        config.params.step_size = 0;
        assert!(matches!(
            config.validate(&exercises(&[1])),
            Err(ValidationError::StepSize)
        ));

        let mut config = WorkoutConfig::default_for(LadderType::Ascending);
        config.params.starting_reps = 0;
        assert!(matches!(
            config.validate(&exercises(&[1])),
            Err(ValidationError::StartingReps)
        ));

        let mut config = WorkoutConfig::default_for(LadderType::Pyramid);
        config.params.max_rounds = 0;
        assert!(matches!(
            config.validate(&exercises(&[1])),
            Err(ValidationError::Rounds)
        ));

        let mut config = WorkoutConfig::default_for(LadderType::Amrap);
        config.params.max_rounds = 0;
        assert!(config.validate(&exercises(&[1])).is_ok());
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&[1, 2, 3], true)]
    #[case(&[3, 1, 2], true)]
    #[case(&[1, 3], false)]
    #[case(&[1, 1, 2], false)]
    #[case(&[2, 3], false)]
    fn test_validate_positions(#[case] positions: &[u32], #[case] valid: bool) {
        assert_eq!(
            WorkoutConfig::default()
                .validate(&exercises(positions))
                .is_ok(),
            valid
        );
    }

    #[test]
    fn test_validate_descending_final_round() {
        let config = WorkoutConfig {
            ladder_type: LadderType::Descending,
            params: LadderParams {
                step_size: 6,
                starting_reps: 9,
                max_rounds: 3,
            },
        };
        assert!(matches!(
            config.validate(&exercises(&[1])),
            Err(ValidationError::NegativeFinalRound(-3))
        ));
    }
}
