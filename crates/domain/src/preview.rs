use crate::{Exercise, LadderStrategy, Reps, Unit, WorkoutConfig};

/// Number of rounds previewed for workouts without a round ceiling.
pub const UNBOUNDED_PREVIEW_ROUNDS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRound {
    pub round: u32,
    pub entries: Vec<PreviewEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewEntry {
    pub name: String,
    pub unit: Unit,
    pub reps: Reps,
}

impl PreviewRound {
    #[must_use]
    pub fn line(&self) -> String {
        if self.entries.is_empty() {
            return format!("Round {}: rest", self.round);
        }
        let entries = self
            .entries
            .iter()
            .map(|e| {
                if e.unit.is_empty() {
                    format!("{} {}", e.reps, e.name)
                } else {
                    format!("{} {} {}", e.reps, e.unit, e.name)
                }
            })
            .collect::<Vec<_>>();
        format!("Round {}: {}", self.round, entries.join(", "))
    }
}

/// Resolved rounds `1..=rounds` for display while a workout is being configured.
#[must_use]
pub fn preview(
    ladder: &impl LadderStrategy,
    exercises: &[Exercise],
    rounds: u32,
) -> Vec<PreviewRound> {
    (1..=rounds)
        .map(|round| PreviewRound {
            round,
            entries: ladder
                .resolve_round(round, exercises)
                .into_iter()
                .map(|e| PreviewEntry {
                    name: e.exercise.name.to_string(),
                    unit: e.exercise.unit.clone(),
                    reps: e.reps,
                })
                .collect(),
        })
        .collect()
}

#[must_use]
pub fn preview_rounds(config: &WorkoutConfig, exercises: &[Exercise]) -> u32 {
    config
        .rounds(exercises)
        .unwrap_or(UNBOUNDED_PREVIEW_ROUNDS)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{LadderParams, LadderType, Name, Position, Prescription};

    use super::*;

    fn exercises() -> Vec<Exercise> {
        vec![
            Exercise::new(Position::new(1).unwrap(), Name::new("Thrusters").unwrap()),
            Exercise::new(Position::new(2).unwrap(), Name::new("Row").unwrap())
                .with_unit(Unit::new("calories")),
        ]
    }

    #[test]
    fn test_preview_descending() {
        let config = WorkoutConfig {
            ladder_type: LadderType::Descending,
            params: LadderParams {
                step_size: 6,
                starting_reps: 21,
                max_rounds: 3,
            },
        };
        let exercises = exercises();
        assert_eq!(
            preview(&config.ladder(), &exercises, preview_rounds(&config, &exercises))
                .iter()
                .map(PreviewRound::line)
                .collect::<Vec<_>>(),
            vec![
                "Round 1: 21 Thrusters, 21 calories Row",
                "Round 2: 15 Thrusters, 15 calories Row",
                "Round 3: 9 Thrusters, 9 calories Row",
            ]
        );
    }

    #[test]
    fn test_preview_christmas() {
        let config = WorkoutConfig::default_for(LadderType::Christmas);
        let exercises = exercises();
        assert_eq!(preview_rounds(&config, &exercises), 2);
        assert_eq!(
            preview(&config.ladder(), &exercises, 2)
                .iter()
                .map(PreviewRound::line)
                .collect::<Vec<_>>(),
            vec![
                "Round 1: 1 Thrusters",
                "Round 2: 2 calories Row, 1 Thrusters"
            ]
        );
    }

    #[test]
    fn test_preview_amrap() {
        let config = WorkoutConfig::default_for(LadderType::Amrap);
        let exercises = exercises()
            .into_iter()
            .map(|e| {
                e.with_prescription(Prescription::Progression {
                    direction: None,
                    starting_reps: Some(5),
                    step_size: Some(1),
                })
            })
            .collect::<Vec<_>>();
        let rounds = preview(
            &config.ladder(),
            &exercises,
            preview_rounds(&config, &exercises),
        );
        assert_eq!(rounds.len(), 5);
        assert_eq!(rounds[4].line(), "Round 5: 9 Thrusters, 9 calories Row");
    }

    #[test]
    fn test_preview_round_without_exercises() {
        assert_eq!(
            PreviewRound {
                round: 4,
                entries: vec![]
            }
            .line(),
            "Round 4: rest"
        );
    }
}
