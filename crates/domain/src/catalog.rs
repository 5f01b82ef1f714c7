//! Benchmark workouts available as starting points for new templates.

use std::collections::BTreeMap;

use crate::{
    Direction, Exercise, Extra, LadderParams, LadderType, Name, NameError, Position,
    Prescription, Template, Unit, WorkoutConfig,
};

#[derive(Clone)]
pub struct Preset {
    pub name: &'static str,
    pub config: WorkoutConfig,
    pub exercises: &'static [PresetExercise],
    pub buy_in: Option<PresetExercise>,
    pub buy_out: Option<PresetExercise>,
}

#[derive(Clone, Copy)]
pub struct PresetExercise {
    pub name: &'static str,
    pub unit: &'static str,
    pub prescription: Prescription,
}

impl PresetExercise {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            unit: "",
            prescription: Prescription::Uniform,
        }
    }

    const fn with(name: &'static str, unit: &'static str, prescription: Prescription) -> Self {
        Self {
            name,
            unit,
            prescription,
        }
    }

    fn extra(&self) -> Result<Extra, NameError> {
        Ok(Extra {
            name: Name::new(self.name)?,
            unit: Unit::new(self.unit),
            reps: match self.prescription {
                Prescription::Fixed { reps } | Prescription::PerRound { reps } => {
                    reps.unwrap_or_default()
                }
                Prescription::Progression { starting_reps, .. } => {
                    starting_reps.unwrap_or_default()
                }
                Prescription::Uniform => 0,
            },
        })
    }
}

impl Preset {
    /// New template based on this preset.
    pub fn template(&self) -> Result<Template, NameError> {
        let mut exercises = Vec::with_capacity(self.exercises.len());
        for (position, e) in Position::iter(u32::try_from(self.exercises.len()).unwrap_or(0))
            .zip(self.exercises)
        {
            exercises.push(
                Exercise::new(position, Name::new(e.name)?)
                    .with_unit(Unit::new(e.unit))
                    .with_prescription(e.prescription),
            );
        }
        let mut template = Template::new(Name::new(self.name)?, self.config, exercises);
        template.buy_in = self.buy_in.as_ref().map(PresetExercise::extra).transpose()?;
        template.buy_out = self.buy_out.as_ref().map(PresetExercise::extra).transpose()?;
        Ok(template)
    }
}

#[must_use]
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.get(name)
}

pub static PRESETS: std::sync::LazyLock<BTreeMap<&'static str, Preset>> =
    std::sync::LazyLock::new(|| PRESET_LIST.iter().map(|p| (p.name, p.clone())).collect());

const fn progression(starting_reps: u32, step_size: u32) -> Prescription {
    Prescription::progression(Direction::Ascending, starting_reps, step_size)
}

const fn config(
    ladder_type: LadderType,
    step_size: u32,
    starting_reps: u32,
    max_rounds: u32,
) -> WorkoutConfig {
    WorkoutConfig {
        ladder_type,
        params: LadderParams {
            step_size,
            starting_reps,
            max_rounds,
        },
    }
}

const PRESET_LIST: [Preset; 6] = [
    Preset {
        name: "Fran",
        config: config(LadderType::Descending, 6, 21, 3),
        exercises: &[
            PresetExercise::new("Thrusters"),
            PresetExercise::new("Pull-ups"),
        ],
        buy_in: None,
        buy_out: None,
    },
    Preset {
        name: "Twelve Days of Christmas",
        config: config(LadderType::Christmas, 1, 1, 12),
        exercises: &[
            PresetExercise::new("Burpees"),
            PresetExercise::new("Air Squats"),
            PresetExercise::new("Push-ups"),
            PresetExercise::new("Sit-ups"),
            PresetExercise::new("Lunges"),
            PresetExercise::new("Box Jumps"),
            PresetExercise::new("Kettlebell Swings"),
            PresetExercise::new("Wall Balls"),
            PresetExercise::new("Pull-ups"),
            PresetExercise::new("Toes-to-bar"),
            PresetExercise::new("Thrusters"),
            PresetExercise::new("Double-unders"),
        ],
        buy_in: None,
        buy_out: None,
    },
    Preset {
        name: "Burpee Pyramid",
        config: config(LadderType::Pyramid, 1, 1, 9),
        exercises: &[PresetExercise::new("Burpees")],
        buy_in: None,
        buy_out: None,
    },
    Preset {
        name: "Filthy Fifty",
        config: config(LadderType::Chipper, 1, 1, 10),
        exercises: &[
            PresetExercise::with("Box Jumps", "", Prescription::fixed(50)),
            PresetExercise::with("Jumping Pull-ups", "", Prescription::fixed(50)),
            PresetExercise::with("Kettlebell Swings", "", Prescription::fixed(50)),
            PresetExercise::with("Walking Lunges", "", Prescription::fixed(50)),
            PresetExercise::with("Knees-to-elbows", "", Prescription::fixed(50)),
            PresetExercise::with("Push Press", "", Prescription::fixed(50)),
            PresetExercise::with("Back Extensions", "", Prescription::fixed(50)),
            PresetExercise::with("Wall Balls", "", Prescription::fixed(50)),
            PresetExercise::with("Burpees", "", Prescription::fixed(50)),
            PresetExercise::with("Double-unders", "", Prescription::fixed(50)),
        ],
        buy_in: None,
        buy_out: None,
    },
    Preset {
        name: "Cindy",
        config: config(LadderType::Amrap, 1, 1, 1),
        exercises: &[
            PresetExercise::with("Pull-ups", "", progression(5, 0)),
            PresetExercise::with("Push-ups", "", progression(10, 0)),
            PresetExercise::with("Air Squats", "", progression(15, 0)),
        ],
        buy_in: None,
        buy_out: None,
    },
    Preset {
        name: "Murph",
        config: config(LadderType::ForReps, 1, 1, 20),
        exercises: &[
            PresetExercise::with("Pull-ups", "", Prescription::per_round(5)),
            PresetExercise::with("Push-ups", "", Prescription::per_round(10)),
            PresetExercise::with("Air Squats", "", Prescription::per_round(15)),
        ],
        buy_in: Some(PresetExercise::with(
            "Run",
            "meters",
            Prescription::fixed(1600),
        )),
        buy_out: Some(PresetExercise::with(
            "Run",
            "meters",
            Prescription::fixed(1600),
        )),
    },
];
