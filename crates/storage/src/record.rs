//! Serialized representation of the domain types.
//!
//! Records written by older versions may lack fields. Every field added after the first
//! release has a default, so such records are migrated on read.

use chrono::{Duration, NaiveDate};
use ladder_domain as domain;
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Position(#[from] domain::PositionError),
    #[error(transparent)]
    LadderType(#[from] domain::LadderError),
}

fn default_ladder_type() -> String {
    domain::LadderType::Christmas.as_ref().to_string()
}

fn default_param() -> u32 {
    1
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutConfig {
    #[serde(default = "default_ladder_type")]
    pub ladder_type: String,
    #[serde(default = "default_param")]
    pub step_size: u32,
    #[serde(default = "default_param")]
    pub starting_reps: u32,
    #[serde(default = "default_param")]
    pub max_rounds: u32,
}

impl From<&domain::WorkoutConfig> for WorkoutConfig {
    fn from(value: &domain::WorkoutConfig) -> Self {
        Self {
            ladder_type: value.ladder_type.as_ref().to_string(),
            step_size: value.params.step_size,
            starting_reps: value.params.starting_reps,
            max_rounds: value.params.max_rounds,
        }
    }
}

impl TryFrom<WorkoutConfig> for domain::WorkoutConfig {
    type Error = domain::LadderError;

    fn try_from(value: WorkoutConfig) -> Result<Self, Self::Error> {
        let params = domain::LadderParams {
            step_size: value.step_size,
            starting_reps: value.starting_reps,
            max_rounds: value.max_rounds,
        };
        let ladder = domain::Ladder::from_tag(&value.ladder_type, params)?;
        Ok(Self {
            ladder_type: ladder.ladder_type(),
            params,
        })
    }
}

/// Exercise with the ladder type specific fields stored side by side.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub position: u32,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    /// Missing in records written before the prescription was stored explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prescription: Option<PrescriptionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps_per_round: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionKind {
    Uniform,
    Progression,
    Fixed,
    PerRound,
}

impl From<domain::LadderType> for PrescriptionKind {
    fn from(value: domain::LadderType) -> Self {
        match value {
            domain::LadderType::Flexible | domain::LadderType::Amrap => Self::Progression,
            domain::LadderType::Chipper => Self::Fixed,
            domain::LadderType::ForReps => Self::PerRound,
            domain::LadderType::Christmas
            | domain::LadderType::Ascending
            | domain::LadderType::Descending
            | domain::LadderType::Pyramid => Self::Uniform,
        }
    }
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        let mut result = Self {
            position: u32::from(value.position),
            name: value.name.to_string(),
            unit: value.unit.to_string(),
            prescription: None,
            direction: None,
            starting_reps: None,
            step_size: None,
            fixed_reps: None,
            reps_per_round: None,
        };
        let kind = match value.prescription {
            domain::Prescription::Uniform => PrescriptionKind::Uniform,
            domain::Prescription::Progression {
                direction,
                starting_reps,
                step_size,
            } => {
                result.direction = direction.map(|d| d.as_ref().to_string());
                result.starting_reps = starting_reps;
                result.step_size = step_size;
                PrescriptionKind::Progression
            }
            domain::Prescription::Fixed { reps } => {
                result.fixed_reps = reps;
                PrescriptionKind::Fixed
            }
            domain::Prescription::PerRound { reps } => {
                result.reps_per_round = reps;
                PrescriptionKind::PerRound
            }
        };
        result.prescription = Some(kind);
        result
    }
}

impl Exercise {
    /// The stored prescription is restored as is, even if it belongs to a ladder type other
    /// than `ladder_type`. Records without a stored prescription take the one of
    /// `ladder_type`.
    pub fn into_domain(
        self,
        ladder_type: domain::LadderType,
    ) -> Result<domain::Exercise, RecordError> {
        let prescription = match self
            .prescription
            .unwrap_or_else(|| PrescriptionKind::from(ladder_type))
        {
            PrescriptionKind::Progression => domain::Prescription::Progression {
                direction: self.direction.and_then(|d| d.parse().ok()),
                starting_reps: self.starting_reps,
                step_size: self.step_size,
            },
            PrescriptionKind::Fixed => domain::Prescription::Fixed {
                reps: self.fixed_reps,
            },
            PrescriptionKind::PerRound => domain::Prescription::PerRound {
                reps: self.reps_per_round,
            },
            PrescriptionKind::Uniform => domain::Prescription::Uniform,
        };
        Ok(domain::Exercise::new(
            domain::Position::new(self.position)?,
            domain::Name::new(&self.name)?,
        )
        .with_unit(domain::Unit::new(&self.unit))
        .with_prescription(prescription))
    }
}

fn into_exercises(
    exercises: Vec<Exercise>,
    ladder_type: domain::LadderType,
) -> Result<Vec<domain::Exercise>, RecordError> {
    exercises
        .into_iter()
        .map(|e| e.into_domain(ladder_type))
        .collect()
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub reps: u32,
}

impl From<&domain::Extra> for Extra {
    fn from(value: &domain::Extra) -> Self {
        Self {
            name: value.name.to_string(),
            unit: value.unit.to_string(),
            reps: value.reps,
        }
    }
}

impl TryFrom<Extra> for domain::Extra {
    type Error = domain::NameError;

    fn try_from(value: Extra) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            unit: domain::Unit::new(&value.unit),
            reps: value.reps,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(flatten)]
    pub config: WorkoutConfig,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub buy_in: Option<Extra>,
    #[serde(default)]
    pub buy_out: Option<Extra>,
}

impl From<&domain::Template> for Template {
    fn from(value: &domain::Template) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            notes: value.notes.clone(),
            config: WorkoutConfig::from(&value.config),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            buy_in: value.buy_in.as_ref().map(Extra::from),
            buy_out: value.buy_out.as_ref().map(Extra::from),
        }
    }
}

impl TryFrom<Template> for domain::Template {
    type Error = RecordError;

    fn try_from(value: Template) -> Result<Self, Self::Error> {
        let config = domain::WorkoutConfig::try_from(value.config)?;
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            notes: value.notes,
            config,
            exercises: into_exercises(value.exercises, config.ladder_type)?,
            buy_in: value.buy_in.map(domain::Extra::try_from).transpose()?,
            buy_out: value.buy_out.map(domain::Extra::try_from).transpose()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: Uuid,
    #[serde(default)]
    pub template_id: Option<Uuid>,
    pub name: String,
    pub date: NaiveDate,
    /// Seconds
    #[serde(default)]
    pub duration: i64,
    #[serde(flatten)]
    pub config: WorkoutConfig,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub buy_in: Option<Extra>,
    #[serde(default)]
    pub buy_out: Option<Extra>,
    #[serde(default)]
    pub completed_rounds: u32,
    #[serde(default)]
    pub notes: String,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            template_id: if value.template_id.is_nil() {
                None
            } else {
                Some(*value.template_id)
            },
            name: value.name.to_string(),
            date: value.date,
            duration: value.duration.num_seconds(),
            config: WorkoutConfig::from(&value.config),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
            buy_in: value.buy_in.as_ref().map(Extra::from),
            buy_out: value.buy_out.as_ref().map(Extra::from),
            completed_rounds: value.completed_rounds,
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = RecordError;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        let config = domain::WorkoutConfig::try_from(value.config)?;
        Ok(Self {
            id: value.id.into(),
            template_id: value
                .template_id
                .map(domain::TemplateID::from)
                .unwrap_or_default(),
            name: domain::Name::new(&value.name)?,
            date: value.date,
            duration: Duration::try_seconds(value.duration.max(0)).unwrap_or(Duration::MAX),
            config,
            exercises: into_exercises(value.exercises, config.ladder_type)?,
            buy_in: value.buy_in.map(domain::Extra::try_from).transpose()?,
            buy_out: value.buy_out.map(domain::Extra::try_from).transpose()?,
            completed_rounds: value.completed_rounds,
            notes: value.notes,
        })
    }
}
