use chrono::{Duration, NaiveDate};
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, Exercise, Extra, Ladder, Name, ReadError, Summary, TemplateID,
    WorkoutConfig,
};

pub trait WorkoutService {
    fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;

    /// Workouts of a template, most recent first.
    fn get_workouts_of(&self, template_id: TemplateID) -> Result<Vec<Workout>, ReadError> {
        let mut workouts = self
            .get_workouts()?
            .into_iter()
            .filter(|w| w.template_id == template_id)
            .collect::<Vec<_>>();
        workouts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(workouts)
    }
}

pub trait WorkoutRepository {
    fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    fn create_workout(&self, workout: Workout) -> Result<Workout, CreateError>;
    fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

/// Immutable record of a finished workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: WorkoutID,
    pub template_id: TemplateID,
    pub name: Name,
    pub date: NaiveDate,
    pub duration: Duration,
    pub config: WorkoutConfig,
    pub exercises: Vec<Exercise>,
    pub buy_in: Option<Extra>,
    pub buy_out: Option<Extra>,
    pub completed_rounds: u32,
    pub notes: String,
}

impl Workout {
    #[must_use]
    pub fn ladder(&self) -> Ladder {
        self.config.ladder()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from(self)
    }

    /// Whether every round of a bounded workout has been completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.config
            .rounds(&self.exercises)
            .is_some_and(|rounds| self.completed_rounds >= rounds)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
