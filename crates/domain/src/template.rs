use chrono::{Duration, NaiveDate};
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, Exercise, Ladder, LadderStrategy, LadderType, Name, ReadError, Unit,
    UpdateError, ValidationError, Workout, WorkoutConfig, WorkoutID,
};

pub trait TemplateService {
    fn get_templates(&self) -> Result<Vec<Template>, ReadError>;
    fn create_template(&self, template: Template) -> Result<Template, CreateError>;
    fn replace_template(&self, template: Template) -> Result<Template, UpdateError>;
    fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;

    fn validate_template_name(&self, name: &str, id: TemplateID) -> Result<Name, ValidationError> {
        match Name::new(name) {
            Ok(name) => match self.get_templates() {
                Ok(templates) => {
                    if templates.iter().all(|t| t.id == id || t.name != name) {
                        Ok(name)
                    } else {
                        Err(ValidationError::Conflict("name".to_string()))
                    }
                }
                Err(err) => Err(ValidationError::Other(err.into())),
            },
            Err(err) => Err(err.into()),
        }
    }
}

pub trait TemplateRepository {
    fn read_templates(&self) -> Result<Vec<Template>, ReadError>;
    fn create_template(&self, template: Template) -> Result<Template, CreateError>;
    fn replace_template(&self, template: Template) -> Result<Template, UpdateError>;
    fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

/// Reusable workout definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateID,
    pub name: Name,
    pub notes: String,
    pub config: WorkoutConfig,
    pub exercises: Vec<Exercise>,
    pub buy_in: Option<Extra>,
    pub buy_out: Option<Extra>,
}

impl Template {
    #[must_use]
    pub fn new(name: Name, config: WorkoutConfig, exercises: Vec<Exercise>) -> Self {
        Self {
            id: TemplateID::nil(),
            name,
            notes: String::new(),
            config,
            exercises,
            buy_in: None,
            buy_out: None,
        }
    }

    #[must_use]
    pub fn ladder(&self) -> Ladder {
        self.config.ladder()
    }

    /// Ladder type and progression rule, e.g. "Descending: Start with 21 reps and remove 6
    /// each round".
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{}: {}", self.config.ladder_type.name(), self.ladder().describe())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.config.validate(&self.exercises)
    }

    /// Switches to the default configuration of another ladder type.
    ///
    /// The exercises are kept unchanged, so their prescriptions may still belong to the previous
    /// ladder type.
    #[must_use]
    pub fn with_ladder_type(mut self, ladder_type: LadderType) -> Self {
        if self.config.ladder_type != ladder_type {
            self.config = WorkoutConfig::default_for(ladder_type);
        }
        self
    }

    /// Snapshot of a finished workout based on this template.
    #[must_use]
    pub fn complete(&self, date: NaiveDate, duration: Duration, completed_rounds: u32) -> Workout {
        Workout {
            id: WorkoutID::nil(),
            template_id: self.id,
            name: self.name.clone(),
            date,
            duration,
            config: self.config,
            exercises: self.exercises.clone(),
            buy_in: self.buy_in.clone(),
            buy_out: self.buy_out.clone(),
            completed_rounds,
            notes: String::new(),
        }
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateID(Uuid);

impl TemplateID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TemplateID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TemplateID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Single exercise performed once before (buy-in) or after (buy-out) the ladder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    pub name: Name,
    pub unit: Unit,
    pub reps: u32,
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use crate::{LadderParams, Position, Prescription, StorageError};

    use super::*;

    static TEMPLATE: std::sync::LazyLock<Template> = std::sync::LazyLock::new(|| Template {
        id: 1.into(),
        name: Name::new("Fran").unwrap(),
        notes: String::from("21-15-9"),
        config: WorkoutConfig {
            ladder_type: LadderType::Descending,
            params: LadderParams {
                step_size: 6,
                starting_reps: 21,
                max_rounds: 3,
            },
        },
        exercises: vec![
            Exercise::new(Position::new(1).unwrap(), Name::new("Thrusters").unwrap()),
            Exercise::new(Position::new(2).unwrap(), Name::new("Pull-ups").unwrap()),
        ],
        buy_in: Some(Extra {
            name: Name::new("Row").unwrap(),
            unit: Unit::new("meters"),
            reps: 500,
        }),
        buy_out: None,
    });

    struct FakeService {
        templates: RefCell<Result<Vec<Template>, ()>>,
    }

    impl TemplateService for FakeService {
        fn get_templates(&self) -> Result<Vec<Template>, ReadError> {
            self.templates
                .borrow()
                .clone()
                .map_err(|()| ReadError::Storage(StorageError::NotFound))
        }

        fn create_template(&self, template: Template) -> Result<Template, CreateError> {
            Ok(template)
        }

        fn replace_template(&self, template: Template) -> Result<Template, UpdateError> {
            Ok(template)
        }

        fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
            Ok(id)
        }
    }

    #[test]
    fn test_template_validate() {
        assert!(TEMPLATE.validate().is_ok());
        assert_eq!(
            TEMPLATE.describe(),
            "Descending: Start with 21 reps and remove 6 each round"
        );
        assert_eq!(
            TEMPLATE
                .clone()
                .with_ladder_type(LadderType::Amrap)
                .describe(),
            "AMRAP: As many rounds as possible"
        );
    }

    #[test]
    fn test_template_with_ladder_type() {
        let template = TEMPLATE.clone().with_ladder_type(LadderType::Descending);
        assert_eq!(template, *TEMPLATE);

        let template = TEMPLATE.clone().with_ladder_type(LadderType::Chipper);
        assert_eq!(template.config, WorkoutConfig::default_for(LadderType::Chipper));
        assert_eq!(template.exercises, TEMPLATE.exercises);
        assert_eq!(template.exercises[0].prescription, Prescription::Uniform);
    }

    #[test]
    fn test_template_complete() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let workout = TEMPLATE.complete(date, Duration::minutes(7), 3);
        assert!(workout.id.is_nil());
        assert_eq!(workout.template_id, TEMPLATE.id);
        assert_eq!(workout.name, TEMPLATE.name);
        assert_eq!(workout.date, date);
        assert_eq!(workout.config, TEMPLATE.config);
        assert_eq!(workout.exercises, TEMPLATE.exercises);
        assert_eq!(workout.buy_in, TEMPLATE.buy_in);
        assert_eq!(workout.completed_rounds, 3);
    }

    #[test]
    fn test_validate_template_name() {
        let service = FakeService {
            templates: RefCell::new(Ok(vec![TEMPLATE.clone()])),
        };
        assert_eq!(
            service.validate_template_name(" Cindy ", TemplateID::nil()).ok(),
            Name::new("Cindy").ok()
        );
        assert_eq!(
            service.validate_template_name("Fran", TEMPLATE.id).ok(),
            Name::new("Fran").ok()
        );
        assert!(matches!(
            service.validate_template_name("Fran", TemplateID::nil()),
            Err(ValidationError::Conflict(field)) if field == "name"
        ));
        assert!(matches!(
            service.validate_template_name("", TemplateID::nil()),
            Err(ValidationError::Name(_))
        ));

        *service.templates.borrow_mut() = Err(());
        assert!(matches!(
            service.validate_template_name("Cindy", TemplateID::nil()),
            Err(ValidationError::Other(_))
        ));
    }

    #[test]
    fn test_template_id_nil() {
        assert!(TemplateID::nil().is_nil());
        assert_eq!(TemplateID::nil(), TemplateID::default());
    }
}
