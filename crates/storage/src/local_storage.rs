use anyhow::Context;
use ladder_domain as domain;
use log::debug;
use uuid::Uuid;

use crate::{Key, KeyValueError, KeyValueStore, record};

/// Repository persisting templates and workouts as JSON lists in a key-value store.
pub struct LocalStorage<S> {
    store: S,
}

impl<S: KeyValueStore> LocalStorage<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read<R, V>(&self, key: Key) -> Result<Vec<V>, domain::StorageError>
    where
        R: serde::de::DeserializeOwned,
        V: TryFrom<R, Error = record::RecordError>,
    {
        let Some(value) = self.store.load(key.as_ref()).map_err(into_storage_error)? else {
            return Ok(vec![]);
        };
        serde_json::from_str::<Vec<R>>(&value)
            .with_context(|| format!("failed to decode {}", key.as_ref()))
            .and_then(|records| {
                records
                    .into_iter()
                    .map(V::try_from)
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("invalid record in {}", key.as_ref()))
            })
            .map_err(|err| domain::StorageError::Corrupt(format!("{err:#}")))
    }

    fn write<R, V>(&self, key: Key, values: &[V]) -> Result<(), domain::StorageError>
    where
        R: serde::Serialize + for<'a> From<&'a V>,
    {
        let records = values.iter().map(R::from).collect::<Vec<_>>();
        let value = serde_json::to_string(&records)
            .with_context(|| format!("failed to encode {}", key.as_ref()))
            .map_err(|err| domain::StorageError::Other(err.into()))?;
        self.store
            .save(key.as_ref(), &value)
            .map_err(into_storage_error)
    }
}

fn into_storage_error(err: KeyValueError) -> domain::StorageError {
    domain::StorageError::Other(Box::new(err))
}

impl<S: KeyValueStore> domain::TemplateRepository for LocalStorage<S> {
    fn read_templates(&self) -> Result<Vec<domain::Template>, domain::ReadError> {
        Ok(self.read::<record::Template, _>(Key::Templates)?)
    }

    fn create_template(
        &self,
        mut template: domain::Template,
    ) -> Result<domain::Template, domain::CreateError> {
        let mut templates = self.read_templates()?;
        if template.id.is_nil() {
            template.id = Uuid::new_v4().into();
        }
        if templates.iter().any(|t| t.id == template.id) {
            return Err(domain::CreateError::Conflict);
        }
        templates.push(template.clone());
        self.write::<record::Template, _>(Key::Templates, &templates)?;
        debug!("created template {}", *template.id);
        Ok(template)
    }

    fn replace_template(
        &self,
        template: domain::Template,
    ) -> Result<domain::Template, domain::UpdateError> {
        let mut templates = self.read_templates()?;
        let Some(entry) = templates.iter_mut().find(|t| t.id == template.id) else {
            return Err(domain::StorageError::NotFound.into());
        };
        *entry = template.clone();
        self.write::<record::Template, _>(Key::Templates, &templates)?;
        Ok(template)
    }

    fn delete_template(
        &self,
        id: domain::TemplateID,
    ) -> Result<domain::TemplateID, domain::DeleteError> {
        let mut templates = self.read_templates()?;
        let len = templates.len();
        templates.retain(|t| t.id != id);
        if templates.len() == len {
            return Err(domain::StorageError::NotFound.into());
        }
        self.write::<record::Template, _>(Key::Templates, &templates)?;
        Ok(id)
    }
}

impl<S: KeyValueStore> domain::WorkoutRepository for LocalStorage<S> {
    fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(self.read::<record::Workout, _>(Key::Workouts)?)
    }

    fn create_workout(
        &self,
        mut workout: domain::Workout,
    ) -> Result<domain::Workout, domain::CreateError> {
        let mut workouts = self.read_workouts()?;
        if workout.id.is_nil() {
            workout.id = Uuid::new_v4().into();
        }
        if workouts.iter().any(|w| w.id == workout.id) {
            return Err(domain::CreateError::Conflict);
        }
        workouts.push(workout.clone());
        self.write::<record::Workout, _>(Key::Workouts, &workouts)?;
        debug!("created workout {}", *workout.id);
        Ok(workout)
    }

    fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        let mut workouts = self.read_workouts()?;
        let len = workouts.len();
        workouts.retain(|w| w.id != id);
        if workouts.len() == len {
            return Err(domain::StorageError::NotFound.into());
        }
        self.write::<record::Workout, _>(Key::Workouts, &workouts)?;
        Ok(id)
    }
}
