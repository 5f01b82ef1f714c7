use chrono::Duration;

use crate::{Extra, LadderStrategy, Name, Unit, Workout};

/// Cumulative totals of a finished workout, as shown in the history and on share cards.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub rounds: u32,
    pub duration: Duration,
    /// Buy-in first, then the ladder exercises by position, then the buy-out.
    pub totals: Vec<Total>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Total {
    pub name: Name,
    pub unit: Unit,
    pub value: f64,
}

impl From<&Extra> for Total {
    fn from(value: &Extra) -> Self {
        Self {
            name: value.name.clone(),
            unit: value.unit.clone(),
            value: f64::from(value.reps),
        }
    }
}

impl From<&Workout> for Summary {
    fn from(workout: &Workout) -> Self {
        let ladder = workout.ladder();
        let mut exercises = workout.exercises.iter().collect::<Vec<_>>();
        exercises.sort_by_key(|e| e.position);

        let totals = workout
            .buy_in
            .iter()
            .map(Total::from)
            .chain(exercises.into_iter().map(|e| Total {
                name: e.name.clone(),
                unit: e.unit.clone(),
                value: ladder.total_reps(e, workout.completed_rounds),
            }))
            .chain(workout.buy_out.iter().map(Total::from))
            .collect();

        Self {
            rounds: workout.completed_rounds,
            duration: workout.duration,
            totals,
        }
    }
}

impl Summary {
    /// Sum over all totals, regardless of their unit.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.totals.iter().map(|t| t.value).sum()
    }

    #[must_use]
    pub fn rounds_per_minute(&self) -> Option<f64> {
        let seconds = self.duration.num_seconds();
        if seconds <= 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let minutes = seconds as f64 / 60.0;
        Some(f64::from(self.rounds) / minutes)
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.totals
            .iter()
            .map(|t| format!("{}: {} {}", t.name, format_value(t.value), t.unit.label()))
            .collect()
    }
}

fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
