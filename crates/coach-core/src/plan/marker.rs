//! Section markers emitted by the coach model.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Literal token that opens a plan section inside a coach response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    MealPlan,
    WorkoutPlan,
}

impl Marker {
    /// All recognized markers, in the order the model is asked to emit them.
    pub const ALL: [Marker; 2] = [Marker::MealPlan, Marker::WorkoutPlan];

    /// The exact token searched for in the response text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MealPlan => "MEAL_PLAN:",
            Self::WorkoutPlan => "WORKOUT_PLAN:",
        }
    }

    /// Byte length of the marker token.
    pub const fn token_len(self) -> usize {
        self.as_str().len()
    }

    /// Short human-readable name ("meal" / "workout").
    pub const fn label(self) -> &'static str {
        match self {
            Self::MealPlan => "meal",
            Self::WorkoutPlan => "workout",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Marker {
    type Err = MarkerParseError;

    /// Accepts the literal token or a short alias (`meal`, `meal_plan`,
    /// `workout`, `workout_plan`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MEAL_PLAN:" | "meal" | "meal_plan" => Ok(Self::MealPlan),
            "WORKOUT_PLAN:" | "workout" | "workout_plan" => Ok(Self::WorkoutPlan),
            other => Err(MarkerParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an unrecognized [`Marker`] string.
#[derive(Debug, Clone, Error)]
#[error("unknown plan marker {0:?} (expected meal, workout, MEAL_PLAN: or WORKOUT_PLAN:)")]
pub struct MarkerParseError(pub String);
