//! Full coach response assembly.
//!
//! Pipeline: normalize -> split suggestions -> extract sections -> parse
//! meal and workout sections -> optional placeholder meals.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::extract::extract_sections;
use super::meal::{MealDay, fill_missing_meals, parse_meal_plan};
use super::normalize::normalize_response;
use super::suggestion::split_suggestions;
use super::workout::{WorkoutDay, parse_workout_plan, scavenge_workout_lines};

/// Upper bound on plan length in days.
pub const MAX_PLAN_DAYS: usize = 14;

/// Default plan length in days.
pub const DEFAULT_PLAN_DAYS: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseOptionsError {
    #[error("plan length must be between 1 and {max} days, got {got}")]
    DaysOutOfRange { got: usize, max: usize },
}

/// Knobs for [`parse_coach_response`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    days: usize,
    fill_missing_meals: bool,
}

impl ParseOptions {
    /// Validate and build options. `days` must be in `1..=MAX_PLAN_DAYS`.
    pub fn new(days: usize, fill_missing_meals: bool) -> Result<Self, ParseOptionsError> {
        if !(1..=MAX_PLAN_DAYS).contains(&days) {
            return Err(ParseOptionsError::DaysOutOfRange {
                got: days,
                max: MAX_PLAN_DAYS,
            });
        }
        Ok(Self {
            days,
            fill_missing_meals,
        })
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn fill_missing_meals(&self) -> bool {
        self.fill_missing_meals
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_PLAN_DAYS,
            fill_missing_meals: true,
        }
    }
}

/// Structured view of one coach response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachPlan {
    pub meal_days: Vec<MealDay>,
    pub workout_days: Vec<WorkoutDay>,
    /// Closing advice, or the default suggestion.
    pub suggestion: String,
    pub meal_section_found: bool,
    pub workout_section_found: bool,
}

impl CoachPlan {
    /// Number of non-rest workout days.
    pub fn training_days(&self) -> usize {
        self.workout_days.iter().filter(|day| !day.is_rest()).count()
    }
}

/// Parse a raw coach response into a [`CoachPlan`].
///
/// Never fails: missing sections yield empty (or placeholder) days and
/// `*_section_found = false`.
pub fn parse_coach_response(response: &str, options: &ParseOptions) -> CoachPlan {
    let normalized = normalize_response(response);
    let split = split_suggestions(&normalized);
    let sections = extract_sections(&split.body);
    debug!(
        meal_len = sections.meal.map(str::len),
        workout_len = sections.workout.map(str::len),
        "section extraction"
    );

    let mut meal_days = match sections.meal {
        Some(section) => parse_meal_plan(section, options.days),
        None => {
            warn!("response has no meal plan section");
            parse_meal_plan("", options.days)
        }
    };
    if options.fill_missing_meals {
        fill_missing_meals(&mut meal_days);
    }

    let scavenged;
    let workout_text = match sections.workout {
        Some(section) => Some(section),
        None => {
            warn!("response has no workout plan section, scanning full text");
            scavenged = scavenge_workout_lines(&split.body);
            scavenged.as_deref()
        }
    };
    let workout_days = parse_workout_plan(workout_text.unwrap_or_default(), options.days);

    let plan = CoachPlan {
        meal_days,
        workout_days,
        suggestion: split.suggestion_text(),
        meal_section_found: sections.meal.is_some(),
        workout_section_found: sections.workout.is_some(),
    };
    info!(
        days = options.days,
        training_days = plan.training_days(),
        suggestions = split.suggestions.len(),
        "parsed coach response"
    );
    plan
}
