//! Plan handling: marker extraction, normalization, section parsers, assembly.

pub mod calories;
pub mod coach;
pub mod extract;
pub mod marker;
pub mod meal;
pub mod normalize;
pub mod suggestion;
pub mod workout;

pub use calories::estimate_calories;
pub use coach::{
    CoachPlan, DEFAULT_PLAN_DAYS, MAX_PLAN_DAYS, ParseOptions, ParseOptionsError, parse_coach_response,
};
pub use extract::{PlanSections, extract_plan_content, extract_sections};
pub use marker::{Marker, MarkerParseError};
pub use meal::{Meal, MealDay, MealItem, MealKind, fill_missing_meals, parse_meal_plan};
pub use normalize::normalize_response;
pub use suggestion::{DEFAULT_SUGGESTION, SplitResponse, split_suggestions};
pub use workout::{Exercise, FocusArea, WorkoutDay, parse_workout_plan, scavenge_workout_lines};
