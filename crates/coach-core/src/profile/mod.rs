//! User-side intake: what a prompt says about the person asking for a plan.
//!
//! [`extract_measurements`] pulls height, weight, age, gender, activity,
//! goal, diet, allergies and timeline out of free text. [`FitnessProfile`]
//! turns the body measurements into BMI, TDEE and a daily calorie target.

pub mod activity;
pub mod fitness;
pub mod goal;
pub mod measurements;
pub mod units;

pub use activity::{ActivityLevel, ActivityLevelParseError, detect_activity_level};
pub use fitness::{
    BmiCategory, FitnessProfile, ProfileError, calculate_bmi, calculate_bmr, calculate_tdee,
    daily_calorie_target, goal_for_bmi,
};
pub use goal::{Goal, GoalParseError, classify_goal_from_text, detect_goal};
pub use measurements::{
    AGE_RANGE, CONFIDENCE_THRESHOLD, Gender, Measurements, extract_measurements,
    extract_measurements_on,
};
pub use units::{LengthUnit, MassUnit, height_to_cm, weight_to_kg};
