//! BMI, Mifflin-St Jeor BMR and TDEE, and the profile built from them.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use super::activity::ActivityLevel;
use super::goal::Goal;
use super::measurements::{Gender, Measurements};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("missing {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid {field}: {value} (must be a positive number)")]
    InvalidMeasurement { field: &'static str, value: f64 },
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, ProfileError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ProfileError::InvalidMeasurement { field, value })
    }
}

/// Body mass index rounded to two decimals.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, ProfileError> {
    let weight_kg = require_positive("weight", weight_kg)?;
    let height_m = require_positive("height", height_cm)? / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 100.0).round() / 100.0)
}

/// WHO adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basal metabolic rate (Mifflin-St Jeor). Anything other than `Male`,
/// including an unknown gender, uses the female constant.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Option<Gender>) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Some(Gender::Male) => base + 5.0,
        _ => base - 161.0,
    }
}

/// Total daily energy expenditure in whole kcal (truncated).
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Option<Gender>,
    activity: ActivityLevel,
) -> Result<u32, ProfileError> {
    let weight_kg = require_positive("weight", weight_kg)?;
    let height_cm = require_positive("height", height_cm)?;
    let tdee = calculate_bmr(weight_kg, height_cm, age, gender) * activity.factor();
    Ok(tdee.max(0.0) as u32)
}

/// Daily calorie target: TDEE adjusted for the goal.
pub fn daily_calorie_target(tdee: u32, goal: Goal) -> u32 {
    tdee.saturating_add_signed(goal.calorie_offset())
}

/// Goal implied by BMI alone, for prompts that state none.
pub fn goal_for_bmi(bmi: f64) -> Goal {
    match BmiCategory::from_bmi(bmi) {
        BmiCategory::Underweight => Goal::MuscleGain,
        BmiCategory::Normal => Goal::GetFit,
        BmiCategory::Overweight | BmiCategory::Obese => Goal::WeightLoss,
    }
}

/// Energy and training numbers for a user, ready to feed a plan prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessProfile {
    pub height_cm: u32,
    pub weight_kg: f64,
    pub age: u32,
    pub gender: Option<Gender>,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    /// True when the goal came from BMI rather than the prompt.
    pub goal_inferred: bool,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub tdee: u32,
    pub calorie_target: u32,
    pub workout_focus: &'static str,
}

impl FitnessProfile {
    /// Build a profile from extracted measurements.
    ///
    /// Height, weight and age are required. Activity defaults to
    /// [`ActivityLevel::Moderate`]; a missing goal is inferred from BMI.
    pub fn from_measurements(m: &Measurements) -> Result<Self, ProfileError> {
        let missing: Vec<&'static str> = [
            ("height", m.height_cm.is_none()),
            ("weight", m.weight_kg.is_none()),
            ("age", m.age.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        let (Some(height_cm), Some(weight_kg), Some(age)) = (m.height_cm, m.weight_kg, m.age) else {
            return Err(ProfileError::MissingFields(missing));
        };

        let height = f64::from(height_cm);
        let bmi = calculate_bmi(weight_kg, height)?;
        let activity_level = m.activity_level.unwrap_or_default();
        let (goal, goal_inferred) = match m.health_goal {
            Some(goal) => (goal, false),
            None => (goal_for_bmi(bmi), true),
        };
        let tdee = calculate_tdee(weight_kg, height, age, m.gender, activity_level)?;
        let calorie_target = daily_calorie_target(tdee, goal);

        info!(bmi, tdee, calorie_target, %goal, "fitness profile");

        Ok(Self {
            height_cm,
            weight_kg,
            age,
            gender: m.gender,
            activity_level,
            goal,
            goal_inferred,
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
            tdee,
            calorie_target,
            workout_focus: goal.workout_focus(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measurements(height_cm: u32, weight_kg: f64, age: u32) -> Measurements {
        Measurements {
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
            age: Some(age),
            ..Measurements::default()
        }
    }

    #[test]
    fn bmi_rounds_to_two_decimals() {
        assert_eq!(calculate_bmi(70.0, 175.0).unwrap(), 22.86);
        assert_eq!(calculate_bmi(81.6, 178.0).unwrap(), 25.75);
    }

    #[test]
    fn bmi_rejects_non_positive_input() {
        let err = calculate_bmi(70.0, 0.0).unwrap_err();
        assert_eq!(err, ProfileError::InvalidMeasurement { field: "height", value: 0.0 });
        assert!(calculate_bmi(-1.0, 175.0).is_err());
        assert!(calculate_bmi(f64::NAN, 175.0).is_err());
    }

    #[test]
    fn bmi_categories() {
        assert_eq!(BmiCategory::from_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(27.3), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn bmr_by_gender() {
        assert_eq!(calculate_bmr(70.0, 175.0, 26, Some(Gender::Male)), 1668.75);
        assert_eq!(calculate_bmr(70.0, 175.0, 26, Some(Gender::Female)), 1502.75);
        assert_eq!(calculate_bmr(70.0, 175.0, 26, None), 1502.75);
    }

    #[test]
    fn tdee_applies_activity_factor() {
        let tdee = calculate_tdee(70.0, 175.0, 26, Some(Gender::Male), ActivityLevel::Moderate);
        assert_eq!(tdee.unwrap(), 2586);
        let tdee = calculate_tdee(70.0, 175.0, 26, Some(Gender::Female), ActivityLevel::Sedentary);
        assert_eq!(tdee.unwrap(), 1803);
    }

    #[test]
    fn calorie_target_follows_goal() {
        assert_eq!(daily_calorie_target(2586, Goal::WeightLoss), 2086);
        assert_eq!(daily_calorie_target(2586, Goal::MuscleGain), 3086);
        assert_eq!(daily_calorie_target(2586, Goal::GetStronger), 2886);
        assert_eq!(daily_calorie_target(2586, Goal::GetFlexible), 2586);
        assert_eq!(daily_calorie_target(300, Goal::WeightLoss), 0);
    }

    #[test]
    fn profile_from_complete_measurements() {
        let m = Measurements {
            gender: Some(Gender::Male),
            activity_level: Some(ActivityLevel::Moderate),
            health_goal: Some(Goal::WeightLoss),
            ..measurements(175, 70.0, 26)
        };
        let profile = FitnessProfile::from_measurements(&m).unwrap();
        assert_eq!(profile.bmi, 22.86);
        assert_eq!(profile.bmi_category, BmiCategory::Normal);
        assert_eq!(profile.tdee, 2586);
        assert_eq!(profile.calorie_target, 2086);
        assert_eq!(profile.workout_focus, "Fat Burn & Cardio");
        assert!(!profile.goal_inferred);
    }

    #[test]
    fn missing_goal_is_inferred_from_bmi() {
        let heavy = FitnessProfile::from_measurements(&measurements(170, 95.0, 40)).unwrap();
        assert_eq!(heavy.goal, Goal::WeightLoss);
        assert!(heavy.goal_inferred);

        let light = FitnessProfile::from_measurements(&measurements(180, 55.0, 22)).unwrap();
        assert_eq!(light.goal, Goal::MuscleGain);

        let normal = FitnessProfile::from_measurements(&measurements(175, 70.0, 30)).unwrap();
        assert_eq!(normal.goal, Goal::GetFit);
        assert_eq!(normal.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn missing_fields_are_listed() {
        let m = Measurements {
            weight_kg: Some(70.0),
            ..Measurements::default()
        };
        let err = FitnessProfile::from_measurements(&m).unwrap_err();
        assert_eq!(err, ProfileError::MissingFields(vec!["height", "age"]));
        assert_eq!(err.to_string(), "missing height, age");
    }
}
