//! Plain-text rendering of parsed plans and fitness profiles.

use std::fmt;

use coach_core::plan::{CoachPlan, Meal, MealDay, WorkoutDay};
use coach_core::profile::{FitnessProfile, Measurements};

use crate::profile_cmd::ProfileReport;

/// Render a plan as human-readable text.
pub fn render_plan(plan: &CoachPlan) -> String {
    PlanText(plan).to_string()
}

/// Render a profile report as human-readable text.
pub fn render_profile(report: &ProfileReport) -> String {
    ProfileText(report).to_string()
}

struct PlanText<'a>(&'a CoachPlan);

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;

        heading(f, "MEAL PLAN")?;
        if !plan.meal_section_found {
            writeln!(f, "(no meal plan in response)")?;
        }
        for day in &plan.meal_days {
            meal_day(f, day)?;
        }

        writeln!(f)?;
        heading(f, "WORKOUT PLAN")?;
        if !plan.workout_section_found {
            writeln!(f, "(no workout plan in response)")?;
        }
        for day in &plan.workout_days {
            workout_day(f, day)?;
        }

        writeln!(f)?;
        heading(f, "SUGGESTION")?;
        writeln!(f, "{}", plan.suggestion)
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}\n{}", "=".repeat(title.len()))
}

fn meal_day(f: &mut fmt::Formatter<'_>, day: &MealDay) -> fmt::Result {
    let calories = day.stated_calories.unwrap_or_else(|| day.total_calories());
    writeln!(f, "Day {} ({calories} kcal)", day.day)?;
    for meal in day.meals.iter().filter(|meal| !meal.items.is_empty()) {
        meal_lines(f, meal)?;
    }
    Ok(())
}

fn meal_lines(f: &mut fmt::Formatter<'_>, meal: &Meal) -> fmt::Result {
    writeln!(f, "  {} ({} kcal)", meal.kind, meal.total_calories())?;
    for item in &meal.items {
        writeln!(
            f,
            "    - {} ({} kcal)",
            item.description(),
            item.effective_calories()
        )?;
    }
    Ok(())
}

fn workout_day(f: &mut fmt::Formatter<'_>, day: &WorkoutDay) -> fmt::Result {
    if day.is_rest() {
        return writeln!(f, "Day {}: {}", day.day, day.focus);
    }
    writeln!(f, "Day {}: {} [{}]", day.day, day.label, day.focus)?;
    for exercise in &day.exercises {
        writeln!(f, "  {}. {}", exercise.number, exercise.description)?;
    }
    Ok(())
}

struct ProfileText<'a>(&'a ProfileReport);

impl fmt::Display for ProfileText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        heading(f, "PROFILE")?;
        let fields = stated_fields(&report.measurements);
        if fields.is_empty() {
            writeln!(f, "(nothing recognized in prompt)")?;
        }
        for (label, value) in fields {
            writeln!(f, "{label}: {value}")?;
        }

        writeln!(f)?;
        heading(f, "ENERGY")?;
        match &report.profile {
            Some(profile) => energy(f, profile),
            None => writeln!(
                f,
                "(no estimate: missing {})",
                report.missing.join(", ")
            ),
        }
    }
}

/// Label and value for every field the prompt stated.
fn stated_fields(m: &Measurements) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some(height) = m.height_cm {
        fields.push(("Height", format!("{height} cm")));
    }
    if let Some(weight) = m.weight_kg {
        fields.push(("Weight", format!("{weight} kg")));
    }
    if let Some(target) = m.target_weight_kg {
        fields.push(("Target weight", format!("{target} kg")));
    }
    if let Some(age) = m.age {
        fields.push(("Age", age.to_string()));
    }
    if let Some(dob) = m.date_of_birth {
        fields.push(("Date of birth", dob.to_string()));
    }
    if let Some(gender) = m.gender {
        fields.push(("Gender", gender.to_string()));
    }
    if let Some(activity) = m.activity_level {
        fields.push(("Activity", activity.to_string()));
    }
    if let Some(goal) = m.health_goal {
        fields.push(("Goal", goal.to_string()));
    }
    if !m.dietary_restrictions.is_empty() {
        fields.push(("Diet", m.dietary_restrictions.join(", ")));
    }
    if !m.allergies.is_empty() {
        fields.push(("Allergies", m.allergies.join(", ")));
    }
    if let Some(weeks) = m.timeline_weeks {
        fields.push(("Timeline", format!("{weeks} weeks")));
    }
    fields
}

fn energy(f: &mut fmt::Formatter<'_>, profile: &FitnessProfile) -> fmt::Result {
    writeln!(f, "BMI: {:.2} ({})", profile.bmi, profile.bmi_category)?;
    writeln!(f, "TDEE: {} kcal ({})", profile.tdee, profile.activity_level)?;
    let source = if profile.goal_inferred {
        " from BMI"
    } else {
        ""
    };
    writeln!(
        f,
        "Daily target: {} kcal ({}{source})",
        profile.calorie_target, profile.goal
    )?;
    writeln!(f, "Workout focus: {}", profile.workout_focus)
}
