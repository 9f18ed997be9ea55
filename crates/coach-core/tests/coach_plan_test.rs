//! End-to-end parsing of a full coach response.

use coach_core::plan::{
    DEFAULT_SUGGESTION, FocusArea, MealKind, ParseOptions, parse_coach_response,
};

const SEVEN_DAY_PLAN: &str = include_str!("fixtures/seven_day_plan.txt");

#[test]
fn parses_every_meal_day() {
    let plan = parse_coach_response(SEVEN_DAY_PLAN, &ParseOptions::new(7, false).unwrap());

    assert!(plan.meal_section_found);
    assert_eq!(plan.meal_days.len(), 7);

    let day1 = &plan.meal_days[0];
    let breakfast = day1.meal(MealKind::Breakfast).unwrap();
    assert_eq!(breakfast.calories, 275);
    let names: Vec<&str> = breakfast.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Oats", "Banana", "Almond milk"]);
    assert_eq!(breakfast.items[2].quantity.as_deref(), Some("190ml"));
    assert_eq!(day1.stated_calories, Some(1185));

    let day6_dinner = plan.meal_days[5].meal(MealKind::Dinner).unwrap();
    assert_eq!(day6_dinner.items.len(), 5);
    assert_eq!(day6_dinner.items[1].name, "Eggs (cooked)");

    assert_eq!(plan.meal_days[6].stated_calories, Some(1200));
    for day in &plan.meal_days {
        assert!(
            day.meals.iter().all(|meal| !meal.items.is_empty()),
            "day {} has an empty meal",
            day.day
        );
    }
}

#[test]
fn parses_three_training_days_and_rests_the_rest() {
    let plan = parse_coach_response(SEVEN_DAY_PLAN, &ParseOptions::default());

    assert!(plan.workout_section_found);
    assert_eq!(plan.training_days(), 3);

    let focus: Vec<FocusArea> = plan.workout_days.iter().map(|d| d.focus).collect();
    assert_eq!(
        focus,
        [
            FocusArea::UpperBody,
            FocusArea::LowerBody,
            FocusArea::CardioEndurance,
            FocusArea::Rest,
            FocusArea::Rest,
            FocusArea::Rest,
            FocusArea::Rest,
        ]
    );
    assert_eq!(plan.workout_days[2].label, "Cardio & Core");
    for day in &plan.workout_days[..3] {
        assert_eq!(day.exercises.len(), 5, "day {}", day.day);
    }
    assert_eq!(
        plan.workout_days[0].exercises[0].description,
        "Push-ups - 3 sets × 12 reps"
    );
}

#[test]
fn collects_both_suggestions() {
    let plan = parse_coach_response(SEVEN_DAY_PLAN, &ParseOptions::default());
    assert_ne!(plan.suggestion, DEFAULT_SUGGESTION);
    assert!(plan.suggestion.starts_with("This meal plan includes"));
    assert!(plan.suggestion.contains("\n\nThis workout plan provides"));
}

#[test]
fn shorter_plans_drop_later_days() {
    let plan = parse_coach_response(SEVEN_DAY_PLAN, &ParseOptions::new(3, false).unwrap());
    assert_eq!(plan.meal_days.len(), 3);
    assert_eq!(plan.workout_days.len(), 3);
    assert_eq!(plan.training_days(), 3);
}
