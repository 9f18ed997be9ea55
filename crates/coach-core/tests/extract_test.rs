//! Marker extraction against a full seven-day coach response.

use coach_core::plan::{Marker, extract_plan_content, extract_sections};

const SEVEN_DAY_PLAN: &str = include_str!("fixtures/seven_day_plan.txt");

#[test]
fn meal_section_runs_up_to_workout_marker() {
    let meal = extract_plan_content(SEVEN_DAY_PLAN, Marker::MealPlan).expect("meal section");

    assert!(meal.starts_with("MEAL_PLAN:Day 1:"), "got: {:?}", &meal[..40]);
    assert!(!meal.contains("WORKOUT_PLAN:"));

    let workout_start = SEVEN_DAY_PLAN
        .find("WORKOUT_PLAN:")
        .expect("fixture has a workout marker");
    assert_eq!(meal, SEVEN_DAY_PLAN[..workout_start].trim());
}

#[test]
fn meal_section_swallows_its_own_suggestion() {
    let meal = extract_plan_content(SEVEN_DAY_PLAN, Marker::MealPlan).expect("meal section");
    assert!(meal.contains("END-OF-PLAN-SUGGESTION:"));
    assert!(meal.ends_with("target weight of 48 kg within 3 weeks for health goals."));
}

#[test]
fn workout_section_stops_at_first_end_of_plan_after_marker() {
    let workout =
        extract_plan_content(SEVEN_DAY_PLAN, Marker::WorkoutPlan).expect("workout section");

    assert!(workout.starts_with("WORKOUT_PLAN:\nDay 1: Upper Body"));
    assert!(workout.ends_with("5. Bicycle crunches - 3 sets × 20 reps each side"));
    assert!(!workout.contains("END-OF-PLAN"));
    assert!(!workout.contains("This workout plan provides"));
}

#[test]
fn sections_are_fixed_points() {
    for marker in Marker::ALL {
        let once = extract_plan_content(SEVEN_DAY_PLAN, marker).expect("section");
        assert_eq!(extract_plan_content(once, marker), Some(once), "{marker}");
    }
}

#[test]
fn section_break_before_end_of_plan_wins() {
    let response = "MEAL_PLAN:\nDay 1:\n\nWORKOUT_PLAN:\nDay 1: Legs\n1. Squats\n\n\nBonus tips\nEND-OF-PLAN-SUGGESTION: hydrate";
    assert_eq!(
        extract_plan_content(response, Marker::WorkoutPlan),
        Some("WORKOUT_PLAN:\nDay 1: Legs\n1. Squats")
    );
}

#[test]
fn texts_without_markers_have_no_sections() {
    for text in ["", "   \n\n", "Stay hydrated and sleep 8 hours.", "MEAL PLAN: oats"] {
        assert!(extract_sections(text).is_empty(), "text: {text:?}");
    }
}
