//! Marker-based section extraction.
//!
//! A coach response carries up to two sections, each opened by a [`Marker`]
//! token. Sections are sliced out with plain substring search so partial or
//! slightly malformed model output still yields something usable.
//!
//! Termination rules differ per marker:
//! - `WORKOUT_PLAN:` ends at the earliest of `END-OF-PLAN`, a following
//!   `MEAL_PLAN:`, a blank-line run (`"\n\n\n"`), or end of text.
//! - `MEAL_PLAN:` ends only at a following `WORKOUT_PLAN:` or end of text.
//!   An `END-OF-PLAN` sentinel inside the meal section stays in the section;
//!   downstream parsers rely on seeing it.

use tracing::debug;

use super::marker::Marker;

/// Prefix shared by every end-of-plan sentinel (`END-OF-PLAN-SUGGESTION:` etc).
pub const END_OF_PLAN: &str = "END-OF-PLAN";

/// Separator the model uses between loosely formatted sections.
pub const SECTION_BREAK: &str = "\n\n\n";

/// Both sections of a response, as borrowed slices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanSections<'a> {
    pub meal: Option<&'a str>,
    pub workout: Option<&'a str>,
}

impl PlanSections<'_> {
    /// True when neither section was found.
    pub fn is_empty(&self) -> bool {
        self.meal.is_none() && self.workout.is_none()
    }
}

/// Extract the section opened by `marker`, including the marker itself.
///
/// Only the first occurrence of the marker is used. The returned slice is
/// trimmed; `None` means the marker is absent or the section is blank.
pub fn extract_plan_content(response: &str, marker: Marker) -> Option<&str> {
    let start = response.find(marker.as_str())?;
    let after_marker = start + marker.token_len();

    let end = match marker {
        Marker::WorkoutPlan => [
            find_from(response, END_OF_PLAN, start),
            find_from(response, Marker::MealPlan.as_str(), after_marker),
            find_from(response, SECTION_BREAK, start),
            Some(response.len()),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(response.len()),
        Marker::MealPlan => find_from(response, Marker::WorkoutPlan.as_str(), after_marker)
            .unwrap_or(response.len()),
    };

    let section = response[start..end].trim();
    if section.is_empty() {
        return None;
    }

    debug!(marker = %marker, start, end, "extracted plan section");
    Some(section)
}

/// Extract both sections from a response.
pub fn extract_sections(response: &str) -> PlanSections<'_> {
    PlanSections {
        meal: extract_plan_content(response, Marker::MealPlan),
        workout: extract_plan_content(response, Marker::WorkoutPlan),
    }
}

/// Byte offset of the first `needle` at or after `from`.
fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .find(needle)
        .map(|offset| offset + from)
}
