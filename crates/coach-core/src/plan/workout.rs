//! Workout plan section parser and focus-area classification.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::text::{captures, collapse_whitespace, content_lines, number};

// `Day 1: Upper Body`, `Day 2 - Legs:`, `WORKOUT_PLAN:Day 1`
static DAY_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:WORKOUT_PLAN:)?[-•●#\s]*Day\s*(\d+)\b\s*[-:]?\s*(.*)$").ok()
});

static EXERCISE_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\s*[.)]|[-•●])\s*(.+)$").ok());

static WORKOUT_WORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)work\s*out|exercise|training").ok());

static MEAL_WORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)meal|breakfast|lunch|dinner|snack").ok());

static WORKOUT_DAY_WORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)day\s*\d+|exercise|workout|training").ok());

/// Training focus of a plan day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FocusArea {
    #[serde(rename = "Upper Body")]
    UpperBody,
    #[serde(rename = "Lower Body")]
    LowerBody,
    #[serde(rename = "Cardio & Endurance")]
    CardioEndurance,
    #[serde(rename = "Core & Abs")]
    CoreAbs,
    #[serde(rename = "Total Body")]
    TotalBody,
    #[serde(rename = "Flexibility & Recovery")]
    FlexibilityRecovery,
    #[serde(rename = "HIIT Training")]
    Hiit,
    #[serde(rename = "Mixed Training")]
    Mixed,
    #[serde(rename = "Rest Day")]
    Rest,
}

impl FocusArea {
    /// Weekly rotation used when the model leaves a day unlabeled.
    const ROTATION: [FocusArea; 7] = [
        FocusArea::UpperBody,
        FocusArea::LowerBody,
        FocusArea::CardioEndurance,
        FocusArea::CoreAbs,
        FocusArea::TotalBody,
        FocusArea::FlexibilityRecovery,
        FocusArea::Hiit,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::UpperBody => "Upper Body",
            Self::LowerBody => "Lower Body",
            Self::CardioEndurance => "Cardio & Endurance",
            Self::CoreAbs => "Core & Abs",
            Self::TotalBody => "Total Body",
            Self::FlexibilityRecovery => "Flexibility & Recovery",
            Self::Hiit => "HIIT Training",
            Self::Mixed => "Mixed Training",
            Self::Rest => "Rest Day",
        }
    }

    /// Default focus for a 1-based day number.
    pub fn for_day(day: usize) -> Self {
        Self::ROTATION[day.saturating_sub(1) % Self::ROTATION.len()]
    }

    /// Classify a free-text day label by keyword.
    pub fn classify(label: &str) -> Self {
        let label = label.to_lowercase();
        let has = |word: &str| label.contains(word);

        if has("rest") {
            Self::Rest
        } else if has("cardio") {
            Self::CardioEndurance
        } else if has("lower") {
            Self::LowerBody
        } else if has("upper") {
            Self::UpperBody
        } else if has("hiit") {
            Self::Hiit
        } else if has("active") || has("recovery") {
            Self::FlexibilityRecovery
        } else if has("total") {
            Self::TotalBody
        } else if has("core") || has("abs") {
            Self::CoreAbs
        } else {
            Self::Mixed
        }
    }
}

impl fmt::Display for FocusArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    /// 1-based position within the day.
    pub number: usize,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutDay {
    /// 1-based day number.
    pub day: usize,
    /// Label as written by the model ("Upper Body", "Cardio & Core").
    pub label: String,
    pub focus: FocusArea,
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    fn new(day: usize) -> Self {
        Self {
            day,
            label: String::new(),
            focus: FocusArea::Rest,
            exercises: Vec::new(),
        }
    }

    pub fn is_rest(&self) -> bool {
        self.focus == FocusArea::Rest
    }

    /// Settle label and focus once every line has been read.
    ///
    /// Days labeled as rest, and days without exercises, become rest days.
    fn finish(&mut self) {
        let labeled_rest = self.label.to_lowercase().contains("rest");
        if labeled_rest || self.exercises.is_empty() {
            self.exercises.clear();
            self.label = FocusArea::Rest.name().to_owned();
            self.focus = FocusArea::Rest;
            return;
        }

        for (index, exercise) in self.exercises.iter_mut().enumerate() {
            exercise.number = index + 1;
        }
        self.focus = FocusArea::classify(&self.label);
    }
}

/// Parse a workout section into exactly `days` days.
pub fn parse_workout_plan(section: &str, days: usize) -> Vec<WorkoutDay> {
    let mut plan: Vec<WorkoutDay> = (1..=days).map(WorkoutDay::new).collect();
    let mut current_day: Option<usize> = None;

    for line in content_lines(section) {
        if let Some(caps) = captures(&DAY_HEADER, line) {
            current_day = number::<usize>(&caps, 1).filter(|day| (1..=days).contains(day));
            let Some(day) = current_day else {
                warn!(line, days, "workout day out of range, skipping");
                continue;
            };

            let label = caps
                .get(2)
                .map(|m| collapse_whitespace(&m.as_str().replace(':', "")))
                .unwrap_or_default();
            plan[day - 1].label = if is_generic_label(&label) {
                FocusArea::for_day(day).name().to_owned()
            } else {
                label
            };
            debug!(day, label = %plan[day - 1].label, "workout day");
            continue;
        }

        let Some(day) = current_day else {
            continue;
        };
        if let Some(caps) = captures(&EXERCISE_LINE, line) {
            let exercises = &mut plan[day - 1].exercises;
            exercises.push(Exercise {
                number: exercises.len() + 1,
                description: collapse_whitespace(&caps[1]),
            });
        }
    }

    for day in &mut plan {
        day.finish();
    }
    plan
}

/// Recover workout lines from a response that lacks a `WORKOUT_PLAN:` marker.
///
/// Collection starts at the first line that mentions working out or
/// training without mentioning a meal. After that, meal lines are skipped
/// unless they also name a day or exercise. Returns `None` if nothing
/// collected looks like a workout.
pub fn scavenge_workout_lines(text: &str) -> Option<String> {
    let (Some(workout), Some(meal), Some(workout_day)) = (
        WORKOUT_WORDS.as_ref(),
        MEAL_WORDS.as_ref(),
        WORKOUT_DAY_WORDS.as_ref(),
    ) else {
        return None;
    };

    let mut collected: Vec<&str> = Vec::new();
    for line in text.lines() {
        let keep = if collected.is_empty() {
            workout.is_match(line) && !meal.is_match(line)
        } else {
            !meal.is_match(line) || workout_day.is_match(line)
        };
        if keep {
            collected.push(line);
        }
    }

    let joined = collected.join("\n");
    if joined.trim().is_empty() || !workout_day.is_match(&joined) {
        return None;
    }
    debug!(lines = collected.len(), "scavenged workout lines");
    Some(joined)
}

fn is_generic_label(label: &str) -> bool {
    label.is_empty() || label.eq_ignore_ascii_case("day") || label.eq_ignore_ascii_case("workout")
}
