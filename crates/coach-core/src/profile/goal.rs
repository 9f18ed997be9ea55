//! Health goals and free-text goal classification.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::text::is_match;

// Amounts between the verb and the noun: `lose 5kgs weight`, `shed some fat`.
static WEIGHT_LOSS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:lose|loose|shed|drop|burn|cut)\s+(?:(?:some|the|extra|a\s+few|\d+(?:\.\d+)?\s*(?:kgs?|kilos?|lbs?|pounds?))\s+(?:of\s+)?)?(?:weight|fat|belly)\b|\b(?:fat|weight)\s+loss\b|\bslim\s+down\b|\blose\s+\d",
    )
    .ok()
});

static MUSCLE_GAIN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:gain|build|increase|put\s+on)\s+(?:(?:some|more|lean|extra)\s+)?(?:muscle|muscel|mass|weight)\b|\bmuscle\s+gain\b|\bbulk(?:ing)?\b",
    )
    .ok()
});

static GET_STRONGER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:get|getting|become|feel)\s+strong(?:er)?\b|\b(?:increase|build)\s+strength\b|\blift\s+heavier\b",
    )
    .ok()
});

static GET_FLEXIBLE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:become|get|improve)\s+(?:more\s+)?(?:flexible|flexibility|mobility)\b|\b(?:yoga|stretching|mobility\s+training)\b",
    )
    .ok()
});

static GET_FIT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bget(?:ting)?\s+fit\b|\b(?:stay|keep)\s+(?:active|healthy|fit)\b|\boverall\s+fitness\b|\bimprove\s+(?:my\s+)?fitness\b",
    )
    .ok()
});

/// What the user wants the plan to achieve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    #[default]
    GetFit,
    GetStronger,
    GetFlexible,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::WeightLoss,
        Goal::MuscleGain,
        Goal::GetFit,
        Goal::GetStronger,
        Goal::GetFlexible,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::GetFit => "get_fit",
            Self::GetStronger => "get_stronger",
            Self::GetFlexible => "get_flexible",
        }
    }

    /// Adjustment applied to TDEE for the daily calorie target.
    pub const fn calorie_offset(self) -> i32 {
        match self {
            Self::WeightLoss => -500,
            Self::MuscleGain => 500,
            Self::GetStronger => 300,
            Self::GetFit | Self::GetFlexible => 0,
        }
    }

    /// Training emphasis the workout plan should follow.
    pub const fn workout_focus(self) -> &'static str {
        match self {
            Self::WeightLoss => "Fat Burn & Cardio",
            Self::MuscleGain => "Strength & Hypertrophy",
            Self::GetFit => "Mixed Cardio and Strength",
            Self::GetStronger => "Progressive Overload & Compound Lifts",
            Self::GetFlexible => "Mobility, Yoga, and Stretching",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = GoalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| GoalParseError(s.to_owned()))
    }
}

/// Error returned when parsing an unrecognized [`Goal`] string.
#[derive(Debug, Clone, Error)]
#[error(
    "unknown goal {0:?} (expected weight_loss, muscle_gain, get_fit, get_stronger or get_flexible)"
)]
pub struct GoalParseError(pub String);

/// Goal stated in free text, if any.
///
/// Categories are tried in a fixed order (loss, gain, strength,
/// flexibility, general fitness) and the first match wins.
pub fn detect_goal(text: &str) -> Option<Goal> {
    [
        (&WEIGHT_LOSS, Goal::WeightLoss),
        (&MUSCLE_GAIN, Goal::MuscleGain),
        (&GET_STRONGER, Goal::GetStronger),
        (&GET_FLEXIBLE, Goal::GetFlexible),
        (&GET_FIT, Goal::GetFit),
    ]
    .into_iter()
    .find(|(pattern, _)| is_match(pattern, text))
    .map(|(_, goal)| goal)
}

/// Goal stated in free text, defaulting to [`Goal::GetFit`].
pub fn classify_goal_from_text(text: &str) -> Goal {
    detect_goal(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_phrasings() {
        let cases = [
            ("I want to lose weight before summer", Goal::WeightLoss),
            ("need to shed some fat", Goal::WeightLoss),
            ("want to loose 5kgs weight", Goal::WeightLoss),
            ("fat loss is the priority", Goal::WeightLoss),
            ("help me slim down", Goal::WeightLoss),
            ("want to gain muscel", Goal::MuscleGain),
            ("build lean muscle", Goal::MuscleGain),
            ("winter bulking", Goal::MuscleGain),
            ("I want to get stronger", Goal::GetStronger),
            ("lift heavier by spring", Goal::GetStronger),
            ("improve flexibility", Goal::GetFlexible),
            ("more yoga please", Goal::GetFlexible),
            ("thinking about getting fit", Goal::GetFit),
            ("just want to stay healthy", Goal::GetFit),
        ];
        for (text, expected) in cases {
            assert_eq!(classify_goal_from_text(text), expected, "{text}");
        }
    }

    #[test]
    fn weight_loss_checked_before_fitness() {
        assert_eq!(
            classify_goal_from_text("get fit and lose weight"),
            Goal::WeightLoss
        );
    }

    #[test]
    fn unmatched_text_defaults_to_get_fit() {
        assert_eq!(detect_goal("make me a plan"), None);
        assert_eq!(classify_goal_from_text("make me a plan"), Goal::GetFit);
    }

    #[test]
    fn offsets_and_focus() {
        assert_eq!(Goal::WeightLoss.calorie_offset(), -500);
        assert_eq!(Goal::MuscleGain.calorie_offset(), 500);
        assert_eq!(Goal::GetStronger.calorie_offset(), 300);
        assert_eq!(Goal::GetFlexible.calorie_offset(), 0);
        assert_eq!(Goal::WeightLoss.workout_focus(), "Fat Burn & Cardio");
        assert_eq!(Goal::GetFit.workout_focus(), "Mixed Cardio and Strength");
    }

    #[test]
    fn parse_and_display() {
        for goal in Goal::ALL {
            assert_eq!(goal.to_string().parse::<Goal>().unwrap(), goal);
        }
        assert_eq!("Muscle Gain".parse::<Goal>().unwrap(), Goal::MuscleGain);
        assert_eq!("get-fit".parse::<Goal>().unwrap(), Goal::GetFit);
        assert!("world peace".parse::<Goal>().is_err());
    }
}
