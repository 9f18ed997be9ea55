//! Activity level: keyword and weekly-frequency detection, TDEE multipliers.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::text::{captures, is_match, number};

static VERY_ACTIVE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:very|extremely|super|highly)\s+active\b|\bprofessional\s+athlete\b|\btwice\s+a\s+day\b|\bphysically\s+demanding\s+job\b",
    )
    .ok()
});

static SEDENTARY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:sedentary|inactive|couch\s*potato|desk\s+job|office\s+job)\b|\b(?:never|rarely|don'?t|do\s+not)\s+(?:exercise|work\s*out|train)\b|\bno\s+exercise\b",
    )
    .ok()
});

static MODERATE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bmoderate(?:ly)?\b|\bregular(?:ly)?\s+(?:exercise|work\s*out|train)|\b(?:exercise|work\s*out|train)\s+regularly\b",
    )
    .ok()
});

static LIGHT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\blight(?:ly)?\s+(?:active|exercise|activity)\b|\b(?:occasionally|sometimes)\b|\bwalking\b")
        .ok()
});

static ACTIVE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bactive\b|\bathlete\b|\bgym\s*rat\b|\b(?:exercise|work\s*out|train)\s+(?:daily|every\s*day)\b|\bdaily\s+(?:exercise|workouts?|training)\b",
    )
    .ok()
});

// `3 times a week`, `4-5 days per week`, `7days a week`
static WEEKLY_SESSIONS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})(?:\s*(?:-|to)\s*(\d{1,2}))?\s*(?:times|x|days|sessions)\s*(?:a|per|each|every|/)\s*week\b",
    )
    .ok()
});

/// How active the user is day to day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very active",
        }
    }

    /// Multiplier applied to BMR to get total daily energy expenditure.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }

    /// Level implied by a number of training sessions per week.
    pub const fn from_weekly_sessions(sessions: u32) -> Self {
        match sessions {
            0 => Self::Sedentary,
            1..=2 => Self::Light,
            3..=4 => Self::Moderate,
            5..=6 => Self::Active,
            _ => Self::VeryActive,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityLevel {
    type Err = ActivityLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly active" => Ok(Self::Light),
            "moderate" | "moderately active" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very active" => Ok(Self::VeryActive),
            _ => Err(ActivityLevelParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an unrecognized [`ActivityLevel`] string.
#[derive(Debug, Clone, Error)]
#[error("unknown activity level {0:?} (expected sedentary, light, moderate, active or very active)")]
pub struct ActivityLevelParseError(pub String);

/// Activity level described in free text, if any.
///
/// Keywords are checked from most to least specific, so "very active" wins
/// over the bare "active" it contains. A stated weekly session count is the
/// fallback; the upper end of a range counts.
pub fn detect_activity_level(text: &str) -> Option<ActivityLevel> {
    let keywords = [
        (&VERY_ACTIVE, ActivityLevel::VeryActive),
        (&SEDENTARY, ActivityLevel::Sedentary),
        (&MODERATE, ActivityLevel::Moderate),
        (&LIGHT, ActivityLevel::Light),
        (&ACTIVE, ActivityLevel::Active),
    ];
    if let Some((_, level)) = keywords.iter().find(|(pattern, _)| is_match(pattern, text)) {
        return Some(*level);
    }

    let caps = captures(&WEEKLY_SESSIONS, text)?;
    let sessions: u32 = number(&caps, 2).or_else(|| number(&caps, 1))?;
    Some(ActivityLevel::from_weekly_sessions(sessions))
}
