//! Body measurements and preferences stated in a free-text prompt.
//!
//! Prompts are messy ("yo im like 22, maybe 6ft, around 160lbs, guy btw"),
//! so each field is collected as a set of scored candidates. A candidate
//! starts from a base confidence for the pattern that found it and gains a
//! bonus when a field cue ("tall", "weigh", "age") or a self-description
//! cue ("i'm", "about") sits nearby. The best candidate at or above
//! [`CONFIDENCE_THRESHOLD`] wins; ties go to the earliest mention.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, Local, NaiveDate};
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::{debug, warn};

use super::activity::{ActivityLevel, detect_activity_level};
use super::goal::{Goal, detect_goal};
use super::units::{LengthUnit, MassUnit, height_to_cm, weight_to_kg};
use crate::text::{captures_iter, collapse_whitespace, is_match, number};

/// Minimum confidence for a candidate value to be kept.
pub const CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Plausible ages for a fitness plan.
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 13..=120;

/// BMI values outside this range usually mean a misread unit.
const PLAUSIBLE_BMI: std::ops::RangeInclusive<f64> = 15.0..=45.0;

const CUE_BONUS: f32 = 0.2;
const SELF_BONUS: f32 = 0.1;
const CUE_WINDOW: usize = 24;

// `5'10"`, `5 feet 6 inches`, `6ft`, `5.5ft`
static FEET_INCHES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#"\b(\d(?:\.\d+)?)\s*(ft|feet|foot|')\s*(?:and\s+)?(?:(\d{1,2}(?:\.\d+)?)\s*(?:inches|inch|in\b|"|''))?"#,
    )
    .ok()
});

// `175cm`, `1.75m`, `170 to 175cm`
static METRIC_HEIGHT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(\d+(?:\.\d+)?)(?:\s*(?:-|–|to)\s*(\d+(?:\.\d+)?))?\s*(cm|centimet(?:er|re)s?|met(?:er|re)s?|m)\b",
    )
    .ok()
});

static HEIGHT_CUE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:height|hieght|heigth|tall|stand(?:s|ing)?|measured)\b").ok()
});

// `180 lbs`, `68kgs`, `65-70kg`
static WEIGHT: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(\d+(?:\.\d+)?)(?:\s*(?:-|–|to)\s*(\d+(?:\.\d+)?))?\s*(kgs?|kilos?|kilogrammes?|kilograms?|lbs?|pounds?)\b",
    )
    .ok()
});

static WEIGHT_CUE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:weigh\w*|weight|wieght|scale)\b").ok());

static TARGET_CUE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:target|goal|desired|reach|get\s+(?:down\s+)?to|down\s+to)\b").ok()
});

// The amount right after `lose` / `gain` is a change, not a body weight.
static DELTA_CUE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:lose|loose|gain|shed|drop|put\s+on)\s+(?:about\s+|around\s+)?$").ok()
});

// `25 years old`, `28-year-old`, `75 yrs`, `75 yo`
static AGE_YEARS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,3})\s*-?\s*(?:years?|yrs?|y/o|y\.o|yo)\b(?:[\s-]*old)?").ok()
});

// `age: 35`, `my age is 75`, `aged 40`
static AGE_LABEL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:age|aged)\s*(?:is|:|=|of)?\s*(\d{1,3})\b").ok());

// `i'm 40`, `im like 22`, `i am 36m` (trailing m/f is gender shorthand)
static I_AM_AGE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\bi\s*(?:am|'m|m)\s+(?:a\s+)?(?:around\s+|about\s+|like\s+|only\s+|almost\s+|nearly\s+)?(\d{1,3})(?:\s*(m|f))?\b",
    )
    .ok()
});

// A number followed by a unit is a measurement, not an age.
static UNIT_AFTER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:kg|kilo|lb|pound|cm|centimet|met(?:er|re)|m\b|ft|feet|foot|inch|'|"|%)"#).ok()
});

// `born on 15/04/1990`, `dob: 1990-12-25`
static DATE_OF_BIRTH: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:born|dob|date\s+of\s+birth|birth\s*date)\s*(?::|is|on)?\s*(\d{1,4})[-./](\d{1,2})[-./](\d{1,4})\b",
    )
    .ok()
});

static BIRTH_YEAR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\bborn\s+in\s+((?:19|20)\d{2})\b").ok());

static GENDER_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(non-binary|nonbinary|enby|female|femal|male|woman|man|girl|boy|guy|lady|gentleman)\b",
    )
    .ok()
});

static GENDER_CUE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:gender|sex|identify)\b").ok());

static PRONOUNS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\bi\s+use\s+(he/him|she/her|they/them)\b").ok());

static THIRD_PERSON: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(he|him|his|she|her|hers)\b").ok());

static SELF_CUE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:my|i\s*am|i'm|im|current(?:ly)?|about|around|approximately|roughly)\b").ok()
});

static DIET_TYPE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(non-vegetarian|vegan|vegetarian|pescatarian|flexitarian|keto|paleo|mediterranean|gluten-free|dairy-free|halal|kosher)\b",
    )
    .ok()
});

static AVOIDED_FOOD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:avoid|no|don'?t\s+eat|can'?t\s+eat|cannot\s+eat|do\s+not\s+eat)\s+(meat|dairy|gluten|fish|eggs|soy|pork|beef|sugar)\b",
    )
    .ok()
});

// Capture stops at punctuation or where a new clause starts.
static ALLERGY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:(?:allergic|intolerant|sensitive)\s+to|(?:allerg(?:y|ies)|intolerances?)\s*(?::|to|include|are)?)\s*([a-z][a-z\s&/-]*?)\s*(?:[.,!?;]|\b(?:and\s+)?(?:i|i'm|im|my|but|so|want|need)\b|$)",
    )
    .ok()
});

static LIST_SEPARATOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s+and\s+|\s+or\s+|\s*&\s*|\s*/\s*").ok());

// `plan for 12 weeks`, `6months`, `8weeks plan`
static TIMELINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,3})\s*-?\s*(weeks?|wks?|months?)\b").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::NonBinary => "non-binary",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        match word {
            "male" | "man" | "boy" | "guy" | "gentleman" | "m" | "he/him" => Some(Self::Male),
            "female" | "femal" | "woman" | "girl" | "lady" | "f" | "she/her" => Some(Self::Female),
            "non-binary" | "nonbinary" | "enby" | "they/them" => Some(Self::NonBinary),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything recognized in a user prompt. Absent fields were not stated
/// (or not stated clearly enough to pass the confidence threshold).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Measurements {
    pub height_cm: Option<u32>,
    pub weight_kg: Option<f64>,
    pub target_weight_kg: Option<f64>,
    pub age: Option<u32>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub health_goal: Option<Goal>,
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    pub timeline_weeks: Option<u32>,
}

impl Measurements {
    /// True when at least one body measurement was found.
    pub fn has_body_measurements(&self) -> bool {
        self.height_cm.is_some() || self.weight_kg.is_some() || self.age.is_some()
    }

    /// BMI from the extracted height and weight, unrounded.
    pub fn bmi(&self) -> Option<f64> {
        let height_m = f64::from(self.height_cm?) / 100.0;
        Some(self.weight_kg? / (height_m * height_m))
    }
}

struct Candidate<T> {
    value: T,
    confidence: f32,
    start: usize,
}

impl<T> Candidate<T> {
    fn new(value: T, confidence: f32, start: usize) -> Self {
        Self {
            value,
            confidence: confidence.min(1.0),
            start,
        }
    }
}

/// Highest-confidence candidate at or above the threshold; earliest on ties.
fn best<T>(candidates: Vec<Candidate<T>>) -> Option<Candidate<T>> {
    candidates
        .into_iter()
        .filter(|c| c.confidence >= CONFIDENCE_THRESHOLD)
        .reduce(|kept, next| {
            let stronger = next.confidence > kept.confidence;
            let earlier_tie = next.confidence == kept.confidence && next.start < kept.start;
            if stronger || earlier_tie {
                next
            } else {
                kept
            }
        })
}

/// Byte window around `start..end`, widened to char boundaries.
fn window(text: &str, start: usize, end: usize, before: usize, after: usize) -> &str {
    let mut lo = start.saturating_sub(before);
    while !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = end.saturating_add(after).min(text.len());
    while !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[lo..hi]
}

fn score(
    text: &str,
    caps: &Captures<'_>,
    base: f32,
    field_cue: Option<&LazyLock<Option<Regex>>>,
) -> (f32, usize) {
    let Some(whole) = caps.get(0) else {
        return (0.0, 0);
    };
    let mut confidence = base;
    if is_match(&SELF_CUE, window(text, whole.start(), whole.start(), CUE_WINDOW, 0)) {
        confidence += SELF_BONUS;
    }
    if let Some(cue) = field_cue {
        let around = window(text, whole.start(), whole.end(), CUE_WINDOW, CUE_WINDOW);
        if is_match(cue, around) {
            confidence += CUE_BONUS;
        }
    }
    (confidence, whole.start())
}

/// A single value, or the midpoint of a `low-high` range.
fn value_or_midpoint(caps: &Captures<'_>, low_group: usize, high_group: usize) -> Option<f64> {
    let low: f64 = number(caps, low_group)?;
    Some(match number::<f64>(caps, high_group) {
        Some(high) => (low + high) / 2.0,
        None => low,
    })
}

fn clean_prompt(prompt: &str) -> String {
    let lowered = prompt
        .to_lowercase()
        .replace(['\u{2018}', '\u{2019}', '\u{2032}'], "'")
        .replace(['\u{201c}', '\u{201d}', '\u{2033}'], "\"");
    collapse_whitespace(&lowered)
}

fn find_height(text: &str) -> Option<Candidate<u32>> {
    let mut candidates = Vec::new();

    for caps in captures_iter(&FEET_INCHES, text) {
        let Some(feet) = number::<f64>(&caps, 1) else {
            continue;
        };
        let inches = number::<f64>(&caps, 3);
        if let Some(cm) = height_to_cm(feet, LengthUnit::Feet, inches) {
            let (confidence, start) = score(text, &caps, 0.6, Some(&HEIGHT_CUE));
            candidates.push(Candidate::new(cm, confidence, start));
        }
    }

    for caps in captures_iter(&METRIC_HEIGHT, text) {
        let unit = caps.get(3).and_then(|m| LengthUnit::from_token(m.as_str()));
        let (Some(value), Some(unit)) = (value_or_midpoint(&caps, 1, 2), unit) else {
            continue;
        };
        if let Some(cm) = height_to_cm(value, unit, None) {
            let (confidence, start) = score(text, &caps, 0.6, Some(&HEIGHT_CUE));
            candidates.push(Candidate::new(cm, confidence, start));
        }
    }

    best(candidates)
}

/// Current and target weight candidates, split by the cue in front.
fn find_weights(text: &str) -> (Option<Candidate<f64>>, Option<Candidate<f64>>) {
    let mut current = Vec::new();
    let mut target = Vec::new();

    for caps in captures_iter(&WEIGHT, text) {
        let unit = caps.get(3).and_then(|m| MassUnit::from_token(m.as_str()));
        let (Some(whole), Some(value), Some(unit)) =
            (caps.get(0), value_or_midpoint(&caps, 1, 2), unit)
        else {
            continue;
        };
        let before = window(text, whole.start(), whole.start(), CUE_WINDOW, 0);
        if is_match(&DELTA_CUE, before) {
            debug!(amount = whole.as_str(), "skipping weight change amount");
            continue;
        }
        let Some(kg) = weight_to_kg(value, unit) else {
            continue;
        };
        let (confidence, start) = score(text, &caps, 0.6, Some(&WEIGHT_CUE));
        let candidate = Candidate::new(kg, confidence, start);
        if is_match(&TARGET_CUE, before) {
            target.push(candidate);
        } else {
            current.push(candidate);
        }
    }

    (best(current), best(target))
}

fn followed_by_unit(text: &str, caps: &Captures<'_>) -> bool {
    caps.get(0)
        .is_some_and(|whole| is_match(&UNIT_AFTER, &text[whole.end()..]))
}

fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

fn parse_birth_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let first = caps.get(1)?.as_str();
    let month: u32 = number(caps, 2)?;
    let last = caps.get(3)?.as_str();
    if first.len() == 4 {
        NaiveDate::from_ymd_opt(first.parse().ok()?, month, last.parse().ok()?)
    } else if last.len() == 4 {
        NaiveDate::from_ymd_opt(last.parse().ok()?, month, first.parse().ok()?)
    } else {
        None
    }
}

fn find_age(text: &str, today: NaiveDate) -> (Option<Candidate<u32>>, Option<NaiveDate>) {
    let mut candidates = Vec::new();
    let mut birth_date = None;

    for caps in captures_iter(&DATE_OF_BIRTH, text) {
        let Some(date) = parse_birth_date(&caps) else {
            continue;
        };
        let Some(age) = age_on(date, today) else {
            continue;
        };
        let (confidence, start) = score(text, &caps, 0.9, None);
        candidates.push(Candidate::new(age, confidence, start));
        birth_date.get_or_insert(date);
    }

    for caps in captures_iter(&BIRTH_YEAR, text) {
        let age = number::<i32>(&caps, 1).and_then(|year| u32::try_from(today.year() - year).ok());
        if let Some(age) = age {
            let (confidence, start) = score(text, &caps, 0.7, None);
            candidates.push(Candidate::new(age, confidence, start));
        }
    }

    for (pattern, base) in [(&AGE_LABEL, 0.8), (&AGE_YEARS, 0.7), (&I_AM_AGE, 0.6)] {
        for caps in captures_iter(pattern, text) {
            if followed_by_unit(text, &caps) {
                continue;
            }
            if let Some(age) = number::<u32>(&caps, 1) {
                let (confidence, start) = score(text, &caps, base, None);
                candidates.push(Candidate::new(age, confidence, start));
            }
        }
    }

    candidates.retain(|c| AGE_RANGE.contains(&c.value));
    (best(candidates), birth_date)
}

fn find_gender(text: &str) -> Option<Candidate<Gender>> {
    let mut candidates = Vec::new();

    for caps in captures_iter(&GENDER_WORD, text) {
        if let Some(gender) = caps.get(1).and_then(|m| Gender::from_word(m.as_str())) {
            let (confidence, start) = score(text, &caps, 0.6, Some(&GENDER_CUE));
            candidates.push(Candidate::new(gender, confidence, start));
        }
    }
    for caps in captures_iter(&PRONOUNS, text) {
        if let Some(gender) = caps.get(1).and_then(|m| Gender::from_word(m.as_str())) {
            let (confidence, start) = score(text, &caps, 0.8, None);
            candidates.push(Candidate::new(gender, confidence, start));
        }
    }
    for caps in captures_iter(&I_AM_AGE, text) {
        if followed_by_unit(text, &caps) {
            continue;
        }
        if let Some(gender) = caps.get(2).and_then(|m| Gender::from_word(m.as_str())) {
            let (confidence, start) = score(text, &caps, 0.7, None);
            candidates.push(Candidate::new(gender, confidence, start));
        }
    }

    best(candidates)
}

fn find_dietary_restrictions(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let diets = captures_iter(&DIET_TYPE, text).filter_map(|caps| Some(caps.get(1)?.as_str().to_owned()));
    let avoided =
        captures_iter(&AVOIDED_FOOD, text).filter_map(|caps| Some(format!("no {}", caps.get(1)?.as_str())));
    for entry in diets.chain(avoided) {
        if !found.contains(&entry) {
            found.push(entry);
        }
    }
    found
}

fn find_allergies(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for caps in captures_iter(&ALLERGY, text) {
        let Some(list) = caps.get(1) else {
            continue;
        };
        let items: Vec<&str> = match LIST_SEPARATOR.as_ref() {
            Some(separator) => separator.split(list.as_str()).collect(),
            None => vec![list.as_str()],
        };
        for item in items.into_iter().map(str::trim).filter(|item| !item.is_empty()) {
            if !found.iter().any(|known| known == item) {
                found.push(item.to_owned());
            }
        }
    }
    found
}

/// Plan length in weeks; months convert at 52/12 weeks each.
fn find_timeline_weeks(text: &str) -> Option<u32> {
    captures_iter(&TIMELINE, text).find_map(|caps| {
        let amount: u32 = number(&caps, 1)?;
        let unit = caps.get(2)?.as_str();
        if amount == 0 {
            return None;
        }
        if unit.starts_with("mo") {
            Some((f64::from(amount) * 52.0 / 12.0).round() as u32)
        } else {
            Some(amount)
        }
    })
}

/// Pronouns that contradict the detected gender are logged, not applied.
fn check_pronouns(text: &str, gender: Gender) {
    let contradicting = captures_iter(&THIRD_PERSON, text)
        .filter_map(|caps| caps.get(1))
        .find(|m| match gender {
            Gender::Male => matches!(m.as_str(), "she" | "her" | "hers"),
            Gender::Female => matches!(m.as_str(), "he" | "him" | "his"),
            Gender::NonBinary => false,
        });
    if let Some(pronoun) = contradicting {
        warn!(%gender, pronoun = pronoun.as_str(), "pronoun does not match stated gender");
    }
}

/// Extract measurements from a prompt, computing ages against today's date.
pub fn extract_measurements(prompt: &str) -> Measurements {
    extract_measurements_on(prompt, Local::now().date_naive())
}

/// Extract measurements from a prompt, computing ages as of `today`.
pub fn extract_measurements_on(prompt: &str, today: NaiveDate) -> Measurements {
    let text = clean_prompt(prompt);

    let height = find_height(&text);
    let (weight, target) = find_weights(&text);
    let (age, date_of_birth) = find_age(&text, today);
    let gender = find_gender(&text);

    if let Some(c) = &height {
        debug!(height_cm = c.value, confidence = c.confidence, "height");
    }
    if let Some(c) = &weight {
        debug!(weight_kg = c.value, confidence = c.confidence, "weight");
    }
    if let Some(c) = &age {
        debug!(age = c.value, confidence = c.confidence, "age");
    }
    if let Some(c) = &gender {
        debug!(gender = %c.value, confidence = c.confidence, "gender");
        check_pronouns(&text, c.value);
    }

    let measurements = Measurements {
        height_cm: height.map(|c| c.value),
        weight_kg: weight.map(|c| c.value),
        target_weight_kg: target.map(|c| c.value),
        age: age.map(|c| c.value),
        date_of_birth,
        gender: gender.map(|c| c.value),
        activity_level: detect_activity_level(&text),
        health_goal: detect_goal(&text),
        dietary_restrictions: find_dietary_restrictions(&text),
        allergies: find_allergies(&text),
        timeline_weeks: find_timeline_weeks(&text),
    };

    if let Some(bmi) = measurements.bmi().filter(|bmi| !PLAUSIBLE_BMI.contains(bmi)) {
        warn!(
            bmi,
            height_cm = measurements.height_cm,
            weight_kg = measurements.weight_kg,
            "implausible height and weight combination; check units"
        );
    }

    measurements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn extract(prompt: &str) -> Measurements {
        extract_measurements_on(prompt, today())
    }

    fn assert_near(actual: Option<f64>, expected: f64, tolerance: f64) {
        let actual = actual.unwrap_or_else(|| panic!("expected ~{expected}, got None"));
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    fn assert_height(m: &Measurements, expected: u32, tolerance: u32) {
        assert_near(m.height_cm.map(f64::from), f64::from(expected), f64::from(tolerance));
    }

    #[test]
    fn standard_imperial_description() {
        let m = extract(r#"I am 25 years old, 5'10" tall, weigh 180 lbs, male, moderately active"#);
        assert_eq!(m.height_cm, Some(178));
        assert_eq!(m.weight_kg, Some(81.6));
        assert_eq!(m.age, Some(25));
        assert_eq!(m.gender, Some(Gender::Male));
        assert_eq!(m.activity_level, Some(ActivityLevel::Moderate));
    }

    #[test]
    fn hedged_metric_description() {
        let m = extract(
            "I'm around 30, about 175cm tall, roughly 70kg, probably male, I think I exercise sometimes",
        );
        assert_eq!(m.height_cm, Some(175));
        assert_eq!(m.weight_kg, Some(70.0));
        assert_eq!(m.age, Some(30));
        assert_eq!(m.gender, Some(Gender::Male));
        assert_eq!(m.activity_level, Some(ActivityLevel::Light));
    }

    #[test]
    fn narrative_feet_and_pounds() {
        let m = extract(
            "Hey, I'm a 28-year-old woman who stands at approximately 5 feet 6 inches \
             and currently weighs somewhere around 140 pounds",
        );
        assert_eq!(m.height_cm, Some(168));
        assert_eq!(m.weight_kg, Some(63.5));
        assert_eq!(m.age, Some(28));
        assert_eq!(m.gender, Some(Gender::Female));
    }

    #[test]
    fn clinical_phrasing() {
        let m = extract("Doctor said I'm 32 years old, measured me at 180cm, scale showed 85kg, male patient");
        assert_eq!(m.height_cm, Some(180));
        assert_eq!(m.weight_kg, Some(85.0));
        assert_eq!(m.age, Some(32));
        assert_eq!(m.gender, Some(Gender::Male));
    }

    #[test]
    fn ranges_use_the_midpoint() {
        let m = extract(
            "I'm between 25-30 years old, height is from 170 to 175cm, weight varies between 65-70kg",
        );
        assert_height(&m, 172, 2);
        assert_near(m.weight_kg, 67.0, 2.0);
    }

    #[test]
    fn casual_slang() {
        let m = extract(
            "yo im like 22 or something, pretty tall maybe 6ft, dunno my weight but probably around 160lbs, guy btw",
        );
        assert_eq!(m.height_cm, Some(183));
        assert_eq!(m.weight_kg, Some(72.6));
        assert_eq!(m.age, Some(22));
        assert_eq!(m.gender, Some(Gender::Male));
    }

    #[test]
    fn labeled_fields() {
        let m = extract("Age: 35, Height: 1.75m, Weight: 150lbs, Gender: Female, Activity: Very active");
        assert_eq!(m.age, Some(35));
        assert_eq!(m.height_cm, Some(175));
        assert_eq!(m.weight_kg, Some(68.0));
        assert_eq!(m.gender, Some(Gender::Female));
        assert_eq!(m.activity_level, Some(ActivityLevel::VeryActive));
    }

    #[test]
    fn goals_diet_and_allergies() {
        let m = extract("I'm 40, 170cm, 80kg, male, want to lose weight, allergic to nuts, vegetarian diet");
        assert_eq!(m.age, Some(40));
        assert_eq!(m.height_cm, Some(170));
        assert_eq!(m.weight_kg, Some(80.0));
        assert_eq!(m.health_goal, Some(Goal::WeightLoss));
        assert_eq!(m.allergies, vec!["nuts"]);
        assert_eq!(m.dietary_restrictions, vec!["vegetarian"]);
    }

    #[test]
    fn long_rambling_prompt() {
        let m = extract(
            "So basically, I've been thinking about getting fit and I'm currently a 27-year-old male \
             who happens to be about 5'9\" in height and my last weigh-in showed 175 pounds",
        );
        assert_eq!(m.height_cm, Some(175));
        assert_eq!(m.weight_kg, Some(79.4));
        assert_eq!(m.age, Some(27));
        assert_eq!(m.gender, Some(Gender::Male));
        assert_eq!(m.health_goal, Some(Goal::GetFit));
    }

    #[test]
    fn common_typos() {
        let m = extract("im 26 yrs old, hieght is 172cm, wieght about 68kgs, femal, want to gain muscel");
        assert_eq!(m.age, Some(26));
        assert_eq!(m.height_cm, Some(172));
        assert_eq!(m.weight_kg, Some(68.0));
        assert_eq!(m.gender, Some(Gender::Female));
        assert_eq!(m.health_goal, Some(Goal::MuscleGain));
    }

    #[test]
    fn goal_and_activity_without_body_measurements() {
        let m = extract("I'm 30 years old and want to get stronger, very active lifestyle");
        assert_eq!(m.age, Some(30));
        assert_eq!(m.activity_level, Some(ActivityLevel::VeryActive));
        assert_eq!(m.health_goal, Some(Goal::GetStronger));
        assert_eq!(m.height_cm, None);
        assert_eq!(m.weight_kg, None);
    }

    #[test]
    fn written_out_numbers_are_not_guessed() {
        let m = extract("I'm twenty-five, five foot ten, about one-eighty pounds");
        assert_eq!(m.height_cm, None);
        assert_eq!(m.weight_kg, None);
        assert_eq!(m.age, None);
    }

    #[test]
    fn age_and_weight_phrasings() {
        let cases = [
            ("I am 75 yrs old and my weight is 39 kgs.", 75, 39.0),
            ("My age is 75 and I weigh 39 kilograms", 75, 39.0),
            ("75 years old, 39kg", 75, 39.0),
            ("Age: 75, Weight: 39 kgs", 75, 39.0),
            ("I'm a 75 year old person weighing 39 kgs", 75, 39.0),
            ("Currently 75 yo and 39 kilos", 75, 39.0),
            ("30 yrs old, weight is 65 kgs", 30, 65.0),
        ];
        for (prompt, age, weight) in cases {
            let m = extract(prompt);
            assert_eq!(m.age, Some(age), "{prompt}");
            assert_eq!(m.weight_kg, Some(weight), "{prompt}");
        }
    }

    #[test]
    fn timeline_phrasings() {
        let cases = [
            ("give me a plan for 6 months", 26),
            ("plan for 12 weeks", 12),
            ("want a plan for 3months", 13),
            ("need a 8weeks plan", 8),
            ("achieve this goal in 6months", 26),
            ("goal: 12weeks plan", 12),
        ];
        for (prompt, weeks) in cases {
            assert_eq!(extract(prompt).timeline_weeks, Some(weeks), "{prompt}");
        }
    }

    #[test]
    fn messy_prompt_with_shorthand_and_change_amount() {
        let m = extract(
            "i am 36m,haign 5.5ft and having 60kg want to loose 5kgs weight .i do sedentary activty \
             for 7days a week .give me a plan fro 6months to achgive my goal",
        );
        assert_eq!(m.age, Some(36));
        assert_eq!(m.gender, Some(Gender::Male));
        assert_eq!(m.height_cm, Some(168));
        assert_eq!(m.weight_kg, Some(60.0));
        assert_eq!(m.target_weight_kg, None);
        assert_eq!(m.activity_level, Some(ActivityLevel::Sedentary));
        assert_eq!(m.health_goal, Some(Goal::WeightLoss));
        assert_eq!(m.timeline_weeks, Some(26));
    }

    #[test]
    fn unit_after_number_is_not_an_age() {
        let m = extract("I am 70 kg and 180 cm");
        assert_eq!(m.age, None);
        assert_eq!(m.weight_kg, Some(70.0));
        assert_eq!(m.height_cm, Some(180));
    }

    #[test]
    fn target_weight_is_kept_apart() {
        let m = extract("I weigh 90kg and my target is 75kg");
        assert_eq!(m.weight_kg, Some(90.0));
        assert_eq!(m.target_weight_kg, Some(75.0));
    }

    #[test]
    fn birth_dates() {
        let m = extract("born on 15/04/1990, 165cm");
        assert_eq!(m.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 15));
        assert_eq!(m.age, Some(36));

        let m = extract("DOB: 1990-12-25");
        assert_eq!(m.date_of_birth, NaiveDate::from_ymd_opt(1990, 12, 25));
        assert_eq!(m.age, Some(35));

        let m = extract("I was born in 2000");
        assert_eq!(m.age, Some(26));
        assert_eq!(m.date_of_birth, None);
    }

    #[test]
    fn ages_outside_range_are_dropped() {
        assert_eq!(extract("I'm 8 years old").age, None);
        assert_eq!(extract("age: 150").age, None);
    }

    #[test]
    fn pronouns_and_non_binary() {
        assert_eq!(extract("I use she/her pronouns").gender, Some(Gender::Female));
        assert_eq!(extract("I'm non-binary, 170cm").gender, Some(Gender::NonBinary));
    }

    #[test]
    fn labeled_gender_beats_passing_mention() {
        let m = extract("gender: female. my trainer is a man");
        assert_eq!(m.gender, Some(Gender::Female));
    }

    #[test]
    fn diets_and_avoided_foods() {
        let m = extract("non-vegetarian but keto, no dairy, allergic to peanuts and shellfish.");
        assert_eq!(m.dietary_restrictions, vec!["non-vegetarian", "keto", "no dairy"]);
        assert_eq!(m.allergies, vec!["peanuts", "shellfish"]);
    }

    #[test]
    fn empty_prompt() {
        let m = extract("");
        assert_eq!(m, Measurements::default());
        assert!(!m.has_body_measurements());
        assert_eq!(m.bmi(), None);
    }

    #[test]
    fn bmi_from_measurements() {
        let m = extract("175cm, 70kg");
        assert!(m.has_body_measurements());
        assert_near(m.bmi(), 22.86, 0.01);
    }
}
