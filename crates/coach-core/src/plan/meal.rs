//! Meal plan section parser.
//!
//! Turns the text of a `MEAL_PLAN:` section into per-day meals:
//!
//! ```text
//! Day 1:
//! - Breakfast (275 kcal):
//!   1. Oats — 30g — 115 kcal
//! Total Daily Calories: 1185 kcal
//! ```
//!
//! Lines that match none of the expected shapes are skipped, so suggestion
//! text swallowed by the meal section is harmless.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::calories::estimate_calories;
use crate::text::{captures, collapse_whitespace, content_lines, number};

static DAY_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bDay\s*(\d+)\s*:").ok());

static MEAL_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^[-–•●\s]*(Breakfast|Lunch|Snack|Dinner)\s*(?:\((\d+)\s*(?:kcal|calories?)?\)|-?\s*(\d+)\s*(?:kcal|calories?))?\s*:?$",
    )
    .ok()
});

// `1. Oats — 30g — 115 kcal`
static ITEM_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:\d+\s*[.)]|[-•●])\s*(.+?)\s*(?:—|–|\s-\s)\s*(.+?)\s*(?:—|–|\s-\s)\s*(\d+)\s*(?:kcal|calories?|cal)\.?$",
    )
    .ok()
});

// `1. Apple — 110 kcal`
static SHORT_ITEM_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:\d+\s*[.)]|[-•●])\s*(.+?)\s*(?:—|–|\s-\s)\s*(\d+)\s*(?:kcal|calories?|cal)\.?$")
        .ok()
});

static TOTAL_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)Total\s+Daily\s+Calories:\s*(\d+)").ok());

/// The four meals of a plan day, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealKind {
    pub const ALL: [MealKind; 4] = [
        MealKind::Breakfast,
        MealKind::Lunch,
        MealKind::Snack,
        MealKind::Dinner,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }

    /// Calories assigned to a placeholder meal.
    pub const fn default_calories(self) -> u32 {
        match self {
            Self::Breakfast => 300,
            Self::Lunch => 400,
            Self::Snack => 150,
            Self::Dinner => 450,
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One food line of a meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealItem {
    pub name: String,
    /// Portion text as written ("30g", "190ml").
    pub quantity: Option<String>,
    /// Stated calories; 0 when the model gave none.
    pub calories: u32,
}

impl MealItem {
    /// `name — quantity`, or just the name.
    pub fn description(&self) -> String {
        match &self.quantity {
            Some(quantity) => format!("{} — {quantity}", self.name),
            None => self.name.clone(),
        }
    }

    /// Stated calories, or a keyword estimate when none were given.
    pub fn effective_calories(&self) -> u32 {
        if self.calories > 0 {
            self.calories
        } else {
            estimate_calories(&self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meal {
    pub kind: MealKind,
    /// Calories from the meal header; 0 when absent.
    pub calories: u32,
    pub items: Vec<MealItem>,
}

impl Meal {
    fn new(kind: MealKind) -> Self {
        Self {
            kind,
            calories: 0,
            items: Vec::new(),
        }
    }

    /// Header calories, falling back to the sum of the items.
    ///
    /// Sums saturate at `u32::MAX`; item values come straight from model text.
    pub fn total_calories(&self) -> u32 {
        if self.calories > 0 {
            self.calories
        } else {
            saturating_sum(self.items.iter().map(MealItem::effective_calories))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealDay {
    /// 1-based day number.
    pub day: usize,
    /// Always one entry per [`MealKind`], in [`MealKind::ALL`] order.
    pub meals: Vec<Meal>,
    /// `Total Daily Calories:` as written by the model.
    pub stated_calories: Option<u32>,
}

impl MealDay {
    fn new(day: usize) -> Self {
        Self {
            day,
            meals: MealKind::ALL.into_iter().map(Meal::new).collect(),
            stated_calories: None,
        }
    }

    pub fn meal(&self, kind: MealKind) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.kind == kind)
    }

    fn meal_mut(&mut self, kind: MealKind) -> Option<&mut Meal> {
        self.meals.iter_mut().find(|meal| meal.kind == kind)
    }

    /// Sum of the meal totals, saturating at `u32::MAX`.
    pub fn total_calories(&self) -> u32 {
        saturating_sum(self.meals.iter().map(Meal::total_calories))
    }

    /// True when no meal on this day has any items.
    pub fn is_empty(&self) -> bool {
        self.meals.iter().all(|meal| meal.items.is_empty())
    }
}

/// Parse a meal section into exactly `days` days.
///
/// Day numbers outside `1..=days` are logged and their lines skipped.
/// Items seen before any day or meal header are dropped.
pub fn parse_meal_plan(section: &str, days: usize) -> Vec<MealDay> {
    let mut plan: Vec<MealDay> = (1..=days).map(MealDay::new).collect();
    let mut current_day: Option<usize> = None;
    let mut current_kind: Option<MealKind> = None;

    for line in content_lines(section) {
        if let Some(caps) = captures(&DAY_LINE, line) {
            current_kind = None;
            current_day = number::<usize>(&caps, 1).filter(|day| (1..=days).contains(day));
            if current_day.is_none() {
                warn!(line, days, "meal plan day out of range, skipping");
            }
            continue;
        }

        if let Some(caps) = captures(&MEAL_HEADER, line) {
            current_kind = caps.get(1).and_then(|m| MealKind::from_label(m.as_str()));
            let calories = number::<u32>(&caps, 2)
                .or_else(|| number(&caps, 3))
                .unwrap_or(0);
            if let (Some(day), Some(kind)) = (current_day, current_kind) {
                if let Some(meal) = plan[day - 1].meal_mut(kind) {
                    meal.calories = calories;
                }
            }
            continue;
        }

        if let Some(caps) = captures(&TOTAL_LINE, line) {
            if let Some(day) = current_day {
                plan[day - 1].stated_calories = number(&caps, 1);
            }
            continue;
        }

        let Some(item) = parse_item(line) else {
            continue;
        };
        match (current_day, current_kind) {
            (Some(day), Some(kind)) => {
                if let Some(meal) = plan[day - 1].meal_mut(kind) {
                    meal.items.push(item);
                }
            }
            _ => debug!(line, "meal item outside a day or meal, dropped"),
        }
    }

    plan
}

/// Give every empty meal a single placeholder item.
///
/// Meals without header calories take the placeholder's calories.
pub fn fill_missing_meals(days: &mut [MealDay]) {
    for day in days.iter_mut() {
        for meal in day.meals.iter_mut().filter(|meal| meal.items.is_empty()) {
            let calories = meal.kind.default_calories();
            meal.items.push(MealItem {
                name: format!("Balanced {} - 1 serving", meal.kind.name().to_lowercase()),
                quantity: None,
                calories,
            });
            if meal.calories == 0 {
                meal.calories = calories;
            }
        }
    }
}

fn saturating_sum(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0, u32::saturating_add)
}

fn parse_item(line: &str) -> Option<MealItem> {
    if let Some(caps) = captures(&ITEM_LINE, line) {
        let quantity = collapse_whitespace(caps.get(2)?.as_str());
        return Some(MealItem {
            name: collapse_whitespace(caps.get(1)?.as_str()),
            quantity: (!quantity.is_empty()).then_some(quantity),
            calories: number(&caps, 3).unwrap_or(0),
        });
    }

    let caps = captures(&SHORT_ITEM_LINE, line)?;
    Some(MealItem {
        name: collapse_whitespace(caps.get(1)?.as_str()),
        quantity: None,
        calories: number(&caps, 2).unwrap_or(0),
    })
}
