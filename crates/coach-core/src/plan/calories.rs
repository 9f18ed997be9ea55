//! Keyword-based calorie estimation for meal items without a stated value.

/// Calories used when no keyword matches.
pub const FALLBACK_CALORIES: u32 = 100;

/// Keyword table. Every keyword contained in a description contributes, so
/// overlapping keywords ("egg" / "eggs") add up.
const CALORIE_KEYWORDS: &[(&str, u32)] = &[
    ("oatmeal", 150),
    ("yogurt", 120),
    ("greek yogurt", 130),
    ("berries", 50),
    ("banana", 105),
    ("apple", 95),
    ("orange", 62),
    ("nuts", 160),
    ("almond", 165),
    ("peanut butter", 190),
    ("eggs", 140),
    ("egg", 70),
    ("toast", 75),
    ("bread", 80),
    ("whole grain", 90),
    ("chicken", 165),
    ("salmon", 208),
    ("fish", 180),
    ("tuna", 120),
    ("salad", 100),
    ("rice", 130),
    ("quinoa", 120),
    ("avocado", 234),
    ("protein", 120),
    ("smoothie", 150),
    ("vegetables", 50),
    ("veggies", 50),
    ("broccoli", 55),
    ("sweet potato", 103),
    ("potato", 160),
    ("hummus", 166),
    ("olive oil", 120),
    ("cheese", 113),
    ("milk", 103),
    ("protein bar", 200),
    ("granola", 120),
    ("honey", 64),
    ("fruit", 60),
    ("steak", 250),
    ("beef", 213),
    ("turkey", 165),
    ("tofu", 144),
    ("lentils", 230),
    ("beans", 132),
    ("soup", 170),
    ("wrap", 245),
    ("sandwich", 260),
    ("pasta", 200),
    ("noodles", 190),
    ("snack", 100),
];

/// Estimate calories for a free-text item description.
///
/// Sums every matching keyword (case-insensitive); returns
/// [`FALLBACK_CALORIES`] when nothing matches.
pub fn estimate_calories(description: &str) -> u32 {
    let lower = description.to_lowercase();
    let total: u32 = CALORIE_KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, calories)| calories)
        .sum();

    if total == 0 { FALLBACK_CALORIES } else { total }
}
