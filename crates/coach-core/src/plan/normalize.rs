//! Response normalization.
//!
//! The model does not always emit the canonical `MEAL_PLAN:` / `WORKOUT_PLAN:`
//! tokens. It wraps them in markdown, adds qualifiers ("MEAL_PLAN for Week
//! 1:"), or decorates lists with box-drawing glyphs. [`normalize_response`]
//! rewrites these variants so the marker extractor and line parsers only
//! have to deal with one shape.

use std::sync::LazyLock;

use regex::Regex;

static MEAL_HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\*\*MEAL[ _]PLAN\*\*:?|#{1,6}[ \t]*MEAL[ _]PLAN[ \t]*:?|MEAL_PLAN(?:[ \t]+for[ \t]+[\w \t]+)?:)")
        .ok()
});

static WORKOUT_HEADING: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\*\*WORKOUT[ _]PLAN\*\*:?|#{1,6}[ \t]*WORKOUT[ _]PLAN[ \t]*:?|WORKOUT_PLAN(?:[ \t]+for[ \t]+[\w \t]+)?:)")
        .ok()
});

// **Day 3:** and **Day 3 - Legs:**
static BOLD_DAY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\*\*(Day\s*\d+(?:\s*-\s*[^:*\n]+)?):\*\*[ \t]*").ok());

static BOLD_LABEL: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*(Total Daily Calories|Timeline|Weekly Schedule|Expected Results):\*\*[ \t]*")
        .ok()
});

static DECORATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[│├─└┌┐•●◆◇▪▫■□★☆\[\]{}*]|---").ok());

static WHITESPACE_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s{3,}").ok());

// A day header glued to preceding text on the same line.
static INLINE_DAY_HEADER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)([^\n])[ \t]*\b(Day\s*\d+\s*[-:])").ok());

static WORKOUT_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\s*WORKOUT_PLAN:").ok());

/// Rewrite a raw coach response into canonical form.
///
/// - Heading variants become `MEAL_PLAN:` / `WORKOUT_PLAN:`.
/// - Bold labels lose their markdown, then decoration glyphs, stray `*` and
///   `---` rules are dropped.
/// - Runs of three or more whitespace characters collapse to a blank line.
/// - Every `Day N:` / `Day N -` header starts on its own line.
/// - When both markers are present, `WORKOUT_PLAN:` is preceded by a blank
///   line.
///
/// Blank-line runs are collapsed, so a normalized response never contains the
/// `"\n\n\n"` section break.
pub fn normalize_response(text: &str) -> String {
    let mut cleaned = replace_all(text, &MEAL_HEADING, "MEAL_PLAN:");
    cleaned = replace_all(&cleaned, &WORKOUT_HEADING, "WORKOUT_PLAN:");
    cleaned = replace_all(&cleaned, &BOLD_DAY, "${1}: ");
    cleaned = replace_all(&cleaned, &BOLD_LABEL, "${1}: ");
    cleaned = replace_all(&cleaned, &DECORATION, "");
    cleaned = replace_all(&cleaned, &WHITESPACE_RUN, "\n\n");
    cleaned = replace_all(cleaned.trim(), &INLINE_DAY_HEADER, "${1}\n${2}");

    if cleaned.contains("MEAL_PLAN:") && cleaned.contains("WORKOUT_PLAN:") {
        cleaned = replace_all(&cleaned, &WORKOUT_TOKEN, "\n\nWORKOUT_PLAN:");
    }

    cleaned.trim().to_owned()
}

fn replace_all(text: &str, pattern: &LazyLock<Option<Regex>>, replacement: &str) -> String {
    match pattern.as_ref() {
        Some(re) => re.replace_all(text, replacement).into_owned(),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_response_survives() {
        let text = "MEAL_PLAN:\nDay 1:\n- Lunch (400 kcal):\n1. Rice — 100g — 130 kcal";
        assert_eq!(normalize_response(text), text);
    }

    #[test]
    fn markdown_headings_become_markers() {
        let text = "### MEAL PLAN\nDay 1:\n- Lunch\n\n**WORKOUT PLAN**\nDay 1: Legs";
        let out = normalize_response(text);
        assert!(out.starts_with("MEAL_PLAN:"), "got: {out}");
        assert!(out.contains("\n\nWORKOUT_PLAN:"), "got: {out}");
        assert!(!out.contains("###"));
        assert!(!out.contains("**"));
    }

    #[test]
    fn qualified_markers_are_shortened() {
        let out = normalize_response("MEAL_PLAN for Week 1:\nDay 1:\nx");
        assert!(out.starts_with("MEAL_PLAN:\n"), "got: {out}");
        let out = normalize_response("WORKOUT_PLAN for beginners:\nDay 1: Walk");
        assert!(out.starts_with("WORKOUT_PLAN:\n"), "got: {out}");
    }

    #[test]
    fn bold_day_and_label_markup_is_removed() {
        let out = normalize_response("**Day 2:** oats\n**Total Daily Calories:** 1500");
        assert!(out.contains("Day 2: oats"), "got: {out}");
        assert!(out.contains("Total Daily Calories: 1500"), "got: {out}");
    }

    #[test]
    fn decoration_is_stripped_and_blank_runs_collapse() {
        let out = normalize_response("MEAL_PLAN:\n\n\n\n● Day 1:\n├─ Oats\n---\nEnd");
        assert!(!out.contains("\n\n\n"), "got: {out:?}");
        assert!(!out.contains('●'));
        assert!(!out.contains('├'));
        assert!(!out.contains("---"));
    }

    #[test]
    fn day_headers_start_new_lines() {
        let out = normalize_response("MEAL_PLAN: Day 1: oats Day 2: eggs");
        assert_eq!(out, "MEAL_PLAN:\nDay 1: oats\nDay 2: eggs");
    }

    #[test]
    fn em_dashes_are_preserved() {
        let out = normalize_response("1. Oats — 30g — 115 kcal");
        assert_eq!(out, "1. Oats — 30g — 115 kcal");
    }
}
