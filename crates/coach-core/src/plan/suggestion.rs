//! End-of-plan suggestion blocks.
//!
//! The model closes each plan with an `END-OF-PLAN-SUGGESTION:` (or
//! `END-OF-PLAN SUGGESTION:`) paragraph of free advice. These blocks are cut
//! out of the response so the section parsers never see them.

use std::sync::LazyLock;

use regex::Regex;

use super::marker::Marker;

/// Shown when the response carries no suggestion of its own.
pub const DEFAULT_SUGGESTION: &str =
    "Follow this plan consistently to achieve your desired results.";

static SUGGESTION_TOKEN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)END-OF-PLAN[ -]SUGGESTION:").ok());

/// A response with its suggestion blocks separated out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitResponse {
    /// The response with every suggestion block removed.
    pub body: String,
    /// Trimmed suggestion texts, in order of appearance. Blank ones are dropped.
    pub suggestions: Vec<String>,
}

impl SplitResponse {
    /// All suggestions joined by blank lines, or [`DEFAULT_SUGGESTION`].
    pub fn suggestion_text(&self) -> String {
        if self.suggestions.is_empty() {
            DEFAULT_SUGGESTION.to_owned()
        } else {
            self.suggestions.join("\n\n")
        }
    }
}

/// Split suggestion blocks out of `text`.
///
/// A block starts after a suggestion token and runs to the next suggestion
/// token, the next plan marker, or end of text, whichever comes first.
pub fn split_suggestions(text: &str) -> SplitResponse {
    let Some(token) = SUGGESTION_TOKEN.as_ref() else {
        return SplitResponse {
            body: text.to_owned(),
            suggestions: Vec::new(),
        };
    };

    let mut body = String::with_capacity(text.len());
    let mut suggestions = Vec::new();
    let mut cursor = 0;

    // Blocks never extend past the next token, so `cursor <= found.start()`.
    for found in token.find_iter(text) {
        body.push_str(&text[cursor..found.start()]);

        let rest = &text[found.end()..];
        let block_len = [
            token.find(rest).map(|m| m.start()),
            rest.find(Marker::MealPlan.as_str()),
            rest.find(Marker::WorkoutPlan.as_str()),
        ]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(rest.len());

        let suggestion = rest[..block_len].trim();
        if !suggestion.is_empty() {
            suggestions.push(suggestion.to_owned());
        }
        cursor = found.end() + block_len;
    }
    body.push_str(&text[cursor..]);

    SplitResponse { body, suggestions }
}
