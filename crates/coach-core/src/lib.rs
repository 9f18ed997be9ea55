//! Core library for `coach`: extraction and parsing of AI coach responses.
//!
//! [`plan`] handles the model's output: marker-based section extraction,
//! response normalization, and the meal and workout parsers built on top.
//! [`profile`] handles the user's input: body measurements and goals stated
//! in a free-text prompt, plus the BMI / TDEE arithmetic that uses them.

pub mod plan;
pub mod profile;
mod text;
