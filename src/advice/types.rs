//! Parsed advice result type
//!
//! `ParsedAdvice` is the structured form of a raw Gemini reply. Every field
//! is guaranteed non-empty: the parser substitutes defaults for anything the
//! model left out, so the presentation layer never checks for absence.

use serde::{Deserialize, Serialize};

/// Fallback cause shown when no "Probable Causes" section was usable
pub const DEFAULT_CAUSE: &str =
    "No specific causes identified based on the provided information.";

/// Fallback advice shown when no "Advice" section was usable
pub const DEFAULT_ADVICE: &str = "Monitor your symptoms and rest.";

/// Fallback disclaimer shown when no "Disclaimer" section was usable
pub const DEFAULT_DISCLAIMER: &str =
    "Always consult a healthcare professional for an accurate diagnosis and personalized advice.";

/// Structured health assessment extracted from a raw model reply
///
/// Constructed only by `parser::parse_advice`; derived fresh from each
/// response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAdvice {
    /// Possible explanations for the symptoms, in order of appearance
    pub probable_causes: Vec<String>,

    /// Actionable steps, in order of appearance
    pub advice_steps: Vec<String>,

    /// Single-string disclaimer
    pub disclaimer: String,
}

impl Default for ParsedAdvice {
    /// The fully-defaulted assessment, returned for input with no usable sections
    fn default() -> Self {
        ParsedAdvice {
            probable_causes: vec![DEFAULT_CAUSE.to_string()],
            advice_steps: vec![DEFAULT_ADVICE.to_string()],
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
        }
    }
}
