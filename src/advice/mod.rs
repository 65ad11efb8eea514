//! Advice parsing module
//!
//! Turns the raw Gemini reply into a typed, always-populated result.

pub mod parser;
pub mod types;

// Re-export commonly used items
pub use parser::parse_advice;
pub use types::{ParsedAdvice, DEFAULT_ADVICE, DEFAULT_CAUSE, DEFAULT_DISCLAIMER};
