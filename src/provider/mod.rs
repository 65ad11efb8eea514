//! Advice provider module
//!
//! Gemini API client and the trait boundary the submission flow uses.

pub mod gemini;
pub mod traits;

// Re-export commonly used types
pub use gemini::{GeminiClient, DEFAULT_GEMINI_URL, DEFAULT_MODEL};
pub use traits::AdviceProvider;
