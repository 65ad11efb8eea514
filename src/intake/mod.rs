//! Patient intake module
//!
//! Biographical data, symptom list, and the interactive terminal form.

pub mod bio;
pub mod interactive;
pub mod symptoms;

// Re-export commonly used types
pub use bio::{BioData, FieldError, Sex};
pub use interactive::IntakeSession;
pub use symptoms::SymptomList;
