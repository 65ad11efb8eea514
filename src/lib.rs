//! SynapseMD - Terminal Symptom Checker
//!
//! Collects patient bio and symptom data, asks Gemini for general health
//! advice, and parses the `###`-sectioned reply into a typed assessment.
//!
//! # Architecture
//!
//! - `intake`: bio/symptom collection and field-range validation
//! - `prompt`: prompt composition + the fixed system instruction
//! - `provider`: Gemini API boundary behind the `AdviceProvider` trait
//! - `advice`: the structured-response parser (the core; total, never fails)
//! - `display`: terminal rendering

pub mod errors;

pub mod advice;
pub mod intake;
pub mod prompt;
pub mod provider;

pub mod cli;
pub mod config;
pub mod display;
pub mod execution;

// Re-export commonly used types
pub use advice::{parse_advice, ParsedAdvice};
pub use errors::{AdvisorError, Result};
