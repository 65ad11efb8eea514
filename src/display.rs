//! Terminal output for the assessment flow
//!
//! Color-coded rendering of the parsed assessment plus a spinner for the
//! in-flight request (one outstanding request at a time).

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::advice::ParsedAdvice;
use crate::intake::FieldError;

/// Terminal display manager
pub struct DisplayManager {
    update_interval: Duration,
}

impl DisplayManager {
    pub fn new() -> Self {
        DisplayManager {
            update_interval: Duration::from_millis(100),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, model: &str) {
        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  SynapseMD {} - Symptom Checker", version);
        let info = format!("  Model: {} | Provider: Gemini", model);
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
    }

    /// Spinner shown while the request is in flight
    pub fn start_request(&self) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Getting diagnosis...");
        pb.enable_steady_tick(self.update_interval);
        pb
    }

    /// Render the parsed assessment
    pub fn show_assessment(&self, advice: &ParsedAdvice) {
        println!("\n{}", "Your Health Assessment".bold().cyan());

        println!(
            "\n{} ({})",
            "Probable Causes".bold(),
            advice.probable_causes.len()
        );
        for cause in &advice.probable_causes {
            println!("  - {}", cause);
        }

        println!(
            "\n{} ({})",
            "Recommended Actions".bold(),
            advice.advice_steps.len()
        );
        for (i, step) in advice.advice_steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }

        println!("\n{}", advice.disclaimer.yellow());
    }

    /// Render intake validation failures, one line per field
    pub fn show_field_errors(&self, errors: &[FieldError]) {
        for error in errors {
            println!("{} {}", "✗".red(), error.to_string().red());
        }
    }

    /// Render an error message
    pub fn show_error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
