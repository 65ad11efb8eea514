//! Interactive terminal intake using rustyline
//!
//! Prompts for each bio field and the symptom list, re-prompting on invalid
//! values so a submission can never carry an out-of-range field.
//!
//! Returns:
//! - Ok(Some(..)) on completed input
//! - Ok(None) for EOF (Ctrl-D, treated as "cancel")
//! - Err on interrupt (Ctrl-C) or terminal errors

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::intake::bio::{
    BioData, Sex, MAX_AGE, MAX_HEIGHT_FEET, MAX_HEIGHT_INCHES, MAX_WEIGHT_LBS,
};
use crate::intake::symptoms::SymptomList;

/// Readline-backed intake form
pub struct IntakeSession {
    editor: DefaultEditor,
}

impl IntakeSession {
    pub fn new() -> Result<Self> {
        Ok(IntakeSession {
            editor: DefaultEditor::new()?,
        })
    }

    /// Collect the full bio form, one field at a time
    pub fn collect_bio(&mut self) -> Result<Option<BioData>> {
        println!("{}", "Patient information".bold());

        let Some(age) = self.read_number("Age (years): ", "age", MAX_AGE)? else {
            return Ok(None);
        };
        let Some(weight_lbs) = self.read_number("Weight (lbs): ", "weight", MAX_WEIGHT_LBS)?
        else {
            return Ok(None);
        };
        let Some(height_feet) =
            self.read_number("Height (feet): ", "height (feet)", MAX_HEIGHT_FEET)?
        else {
            return Ok(None);
        };
        let Some(height_inches) = self.read_optional_number(
            "Height (inches, optional): ",
            "height (inches)",
            MAX_HEIGHT_INCHES,
        )?
        else {
            return Ok(None);
        };
        let Some(sex) = self.read_sex()? else {
            return Ok(None);
        };

        Ok(Some(BioData {
            age,
            weight_lbs,
            height_feet,
            height_inches,
            sex,
        }))
    }

    /// Collect symptoms until an empty line is entered
    pub fn collect_symptoms(&mut self) -> Result<Option<SymptomList>> {
        println!(
            "\n{} (one per line, empty line to finish)",
            "Symptoms".bold()
        );

        let mut symptoms = SymptomList::new();
        loop {
            let Some(line) = self.read_line("Symptom: ")? else {
                return Ok(None);
            };

            if line.trim().is_empty() {
                if symptoms.is_empty() {
                    println!("{}", "At least one symptom is required.".red());
                    continue;
                }
                return Ok(Some(symptoms));
            }

            if let Err(reason) = symptoms.add(&line) {
                println!("{}", reason.red());
            }
        }
    }

    /// Read one line, mapping EOF to None and Ctrl-C to an error
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(anyhow::anyhow!("Interrupted")),
            Err(e) => Err(e.into()),
        }
    }

    /// Read a required number, re-prompting until it parses and is in range
    fn read_number(&mut self, prompt: &str, field: &str, max: u32) -> Result<Option<u32>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            if line.is_empty() {
                println!("{}", format!("{} is required", field).red());
                continue;
            }

            match line.parse::<u32>() {
                Ok(value) if value <= max => return Ok(Some(value)),
                Ok(_) => println!("{}", format!("{} must be between 0 and {}", field, max).red()),
                Err(_) => println!("{}", format!("{} must be a whole number", field).red()),
            }
        }
    }

    /// Read an optional number; an empty line means "not provided"
    ///
    /// Outer Option is EOF, inner Option is presence of the value.
    fn read_optional_number(
        &mut self,
        prompt: &str,
        field: &str,
        max: u32,
    ) -> Result<Option<Option<u32>>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };

            if line.is_empty() {
                return Ok(Some(None));
            }

            match line.parse::<u32>() {
                Ok(value) if value <= max => return Ok(Some(Some(value))),
                Ok(_) => println!("{}", format!("{} must be between 0 and {}", field, max).red()),
                Err(_) => println!("{}", format!("{} must be a whole number", field).red()),
            }
        }
    }

    fn read_sex(&mut self) -> Result<Option<Sex>> {
        loop {
            let Some(line) = self.read_line("Sex (male/female/other): ")? else {
                return Ok(None);
            };

            match line.parse::<Sex>() {
                Ok(sex) => return Ok(Some(sex)),
                Err(reason) => println!("{}", reason.red()),
            }
        }
    }
}
