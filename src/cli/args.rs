//! Command-line argument parsing for SynapseMD
//!
//! Provides clap-based CLI with subcommands and verbosity control. Bio and
//! symptom flags are optional; anything missing is collected interactively.

use clap::{Parser, Subcommand};

use crate::intake::bio::{BioData, Sex};

/// SynapseMD - AI-assisted symptom checker for the terminal
#[derive(Parser, Debug)]
#[command(name = "synapsemd")]
#[command(version)]
#[command(about = "Check symptoms against Gemini health advice from your terminal", long_about = None)]
pub struct Args {
    /// Patient age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Patient weight in pounds
    #[arg(long)]
    pub weight: Option<u32>,

    /// Height, feet component
    #[arg(long)]
    pub height_feet: Option<u32>,

    /// Height, inches component
    #[arg(long)]
    pub height_inches: Option<u32>,

    /// Patient sex (male/female/other)
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Symptom description (repeatable)
    #[arg(long = "symptom", value_name = "SYMPTOM")]
    pub symptoms: Vec<String>,

    /// Gemini model to use
    #[arg(short, long)]
    pub model: Option<String>,

    /// Verbosity level: default (normal), -v (show prompt), -vv (show raw reply)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress banner and progress)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check API key and endpoint reachability
    Doctor,

    /// List Gemini models available to the configured key
    Models,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Assemble bio data from flags, if every required field was given
    ///
    /// Range validation still happens afterwards, same as interactive input.
    pub fn bio_from_flags(&self) -> Option<BioData> {
        Some(BioData {
            age: self.age?,
            weight_lbs: self.weight?,
            height_feet: self.height_feet?,
            height_inches: self.height_inches,
            sex: self.sex?,
        })
    }
}

impl Verbosity {
    /// Check if should show the banner and spinner
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show the composed prompt
    pub fn show_prompt(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Check if should show the raw model reply
    pub fn show_raw_reply(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            age: None,
            weight: None,
            height_feet: None,
            height_inches: None,
            sex: None,
            symptoms: Vec::new(),
            model: None,
            verbose: 0,
            quiet: false,
            command: None,
        }
    }

    #[test]
    fn test_verbosity_quiet() {
        let mut args = base_args();
        args.quiet = true;
        assert_eq!(args.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        let mut args = base_args();
        assert_eq!(args.verbosity(), Verbosity::Normal);

        args.verbose = 1;
        assert_eq!(args.verbosity(), Verbosity::Verbose);

        args.verbose = 2;
        assert_eq!(args.verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_bio_from_flags_requires_core_fields() {
        let mut args = base_args();
        assert!(args.bio_from_flags().is_none());

        args.age = Some(25);
        args.weight = Some(150);
        args.height_feet = Some(5);
        assert!(args.bio_from_flags().is_none());

        args.sex = Some(Sex::Female);
        let bio = args.bio_from_flags().unwrap();
        assert_eq!(bio.age, 25);
        assert_eq!(bio.height_inches, None);
    }

    #[test]
    fn test_parse_full_flag_set() {
        let args = Args::try_parse_from([
            "synapsemd",
            "--age",
            "30",
            "--weight",
            "160",
            "--height-feet",
            "5",
            "--height-inches",
            "9",
            "--sex",
            "male",
            "--symptom",
            "headache",
            "--symptom",
            "fever",
        ])
        .unwrap();

        assert_eq!(args.symptoms.len(), 2);
        let bio = args.bio_from_flags().unwrap();
        assert_eq!(bio.sex, Sex::Male);
        assert_eq!(bio.height_inches, Some(9));
    }

    #[test]
    fn test_parse_subcommand() {
        let args = Args::try_parse_from(["synapsemd", "doctor"]).unwrap();
        assert!(matches!(args.command, Some(Commands::Doctor)));
    }

    #[test]
    fn test_invalid_sex_flag_rejected() {
        let result = Args::try_parse_from(["synapsemd", "--sex", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());

        assert!(!Verbosity::Normal.show_prompt());
        assert!(Verbosity::Verbose.show_prompt());

        assert!(!Verbosity::Verbose.show_raw_reply());
        assert!(Verbosity::VeryVerbose.show_raw_reply());
    }
}
