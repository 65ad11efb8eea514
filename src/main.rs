//! SynapseMD - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use synapsemd::cli::{Args, Commands};
use synapsemd::config::{Config, API_KEY_ENV_VAR};
use synapsemd::display::DisplayManager;
use synapsemd::errors::AdvisorError;
use synapsemd::execution::submit;
use synapsemd::intake::{BioData, IntakeSession, SymptomList};
use synapsemd::provider::{GeminiClient, DEFAULT_GEMINI_URL};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up GEMINI_API_KEY from a local .env if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::load()?;

    match &args.command {
        Some(Commands::Doctor) => {
            run_doctor(&args, &config).await?;
        }
        Some(Commands::Models) => {
            list_models(&args, &config).await?;
        }
        Some(Commands::Config) => {
            show_config(&args, &config)?;
        }
        None => {
            run_assessment(&args, &config).await?;
        }
    }

    Ok(())
}

/// Build the Gemini client from resolved config
fn build_client(args: &Args, config: &Config) -> Result<GeminiClient> {
    let api_key = config.api_key().ok_or(AdvisorError::MissingApiKey)?;
    let model = config.model(args.model.as_deref());

    Ok(GeminiClient::with_config(
        DEFAULT_GEMINI_URL,
        &model,
        api_key,
    )?)
}

/// Run the full intake -> Gemini -> assessment flow
async fn run_assessment(args: &Args, config: &Config) -> Result<()> {
    let display = DisplayManager::new();
    let verbosity = args.verbosity();

    // Resolve the client first so a missing key fails before any questions.
    let client = match build_client(args, config) {
        Ok(client) => client,
        Err(e) => {
            display.show_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if verbosity.show_progress() {
        display.show_banner(env!("CARGO_PKG_VERSION"), client.model());
    }

    let Some((bio, symptoms)) = gather_intake(args, &display)? else {
        println!("Cancelled.");
        return Ok(());
    };

    let submission_result = {
        let spinner = verbosity.show_progress().then(|| display.start_request());
        let result = submit(&client, &bio, &symptoms).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        result
    };

    let submission = match submission_result {
        Ok(submission) => submission,
        Err(e) => {
            display.show_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if verbosity.show_prompt() {
        println!("{}\n{}\n", "Prompt:".dimmed(), submission.prompt.dimmed());
    }
    if verbosity.show_raw_reply() {
        println!(
            "{}\n{}\n",
            "Raw reply:".dimmed(),
            submission.raw_reply.dimmed()
        );
    }

    display.show_assessment(&submission.advice);

    Ok(())
}

/// Bio and symptoms from flags where complete, interactively otherwise
///
/// Flag-provided bio goes through the same range validation as the
/// interactive form. Returns None when the user cancels with Ctrl-D.
fn gather_intake(
    args: &Args,
    display: &DisplayManager,
) -> Result<Option<(BioData, SymptomList)>> {
    let flag_bio = args.bio_from_flags();
    if let Some(bio) = &flag_bio {
        if let Err(errors) = bio.validate() {
            display.show_field_errors(&errors);
            std::process::exit(2);
        }
    }

    let flag_symptoms = if args.symptoms.is_empty() {
        None
    } else {
        let symptoms: SymptomList = args.symptoms.iter().cloned().collect();
        if symptoms.is_empty() {
            eprintln!("{}", "At least one non-empty symptom is required.".red());
            std::process::exit(2);
        }
        Some(symptoms)
    };

    if let (Some(bio), Some(symptoms)) = (flag_bio.clone(), flag_symptoms.clone()) {
        return Ok(Some((bio, symptoms)));
    }

    let mut session = IntakeSession::new()?;
    let bio = match flag_bio {
        Some(bio) => bio,
        None => match session.collect_bio()? {
            Some(bio) => bio,
            None => return Ok(None),
        },
    };
    let symptoms = match flag_symptoms {
        Some(symptoms) => symptoms,
        None => match session.collect_symptoms()? {
            Some(symptoms) => symptoms,
            None => return Ok(None),
        },
    };

    Ok(Some((bio, symptoms)))
}

/// Check API key presence and endpoint reachability
async fn run_doctor(args: &Args, config: &Config) -> Result<()> {
    println!("\nRunning SynapseMD health checks...\n");

    let mut healthy = true;

    match config.api_key() {
        Some(_) => println!("{} API key configured", "✓".green()),
        None => {
            println!(
                "{} API key missing (set {} or add it to the config file)",
                "✗".red(),
                API_KEY_ENV_VAR
            );
            healthy = false;
        }
    }

    if healthy {
        let client = build_client(args, config)?;
        if client.health_check().await? {
            println!("{} Gemini API reachable ({})", "✓".green(), client.model());
        } else {
            println!("{} Gemini API not reachable", "✗".red());
            healthy = false;
        }
    }

    println!();
    std::process::exit(if healthy { 0 } else { 1 });
}

/// List Gemini models available to the configured key
async fn list_models(args: &Args, config: &Config) -> Result<()> {
    let client = build_client(args, config)?;

    println!("\nChecking Gemini models...\n");

    match client.list_models().await {
        Ok(models) => {
            if models.is_empty() {
                println!("No models available to this key.");
            } else {
                println!("Available models:");
                for model in models {
                    println!("  • {}", model);
                }
            }
            println!();
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Print the resolved configuration (the key itself is never printed)
fn show_config(args: &Args, config: &Config) -> Result<()> {
    println!("\nSynapseMD Configuration\n");

    println!("Config file:");
    println!("  {:?}", Config::config_path()?);
    println!();

    println!("Gemini:");
    println!("  Endpoint: {}", DEFAULT_GEMINI_URL);
    println!("  Model:    {}", config.model(args.model.as_deref()));
    println!(
        "  API key:  {}",
        if std::env::var(API_KEY_ENV_VAR).is_ok() {
            "set (environment)"
        } else if config.api.key.is_some() {
            "set (config file)"
        } else {
            "not set"
        }
    );
    println!();

    println!("Verbosity: {:?}", args.verbosity());
    println!();

    Ok(())
}
