use anyhow::{Context, Result};
use dotenv::dotenv;
use log::{debug, info};
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};
use cgpa::utils::config::{Config, OutputFormat};
use cgpa::utils::grading::calculate_cgpa;
use cgpa::utils::input::{read_subjects, sanitize_subjects, take_json_flag};
use cgpa::utils::report::{format_credit_hours, format_json, format_results};

// Reads subjects from arguments or the configured file and prints their CGPA.
fn main() -> Result<()> {
    // Loads environment variables from a `.env` file, if present.
    dotenv().ok();

    let mut config = Config::from_env()?;

    // Mixed terminal output (both stdout and stderr) with automatic color support.
    TermLogger::init(
        config.log_level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if take_json_flag(&mut args) {
        config.output = OutputFormat::Json;
    }

    let subjects = sanitize_subjects(read_subjects(&args, &config)?);
    debug!("Calculating CGPA for {:?}", subjects);

    let result = calculate_cgpa(&subjects);
    info!(
        "CGPA {:.2} over {} credit hours ({} subjects counted)",
        result.cgpa,
        format_credit_hours(result.total_credit_hours),
        result.grade_details.len()
    );

    match config.output {
        OutputFormat::Text => print!("{}", format_results(&result)),
        OutputFormat::Json => println!("{}", format_json(&result)?),
    }

    Ok(())
}

