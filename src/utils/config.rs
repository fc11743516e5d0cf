use std::path::PathBuf;
use anyhow::{anyhow, Context, Result};
use simplelog::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("Unknown output format '{}', expected text or json", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub subjects_file: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LevelFilter::Info,
            subjects_file: None,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    // Reads CGPA_LOG_LEVEL, CGPA_SUBJECTS_FILE and CGPA_OUTPUT from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // Builds a config from any variable source, blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(level) = lookup("CGPA_LOG_LEVEL") {
            config.log_level = level
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid log level '{}'", level))
                .context("CGPA_LOG_LEVEL environment variable is invalid")?;
        }
        if let Some(path) = lookup("CGPA_SUBJECTS_FILE") {
            config.subjects_file = Some(PathBuf::from(path));
        }
        if let Some(output) = lookup("CGPA_OUTPUT") {
            config.output = output
                .parse()
                .context("CGPA_OUTPUT environment variable is invalid")?;
        }

        Ok(config)
    }
}
