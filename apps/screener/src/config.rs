use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::screening::pipeline::FailurePolicy;
use crate::screening::skills::MatchStrategy;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Vocabulary file, one skill per line. `None` uses the built-in list.
    pub skills_file: Option<PathBuf>,
    pub skill_matching: MatchStrategy,
    pub failure_policy: FailurePolicy,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            skills_file: optional_env("SKILLS_FILE").map(PathBuf::from),
            skill_matching: match optional_env("SKILL_MATCHING") {
                Some(v) => v
                    .parse::<MatchStrategy>()
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("SKILL_MATCHING has invalid value '{v}'"))?,
                None => MatchStrategy::default(),
            },
            failure_policy: match optional_env("EXTRACTION_FAILURE_POLICY") {
                Some(v) => v
                    .parse::<FailurePolicy>()
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("EXTRACTION_FAILURE_POLICY has invalid value '{v}'"))?,
                None => FailurePolicy::default(),
            },
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
