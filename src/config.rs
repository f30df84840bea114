//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::intake::generator::DEFAULT_TIMEOUT;
use crate::llm::{LlmBackend, LlmConfig};

/// Intake configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Provider used for question generation.
    pub llm: LlmConfig,
    /// JSON file that completed candidate records are appended to.
    pub records_path: PathBuf,
    /// Upper bound on one question-generation call.
    pub llm_timeout: Duration,
    /// Directory for daily-rolling log files. Stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl IntakeConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// - `INTAKE_LLM_BACKEND`: `openai` (default) or `anthropic`
    /// - `OPENAI_API_KEY` / `ANTHROPIC_API_KEY`: required for the chosen backend
    /// - `INTAKE_MODEL`: defaults per backend
    /// - `INTAKE_RECORDS_PATH`: defaults to `candidates.json`
    /// - `INTAKE_LLM_TIMEOUT_SECS`: defaults to 60
    /// - `INTAKE_LOG_DIR`: optional
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let backend = match get("INTAKE_LLM_BACKEND") {
            Some(raw) => raw.parse::<LlmBackend>()?,
            None => LlmBackend::OpenAi,
        };

        let api_key = get(backend.api_key_var())
            .ok_or_else(|| ConfigError::MissingEnvVar(backend.api_key_var().to_string()))?;

        let model = get("INTAKE_MODEL").unwrap_or_else(|| backend.default_model().to_string());

        let records_path = get("INTAKE_RECORDS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("candidates.json"));

        let llm_timeout = match get("INTAKE_LLM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    key: "INTAKE_LLM_TIMEOUT_SECS".to_string(),
                    message: format!("'{raw}' is not a whole number of seconds"),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "INTAKE_LLM_TIMEOUT_SECS".to_string(),
                        message: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            llm: LlmConfig {
                backend,
                api_key: SecretString::from(api_key),
                model,
            },
            records_path,
            llm_timeout,
            log_dir: get("INTAKE_LOG_DIR").map(PathBuf::from),
        })
    }
}
