// src/config.rs
use crate::errors::{GenError, Result};
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_base: String,
    /// Left as `None` when unset; the provider reports it on the first request.
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
}

/// What the endpoint does with the generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Return the model output verbatim without looking at it.
    #[default]
    Passthrough,
    /// Parse the output as a test case list and reject it if that fails.
    Validate,
}

impl std::str::FromStr for OutputMode {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" => Ok(OutputMode::Passthrough),
            "validate" => Ok(OutputMode::Validate),
            other => Err(GenError::Config(format!(
                "TESTCASE_OUTPUT_MODE must be 'passthrough' or 'validate', got '{}'",
                other
            ))),
        }
    }
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai: OpenAIConfig,
    pub model: String,
    pub temperature: f32,
    pub host: String,
    pub port: u16,
    pub output_mode: OutputMode,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let api_base = lookup("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout = match lookup("OPENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    GenError::Config(format!("OPENAI_TIMEOUT_SECS must be a whole number, got '{}'", raw))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let model = lookup("OPENAI_MODEL")
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let temperature = match lookup("OPENAI_TEMPERATURE") {
            Some(raw) => {
                let t: f32 = raw.trim().parse().map_err(|_| {
                    GenError::Config(format!("OPENAI_TEMPERATURE must be a number, got '{}'", raw))
                })?;
                if !(0.0..=2.0).contains(&t) {
                    return Err(GenError::Config(format!(
                        "OPENAI_TEMPERATURE must be between 0 and 2, got {}",
                        t
                    )));
                }
                t
            }
            None => DEFAULT_TEMPERATURE,
        };

        let host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| GenError::Config(format!("SERVER_PORT must be a port number, got '{}'", raw)))?,
            None => 8000,
        };

        let output_mode = match lookup("TESTCASE_OUTPUT_MODE") {
            Some(raw) => raw.parse()?,
            None => OutputMode::default(),
        };

        Ok(AppConfig {
            openai: OpenAIConfig { api_base, api_key, timeout },
            model,
            temperature,
            host,
            port,
            output_mode,
        })
    }
}
