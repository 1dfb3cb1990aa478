use std::fmt;

use anyhow::{Context, Result};

const DEFAULT_API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Which of the three services a process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    CallSummaries,
    EmailComposer,
    SalesInsights,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::CallSummaries => "call-summaries",
            Service::EmailComposer => "email-composer",
            Service::SalesInsights => "sales-insights",
        }
    }

    /// Environment variable that overrides the model for this service.
    pub fn model_env(self) -> &'static str {
        match self {
            Service::CallSummaries => "GROQ_MODEL_CALLS",
            Service::EmailComposer => "GROQ_MODEL_EMAIL",
            Service::SalesInsights => "GROQ_MODEL_SALES",
        }
    }

    pub fn default_model(self) -> &'static str {
        match self {
            Service::CallSummaries | Service::EmailComposer => "llama3-70b-8192",
            Service::SalesInsights => "llama3-8b-8192",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Service::CallSummaries => 8001,
            Service::EmailComposer => 8002,
            Service::SalesInsights => 8003,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Service configuration loaded from environment variables.
/// Fails at startup if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub service: Service,
    pub api_key: String,
    pub api_base_url: String,
    pub model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env(service: Service) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            service,
            api_key: require_env("GROQ_API_KEY")?,
            api_base_url: optional_env("GROQ_API_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            model: optional_env(service.model_env())
                .unwrap_or_else(|| service.default_model().to_string()),
            port: match optional_env("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => service.default_port(),
            },
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an env var, treating empty or whitespace-only values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
