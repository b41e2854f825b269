use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// External AI suggestion endpoint. `None` disables suggestions.
    pub suggestion_service_url: Option<String>,
    pub suggestion_timeout_secs: u64,
    /// Extra junk-filter terms on top of the built-in deny-list.
    pub junk_extra_terms: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            suggestion_service_url: optional_env("SUGGESTION_SERVICE_URL"),
            suggestion_timeout_secs: std::env::var("SUGGESTION_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("SUGGESTION_TIMEOUT_SECS must be a whole number of seconds")?,
            junk_extra_terms: optional_env("JUNK_EXTRA_TERMS")
                .map(|raw| split_terms(&raw))
                .unwrap_or_default(),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits a comma-separated list, dropping blanks.
fn split_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_terms() {
        assert_eq!(
            split_terms(" Pune, Hyderabad ,,  "),
            vec!["Pune".to_string(), "Hyderabad".to_string()]
        );
        assert!(split_terms("").is_empty());
    }
}
