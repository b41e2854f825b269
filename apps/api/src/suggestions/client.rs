//! HTTP client for the external suggestion service.
//!
//! Retries on 429, 5xx and transport errors with exponential backoff; any other
//! non-success status fails immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::suggestions::{SuggestionError, SuggestionProvider, SuggestionRequest};

const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Deserialize)]
struct ServiceError {
    error: String,
}

/// Outcome of a single failed attempt.
enum Failure {
    Transient(SuggestionError),
    Fatal(SuggestionError),
}

#[derive(Clone)]
pub struct HttpSuggestionProvider {
    client: Client,
    url: String,
    base_delay: Duration,
}

impl HttpSuggestionProvider {
    pub fn new(url: String, timeout: Duration) -> Result<Self, SuggestionError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url,
            base_delay: BASE_DELAY,
        })
    }

    #[cfg(test)]
    fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    async fn attempt(&self, request: &SuggestionRequest<'_>) -> Result<Value, Failure> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| Failure::Transient(e.into()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Failure::Transient(e.into()))?;

        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            warn!("Suggestion service returned {status}: {body}");
            return Err(Failure::Transient(SuggestionError::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        if !status.is_success() {
            let message = match serde_json::from_str::<ServiceError>(&body) {
                Ok(e) => e.error,
                Err(_) => body,
            };
            return Err(Failure::Fatal(SuggestionError::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let text = strip_json_fences(&body);
        if text.is_empty() {
            return Err(Failure::Fatal(SuggestionError::EmptyBody));
        }
        debug!(
            "Suggestion call succeeded: current_score={}, {} bytes",
            request.current_score,
            text.len()
        );
        serde_json::from_str(text).map_err(|e| Failure::Fatal(e.into()))
    }
}

#[async_trait]
impl SuggestionProvider for HttpSuggestionProvider {
    async fn suggest(&self, request: &SuggestionRequest<'_>) -> Result<Value, SuggestionError> {
        let mut attempt = 1;
        loop {
            match self.attempt(request).await {
                Ok(value) => return Ok(value),
                Err(Failure::Fatal(e)) => return Err(e),
                Err(Failure::Transient(e)) if attempt >= MAX_ATTEMPTS => {
                    return Err(SuggestionError::Exhausted {
                        attempts: attempt,
                        last: Box::new(e),
                    })
                }
                Err(Failure::Transient(e)) => {
                    // 1x, 2x, 4x base delay
                    let delay = self.base_delay * 2u32.pow(attempt - 1);
                    warn!(
                        "Suggestion attempt {attempt} failed ({e}), retrying in {}ms",
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

/// Unwraps a body the service wrapped in a Markdown code fence, with or
/// without a `json` language tag.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
