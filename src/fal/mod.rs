pub mod normalize;
pub mod placeholder;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::FalConfig;
use crate::error::{RelayError, Result};
use crate::models::{FalPrompt, GenerationRequest, GenerationResult};

pub use normalize::normalize_response;
pub use placeholder::placeholder_data_url;

/// Client for the fal.ai synchronous text-to-image API.
///
/// One instance is shared across all inbound requests; it holds no mutable
/// state beyond the pooled HTTP connections.
#[derive(Clone)]
pub struct FalClient {
    http: reqwest::Client,
    config: FalConfig,
    static_dir: PathBuf,
}

impl FalClient {
    pub fn new(config: FalConfig, static_dir: impl Into<PathBuf>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            static_dir: static_dir.into(),
        })
    }

    pub fn config(&self) -> &FalConfig {
        &self.config
    }

    /// Resolve a mood descriptor to an image URL.
    ///
    /// Without a configured credential this never touches the network and
    /// answers with an inline SVG placeholder instead.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        let api_key = match &self.config.api_key {
            Some(key) => key,
            None => {
                log::info!(
                    "No FAL_API_KEY configured, returning placeholder for '{} {}'",
                    request.emotion,
                    request.style
                );
                return Ok(GenerationResult {
                    image_url: placeholder_data_url(&request),
                });
            }
        };

        let prompt = request.prompt();
        log::info!("Generating image with model: {}", self.config.model_id);
        log::debug!("Prompt: {}", prompt);

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Authorization", format!("Key {}", api_key))
            .json(&FalPrompt { prompt })
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            // A 202 from a queue endpoint is surfaced the same way as any
            // other non-200: one attempt, no retries.
            let text = response.text().await.unwrap_or_default();
            log::error!("Upstream returned {}: {}", status, text);
            return Err(RelayError::UpstreamFailure(text));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let raw = response.bytes().await?;

        // Unparsable bodies degrade to an empty object and run through the
        // same extraction chain; the raw-bytes fallback may still match.
        let body: Value =
            serde_json::from_slice(&raw).unwrap_or_else(|_| Value::Object(Default::default()));

        let image_url =
            normalize_response(&body, content_type.as_deref(), &raw, &self.static_dir)?;
        log::debug!("Resolved image url: {}", truncate_for_log(&image_url));

        Ok(GenerationResult { image_url })
    }
}

fn truncate_for_log(url: &str) -> &str {
    url.get(..96).unwrap_or(url)
}
