//! Gemini Client
//!
//! Sends one `generateContent` request with an inline image and extracts the
//! generated text.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::{Client, ClientBuilder, Response};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::config::GeminiConfig;
use super::error::{
    GeminiErrorMapper, gemini_config_error, gemini_network_error, gemini_parse_error,
    gemini_timeout_error,
};
use super::models::{
    Blob, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::core::providers::{
    GenerationClient, GenerationOutput, GenerationRequest, ProviderError,
};

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    /// Create a client; fails without an API key
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key().is_none() {
            return Err(gemini_config_error("GEMINI_API_KEY missing"));
        }

        let mut builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| gemini_network_error(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| gemini_network_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Client configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the request body: instruction first, then the image
    pub fn build_request(&self, request: &GenerationRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: request.instruction.clone(),
                    },
                    Part::InlineData {
                        inline_data: Blob {
                            mime_type: request.image.mime_type.clone(),
                            data: BASE64.encode(&request.image.data),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig::from(&self.config.generation),
            safety_settings: self.config.safety_settings.clone(),
        }
    }

    async fn send_request(
        &self,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.config.get_endpoint();
        let api_key = self.config.api_key().unwrap_or_default();

        if self.config.debug {
            debug!("Gemini request URL: {}", url);
            debug!(
                "Gemini request instruction: {:?}",
                body.contents
                    .first()
                    .and_then(|c| c.parts.first())
                    .map(|p| match p {
                        Part::Text { text } => text.as_str(),
                        Part::InlineData { .. } => "<inline data>",
                    })
            );
        }

        let response = timeout(
            Duration::from_secs(self.config.request_timeout),
            self.http_client
                .post(&url)
                .query(&[("key", api_key)])
                .json(body)
                .send(),
        )
        .await
        .map_err(|_| gemini_timeout_error("Request timeout"))?
        .map_err(|e| {
            if e.is_timeout() {
                gemini_timeout_error(format!("Request timeout: {}", e.without_url()))
            } else {
                gemini_network_error(format!("Network error: {}", e.without_url()))
            }
        })?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: Response,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| gemini_network_error(format!("Failed to read response: {}", e)))?;

        if self.config.debug {
            debug!("Gemini response status: {}", status);
            debug!("Gemini response body: {}", response_text);
        }

        if !status.is_success() {
            return Err(GeminiErrorMapper::from_http_status(
                status.as_u16(),
                &response_text,
            ));
        }

        let json_response: serde_json::Value = serde_json::from_str(&response_text)
            .map_err(|e| gemini_parse_error(format!("Failed to parse response JSON: {}", e)))?;

        if json_response.get("error").is_some() {
            return Err(GeminiErrorMapper::from_api_response(
                status.as_u16(),
                &json_response,
            ));
        }

        serde_json::from_value(json_response)
            .map_err(|e| gemini_parse_error(format!("Unexpected response shape: {}", e)))
    }

    /// Join the text parts of the first candidate, each followed by a newline
    pub fn extract_output(response: &GenerateContentResponse) -> GenerationOutput {
        let Some(candidate) = response.candidates.first() else {
            if let Some(reason) = response
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.as_deref())
            {
                warn!(block_reason = reason, "Gemini blocked the prompt");
            }
            return GenerationOutput::default();
        };

        let mut text = String::new();
        if let Some(content) = &candidate.content {
            for part in &content.parts {
                if let Some(part_text) = &part.text {
                    text.push_str(part_text);
                    text.push('\n');
                }
            }
        }

        GenerationOutput {
            text,
            finish_reason: candidate.finish_reason.clone(),
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutput, ProviderError> {
        let body = self.build_request(request);
        let response = self.send_request(&body).await?;
        let output = Self::extract_output(&response);

        debug!(
            model = %self.config.model,
            finish_reason = ?output.finish_reason,
            text_len = output.text.len(),
            "Gemini generation finished"
        );
        Ok(output)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn api_version(&self) -> &str {
        &self.config.api_version
    }
}
