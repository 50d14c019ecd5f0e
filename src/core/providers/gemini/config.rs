//! Gemini Configuration Module

use serde::{Deserialize, Serialize};

/// Default Google AI Studio endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Default API version
pub const DEFAULT_API_VERSION: &str = "v1";

/// Gemini client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (Google AI Studio)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Sampling settings
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Provider-side safety thresholds
    #[serde(default = "default_safety_settings")]
    pub safety_settings: Vec<SafetySetting>,

    /// Proxy URL
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Log request and response bodies at debug level
    #[serde(default)]
    pub debug: bool,
}

/// Sampling settings sent as `generationConfig`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// Safety threshold for one harm category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    pub fn new(category: impl Into<String>, threshold: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            threshold: threshold.into(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_request_timeout() -> u64 {
    45
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_temperature() -> f32 {
    0.95
}

fn default_top_p() -> f32 {
    0.95
}

fn default_top_k() -> u32 {
    40
}

fn default_max_output_tokens() -> u32 {
    320
}

fn default_safety_settings() -> Vec<SafetySetting> {
    vec![
        SafetySetting::new("HARM_CATEGORY_HARASSMENT", "BLOCK_MEDIUM_AND_ABOVE"),
        SafetySetting::new("HARM_CATEGORY_HATE_SPEECH", "BLOCK_LOW_AND_ABOVE"),
    ]
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            api_version: default_api_version(),
            model: default_model(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            generation: GenerationSettings::default(),
            safety_settings: default_safety_settings(),
            proxy_url: None,
            debug: false,
        }
    }
}

impl GeminiConfig {
    /// Config for Google AI Studio with `api_key`
    pub fn new_google_ai(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Overlay `GEMINI_*` values resolved through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("GEMINI_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.model = model;
        }
        if let Some(version) = lookup("GEMINI_API_VERSION") {
            self.api_version = version;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.base_url = base_url;
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_request_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout = seconds;
        self
    }

    /// API key, if set and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// `generateContent` URL, without the key
    pub fn get_endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.api_version,
            self.model
        )
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key().is_none() {
            return Err("Server not configured: GEMINI_API_KEY missing.".to_string());
        }
        if self.model.trim().is_empty() {
            return Err("Model name cannot be empty".to_string());
        }
        if self.api_version.trim().is_empty() {
            return Err("API version cannot be empty".to_string());
        }
        if self.request_timeout == 0 {
            return Err("Request timeout cannot be 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err("Temperature must be between 0.0 and 2.0".to_string());
        }
        Ok(())
    }
}
