//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::providers::GenerationClient;
use crate::core::roast::{PromptBuilder, RoastPostProcessor};
use crate::core::security::BannedTermSet;
use crate::storage::PhotoStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::debug;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after construction, so workers share it
/// through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Arc<Config>,
    /// Image-to-text generation service
    pub client: Arc<dyn GenerationClient>,
    /// Mask, gate, and format pipeline
    pub processor: Arc<RoastPostProcessor>,
    /// Instruction builder
    pub prompts: PromptBuilder,
    /// Upload validation and storage
    pub photos: PhotoStore,
}

impl AppState {
    /// Build state around an existing generation client
    pub fn new(config: Config, client: Arc<dyn GenerationClient>) -> Result<Self> {
        let terms = BannedTermSet::builtin_with(&config.moderation.additional_terms)?;
        debug!("Loaded {} banned terms", terms.len());

        Ok(Self {
            processor: Arc::new(RoastPostProcessor::new(Arc::new(terms))),
            prompts: PromptBuilder::new(config.roast.max_context_chars),
            photos: PhotoStore::new(&config.upload),
            config: Arc::new(config),
            client,
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
