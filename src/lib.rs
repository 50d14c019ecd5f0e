//! # roast-gateway
//!
//! HTTP service that turns an uploaded face photo into a short, playful
//! roast using Google Gemini, then masks banned terms, moderates, and
//! formats the text before returning it.
//!
//! ## Post-processing only
//!
//! ```rust
//! use roast_gateway::core::roast::RoastPostProcessor;
//!
//! let processor = RoastPostProcessor::default();
//! let roast = processor.process("- great hair\n- bold choices").unwrap();
//! assert_eq!(roast.final_text, "• great hair.\n• bold choices");
//! assert!(roast.moderation.ok);
//! ```
//!
//! ## Server mode
//!
//! ```rust,no_run
//! use roast_gateway::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/roast.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::providers::{GeminiClient, GenerationClient, ProviderError};
pub use core::roast::{Intensity, ProcessedRoast, RoastPostProcessor};
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
