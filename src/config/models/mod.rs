//! Configuration data models

#![allow(missing_docs)]

pub mod logging;
pub mod roast;
pub mod server;
pub mod upload;

pub use logging::*;
pub use roast::*;
pub use server::*;
pub use upload::*;

/// Default bind host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

pub(crate) fn default_true() -> bool {
    true
}
