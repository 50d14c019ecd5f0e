//! HTTP server implementation

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;
mod utils;

pub use builder::run_server;
pub use server::HttpServer;
pub use state::AppState;
