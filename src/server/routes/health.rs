//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use std::borrow::Cow;
use tracing::debug;

/// Liveness status plus the configured model
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    model: String,
    api_version: String,
}

/// Basic health check endpoint
///
/// Does not call the generation service.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        model: state.client.model_name().to_string(),
        api_version: state.client.api_version().to_string(),
    })
}
