//! HTTP route modules

pub mod health;
pub mod roast;

use actix_web::web;

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(web::scope("/api").route("/roast", web::post().to(roast::create_roast)));
}
