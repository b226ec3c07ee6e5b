use actix_web::web;

use crate::api::handlers;

/// Register all API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/chat", web::post().to(handlers::chat))
            .route("/risk-assessment", web::post().to(handlers::risk_assessment))
            .route("/treatment-plan", web::post().to(handlers::treatment_plan))
            .route("/vitals-summary", web::post().to(handlers::vitals_summary)),
    )
    .route("/health", web::get().to(handlers::health));
}
