//! Application factory
//!
//! Builds the Actix-web application from shared state, with routes and
//! middleware configured.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ve_core::services::otp::MailerTrait;
use ve_shared::types::ApiResponse;

use crate::middleware::cors::create_cors;
use crate::routes::otp::{send::send_code, verify::verify_code, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<M: MailerTrait + 'static>(
    app_state: web::Data<AppState<M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP routes
        .service(
            web::scope("/otp")
                .route("/send", web::post().to(send_code::<M>))
                .route("/verify", web::post().to(verify_code::<M>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "verimail-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unknown routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error("Resource not found"))
}
