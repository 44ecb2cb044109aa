use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ve_core::services::otp::{CodeSweeper, OtpService, OtpServiceConfig, SweeperConfig, SystemClock};
use ve_infra::config::MailConfig;
use ve_infra::mail::create_mailer;
use ve_shared::config::ServerConfig;

use ve_api::app::create_app;
use ve_api::routes::otp::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting VeriMail API server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let service_config = OtpServiceConfig::from_env();
    let sweeper_config = SweeperConfig::from_env();
    let mail_config = MailConfig::from_env();

    info!(
        provider = %mail_config.provider,
        code_length = service_config.otp.code_length,
        expiry_minutes = service_config.otp.expiry_minutes,
        "Loaded configuration"
    );

    // Wire up dependencies
    let mailer = Arc::new(
        create_mailer(&mail_config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );
    let clock = Arc::new(SystemClock);
    let otp_service = Arc::new(OtpService::new(mailer, clock, service_config));

    // Background eviction of expired codes and elapsed limiter windows
    let (send_limiter, verify_limiter) = otp_service.limiters();
    CodeSweeper::new(
        otp_service.store(),
        vec![send_limiter, verify_limiter],
        sweeper_config,
    )
    .start();

    let app_state = web::Data::new(AppState {
        otp_service: otp_service.clone(),
    });

    let bind_address = server_config.bind_address();
    info!(address = %bind_address, "Server binding");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
