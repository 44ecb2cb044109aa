use actix_web::{web, HttpResponse};
use validator::Validate;

use ve_core::services::otp::MailerTrait;
use ve_shared::types::ApiResponse;
use ve_shared::utils::email::mask_address;

use crate::dto::otp::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for POST /otp/verify
///
/// Redeems a one-time code for the given address.
///
/// # Request Body
///
/// ```json
/// { "address": "alice@example.com", "code": "042917" }
/// ```
///
/// # Responses
///
/// - 200: `{ "success": true, "message": "...", "data": { "address": "..." } }`
/// - 400: distinct messages for not found, expired, mismatch, malformed code,
///   and rate limited
pub async fn verify_code<M: MailerTrait + 'static>(
    state: web::Data<AppState<M>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse {
    if request.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Invalid request data"));
    }

    tracing::info!(
        address = %mask_address(&request.address),
        "Processing verify request"
    );

    match state
        .otp_service
        .verify_code(&request.address, &request.code)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(
            "Address verified successfully.",
            VerifyCodeResponse {
                address: result.address,
            },
        )),
        Err(error) => domain_error_response(&error),
    }
}
