use actix_web::{web, HttpResponse};
use validator::Validate;

use ve_core::services::otp::MailerTrait;
use ve_shared::types::ApiResponse;
use ve_shared::utils::email::mask_address;

use crate::dto::otp::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error::domain_error_response;

use super::AppState;

/// Handler for POST /otp/send
///
/// Issues a one-time code for the given address and dispatches it by mail.
///
/// # Request Body
///
/// ```json
/// { "address": "alice@example.com" }
/// ```
///
/// # Responses
///
/// - 200: `{ "success": true, "message": "...", "data": { "address": "...", "expires_in_minutes": 5 } }`
/// - 400: invalid address or rate limited
/// - 500: mail dispatch failure
pub async fn send_code<M: MailerTrait + 'static>(
    state: web::Data<AppState<M>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse {
    if request.validate().is_err() {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Invalid email address"));
    }

    tracing::info!(
        address = %mask_address(&request.address),
        "Processing send request"
    );

    match state.otp_service.send_code(&request.address).await {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(
            "Verification code sent. Please check your inbox.",
            SendCodeResponse {
                address: result.address,
                expires_in_minutes: result.expiry_minutes,
            },
        )),
        Err(error) => domain_error_response(&error),
    }
}
