//! Mapping from domain errors to HTTP responses

use actix_web::HttpResponse;

use ve_core::errors::DomainError;
use ve_shared::types::ApiResponse;

/// Convert a domain error to its HTTP response
///
/// All expected outcomes map to 400 with a distinct, user-safe message;
/// dispatch and internal failures map to 500 and are logged for operator
/// visibility. The error Display strings are user-safe by construction, so
/// they pass through as the envelope message.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    if error.is_routine() {
        tracing::debug!(code = error.error_code(), "Request rejected");
    } else {
        tracing::error!(code = error.error_code(), error = ?error, "Request failed");
    }

    let body: ApiResponse<()> = ApiResponse::error(error.to_string());

    match error {
        DomainError::DispatchFailed { .. } | DomainError::Internal { .. } => {
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}
