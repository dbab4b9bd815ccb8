// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Content payloads carry whole portfolio documents, optionally with the
/// image and resume inlined as base64. Two 5MB assets encode to under 14MB.
const MAX_JSON_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| {
            let message = err.to_string();
            tracing::debug!(error = %message, "Rejected JSON body");
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
