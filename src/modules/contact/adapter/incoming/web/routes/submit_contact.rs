use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    contact::application::ports::incoming::use_cases::{
        SubmitContactCommand, SubmitContactCommandError, SubmitContactError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[schema(example = "Ada")]
    #[serde(default)]
    pub first_name: String,

    #[schema(example = "Lovelace")]
    #[serde(default)]
    pub last_name: String,

    #[schema(example = "ada@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "I'd like to talk about a project.")]
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    #[schema(example = "Email sent successfully")]
    pub message: String,
}

/// Contact form
///
/// The submission is stored when possible and always mailed to the owner.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Email sent", body = inline(SuccessResponse<ContactResponse>)),
        (status = 400, description = "Missing field or invalid email", body = ErrorResponse),
        (
            status = 500,
            description = "Email could not be delivered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_DELIVERY_FAILED",
                    "message": "Failed to send email. Please check server logs."
                }
            })
        ),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command =
        match SubmitContactCommand::new(dto.first_name, dto.last_name, dto.email, dto.message) {
            Ok(cmd) => cmd,
            Err(e @ SubmitContactCommandError::MissingFields) => {
                return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
            }
            Err(e @ SubmitContactCommandError::InvalidEmail) => {
                return ApiResponse::bad_request("INVALID_EMAIL", &e.to_string())
            }
        };

    match data.submit_contact.execute(command).await {
        Ok(()) => {
            tracing::info!("Contact message delivered");
            ApiResponse::success(ContactResponse {
                message: "Email sent successfully".to_string(),
            })
        }
        Err(SubmitContactError::DeliveryFailed(e)) => {
            tracing::error!(error = %e, "Error sending contact email");
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "EMAIL_DELIVERY_FAILED",
                "Failed to send email. Please check server logs.",
            )
        }
    }
}
