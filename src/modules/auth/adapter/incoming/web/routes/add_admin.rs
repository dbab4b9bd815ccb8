use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedAdmin,
        application::{
            domain::entities::Admin,
            ports::incoming::use_cases::{AddAdminCommand, AddAdminError},
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Deserialize, ToSchema)]
pub struct AddAdminRequest {
    /// Trimmed, 1 to 50 characters
    #[schema(example = "editor")]
    #[serde(default)]
    pub username: String,

    /// 8 to 128 characters
    #[schema(example = "a-long-passphrase")]
    #[serde(default)]
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/admins",
    tag = "auth",
    security(("BearerAuth" = [])),
    request_body = AddAdminRequest,
    responses(
        (status = 201, description = "Admin created", body = inline(SuccessResponse<Admin>)),
        (
            status = 400,
            description = "Invalid input or username already exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "USERNAME_TAKEN", "message": "Username already exists" }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/admins")]
pub async fn add_admin_handler(
    admin: AuthenticatedAdmin,
    req: web::Json<AddAdminRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match AddAdminCommand::new(dto.username, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.add.execute(command).await {
        Ok(created) => {
            tracing::info!(
                admin = %admin.username,
                new_admin = %created.username,
                "Admin added"
            );
            ApiResponse::created(created)
        }
        Err(AddAdminError::UsernameTaken) => {
            ApiResponse::bad_request("USERNAME_TAKEN", "Username already exists")
        }
        Err(AddAdminError::HashingFailed(e)) => {
            tracing::error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        Err(AddAdminError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Failed to add admin");
            ApiResponse::internal_error()
        }
    }
}
