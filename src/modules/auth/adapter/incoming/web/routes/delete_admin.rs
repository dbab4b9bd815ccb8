use actix_web::{delete, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedAdmin,
        application::ports::incoming::use_cases::DeleteAdminError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteAdminQuery {
    /// Admin id (UUID)
    id: Option<String>,
}

/// Delete an admin. The last remaining admin cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/auth/admins",
    tag = "auth",
    security(("BearerAuth" = [])),
    params(DeleteAdminQuery),
    responses(
        (status = 204, description = "Admin deleted"),
        (
            status = 400,
            description = "Missing or invalid id, or last admin",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "LAST_ADMIN", "message": "Cannot delete the last admin" }
            })
        ),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Admin not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/auth/admins")]
pub async fn delete_admin_handler(
    admin: AuthenticatedAdmin,
    query: web::Query<DeleteAdminQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(raw_id) = query.into_inner().id else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Admin id is required");
    };

    let Ok(admin_id) = Uuid::parse_str(raw_id.trim()) else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Invalid admin id");
    };

    match data.auth.delete.execute(admin_id).await {
        Ok(()) => {
            tracing::info!(admin = %admin.username, deleted = %admin_id, "Admin deleted");
            ApiResponse::no_content()
        }
        Err(DeleteAdminError::LastAdmin) => {
            ApiResponse::bad_request("LAST_ADMIN", "Cannot delete the last admin")
        }
        Err(DeleteAdminError::NotFound) => {
            ApiResponse::not_found("ADMIN_NOT_FOUND", "Admin not found")
        }
        Err(DeleteAdminError::RepositoryError(e)) => {
            tracing::error!(error = %e, "Failed to delete admin");
            ApiResponse::internal_error()
        }
    }
}
