use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin,
    portfolio::application::{
        domain::entities::PortfolioFull, ports::incoming::use_cases::GetFullPortfolioError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Full aggregate for the admin editor, including stored data-URIs.
#[utoipa::path(
    get,
    path = "/api/content/full",
    tag = "content",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Full portfolio", body = inline(SuccessResponse<PortfolioFull>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/content/full")]
pub async fn get_full_content_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.get_full.execute().await {
        Ok(full) => ApiResponse::success(full),
        Err(GetFullPortfolioError::Missing) => {
            tracing::error!(admin = %admin.username, "Portfolio missing after seeding");
            ApiResponse::internal_error()
        }
        Err(GetFullPortfolioError::RepositoryError(msg)) => {
            tracing::error!(admin = %admin.username, error = %msg, "Failed to load full portfolio");
            ApiResponse::internal_error()
        }
    }
}
