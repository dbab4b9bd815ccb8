use actix_web::{get, web, Responder};

use crate::{
    api::schemas::SuccessResponse, portfolio::application::domain::entities::PortfolioView,
    shared::api::ApiResponse, AppState,
};

/// Public site content. Image and resume are replaced by `hasImage` /
/// `hasResume`; fetch them from `/api/image` and `/api/resume`.
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "Portfolio content", body = inline(SuccessResponse<PortfolioView>)),
    )
)]
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    let view = data.portfolio.get.execute().await;

    if view.fallback {
        tracing::warn!("Serving static fallback content");
    }

    ApiResponse::success(view)
}
