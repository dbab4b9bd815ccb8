use actix_web::{
    get,
    http::header::{
        CacheControl, CacheDirective, ContentDisposition, DispositionParam, DispositionType,
    },
    web, HttpResponse, Responder,
};

use crate::{
    api::schemas::ErrorResponse,
    portfolio::application::{
        domain::entities::AssetKind,
        ports::incoming::use_cases::{AssetPayload, FetchAssetError},
    },
    shared::api::ApiResponse,
    AppState,
};

const ONE_YEAR_SECS: u32 = 31_536_000;

#[utoipa::path(
    get,
    path = "/api/image",
    tag = "content",
    responses(
        (status = 200, description = "Raw image bytes", content_type = "image/*"),
        (status = 404, description = "No image stored", body = ErrorResponse),
        (status = 500, description = "Stored image is malformed", body = ErrorResponse),
    )
)]
#[get("/api/image")]
pub async fn get_image_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.fetch_asset.execute(AssetKind::Image).await {
        Ok(AssetPayload { mime, bytes }) => HttpResponse::Ok()
            .content_type(mime)
            .insert_header(CacheControl(vec![
                CacheDirective::Public,
                CacheDirective::MaxAge(ONE_YEAR_SECS),
                CacheDirective::Extension("immutable".to_string(), None),
            ]))
            .body(bytes),
        Err(err) => map_fetch_error(AssetKind::Image, err),
    }
}

#[utoipa::path(
    get,
    path = "/api/resume",
    tag = "content",
    responses(
        (status = 200, description = "Resume download", content_type = "application/pdf"),
        (status = 404, description = "No resume stored", body = ErrorResponse),
        (status = 500, description = "Stored resume is malformed", body = ErrorResponse),
    )
)]
#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.fetch_asset.execute(AssetKind::Resume).await {
        Ok(AssetPayload { mime, bytes }) => HttpResponse::Ok()
            .content_type(mime)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename("resume.pdf".to_string())],
            })
            .body(bytes),
        Err(err) => map_fetch_error(AssetKind::Resume, err),
    }
}

fn map_fetch_error(kind: AssetKind, err: FetchAssetError) -> HttpResponse {
    match err {
        FetchAssetError::NotFound => match kind {
            AssetKind::Image => ApiResponse::not_found("IMAGE_NOT_FOUND", "Image not found"),
            AssetKind::Resume => ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found"),
        },
        FetchAssetError::Malformed(msg) => {
            tracing::error!(kind = %kind, error = %msg, "Stored asset is malformed");
            ApiResponse::internal_error()
        }
        FetchAssetError::RepositoryError(msg) => {
            tracing::error!(kind = %kind, error = %msg, "Failed to load asset");
            ApiResponse::internal_error()
        }
    }
}
