use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use super::multipart::read_file_field;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin,
    portfolio::application::{
        domain::{entities::AssetKind, policies::UploadPolicy},
        ports::incoming::use_cases::{
            UploadAssetCommand, UploadAssetCommandError, UploadAssetError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    #[schema(example = 5)]
    pub version: i64,
}

/// Profile photo upload (`multipart/form-data`, part `file`, any `image/*`).
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "content",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Image stored", body = inline(SuccessResponse<UploadResponse>)),
        (status = 400, description = "Missing, wrong type or oversized file", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/upload")]
pub async fn upload_image_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    handle_upload(AssetKind::Image, &admin, &data, payload).await
}

/// Resume upload (`multipart/form-data`, part `file`, PDF only).
#[utoipa::path(
    post,
    path = "/api/upload-resume",
    tag = "content",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Resume stored", body = inline(SuccessResponse<UploadResponse>)),
        (status = 400, description = "Missing, non-PDF or oversized file", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[post("/api/upload-resume")]
pub async fn upload_resume_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    handle_upload(AssetKind::Resume, &admin, &data, payload).await
}

async fn handle_upload(
    kind: AssetKind,
    admin: &AuthenticatedAdmin,
    data: &web::Data<AppState>,
    payload: Multipart,
) -> HttpResponse {
    let policy = &data.upload_policy;
    let limit = policy.max_size_for(kind);

    let file = match read_file_field(payload, FILE_FIELD, limit).await {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!(kind = %kind, error = %e, "Unreadable multipart body");
            return ApiResponse::bad_request("INVALID_MULTIPART", "Invalid multipart body");
        }
    };

    let command = match UploadAssetCommand::new(kind, file, policy) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err, policy),
    };

    let size = command.asset().as_str().len();

    match data.portfolio.upload_asset.execute(command).await {
        Ok(version) => {
            tracing::info!(
                admin = %admin.username,
                kind = %kind,
                encoded_len = size,
                version,
                "Asset stored"
            );
            ApiResponse::success(UploadResponse { version })
        }
        Err(UploadAssetError::RepositoryError(msg)) => {
            tracing::error!(kind = %kind, error = %msg, "Failed to store asset");
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: UploadAssetCommandError, policy: &UploadPolicy) -> HttpResponse {
    match err {
        UploadAssetCommandError::NoFile => ApiResponse::bad_request("NO_FILE", "No file uploaded"),
        UploadAssetCommandError::UnsupportedType(AssetKind::Resume) => {
            ApiResponse::bad_request("INVALID_FILE_TYPE", "Only PDF files are allowed")
        }
        UploadAssetCommandError::UnsupportedType(AssetKind::Image) => {
            ApiResponse::bad_request("INVALID_FILE_TYPE", "Only image files are allowed")
        }
        UploadAssetCommandError::TooLarge(kind) => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            &format!("File size exceeds {} limit", policy.size_limit_label(kind)),
        ),
        UploadAssetCommandError::Encoding => ApiResponse::internal_error(),
    }
}
