use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin,
    portfolio::application::{
        domain::{entities::AssetKind, policies::UploadPolicy},
        ports::incoming::use_cases::{
            UpsertPortfolioCommand, UpsertPortfolioCommandError, UpsertPortfolioError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateContentResponse {
    /// Version written by this update
    #[schema(example = 7)]
    pub version: i64,
}

/// Merge an editor submission into the stored portfolio.
///
/// Top-level sections present in the body replace the stored ones; absent
/// sections are kept. `personal.image` / `personal.resume` are only written
/// when supplied as data-URIs, and are held to the same type and size limits
/// as the upload endpoints.
#[utoipa::path(
    post,
    path = "/api/content",
    tag = "content",
    security(("BearerAuth" = [])),
    request_body(content = Object, description = "Portfolio content, image/resume optional"),
    responses(
        (status = 200, description = "Content saved", body = inline(SuccessResponse<UpdateContentResponse>)),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[post("/api/content")]
pub async fn update_content_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
    payload: web::Json<serde_json::Value>,
) -> impl Responder {
    let policy = &data.upload_policy;

    let command = match UpsertPortfolioCommand::from_json(payload.into_inner(), policy) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err, policy),
    };

    match data.portfolio.upsert.execute(command).await {
        Ok(version) => {
            tracing::info!(admin = %admin.username, version, "Portfolio content updated");
            ApiResponse::success(UpdateContentResponse { version })
        }
        Err(UpsertPortfolioError::RepositoryError(msg)) => {
            tracing::error!(admin = %admin.username, error = %msg, "Failed to save portfolio");
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: UpsertPortfolioCommandError, policy: &UploadPolicy) -> HttpResponse {
    match err {
        UpsertPortfolioCommandError::NotAnObject => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Body must be a JSON object")
        }
        UpsertPortfolioCommandError::InvalidShape(msg) => {
            tracing::debug!(error = %msg, "Rejected portfolio body");
            ApiResponse::bad_request("VALIDATION_ERROR", &format!("Invalid content: {msg}"))
        }
        UpsertPortfolioCommandError::InvalidAsset(AssetKind::Image) => {
            ApiResponse::bad_request("INVALID_IMAGE", "Image must be a base64 data-URI")
        }
        UpsertPortfolioCommandError::InvalidAsset(AssetKind::Resume) => {
            ApiResponse::bad_request("INVALID_RESUME", "Resume must be a base64 data-URI")
        }
        UpsertPortfolioCommandError::UnsupportedAssetType(AssetKind::Image) => {
            ApiResponse::bad_request("INVALID_FILE_TYPE", "Only image files are allowed")
        }
        UpsertPortfolioCommandError::UnsupportedAssetType(AssetKind::Resume) => {
            ApiResponse::bad_request("INVALID_FILE_TYPE", "Only PDF files are allowed")
        }
        UpsertPortfolioCommandError::AssetTooLarge(kind) => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            &format!("File size exceeds {} limit", policy.size_limit_label(kind)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::{
        portfolio::application::{
            domain::data_uri::DataUri,
            ports::{incoming::use_cases::UpsertPortfolioUseCase, outgoing::PortfolioWrite},
        },
        shared::api::custom_json_config,
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{bearer, token_provider_data},
        },
    };

    #[derive(Clone)]
    struct MockUpsertPortfolioUseCase {
        result: Result<i64, UpsertPortfolioError>,
        received: Arc<Mutex<Vec<PortfolioWrite>>>,
    }

    impl MockUpsertPortfolioUseCase {
        fn returning(result: Result<i64, UpsertPortfolioError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl UpsertPortfolioUseCase for MockUpsertPortfolioUseCase {
        async fn execute(
            &self,
            command: UpsertPortfolioCommand,
        ) -> Result<i64, UpsertPortfolioError> {
            self.received.lock().unwrap().push(command.into_write());
            self.result.clone()
        }
    }

    async fn call(
        use_case: MockUpsertPortfolioUseCase,
        body: serde_json::Value,
        with_token: bool,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_upsert_portfolio(use_case)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .app_data(custom_json_config())
                .service(update_content_handler),
        )
        .await;

        let mut req = test::TestRequest::post().uri("/api/content").set_json(body);
        if with_token {
            req = req.insert_header(bearer());
        }

        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn saves_and_returns_version() {
        // Arrange
        let use_case = MockUpsertPortfolioUseCase::returning(Ok(3));

        // Act
        let resp = call(
            use_case.clone(),
            serde_json::json!({
                "_id": "65f0",
                "personal": { "name": "Ada", "hasImage": true },
                "skills": ["Rust"]
            }),
            true,
        )
        .await;

        // Assert
        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["version"], 3);

        let received = use_case.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].image.is_none());
        assert!(received[0].resume.is_none());
    }

    #[actix_web::test]
    async fn rejects_malformed_image() {
        let use_case = MockUpsertPortfolioUseCase::returning(Ok(1));

        let resp = call(
            use_case.clone(),
            serde_json::json!({ "personal": { "image": "not-a-data-uri" } }),
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_IMAGE");
        assert!(use_case.received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_image_that_is_not_an_image() {
        let use_case = MockUpsertPortfolioUseCase::returning(Ok(1));

        let resp = call(
            use_case.clone(),
            serde_json::json!({
                "personal": { "image": "data:text/html;base64,PHNjcmlwdD5hbGVydCgxKTwvc2NyaXB0Pg==" }
            }),
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_FILE_TYPE");
        assert!(use_case.received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_resume_that_is_not_a_pdf() {
        let use_case = MockUpsertPortfolioUseCase::returning(Ok(1));

        let resp = call(
            use_case.clone(),
            serde_json::json!({ "personal": { "resume": "data:text/plain;base64,aGVsbG8=" } }),
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_FILE_TYPE");
        assert_eq!(json["error"]["message"], "Only PDF files are allowed");
        assert!(use_case.received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_asset_over_the_upload_limit() {
        let use_case = MockUpsertPortfolioUseCase::returning(Ok(1));
        let image = DataUri::from_bytes("image/png", &vec![0u8; 6 * 1024 * 1024]).unwrap();

        let resp = call(
            use_case.clone(),
            serde_json::json!({ "personal": { "image": image.as_str() } }),
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "FILE_TOO_LARGE");
        assert_eq!(json["error"]["message"], "File size exceeds 5MB limit");
        assert!(use_case.received.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rejects_wrong_shape() {
        let resp = call(
            MockUpsertPortfolioUseCase::returning(Ok(1)),
            serde_json::json!({ "projects": "nope" }),
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn requires_authentication() {
        let resp = call(
            MockUpsertPortfolioUseCase::returning(Ok(1)),
            serde_json::json!({ "skills": [] }),
            false,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn repository_error_is_internal_error() {
        let resp = call(
            MockUpsertPortfolioUseCase::returning(Err(UpsertPortfolioError::RepositoryError(
                "db down".to_string(),
            ))),
            serde_json::json!({ "skills": [] }),
            true,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
