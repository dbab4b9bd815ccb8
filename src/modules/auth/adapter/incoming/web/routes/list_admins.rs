use actix_web::{get, web, Responder};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedAdmin,
        application::{domain::entities::Admin, ports::incoming::use_cases::ListAdminsError},
    },
    shared::api::ApiResponse,
    AppState,
};

/// List admins, oldest first. Password hashes are never returned.
#[utoipa::path(
    get,
    path = "/api/auth/admins",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Admins", body = inline(SuccessResponse<Vec<Admin>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
#[get("/api/auth/admins")]
pub async fn list_admins_handler(
    admin: AuthenticatedAdmin,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.auth.list.execute().await {
        Ok(admins) => ApiResponse::success(admins),
        Err(ListAdminsError::QueryError(msg)) => {
            tracing::error!(admin = %admin.username, error = %msg, "Failed to list admins");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::{
        auth::application::ports::incoming::use_cases::ListAdminsUseCase,
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            auth_helper::{bearer, token_provider_data},
        },
    };

    #[derive(Clone)]
    struct MockListAdminsUseCase {
        result: Result<Vec<Admin>, ListAdminsError>,
    }

    #[async_trait]
    impl ListAdminsUseCase for MockListAdminsUseCase {
        async fn execute(&self) -> Result<Vec<Admin>, ListAdminsError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn returns_id_and_username_only() {
        let id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_list_admins(MockListAdminsUseCase {
                result: Ok(vec![Admin {
                    id,
                    username: "admin".to_string(),
                }]),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(list_admins_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/admins")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            json["data"],
            serde_json::json!([{ "id": id.to_string(), "username": "admin" }])
        );
    }

    #[actix_web::test]
    async fn requires_authentication() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(list_admins_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/admins")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
