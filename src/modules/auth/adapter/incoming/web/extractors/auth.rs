use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::{
    auth::application::ports::outgoing::{token_provider::ACCESS_TOKEN_TYPE, TokenProvider},
    shared::api::ApiResponse,
};

/// Admin identity taken from a valid `Authorization: Bearer <access token>`.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn unauthorized(code: &str, message: &str) -> Ready<Result<AuthenticatedAdmin, ActixError>> {
    ready(Err(create_api_error(ApiResponse::unauthorized(
        code, message,
    ))))
}

impl FromRequest for AuthenticatedAdmin {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token_provider) =
            req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        else {
            tracing::error!("Token provider is not registered as app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            );
        };

        match token_provider.verify_token(token) {
            Ok(claims) if claims.token_type == ACCESS_TOKEN_TYPE => ready(Ok(AuthenticatedAdmin {
                admin_id: claims.sub,
                username: claims.username,
            })),
            Ok(claims) => {
                tracing::warn!(token_type = %claims.token_type, "Rejected non-access token");
                unauthorized("INVALID_TOKEN", "Invalid or expired token")
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                unauthorized("INVALID_TOKEN", "Invalid or expired token")
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
