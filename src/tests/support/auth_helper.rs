use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::ACCESS_TOKEN_TYPE;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Issues `access-<username>` and accepts any token as the `admin` account.
pub struct StubTokenProvider;

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _admin_id: Uuid, username: &str) -> Result<String, TokenError> {
        Ok(format!("access-{username}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let now = chrono::Utc::now().timestamp();
        Ok(TokenClaims {
            sub: Uuid::nil(),
            username: "admin".to_string(),
            iss: "test".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        })
    }
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(StubTokenProvider);
    web::Data::new(provider)
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

const BOUNDARY: &str = "----portfolio-test-boundary";

/// Single-part `multipart/form-data` body. Returns the `Content-Type` header value and the body.
pub fn multipart_payload(
    field: &str,
    filename: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> (String, Vec<u8>) {
    let mut body = Vec::with_capacity(bytes.len() + 256);
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    if let Some(ct) = content_type {
        body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
