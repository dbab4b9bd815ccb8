use anyhow::{bail, Context};
use std::env;

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY_SECS: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// `JWT_SECRET` (required, at least 32 characters for HS256),
    /// `JWT_ACCESS_EXPIRY` (default 3600), `JWT_ISSUER` (default "portfolio").
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret_key.len() < MIN_SECRET_LEN {
            bail!("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long for HS256");
        }

        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string())
            .parse::<i64>()
            .context("Invalid JWT_ACCESS_EXPIRY value")?;

        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY_SECS {
            bail!("JWT_ACCESS_EXPIRY must be between 1 and {MAX_ACCESS_EXPIRY_SECS} seconds");
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}
