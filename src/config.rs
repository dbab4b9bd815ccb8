use anyhow::{bail, Context};
use std::env;

/// How outgoing mail leaves the process.
#[derive(Debug, Clone)]
pub enum SmtpConfig {
    /// Authenticated relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain SMTP for Mailpit/MailHog in the `test` environment.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub email_from: String,
    pub contact_inbox: String,
    pub smtp: SmtpConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 20)?;
        let db_min_connections = parse_or("DB_MIN_CONNECTIONS", 2)?;
        if db_min_connections > db_max_connections {
            bail!("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS");
        }

        let email_from = required("EMAIL_FROM")?;
        let contact_inbox = env::var("CONTACT_INBOX").unwrap_or_else(|_| email_from.clone());

        let smtp = if environment == "test" {
            SmtpConfig::Local {
                host: env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: parse_or("SMTP_PORT", 1025)?,
            }
        } else {
            SmtpConfig::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_url: required("DATABASE_URL")?,
            db_max_connections,
            db_min_connections,
            email_from,
            contact_inbox,
            smtp,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("{key} must be set"),
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_uses_default_when_unset() {
        let value: u32 = parse_or("PORTFOLIO_TEST_UNSET_NUMBER", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn required_rejects_missing_key() {
        assert!(required("PORTFOLIO_TEST_UNSET_KEY").is_err());
    }
}
