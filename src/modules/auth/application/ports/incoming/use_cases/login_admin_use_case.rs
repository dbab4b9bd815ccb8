use async_trait::async_trait;

use crate::auth::application::domain::entities::Admin;

/// Login input. The username is trimmed; the password is taken as typed.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(username: String, password: String) -> Result<Self, LoginCommandError> {
        let username = username.trim().to_string();

        if username.is_empty() {
            return Err(LoginCommandError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: Admin,
    pub access_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginResult, LoginAdminError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed() {
        let cmd = LoginCommand::new("  admin ".to_string(), " secret ".to_string()).unwrap();

        assert_eq!(cmd.username(), "admin");
        assert_eq!(cmd.password(), " secret ");
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert_eq!(
            LoginCommand::new("   ".to_string(), "pw".to_string()).unwrap_err(),
            LoginCommandError::EmptyUsername
        );
        assert_eq!(
            LoginCommand::new("admin".to_string(), String::new()).unwrap_err(),
            LoginCommandError::EmptyPassword
        );
    }
}
