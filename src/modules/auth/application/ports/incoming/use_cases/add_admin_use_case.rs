use async_trait::async_trait;

use crate::auth::application::domain::entities::{
    Admin, PASSWORD_MAX_CHARS, PASSWORD_MIN_CHARS, USERNAME_MAX_CHARS,
};

#[derive(Debug, Clone)]
pub struct AddAdminCommand {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddAdminCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must be at most 50 characters")]
    UsernameTooLong,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must be at most 128 characters")]
    PasswordTooLong,
}

impl AddAdminCommand {
    pub fn new(username: String, password: String) -> Result<Self, AddAdminCommandError> {
        let username = username.trim().to_string();

        if username.is_empty() {
            return Err(AddAdminCommandError::EmptyUsername);
        }
        if username.chars().count() > USERNAME_MAX_CHARS {
            return Err(AddAdminCommandError::UsernameTooLong);
        }

        let password_len = password.chars().count();
        if password_len < PASSWORD_MIN_CHARS {
            return Err(AddAdminCommandError::PasswordTooShort);
        }
        if password_len > PASSWORD_MAX_CHARS {
            return Err(AddAdminCommandError::PasswordTooLong);
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

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddAdminError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddAdminUseCase: Send + Sync {
    async fn execute(&self, command: AddAdminCommand) -> Result<Admin, AddAdminError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input_and_trims_username() {
        let cmd = AddAdminCommand::new("  editor  ".to_string(), "longenough".to_string()).unwrap();

        assert_eq!(cmd.username(), "editor");
        assert_eq!(cmd.password(), "longenough");
    }

    #[test]
    fn username_limits() {
        assert_eq!(
            AddAdminCommand::new(" \t ".to_string(), "longenough".to_string()).unwrap_err(),
            AddAdminCommandError::EmptyUsername
        );
        assert!(AddAdminCommand::new("a".repeat(50), "longenough".to_string()).is_ok());
        assert_eq!(
            AddAdminCommand::new("a".repeat(51), "longenough".to_string()).unwrap_err(),
            AddAdminCommandError::UsernameTooLong
        );
    }

    #[test]
    fn password_limits() {
        assert_eq!(
            AddAdminCommand::new("editor".to_string(), "short".to_string()).unwrap_err(),
            AddAdminCommandError::PasswordTooShort
        );
        assert!(AddAdminCommand::new("editor".to_string(), "p".repeat(128)).is_ok());
        assert_eq!(
            AddAdminCommand::new("editor".to_string(), "p".repeat(129)).unwrap_err(),
            AddAdminCommandError::PasswordTooLong
        );
    }
}
