use async_trait::async_trait;
use email_address::EmailAddress;

use crate::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    message: ContactMessage,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactCommandError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,
}

impl SubmitContactCommand {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        message: String,
    ) -> Result<Self, SubmitContactCommandError> {
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();
        let email = email.trim().to_string();
        let body = message.trim().to_string();

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || body.is_empty() {
            return Err(SubmitContactCommandError::MissingFields);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(SubmitContactCommandError::InvalidEmail);
        }

        Ok(Self {
            message: ContactMessage {
                first_name,
                last_name,
                email,
                message: body,
            },
        })
    }

    pub fn message(&self) -> &ContactMessage {
        &self.message
    }

    pub fn into_message(self) -> ContactMessage {
        self.message
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Email delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, command: SubmitContactCommand) -> Result<(), SubmitContactError>;
}
