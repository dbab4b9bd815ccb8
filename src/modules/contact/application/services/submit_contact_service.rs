use async_trait::async_trait;
use std::sync::Arc;

use crate::contact::application::ports::{
    incoming::use_cases::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase},
    outgoing::{ContactMessageRepository, ContactNotifier},
};

/// Saves the submission (best effort) and then notifies the owner.
/// The saved row is kept even when the notification fails.
pub struct SubmitContactService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    repository: R,
    notifier: Arc<dyn ContactNotifier + Send + Sync>,
}

impl<R> SubmitContactService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    pub fn new(repository: R, notifier: Arc<dyn ContactNotifier + Send + Sync>) -> Self {
        Self {
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self, command: SubmitContactCommand) -> Result<(), SubmitContactError> {
        let message = command.into_message();

        if let Err(e) = self.repository.save(&message).await {
            tracing::error!(error = %e, "Failed to save contact message; continuing with email");
        }

        self.notifier
            .notify(&message)
            .await
            .map_err(|e| SubmitContactError::DeliveryFailed(e.to_string()))
    }
}
