use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactNotifyError {
    #[error("Notification failed: {0}")]
    SendFailed(String),
}

/// Tells the site owner about a new submission.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, message: &ContactMessage) -> Result<(), ContactNotifyError>;
}
