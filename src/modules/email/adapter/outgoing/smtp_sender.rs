use crate::email::application::ports::outgoing::{EmailMessage, EmailSendError, EmailSender};
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Seam over the SMTP transport so message building can be tested without a server.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// Authenticated relay (production).
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailSendError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailSendError::TransportFailed(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    /// Plain, unauthenticated SMTP (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }

    fn build_message(&self, message: EmailMessage) -> Result<Message, EmailSendError> {
        let from: Mailbox = self
            .from_email
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("from: {e}")))?;
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("to: {e}")))?;

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject);

        if let Some(reply_to) = message.reply_to {
            let reply_to: Mailbox = reply_to
                .parse()
                .map_err(|e| EmailSendError::InvalidAddress(format!("reply-to: {e}")))?;
            builder = builder.reply_to(reply_to);
        }

        builder
            .multipart(MultiPart::alternative_plain_html(
                message.text_body,
                message.html_body,
            ))
            .map_err(|e| EmailSendError::BuildFailed(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, message: EmailMessage) -> Result<(), EmailSendError> {
        let email = self.build_message(message)?;

        self.mailer
            .send(email)
            .await
            .map_err(EmailSendError::TransportFailed)
    }
}
