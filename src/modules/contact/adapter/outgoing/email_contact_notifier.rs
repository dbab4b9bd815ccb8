use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    contact::application::{
        domain::entities::ContactMessage,
        ports::outgoing::{ContactNotifier, ContactNotifyError},
    },
    email::application::ports::outgoing::{EmailMessage, EmailSender},
};

/// Sends each submission to the owner's inbox with `Reply-To` set to the visitor.
pub struct EmailContactNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    inbox: String,
}

impl EmailContactNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, inbox: impl Into<String>) -> Self {
        Self {
            sender,
            inbox: inbox.into(),
        }
    }

    fn compose(&self, contact: &ContactMessage) -> EmailMessage {
        let name = contact.full_name();

        let text_body = format!(
            "You have a new contact form submission:\n\n\
             Name: {name}\n\
             Email: {email}\n\
             Message:\n{message}\n",
            email = contact.email,
            message = contact.message,
        );

        let html_body = format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>Name:</strong> {name}</p>\n\
             <p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>\n\
             <hr />\n\
             <h3>Message:</h3>\n\
             <p>{message}</p>\n",
            name = escape_html(&name),
            email = escape_html(&contact.email),
            message = escape_html(&contact.message).replace('\n', "<br />"),
        );

        EmailMessage {
            to: self.inbox.clone(),
            reply_to: Some(contact.email.clone()),
            subject: format!("Portfolio Contact: {name}"),
            text_body,
            html_body,
        }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[async_trait]
impl ContactNotifier for EmailContactNotifier {
    async fn notify(&self, contact: &ContactMessage) -> Result<(), ContactNotifyError> {
        self.sender
            .send(self.compose(contact))
            .await
            .map_err(|e| ContactNotifyError::SendFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    use crate::email::application::ports::outgoing::EmailSendError;

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send(&self, message: EmailMessage) -> Result<(), EmailSendError>;
        }
    }

    fn contact(message: &str) -> ContactMessage {
        ContactMessage {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn mail_goes_to_inbox_with_reply_to_visitor() {
        let mut sender = MockEmailSenderMock::new();
        sender
            .expect_send()
            .withf(|m| {
                m.to == "owner@example.com"
                    && m.reply_to.as_deref() == Some("ada@example.com")
                    && m.subject == "Portfolio Contact: Ada Lovelace"
                    && m.text_body.contains("Message:\nHi there")
            })
            .times(1)
            .returning(|_| Ok(()));

        let notifier = EmailContactNotifier::new(Arc::new(sender), "owner@example.com");

        assert!(notifier.notify(&contact("Hi there")).await.is_ok());
    }

    #[test]
    fn html_body_escapes_visitor_input() {
        let notifier =
            EmailContactNotifier::new(Arc::new(MockEmailSenderMock::new()), "owner@example.com");

        let mail = notifier.compose(&contact("<script>alert('x')</script>\nbye & thanks"));

        assert!(mail
            .html_body
            .contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;<br />bye &amp; thanks"));
        assert!(!mail.html_body.contains("<script>"));
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let mut sender = MockEmailSenderMock::new();
        sender.expect_send().returning(|_| {
            Err(EmailSendError::TransportFailed(
                "connection refused".to_string(),
            ))
        });

        let notifier = EmailContactNotifier::new(Arc::new(sender), "owner@example.com");

        assert!(matches!(
            notifier.notify(&contact("Hi")).await,
            Err(ContactNotifyError::SendFailed(msg)) if msg.contains("connection refused")
        ));
    }
}
