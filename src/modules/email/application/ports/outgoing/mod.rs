pub mod email_sender;

pub use email_sender::{EmailMessage, EmailSendError, EmailSender};
