//! # Talking Pills Mailer
//!
//! Admin notifications for new submissions. The SMTP transport is built once
//! at startup and shared; each notification is exactly one awaited send with
//! no retry or queueing. Failures are returned to the caller, which decides
//! whether they matter.

use async_trait::async_trait;

pub mod error;
pub mod message;
pub mod notifier;
pub mod recording;
pub mod smtp;

pub use error::MailerError;
pub use message::OutboundEmail;
pub use notifier::Notifier;
pub use recording::RecordingMailer;
pub use smtp::SmtpMailer;

/// Something that can deliver an email.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError>;
}
