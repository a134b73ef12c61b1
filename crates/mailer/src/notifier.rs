use crate::message::{demo_request_email, early_access_email};
use crate::{Mailer, MailerError};
use core_types::DemoRequest;
use lettre::message::Mailbox;
use std::sync::Arc;

/// Formats and sends the admin notifications.
///
/// Holds the shared mailer and the fixed admin recipient; it never reads or
/// changes application state.
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    admin_email: String,
}

impl Notifier {
    /// Fails if `admin_email` does not parse as a mailbox.
    pub fn new(mailer: Arc<dyn Mailer>, admin_email: &str) -> Result<Self, MailerError> {
        let admin: Mailbox = admin_email.trim().parse()?;
        Ok(Self {
            mailer,
            admin_email: admin.to_string(),
        })
    }

    /// Sends one email about a new demo request.
    pub async fn send_demo_request_email(&self, request: &DemoRequest) -> Result<(), MailerError> {
        tracing::info!(to = %self.admin_email, request_id = request.id, "Sending demo request email.");
        let email = demo_request_email(&self.admin_email, request);
        self.mailer.send(&email).await?;
        tracing::info!(to = %self.admin_email, request_id = request.id, "Demo request email sent.");
        Ok(())
    }

    /// Sends one email about a new early access signup.
    pub async fn send_early_access_email(&self, email: &str) -> Result<(), MailerError> {
        tracing::info!(to = %self.admin_email, "Sending early access email.");
        let message = early_access_email(&self.admin_email, email);
        self.mailer.send(&message).await?;
        tracing::info!(to = %self.admin_email, "Early access email sent.");
        Ok(())
    }
}
