use crate::{Mailer, MailerError, OutboundEmail};
use async_trait::async_trait;
use configuration::SmtpSettings;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

/// Sends mail through the configured SMTP relay.
///
/// Construct it once at startup; the underlying transport keeps a connection
/// pool and is safe to share between requests.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailerError> {
        let from: Mailbox = settings.from_address().parse()?;

        let builder = if settings.uses_implicit_tls() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
        };

        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(settings.timeout_secs)))
            .build();

        Ok(Self { transport, from })
    }

    /// Probes the relay once. The outcome is only logged: a relay that is
    /// down at startup may be back by the time the first form arrives.
    pub async fn verify(&self) {
        match self.transport.test_connection().await {
            Ok(true) => tracing::info!("SMTP server is ready to send emails."),
            Ok(false) => tracing::warn!("SMTP server did not accept the test connection."),
            Err(e) => tracing::error!(error = %e, "SMTP verification failed."),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailerError> {
        let to: Mailbox = email.to.parse()?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))?;

        let response = self.transport.send(message).await?;
        tracing::debug!(code = %response.code(), "SMTP relay accepted the message.");
        Ok(())
    }
}
