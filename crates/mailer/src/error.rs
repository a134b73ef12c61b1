use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build the email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Mail delivery failed: {0}")]
    Rejected(String),
}
