use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub smtp: SmtpSettings,
    pub logging: LoggingSettings,
}

/// Where the HTTP server listens and what it serves besides the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Directory holding `site.css`, `site.js` and images, served at `/assets`.
    pub assets_dir: PathBuf,
}

/// Connection settings for the PostgreSQL pool.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Usually supplied through `DATABASE_URL`.
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// The outbound mail relay and the address notifications go to.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    /// 465 means implicit TLS; anything else is upgraded with STARTTLS.
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from: Option<String>,
    pub admin_email: Option<String>,
    pub timeout_secs: u64,
}

impl SmtpSettings {
    /// The sender address: `SMTP_FROM`, or the SMTP user when unset.
    pub fn from_address(&self) -> &str {
        non_blank(&self.from).unwrap_or(&self.user)
    }

    /// The recipient of every notification: `ADMIN_EMAIL`, then the sender address.
    pub fn admin_recipient(&self) -> &str {
        non_blank(&self.admin_email).unwrap_or_else(|| self.from_address())
    }

    pub fn uses_implicit_tls(&self) -> bool {
        self.port == 465
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive such as `info` or `web_server=debug,info`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
