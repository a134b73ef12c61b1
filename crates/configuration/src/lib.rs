use crate::error::ConfigError;
use config::builder::{ConfigBuilder, DefaultState};
use std::env;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, LoggingSettings, ServerSettings, Settings, SmtpSettings};

/// Environment variables that are read directly, for compatibility with the
/// usual deployment conventions, mapped onto their settings keys.
const WELL_KNOWN_VARS: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("PORT", "server.port"),
    ("SMTP_HOST", "smtp.host"),
    ("SMTP_PORT", "smtp.port"),
    ("SMTP_USER", "smtp.user"),
    ("SMTP_PASS", "smtp.password"),
    ("SMTP_FROM", "smtp.from"),
    ("ADMIN_EMAIL", "smtp.admin_email"),
];

/// Loads the application configuration.
///
/// Sources, lowest precedence first: built-in defaults, the TOML file at `path`
/// (optional), `APP__SECTION__KEY` variables, then the well-known variables
/// such as `DATABASE_URL` and `SMTP_USER`. The result is validated; missing
/// mail credentials are an error.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let mut builder = defaults()?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("APP").separator("__"));

    for (var, key) in WELL_KNOWN_VARS {
        builder = builder.set_override_option(*key, env::var(var).ok())?;
    }

    finish(builder)
}

/// Builds settings from defaults plus a TOML document, ignoring the environment.
pub fn settings_from_toml(toml: &str) -> Result<Settings, ConfigError> {
    let builder =
        defaults()?.add_source(config::File::from_str(toml, config::FileFormat::Toml));
    finish(builder)
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000_i64)?
        .set_default("server.assets_dir", "assets")?
        .set_default("database.url", "")?
        .set_default("database.max_connections", 10_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .set_default("smtp.host", "smtp.gmail.com")?
        .set_default("smtp.port", 587_i64)?
        .set_default("smtp.user", "")?
        .set_default("smtp.password", "")?
        .set_default("smtp.timeout_secs", 60_i64)?
        .set_default("logging.level", "info")
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.smtp.user.trim().is_empty() || settings.smtp.password.is_empty() {
        return Err(ConfigError::ValidationError(
            "SMTP_USER or SMTP_PASS is missing".to_string(),
        ));
    }
    if settings.database.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "DATABASE_URL must be set".to_string(),
        ));
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [database]
        url = "postgres://localhost/talkingpills"

        [smtp]
        user = "mailer@talkingpills.health"
        password = "secret"
    "#;

    #[test]
    fn test_defaults_fill_unset_values() {
        let settings = settings_from_toml(MINIMAL).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.smtp.host, "smtp.gmail.com");
        assert_eq!(settings.smtp.port, 587);
        assert!(!settings.smtp.uses_implicit_tls());
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.directory.is_none());
    }

    #[test]
    fn test_missing_smtp_credentials_are_fatal() {
        let toml = r#"
            [database]
            url = "postgres://localhost/talkingpills"

            [smtp]
            user = "mailer@talkingpills.health"
        "#;
        let err = settings_from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_database_url_is_fatal() {
        let toml = r#"
            [smtp]
            user = "mailer@talkingpills.health"
            password = "secret"
        "#;
        assert!(settings_from_toml(toml).is_err());
    }

    #[test]
    fn test_admin_recipient_fallbacks() {
        let mut settings = settings_from_toml(MINIMAL).unwrap().smtp;
        assert_eq!(settings.from_address(), "mailer@talkingpills.health");
        assert_eq!(settings.admin_recipient(), "mailer@talkingpills.health");

        settings.from = Some("hello@talkingpills.health".to_string());
        assert_eq!(settings.admin_recipient(), "hello@talkingpills.health");

        settings.admin_email = Some("  ".to_string());
        assert_eq!(settings.admin_recipient(), "hello@talkingpills.health");

        settings.admin_email = Some("founders@talkingpills.health".to_string());
        assert_eq!(settings.admin_recipient(), "founders@talkingpills.health");
    }

    #[test]
    fn test_port_465_uses_implicit_tls() {
        let toml = format!("{MINIMAL}\nport = 465\n");
        let settings = settings_from_toml(&toml).unwrap();
        assert!(settings.smtp.uses_implicit_tls());
    }
}
