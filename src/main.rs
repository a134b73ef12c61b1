use std::path::Path;

/// The main entry point for the Talking Pills marketing site.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine in production, where the variables come from the environment.
    dotenvy::dotenv().ok();

    // Missing SMTP credentials are fatal: the process refuses to start.
    let settings = configuration::load_settings(Path::new("config.toml"))?;

    // The guard flushes the file appender on drop, so it must live as long as the server.
    let _log_guard = configuration::init_tracing(&settings.logging);

    tracing::info!(
        host = %settings.server.host,
        port = settings.server.port,
        "Starting Talking Pills web server."
    );

    web_server::run_server(settings).await
}
