use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use configuration::Settings;
use database::{DbRepository, Storage};
use mailer::{Notifier, SmtpMailer};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod pages;

/// Form bodies are a handful of short fields.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub notifier: Notifier,
}

/// Builds the full router: the HTML pages, the submission API and the static assets.
pub fn build_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        // --- Pages ---
        .route("/", get(pages::home))
        .route("/mission", get(pages::mission))
        .route("/contact-us", get(pages::contact_us))
        .route("/investor-deck", get(pages::investor_deck))
        // --- API ---
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/early-access", post(handlers::create_early_access))
        .route("/api/demo-request", post(handlers::create_demo_request))
        .route("/api/investor-request", post(handlers::create_investor_request))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// The main function to configure and run the web server.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    // Bad sender or recipient addresses stop start-up here.
    let smtp = Arc::new(SmtpMailer::new(&settings.smtp)?);
    let notifier = Notifier::new(smtp.clone(), settings.smtp.admin_recipient())?;

    let db_pool = database::connect(&settings.database).await?;
    database::run_migrations(&db_pool).await?;
    let storage: Arc<dyn Storage> = Arc::new(DbRepository::new(db_pool));

    // The probe only logs, so it must not hold up the listener.
    tokio::spawn(async move { smtp.verify().await });

    let app_state = Arc::new(AppState { storage, notifier });
    let app = build_router(app_state, &settings.server.assets_dir);

    let listener =
        tokio::net::TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
