use std::net::SocketAddr;
use std::sync::Arc;

use atelier_content::repositories::SettingsRepo;
use atelier_content::ContentStore;
use atelier_notify::{ContactNotifier, EmailConfig, EmailDelivery};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_api::config::ServerConfig;
use atelier_api::messages::load_messages;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "atelier_api=debug,atelier_content=debug,atelier_notify=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        content_dir = %config.content_dir.display(),
        "Loaded server configuration"
    );

    // --- Content Store ---
    // The required singletons must be present before serving anything.
    let content = ContentStore::filesystem(&config.content_dir);
    let settings = SettingsRepo::site(&content)
        .await
        .expect("Site settings must be present and valid");
    SettingsRepo::about(&content)
        .await
        .expect("About content must be present and valid");
    tracing::info!(studio = %settings.studio_name, "Content Store check passed");

    // --- Localized strings ---
    let messages = load_messages(&config.messages_dir).expect("Failed to load message catalogs");

    // --- Contact delivery ---
    let notifier: Option<Arc<dyn ContactNotifier>> = match EmailConfig::from_env() {
        Some(email_config) => {
            let recipient = config
                .contact_recipient
                .clone()
                .unwrap_or_else(|| settings.email.clone());
            let smtp_host = email_config.smtp_host.clone();
            let delivery = EmailDelivery::new(email_config, recipient);
            tracing::info!(
                recipient = %delivery.recipient(),
                %smtp_host,
                "Contact email delivery enabled"
            );
            Some(Arc::new(delivery))
        }
        None => {
            tracing::info!("SMTP_HOST not set, contact submissions will only be logged");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        content,
        messages: Arc::new(messages),
        notifier,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
