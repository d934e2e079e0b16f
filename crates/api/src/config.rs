use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root of the Content Store (default: `content`).
    pub content_dir: PathBuf,
    /// Root of the static assets, including project images (default: `public`).
    pub public_dir: PathBuf,
    /// Directory holding `es.json` / `en.json` string catalogs (default: `messages`).
    pub messages_dir: PathBuf,
    /// Inbox for contact submissions. Falls back to the site settings email.
    pub contact_recipient: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `CONTENT_DIR`          | `content`                  |
    /// | `PUBLIC_DIR`           | `public`                   |
    /// | `MESSAGES_DIR`         | `messages`                 |
    /// | `CONTACT_RECIPIENT`    | site settings email        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let dir = |var: &str, default: &str| {
            PathBuf::from(std::env::var(var).unwrap_or_else(|_| default.into()))
        };

        let contact_recipient = std::env::var("CONTACT_RECIPIENT")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            content_dir: dir("CONTENT_DIR", "content"),
            public_dir: dir("PUBLIC_DIR", "public"),
            messages_dir: dir("MESSAGES_DIR", "messages"),
            contact_recipient,
        }
    }
}
