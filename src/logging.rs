use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging for binaries.
///
/// # Configuration
///
/// - **Log Level**: controlled by the `LOG_LEVEL` environment variable
///   (default: "info"); `RUST_LOG` takes precedence when set
/// - **Filtering**: sqlx is held at warn to keep query noise out
/// - **Format**: compact with module targets
pub fn init_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "satchel={level},satchel_authz={level},satchel_reports={level},sqlx=warn",
            level = log_level
        ))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
