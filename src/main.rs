use anyhow::Result;
use tracing_subscriber::EnvFilter;

use minilink::config;
use minilink::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; real environment variables take priority.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format);

    config.print_summary();

    server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level when set.
fn init_tracing(log_level: &str, log_format: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
