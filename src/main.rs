use std::io;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_processing::metrics::Metrics;
use order_processing::{app, AppConfig};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries customer-facing lines.
    // Defaults to INFO, DEBUG for this crate; override with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_processing=debug")),
        )
        .init();

    let config = AppConfig::default();
    tracing::info!(
        tier = %config.tier,
        channel = %config.channel,
        locale = ?config.locale,
        "🚀 Starting order processing"
    );

    let metrics = Arc::new(Metrics::new()?);
    app::run(&config, metrics, io::stdout)?;

    Ok(())
}
