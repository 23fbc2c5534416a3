use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use harpal_admin::config::AdminConfig;
use harpal_admin::console::Console;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    // Logs go to stderr so they do not interleave with rendered tables.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "harpal_admin=info,harpal_dashboard=info,harpal_client=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = AdminConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        api_url = %config.api_url,
        authenticated = config.token.is_some(),
        stale_policy = ?config.stale_policy,
        "Loaded admin configuration"
    );

    // --- Console ---
    let mut console = Console::connect(&config, std::io::stdout())
        .await
        .context("Failed to build HTTP client")?;
    console
        .run(tokio::io::BufReader::new(tokio::io::stdin()))
        .await
        .context("Console I/O failed")?;

    tracing::info!("Admin console closed");
    Ok(())
}
