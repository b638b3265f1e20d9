use anyhow::Result;
use cv_screener::config::ApiConfig;
use cv_screener::start_web_server;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DEEPSEEK_* variables from a local .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cv_screener=info,rocket=info")),
        )
        .init();

    let config = ApiConfig::load()?;

    start_web_server(config).await
}
