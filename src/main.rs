use tracing::info;
use tracing_subscriber::EnvFilter;
use vebo_playlist::{pipeline, Config, VeboClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "vebo_playlist=info".into()),
        )
        .init();

    let config = Config::default();
    let client = VeboClient::from_config(&config);

    let summary = pipeline::run(&client, &config).await;
    info!(
        date = %summary.date,
        live_matches = summary.live_matches,
        entries = summary.entries,
        "done"
    );
}
