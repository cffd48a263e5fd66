//! Replaces the subscribers collection with the content of a JSON data file.
//!
//! Usage: `seed_database [path]` (defaults to `data/subscribers.json`).
use subscribers_api::config::get_configuration;
use subscribers_api::seed::{load_seed_file, DEFAULT_SEED_FILE};
use subscribers_api::startup::get_subscriber_store;
use subscribers_api::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = get_subscriber(
        String::from("seed_database"),
        String::from("info"),
        std::io::stdout,
    );

    init_subscriber(subscriber);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_SEED_FILE));
    let config = get_configuration()?;
    let subscribers = load_seed_file(&path)?;
    let store = get_subscriber_store(&config.database).await?;
    let inserted = store.refresh_all(&subscribers).await?;

    tracing::info!("Database created with {} subscribers", inserted);

    Ok(())
}
