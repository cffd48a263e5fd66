use std::path::Path;

use crate::domain::{NewSubscriber, NewSubscriberBody};

pub const DEFAULT_SEED_FILE: &str = "data/subscribers.json";

#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    #[error("Failed to read the seed file.")]
    ReadError(#[from] std::io::Error),
    #[error("Seed file is not a JSON array of subscribers.")]
    ParseError(#[from] serde_json::Error),
    #[error("Subscriber #{index} is not valid: {reason}")]
    InvalidSubscriber { index: usize, reason: String },
}

/// Reads a JSON array of `{ name, subscribedChannel, subscribedDate? }` and validates every entry.
#[tracing::instrument(name = "Loading seed file", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<NewSubscriber>, SeedError> {
    let content = std::fs::read_to_string(path.as_ref())?;

    parse_seed(&content)
}

pub fn parse_seed(content: &str) -> Result<Vec<NewSubscriber>, SeedError> {
    let bodies: Vec<NewSubscriberBody> = serde_json::from_str(content)?;

    bodies
        .into_iter()
        .enumerate()
        .map(|(index, body)| {
            NewSubscriber::try_from(body)
                .map_err(|reason| SeedError::InvalidSubscriber { index, reason })
        })
        .collect()
}
