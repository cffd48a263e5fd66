mod in_memory;
mod mongo;

pub use in_memory::InMemorySubscriberStore;
pub use mongo::MongoSubscriberStore;

use async_trait::async_trait;

use crate::domain::{Subscriber, SubscriberId, SubscriberSummary};

/// Read access to the subscribers collection. The router only knows this trait, so the
/// backing document database can be swapped (eg: by an in-memory store in tests).
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Every subscriber, without the store version field.
    async fn find_all(&self) -> Result<Vec<Subscriber>, StoreError>;

    /// Every subscriber projected to `name` and `subscribedChannel`.
    async fn find_all_summaries(&self) -> Result<Vec<SubscriberSummary>, StoreError>;

    /// `Ok(None)` when nothing matches or the store cannot interpret the id.
    async fn find_by_id(&self, id: &SubscriberId) -> Result<Option<Subscriber>, StoreError>;
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to query the subscribers collection.")]
    Database(#[from] mongodb::error::Error),
    #[error("Subscribers store is unavailable: {0}")]
    Unavailable(String),
}
