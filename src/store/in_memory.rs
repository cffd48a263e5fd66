use async_trait::async_trait;
use uuid::Uuid;

use super::{StoreError, SubscriberStore};
use crate::domain::{NewSubscriber, Subscriber, SubscriberId, SubscriberSummary};

/// Fixed set of subscribers kept in memory. It never changes after construction, so it can
/// be shared between workers without locking.
#[derive(Debug, Default, Clone)]
pub struct InMemorySubscriberStore {
    subscribers: Vec<Subscriber>,
    failure: Option<String>,
}

impl InMemorySubscriberStore {
    pub fn new(subscribers: Vec<Subscriber>) -> Self {
        Self {
            subscribers,
            failure: None,
        }
    }

    /// Assigns a fresh id to every new subscriber, the same way the database would.
    pub fn seeded(new_subscribers: &[NewSubscriber]) -> Self {
        let subscribers = new_subscribers
            .iter()
            .map(|subscriber| Subscriber {
                id: Uuid::new_v4().simple().to_string(),
                name: String::from(subscriber.name.as_ref()),
                subscribed_channel: String::from(subscriber.subscribed_channel.as_ref()),
                subscribed_date: subscriber.subscribed_date,
            })
            .collect();

        Self::new(subscribers)
    }

    /// A store whose every query fails, as an unreachable database would.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            subscribers: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    fn check_available(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SubscriberStore for InMemorySubscriberStore {
    async fn find_all(&self) -> Result<Vec<Subscriber>, StoreError> {
        self.check_available()?;

        Ok(self.subscribers.clone())
    }

    async fn find_all_summaries(&self) -> Result<Vec<SubscriberSummary>, StoreError> {
        self.check_available()?;

        Ok(self
            .subscribers
            .iter()
            .map(SubscriberSummary::from)
            .collect())
    }

    async fn find_by_id(&self, id: &SubscriberId) -> Result<Option<Subscriber>, StoreError> {
        self.check_available()?;

        Ok(self
            .subscribers
            .iter()
            .find(|subscriber| subscriber.id == id.as_ref())
            .cloned())
    }
}
