use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A channel follower as exposed by the API. The store version field never reaches this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    /// The unique identifier for the subscriber.
    #[schema(example = "60b8d295f1b6c8a4d4e8f3e1")]
    pub id: String,
    /// The name of the subscriber.
    #[schema(example = "John Doe")]
    pub name: String,
    /// The channel the subscriber is subscribed to.
    #[schema(example = "Tech Insights")]
    pub subscribed_channel: String,
    /// The date the subscriber joined.
    #[schema(example = "2023-11-02T14:48:00Z")]
    pub subscribed_date: DateTime<Utc>,
}

/// Projection of a subscriber to its name and channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberSummary {
    /// The name of the subscriber.
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// The channel the subscriber is subscribed to.
    #[schema(example = "Science Today")]
    pub subscribed_channel: String,
}

impl From<&Subscriber> for SubscriberSummary {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            name: subscriber.name.clone(),
            subscribed_channel: subscriber.subscribed_channel.clone(),
        }
    }
}
