use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::subscribed_channel::SubscribedChannel;
use crate::domain::subscriber_name::SubscriberName;

/// A validated subscriber waiting to be written by the seeding tool.
#[derive(Debug, Clone)]
pub struct NewSubscriber {
    pub name: SubscriberName,
    pub subscribed_channel: SubscribedChannel,
    pub subscribed_date: DateTime<Utc>,
}

/// Raw entry of a seed data file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscriberBody {
    pub name: String,
    pub subscribed_channel: String,
    #[serde(default)]
    pub subscribed_date: Option<DateTime<Utc>>,
}

impl TryFrom<NewSubscriberBody> for NewSubscriber {
    type Error = String;

    fn try_from(body: NewSubscriberBody) -> Result<Self, Self::Error> {
        let name = SubscriberName::parse(body.name)?;
        let subscribed_channel = SubscribedChannel::parse(body.subscribed_channel)?;
        let subscribed_date = body.subscribed_date.unwrap_or_else(Utc::now);

        Ok(NewSubscriber {
            name,
            subscribed_channel,
            subscribed_date,
        })
    }
}
