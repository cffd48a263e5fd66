use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{ClientOptions, FindOneOptions, FindOptions},
    Client, Collection,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time;

use super::{StoreError, SubscriberStore};
use crate::domain::{NewSubscriber, Subscriber, SubscriberId, SubscriberSummary};

const SERVER_SELECTION_TIMEOUT: time::Duration = time::Duration::from_secs(2);
const APP_NAME: &str = "subscribers-api";

/// Shape of a subscriber document as it is stored in MongoDB.
#[derive(Debug, Serialize, Deserialize)]
struct SubscriberDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    #[serde(rename = "subscribedChannel")]
    subscribed_channel: String,
    #[serde(
        rename = "subscribedDate",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    subscribed_date: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct NewSubscriberDocument {
    name: String,
    #[serde(rename = "subscribedChannel")]
    subscribed_channel: String,
    #[serde(
        rename = "subscribedDate",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    subscribed_date: DateTime<Utc>,
    #[serde(rename = "__v")]
    version: i32,
}

impl From<SubscriberDocument> for Subscriber {
    fn from(document: SubscriberDocument) -> Self {
        Subscriber {
            id: document.id.to_hex(),
            name: document.name,
            subscribed_channel: document.subscribed_channel,
            subscribed_date: document.subscribed_date,
        }
    }
}

impl From<&NewSubscriber> for NewSubscriberDocument {
    fn from(subscriber: &NewSubscriber) -> Self {
        NewSubscriberDocument {
            name: String::from(subscriber.name.as_ref()),
            subscribed_channel: String::from(subscriber.subscribed_channel.as_ref()),
            subscribed_date: subscriber.subscribed_date,
            version: 0,
        }
    }
}

fn without_version() -> Document {
    doc! { "__v": 0 }
}

fn summary_projection() -> Document {
    doc! { "_id": 0, "name": 1, "subscribedChannel": 1 }
}

#[derive(Clone)]
pub struct MongoSubscriberStore {
    collection: Collection<SubscriberDocument>,
}

impl MongoSubscriberStore {
    /// Builds the client without opening any connection: the driver connects on the first query.
    pub async fn connect(
        uri: &Secret<String>,
        database: &str,
        collection: &str,
    ) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(uri.expose_secret()).await?;
        options.app_name = Some(String::from(APP_NAME));
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options)?;
        let collection = client
            .database(database)
            .collection::<SubscriberDocument>(collection);

        tracing::info!(database = %database, collection = %collection.name(), "MongoDB client ready");

        Ok(Self { collection })
    }

    /// Replaces the whole collection with `subscribers` (used by the seeding tool).
    #[tracing::instrument(
        name = "Refreshing the subscribers collection",
        skip(self, subscribers),
        fields(total = subscribers.len())
    )]
    pub async fn refresh_all(&self, subscribers: &[NewSubscriber]) -> Result<u64, StoreError> {
        let deleted = self.collection.delete_many(doc! {}, None).await?;
        tracing::info!("Deleted {} subscribers", deleted.deleted_count);

        // insert_many rejects an empty batch
        if subscribers.is_empty() {
            return Ok(0);
        }

        let documents: Vec<NewSubscriberDocument> =
            subscribers.iter().map(NewSubscriberDocument::from).collect();
        let inserted = self
            .collection
            .clone_with_type::<NewSubscriberDocument>()
            .insert_many(documents, None)
            .await?;

        Ok(inserted.inserted_ids.len() as u64)
    }
}

#[async_trait]
impl SubscriberStore for MongoSubscriberStore {
    #[tracing::instrument(name = "Fetching all subscribers from MongoDB", skip(self))]
    async fn find_all(&self) -> Result<Vec<Subscriber>, StoreError> {
        let options = FindOptions::builder().projection(without_version()).build();
        let cursor = self.collection.find(None, options).await?;
        let documents: Vec<SubscriberDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Subscriber::from).collect())
    }

    #[tracing::instrument(name = "Fetching subscriber names from MongoDB", skip(self))]
    async fn find_all_summaries(&self) -> Result<Vec<SubscriberSummary>, StoreError> {
        let options = FindOptions::builder()
            .projection(summary_projection())
            .build();
        let cursor = self
            .collection
            .clone_with_type::<SubscriberSummary>()
            .find(None, options)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    #[tracing::instrument(name = "Fetching a subscriber by id from MongoDB", skip(self), fields(subscriber_id = %id))]
    async fn find_by_id(&self, id: &SubscriberId) -> Result<Option<Subscriber>, StoreError> {
        let object_id = match ObjectId::parse_str(id.as_ref()) {
            Ok(object_id) => object_id,
            Err(err) => {
                tracing::warn!("{} is not an ObjectId: {}", id, err);
                return Ok(None);
            }
        };
        let options = FindOneOptions::builder()
            .projection(without_version())
            .build();
        let document = self
            .collection
            .find_one(doc! { "_id": object_id }, options)
            .await?;

        Ok(document.map(Subscriber::from))
    }
}
