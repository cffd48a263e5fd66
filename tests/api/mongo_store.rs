//! These tests talk to the MongoDB described in config/ (each one gets its own database).
use chrono::{TimeZone, Utc};
use subscribers_api::domain::{NewSubscriber, NewSubscriberBody, Subscriber};

use crate::helpers::TestApp;

fn new_subscriber(name: &str, channel: &str) -> NewSubscriber {
    NewSubscriber::try_from(NewSubscriberBody {
        name: String::from(name),
        subscribed_channel: String::from(channel),
        subscribed_date: Some(Utc.with_ymd_and_hms(2023, 11, 2, 14, 48, 0).unwrap()),
    })
    .unwrap()
}

fn seed() -> Vec<NewSubscriber> {
    vec![
        new_subscriber("Jane Doe", "Science Today"),
        new_subscriber("Lucifer (Morningstar)", "Hell's Kitchen"),
        new_subscriber("Alice Smith", "Tech Reviews"),
    ]
}

#[tokio::test]
async fn stored_documents_are_listed_without_version_field() {
    let test_app = TestApp::spawn_app_with_mongo(&seed()).await;

    let response = test_app.get("/subscribers").await;

    assert_eq!(response.status().as_u16(), 200);

    let body: Vec<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 3);
    for item in &body {
        let object = item.as_object().unwrap();

        assert!(object.get("__v").is_none());
        assert!(object.get("_id").is_none());
        // Stored ids are ObjectIds, exposed as 24 hex characters
        let id = object["id"].as_str().unwrap();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[tokio::test]
async fn names_projection_drops_the_id() {
    let test_app = TestApp::spawn_app_with_mongo(&seed()).await;

    let response = test_app.get("/subscribers/name").await;

    assert_eq!(response.status().as_u16(), 200);

    let body: Vec<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 3);
    for item in &body {
        let mut keys: Vec<&String> = item.as_object().unwrap().keys().collect();
        keys.sort();

        assert_eq!(keys, vec!["name", "subscribedChannel"]);
    }
    assert!(body
        .iter()
        .any(|item| item["name"] == "Lucifer (Morningstar)"
            && item["subscribedChannel"] == "Hell's Kitchen"));
}

#[tokio::test]
async fn subscriber_is_found_by_its_object_id() {
    let test_app = TestApp::spawn_app_with_mongo(&seed()).await;
    let listed: Vec<Subscriber> = test_app.get("/subscribers").await.json().await.unwrap();
    let alice = listed
        .iter()
        .find(|subscriber| subscriber.name == "Alice Smith")
        .unwrap();

    let response = test_app.get(&format!("/subscribers/{}", alice.id)).await;

    assert_eq!(response.status().as_u16(), 200);

    let subscriber: Subscriber = response.json().await.unwrap();
    assert_eq!(&subscriber, alice);
    assert_eq!(subscriber.subscribed_channel, "Tech Reviews");
    assert_eq!(
        subscriber.subscribed_date,
        Utc.with_ymd_and_hms(2023, 11, 2, 14, 48, 0).unwrap()
    );
}

#[tokio::test]
async fn unknown_or_malformed_ids_are_rejected() {
    let test_app = TestApp::spawn_app_with_mongo(&seed()).await;
    let test_cases = vec![
        ("99", "not an ObjectId"),
        ("60b8d295f1b6c8a4d4e8f3e1", "ObjectId that is not stored"),
    ];

    for (id, description) in test_cases {
        let response = test_app.get(&format!("/subscribers/{}", id)).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not fail with 400 when the id was an {}",
            description
        );

        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": "No user Exist" }));
    }
}
