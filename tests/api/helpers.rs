use chrono::{TimeZone, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;
use reqwest::Response;
use std::sync::Arc;
use uuid::Uuid;

use subscribers_api::{
    config::{get_configuration, Settings},
    domain::{NewSubscriber, Subscriber},
    startup::{get_subscriber_store, Application},
    store::{InMemorySubscriberStore, SubscriberStore},
};

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        Self::spawn_app_with_store(InMemorySubscriberStore::default()).await
    }

    pub async fn spawn_app_with_store(store: InMemorySubscriberStore) -> TestApp {
        let config = get_configuration().expect("Missing configuration file.");

        Self::spawn(config, Arc::new(store))
    }

    /// Runs the application against a brand new MongoDB database seeded with `subscribers`.
    /// It needs the database described in config/ to be up.
    pub async fn spawn_app_with_mongo(subscribers: &[NewSubscriber]) -> TestApp {
        let mut config = get_configuration().expect("Missing configuration file.");
        config.database.name = format!("db_{}", Uuid::new_v4().simple());

        let store = get_subscriber_store(&config.database)
            .await
            .expect("Failed to create the MongoDB client.");
        store
            .refresh_all(subscribers)
            .await
            .expect("Failed to seed the test database.");

        println!("Database {} created!!", config.database.name);

        Self::spawn(config, Arc::new(store))
    }

    fn spawn(mut config: Settings, store: Arc<dyn SubscriberStore>) -> TestApp {
        // We are using port 0 as way to define a different port per each test. Port 0 is a special case that operating systems
        // take into account: when port is 0, the OS will search for the first available port
        config.set_app_port(0);

        let application = Application::build_with_store(config, store)
            .expect("Failed to build application.");
        let port = application.get_port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(application.run_until_stop());

        // Redirects are asserted by the tests, so the client must not follow them
        let api_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        TestApp {
            address,
            api_client,
        }
    }

    pub async fn get(&self, path: &str) -> Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn jane() -> Subscriber {
    Subscriber {
        id: String::from("1"),
        name: String::from("Jane"),
        subscribed_channel: String::from("Tech"),
        subscribed_date: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn fake_subscribers(total: usize) -> Vec<Subscriber> {
    (0..total)
        .map(|index| Subscriber {
            id: format!("fake-{}", index),
            name: Name().fake(),
            subscribed_channel: CompanyName().fake(),
            subscribed_date: Utc::now(),
        })
        .collect()
}
