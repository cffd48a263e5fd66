use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlers;
use actix_web::{guard, web, App, HttpServer, Route};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{DatabaseSettings, Settings};
use crate::docs::ApiDoc;
use crate::error::{handle_not_found, render_not_found, render_server_error};
use crate::routes::{
    get_subscriber_by_id, health_check, list_subscriber_names, list_subscribers,
    redirect_to_docs, redirect_to_swagger_ui, DOCS_PATH, OPENAPI_PATH,
};
use crate::store::{MongoSubscriberStore, StoreError, SubscriberStore};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, std::io::Error> {
        let store = get_subscriber_store(&config.database)
            .await
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;

        Self::build_with_store(config, Arc::new(store))
    }

    /// Same as `build` but serving whatever store the caller provides.
    pub fn build_with_store(
        config: Settings,
        store: Arc<dyn SubscriberStore>,
    ) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(config.get_address())?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server listening on {}:{}", config.application.get_host(), port);

        let server = run(listener, store)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn SubscriberStore>,
) -> Result<Server, std::io::Error> {
    let store: web::Data<dyn SubscriberStore> = web::Data::from(store);
    let openapi = ApiDoc::openapi();

    let server = HttpServer::new(move || {
        // App is where your application logic lives: routing, middlewares, request handler, etc
        App::new()
            // 'wrap' method adds a middleware to the App. This specific middleware provide incoming
            // request logger
            .wrap(TracingLogger::default())
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::INTERNAL_SERVER_ERROR, render_server_error)
                    .handler(StatusCode::NOT_FOUND, render_not_found),
            )
            .route("/", get_or_head().to(redirect_to_docs))
            .route(DOCS_PATH, get_or_head().to(redirect_to_swagger_ui))
            .service(
                SwaggerUi::new(format!("{}/{{_:.*}}", DOCS_PATH)).url(OPENAPI_PATH, openapi.clone()),
            )
            .route("/health_check", get_or_head().to(health_check))
            // It must be registered before /subscribers/{id}, otherwise "name" would be taken as an id
            .route("/subscribers/name", get_or_head().to(list_subscriber_names))
            .route("/subscribers/{id}", get_or_head().to(get_subscriber_by_id))
            .route("/subscribers", get_or_head().to(list_subscribers))
            .default_service(web::to(handle_not_found))
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Every read endpoint also answers HEAD requests (actix drops the body of HEAD responses).
fn get_or_head() -> Route {
    web::route().guard(guard::Any(guard::Get()).or(guard::Head()))
}

pub async fn get_subscriber_store(
    config: &DatabaseSettings,
) -> Result<MongoSubscriberStore, StoreError> {
    MongoSubscriberStore::connect(
        &config.connection_uri(),
        &config.get_name(),
        &config.get_collection(),
    )
    .await
}
