use utoipa::OpenApi;

use crate::domain::{Subscriber, SubscriberSummary};
use crate::error::ErrorResponse;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Youtube-Subscribers Api",
        version = "1.0.0",
        description = "Swagger Documentation"
    ),
    paths(
        routes::redirect_to_docs,
        routes::redirect_to_swagger_ui,
        routes::health_check,
        routes::list_subscribers,
        routes::list_subscriber_names,
        routes::get_subscriber_by_id,
    ),
    components(schemas(Subscriber, SubscriberSummary, ErrorResponse)),
    tags(
        (name = "Subscribers", description = "Read-only access to channel subscribers"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;
