use actix_web::{HttpResponse, Responder};

/// Endpoint used by clients to know if the server is working
#[utoipa::path(
    get,
    path = "/health_check",
    responses(
        (status = 200, description = "The server is up.")
    ),
    tag = "Observability"
)]
#[tracing::instrument(name = "Health Check handler")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
}
