use actix_web::{http::header, HttpResponse};

pub const DOCS_PATH: &str = "/api";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Redirect to the API page
///
/// This endpoint redirects the client to the `/api` page.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 302, description = "Redirects to the `/api` endpoint.")
    ),
    tag = "Subscribers"
)]
pub async fn redirect_to_docs() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, DOCS_PATH))
        .finish()
}

/// Swagger API Documentation
///
/// Serves the Swagger UI for exploring API documentation. The UI loads its assets with relative
/// urls, so it lives under `/api/` and this path only redirects there.
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 302, description = "Redirects to `/api/`, where the Swagger UI is served as text/html.")
    ),
    tag = "Subscribers"
)]
pub async fn redirect_to_swagger_ui() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("{}/", DOCS_PATH)))
        .finish()
}
