use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        health::health,
        house::get_houses,
        mentee::{get_mentee_responses, get_mentees},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Mentee Dashboard API",
    description = "Mentees, their weekly responses and house groupings"
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_mentees))
        .routes(routes!(get_mentee_responses))
        .routes(routes!(get_houses))
        .routes(routes!(health))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
