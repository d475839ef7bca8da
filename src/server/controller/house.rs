use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::mentee::MenteeService, state::AppState},
};

/// Tag for grouping house endpoints in OpenAPI documentation
pub static HOUSE_TAG: &str = "house";

/// List the houses mentees are assigned to.
///
/// Used to populate the dashboard's house filter. Houses are distinct, non-empty and in
/// ascending order.
///
/// # Returns
/// - `200 OK` - House names
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/houses",
    tag = HOUSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved houses", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_houses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MenteeService::new(&state.db);

    let houses = service.get_houses().await?;

    Ok((StatusCode::OK, Json(houses)))
}
