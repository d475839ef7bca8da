use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        mentee::{MenteeDto, MenteeQueryDto, ResponseDto},
    },
    server::{
        error::AppError, model::mentee::ListMenteesParam, service::mentee::MenteeService,
        state::AppState,
    },
};

/// Tag for grouping mentee endpoints in OpenAPI documentation
pub static MENTEE_TAG: &str = "mentee";

/// List mentees with their response counts.
///
/// Returns every mentee matching the optional house and name filters, sorted by the
/// requested field and direction. An empty `house` or blank `search` is treated as
/// absent. Unknown `sort_by` or `sort_order` values are rejected by the query extractor.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Sort, house and search parameters
///
/// # Returns
/// - `200 OK` - Matching mentees (possibly empty)
/// - `400 Bad Request` - Invalid sort parameters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/mentees",
    tag = MENTEE_TAG,
    params(MenteeQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved mentees", body = Vec<MenteeDto>),
        (status = 400, description = "Invalid sort parameters"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentees(
    State(state): State<AppState>,
    Query(query): Query<MenteeQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenteeService::new(&state.db);

    let mentees = service.list(ListMenteesParam::from(query)).await?;

    let dtos: Vec<MenteeDto> = mentees.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a mentee's weekly responses.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `discord_id` - Discord ID of the mentee
///
/// # Returns
/// - `200 OK` - Responses ordered by week, latest first
/// - `404 Not Found` - No mentee with that Discord ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/mentees/{discord_id}/responses",
    tag = MENTEE_TAG,
    params(
        ("discord_id" = String, Path, description = "Discord ID of the mentee")
    ),
    responses(
        (status = 200, description = "Successfully retrieved responses", body = Vec<ResponseDto>),
        (status = 404, description = "Mentee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mentee_responses(
    State(state): State<AppState>,
    Path(discord_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MenteeService::new(&state.db);

    let responses = service.get_responses(&discord_id).await?;

    let dtos: Vec<ResponseDto> = responses.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
