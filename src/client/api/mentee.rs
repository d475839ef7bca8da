use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::mentee::{mentee_responses_url, MenteeDto, MenteeQueryDto, ResponseDto},
};

pub async fn get_mentees(query: &MenteeQueryDto) -> Result<Vec<MenteeDto>, ApiError> {
    let request = get(&query.to_url());
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Fetches a mentee's responses. A 404 is returned as an error with status 404.
pub async fn get_mentee_responses(discord_id: &str) -> Result<Vec<ResponseDto>, ApiError> {
    let request = get(&mentee_responses_url(discord_id));
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_houses() -> Result<Vec<String>, ApiError> {
    let request = get("/api/houses");
    let response = send_request(request).await?;
    parse_response(response).await
}
