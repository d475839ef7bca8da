use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

/// Path of the mentee list endpoint.
pub const MENTEES_PATH: &str = "/api/mentees";

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MenteeDto {
    pub discord_id: String,
    pub name: String,
    pub house_role: Option<String>,
    pub response_count: u64,
}

impl MenteeDto {
    /// House badge text, if the mentee has a non-empty house.
    pub fn house_badge(&self) -> Option<&str> {
        self.house_role.as_deref().filter(|house| !house.is_empty())
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ResponseDto {
    pub id: i32,
    pub week_number: i32,
    pub text_response: Option<String>,
    pub voice_response_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Name,
    HouseRole,
    ResponseCount,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Name, SortBy::HouseRole, SortBy::ResponseCount];

    /// Query string value.
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Name => "name",
            SortBy::HouseRole => "house_role",
            SortBy::ResponseCount => "response_count",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::Name => "Name",
            SortBy::HouseRole => "House",
            SortBy::ResponseCount => "Response Count",
        }
    }

    /// Parses a query string value, as produced by [`SortBy::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort_by| sort_by.as_str() == value)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.as_str() == value)
    }
}

/// Filter, sort and search options for listing mentees.
///
/// Shared between the dashboard, which serializes it into the request URL, and the
/// server, which extracts it from the query string.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct MenteeQueryDto {
    /// Field to sort by (default: name)
    #[serde(default)]
    pub sort_by: SortBy,
    /// Sort direction (default: asc)
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Only include mentees of this house
    pub house: Option<String>,
    /// Case-insensitive substring of the mentee name
    pub search: Option<String>,
}

impl MenteeQueryDto {
    /// House filter, `None` when unset or empty.
    pub fn house(&self) -> Option<&str> {
        self.house.as_deref().filter(|house| !house.is_empty())
    }

    /// Trimmed search term, `None` when unset or blank.
    pub fn search(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|search| !search.is_empty())
    }

    /// Builds the request URL for the mentee list endpoint.
    ///
    /// `sort_by` and `sort_order` are always present; `house` and `search` only when
    /// non-empty. Values are form-urlencoded.
    pub fn to_url(&self) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        params.append_pair("sort_by", self.sort_by.as_str());
        params.append_pair("sort_order", self.sort_order.as_str());

        if let Some(house) = self.house() {
            params.append_pair("house", house);
        }
        if let Some(search) = self.search() {
            params.append_pair("search", search);
        }

        format!("{}?{}", MENTEES_PATH, params.finish())
    }
}

/// Builds the responses URL for a mentee, percent-encoding the id as a path segment.
pub fn mentee_responses_url(discord_id: &str) -> String {
    let mut url = match url::Url::parse("http://localhost/api/mentees/") {
        Ok(url) => url,
        Err(_) => return format!("{}/{}/responses", MENTEES_PATH, discord_id),
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(discord_id).push("responses");
    }
    url.path().to_string()
}
