//! Dashboard state and the view models rendered from it.
//!
//! Everything here is plain data so the rendering decisions can be tested without a
//! running Dioxus runtime. The route component owns the signals and calls into these
//! types to decide what each container shows.

use chrono::TimeZone;
use std::fmt::Display;

use crate::{
    client::{
        model::error::ApiError,
        util::{escape_html, format::format_timestamp, format::voice_link},
    },
    model::mentee::{MenteeDto, MenteeQueryDto, ResponseDto, SortBy, SortOrder},
};

pub const NO_RESPONSES_RECORDED: &str = "No responses recorded for this mentee yet.";
pub const NO_RESPONSES_FOUND: &str = "Mentee found, but no responses recorded yet.";

/// Current values of the filter, sort and search controls.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterControls {
    /// Selected house, empty for all houses.
    pub house: String,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// Raw search input.
    pub search: String,
}

impl FilterControls {
    pub fn to_query(&self) -> MenteeQueryDto {
        MenteeQueryDto {
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            house: Some(self.house.clone()).filter(|house| !house.is_empty()),
            search: Some(self.search.trim().to_string()).filter(|search| !search.is_empty()),
        }
    }
}

/// Query snapshot taken when the mentee list loader was triggered.
///
/// Each trigger bumps `generation`; only a result carrying the current generation is
/// rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppliedQuery {
    pub generation: u64,
    pub query: MenteeQueryDto,
}

impl AppliedQuery {
    pub fn next(&self, query: MenteeQueryDto) -> Self {
        Self {
            generation: self.generation + 1,
            query,
        }
    }
}

/// Mentee whose responses the modal is showing.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedMentee {
    /// Click sequence number, bumped on every entry click.
    pub seq: u64,
    pub discord_id: String,
    pub name: String,
}

impl SelectedMentee {
    pub fn next(previous: Option<&SelectedMentee>, mentee: &MenteeDto) -> Self {
        Self {
            seq: previous.map_or(1, |selected| selected.seq + 1),
            discord_id: mentee.discord_id.clone(),
            name: mentee.name.clone(),
        }
    }

    pub fn title(&self) -> String {
        format!("Responses by {}", self.name)
    }
}

/// Mentee list result tagged with the generation of the query that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct MenteeListResult {
    pub generation: u64,
    pub result: Result<Vec<MenteeDto>, ApiError>,
}

/// Responses result tagged with the mentee click that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponsesResult {
    pub seq: u64,
    pub discord_id: String,
    pub result: Result<Vec<ResponseDto>, ApiError>,
}

/// One clickable mentee entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MenteeEntry {
    pub mentee: MenteeDto,
    pub discord_label: String,
    pub badge: Option<String>,
    pub count_label: String,
}

impl From<&MenteeDto> for MenteeEntry {
    fn from(mentee: &MenteeDto) -> Self {
        Self {
            mentee: mentee.clone(),
            discord_label: format!("Discord ID: {}", mentee.discord_id),
            badge: mentee.house_badge().map(str::to_string),
            count_label: format!("{} responses", mentee.response_count),
        }
    }
}

/// What the mentee list container shows.
///
/// Banner and message strings are markup with every interpolated value escaped.
#[derive(Clone, Debug, PartialEq)]
pub enum MenteeListView {
    Loading,
    Error(String),
    Loaded {
        banner: Option<String>,
        content: MenteeListContent,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenteeListContent {
    Empty(String),
    Entries(Vec<MenteeEntry>),
}

impl MenteeListView {
    /// Decides the list content for the applied query and the latest loader result.
    ///
    /// A result from an older generation is treated as still loading.
    pub fn resolve(applied: &AppliedQuery, latest: Option<&MenteeListResult>) -> Self {
        match latest {
            Some(latest) if latest.generation == applied.generation => match &latest.result {
                Ok(mentees) => Self::render(mentees, applied.query.search()),
                Err(err) => Self::Error(format!(
                    "Error loading mentees: {}",
                    escape_html(Some(err.descriptor()))
                )),
            },
            _ => Self::Loading,
        }
    }

    /// Renders a fetched mentee list for the search term that produced it.
    pub fn render(mentees: &[MenteeDto], search: Option<&str>) -> Self {
        let search = search.filter(|term| !term.is_empty());
        let banner = search.map(|term| search_banner(mentees.len(), term));

        let content = if mentees.is_empty() {
            MenteeListContent::Empty(empty_message(search))
        } else {
            MenteeListContent::Entries(mentees.iter().map(MenteeEntry::from).collect())
        };

        Self::Loaded { banner, content }
    }
}

fn search_banner(count: usize, term: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!(
        "Found <strong>{}</strong> mentee{} matching \"<strong>{}</strong>\"",
        count,
        plural,
        escape_html(Some(term))
    )
}

fn empty_message(search: Option<&str>) -> String {
    match search {
        Some(term) => format!(
            "No mentees found matching \"{}\". Try a different search term.",
            escape_html(Some(term))
        ),
        None => "No mentees found matching your criteria.".to_string(),
    }
}

/// Voice section of a response card.
#[derive(Clone, Debug, PartialEq)]
pub enum VoiceLink {
    Link(String),
    Unavailable,
}

/// One response rendered as a card.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseCard {
    pub id: i32,
    pub heading: String,
    pub timestamp: String,
    pub text: Option<String>,
    pub voice: Option<VoiceLink>,
}

impl ResponseCard {
    pub fn new<Tz>(response: &ResponseDto, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            id: response.id,
            heading: format!("Week {}", response.week_number),
            timestamp: format_timestamp(&response.created_at, tz),
            text: response.text_response.clone().filter(|text| !text.is_empty()),
            voice: response
                .voice_response_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .map(|url| voice_link(url).map_or(VoiceLink::Unavailable, VoiceLink::Link)),
        }
    }
}

/// What the responses modal body shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponsesView {
    Loading,
    Message(&'static str),
    Error(String),
    Cards(Vec<ResponseCard>),
}

impl ResponsesView {
    /// Decides the modal body for the selected mentee and the latest loader result.
    ///
    /// Results for another mentee, or for an earlier click, are treated as still loading.
    pub fn resolve<Tz>(
        selected: &SelectedMentee,
        latest: Option<&ResponsesResult>,
        tz: &Tz,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let latest = match latest {
            Some(latest) if latest.seq == selected.seq && latest.discord_id == selected.discord_id => {
                latest
            }
            _ => return Self::Loading,
        };

        match &latest.result {
            Ok(responses) if responses.is_empty() => Self::Message(NO_RESPONSES_RECORDED),
            Ok(responses) => Self::Cards(
                responses
                    .iter()
                    .map(|response| ResponseCard::new(response, tz))
                    .collect(),
            ),
            Err(err) if err.is_not_found() => Self::Message(NO_RESPONSES_FOUND),
            Err(err) => Self::Error(format!(
                "Error loading responses: {}",
                escape_html(Some(err.descriptor()))
            )),
        }
    }
}
