//! Mentee and weekly response domain models.

use chrono::{DateTime, Utc};

use crate::model::mentee::{MenteeDto, MenteeQueryDto, ResponseDto, SortBy, SortOrder};

/// Tracked mentee identified by their Discord ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Mentee {
    /// Database row ID, referenced by responses.
    pub id: i32,
    pub discord_id: String,
    pub name: String,
    /// House grouping, if assigned.
    pub house_role: Option<String>,
}

impl Mentee {
    /// Converts an entity model to a mentee domain model at the repository boundary.
    pub fn from_entity(entity: entity::mentee::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            name: entity.name,
            house_role: entity.house_role,
        }
    }
}

/// Mentee together with the number of responses they have submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct MenteeSummary {
    pub mentee: Mentee,
    pub response_count: u64,
}

impl MenteeSummary {
    pub fn into_dto(self) -> MenteeDto {
        MenteeDto {
            discord_id: self.mentee.discord_id,
            name: self.mentee.name,
            house_role: self.mentee.house_role,
            response_count: self.response_count,
        }
    }
}

/// Weekly check-in submitted by a mentee.
#[derive(Debug, Clone, PartialEq)]
pub struct MenteeResponse {
    pub id: i32,
    pub week_number: i32,
    pub text_response: Option<String>,
    pub voice_response_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MenteeResponse {
    pub fn from_entity(entity: entity::response::Model) -> Self {
        Self {
            id: entity.id,
            week_number: entity.week_number,
            text_response: entity.text_response,
            voice_response_url: entity.voice_response_url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ResponseDto {
        ResponseDto {
            id: self.id,
            week_number: self.week_number,
            text_response: self.text_response,
            voice_response_url: self.voice_response_url,
            created_at: self.created_at,
        }
    }
}

/// Parameters for listing mentees.
///
/// Empty house and blank search values are normalized to `None`; the search term is
/// trimmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMenteesParam {
    pub house: Option<String>,
    pub search: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl From<MenteeQueryDto> for ListMenteesParam {
    fn from(dto: MenteeQueryDto) -> Self {
        Self {
            house: dto.house().map(str::to_string),
            search: dto.search().map(str::to_string),
            sort_by: dto.sort_by,
            sort_order: dto.sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_query_dto() {
        let param = ListMenteesParam::from(MenteeQueryDto {
            sort_by: SortBy::ResponseCount,
            sort_order: SortOrder::Desc,
            house: Some(String::new()),
            search: Some("  ann  ".to_string()),
        });

        assert_eq!(param.house, None);
        assert_eq!(param.search.as_deref(), Some("ann"));
        assert_eq!(param.sort_by, SortBy::ResponseCount);
        assert_eq!(param.sort_order, SortOrder::Desc);
    }
}
