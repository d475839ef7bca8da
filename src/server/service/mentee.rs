use sea_orm::DatabaseConnection;
use std::cmp::Ordering;

use crate::{
    model::mentee::{SortBy, SortOrder},
    server::{
        data::{mentee::MenteeRepository, response::ResponseRepository},
        error::AppError,
        model::mentee::{ListMenteesParam, MenteeResponse, MenteeSummary},
    },
};

pub struct MenteeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenteeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists mentees matching the filters with their response counts, sorted as requested.
    ///
    /// The search term matches any part of the name ignoring case, including non-ASCII
    /// letters that SQLite's `LIKE` would not fold. Sorting is stable, so mentees that
    /// compare equal keep their insertion order regardless of direction.
    pub async fn list(&self, param: ListMenteesParam) -> Result<Vec<MenteeSummary>, AppError> {
        let mentee_repo = MenteeRepository::new(self.db);
        let response_repo = ResponseRepository::new(self.db);

        let mut mentees = mentee_repo.find_by_house(param.house.as_deref()).await?;

        if let Some(search) = &param.search {
            let search = search.to_lowercase();
            mentees.retain(|mentee| mentee.name.to_lowercase().contains(&search));
        }

        let ids: Vec<i32> = mentees.iter().map(|m| m.id).collect();
        let counts = response_repo.count_by_mentee_ids(&ids).await?;

        let mut summaries: Vec<MenteeSummary> = mentees
            .into_iter()
            .map(|mentee| {
                let response_count = counts.get(&mentee.id).copied().unwrap_or(0);
                MenteeSummary {
                    mentee,
                    response_count,
                }
            })
            .collect();

        summaries.sort_by(|a, b| {
            let ordering = compare(a, b, param.sort_by);
            match param.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(summaries)
    }

    /// Gets a mentee's responses, latest week first
    ///
    /// Returns `AppError::NotFound` if no mentee has the given Discord ID
    pub async fn get_responses(&self, discord_id: &str) -> Result<Vec<MenteeResponse>, AppError> {
        let mentee = MenteeRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mentee not found".to_string()))?;

        let responses = ResponseRepository::new(self.db)
            .get_by_mentee_id(mentee.id)
            .await?;

        Ok(responses)
    }

    pub async fn get_houses(&self) -> Result<Vec<String>, AppError> {
        Ok(MenteeRepository::new(self.db).get_houses().await?)
    }
}

fn compare(a: &MenteeSummary, b: &MenteeSummary, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => a
            .mentee
            .name
            .to_lowercase()
            .cmp(&b.mentee.name.to_lowercase()),
        SortBy::HouseRole => house_key(a).cmp(&house_key(b)),
        SortBy::ResponseCount => a.response_count.cmp(&b.response_count),
    }
}

// Mentees without a house sort as the empty string.
fn house_key(summary: &MenteeSummary) -> String {
    summary
        .mentee
        .house_role
        .as_deref()
        .unwrap_or_default()
        .to_lowercase()
}
