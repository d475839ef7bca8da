//! Response data repository for database operations.
//!
//! This module provides the `ResponseRepository` for reading the weekly check-ins
//! submitted by mentees and counting them per mentee.

use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::mentee::MenteeResponse;

/// Repository providing database operations for mentee responses.
pub struct ResponseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResponseRepository<'a> {
    /// Creates a new ResponseRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all responses submitted by a mentee, latest week first.
    ///
    /// Responses for the same week are ordered newest row first.
    ///
    /// # Arguments
    /// - `mentee_id` - Database row ID of the mentee
    ///
    /// # Returns
    /// - `Ok(Vec<MenteeResponse>)` - Responses ordered by week descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_mentee_id(&self, mentee_id: i32) -> Result<Vec<MenteeResponse>, DbErr> {
        let entities = entity::prelude::Response::find()
            .filter(entity::response::Column::MenteeId.eq(mentee_id))
            .order_by_desc(entity::response::Column::WeekNumber)
            .order_by_desc(entity::response::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(MenteeResponse::from_entity)
            .collect())
    }

    /// Counts responses for each of the given mentees in a single grouped query.
    ///
    /// Mentees without responses are absent from the returned map.
    ///
    /// # Arguments
    /// - `mentee_ids` - Database row IDs of the mentees to count for
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, u64>)` - Response count keyed by mentee row ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_by_mentee_ids(&self, mentee_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if mentee_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(i32, i64)> = entity::prelude::Response::find()
            .select_only()
            .column(entity::response::Column::MenteeId)
            .column_as(
                Expr::col((
                    entity::response::Entity,
                    entity::response::Column::Id,
                ))
                .count(),
                "response_count",
            )
            .filter(entity::response::Column::MenteeId.is_in(mentee_ids.iter().copied()))
            .group_by(entity::response::Column::MenteeId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(mentee_id, count)| (mentee_id, count.max(0) as u64))
            .collect())
    }
}
