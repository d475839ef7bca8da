//! Mentee data repository for database operations.
//!
//! This module provides the `MenteeRepository` for querying mentee records, including the
//! house filter used by the dashboard list and the distinct house listing used to
//! populate the house filter.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::mentee::Mentee;

/// Repository providing database operations for mentees.
pub struct MenteeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenteeRepository<'a> {
    /// Creates a new MenteeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds mentees in a house, or every mentee when `house` is `None`.
    ///
    /// The house must match exactly. Results are ordered by row ID so callers can sort
    /// stably on top.
    ///
    /// # Arguments
    /// - `house` - Exact house to filter by, or `None` for all houses
    ///
    /// # Returns
    /// - `Ok(Vec<Mentee>)` - Matching mentees (empty if none match)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_house(&self, house: Option<&str>) -> Result<Vec<Mentee>, DbErr> {
        let mut query = entity::prelude::Mentee::find();

        if let Some(house) = house {
            query = query.filter(entity::mentee::Column::HouseRole.eq(house));
        }

        let entities = query
            .order_by_asc(entity::mentee::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Mentee::from_entity).collect())
    }

    /// Finds a mentee by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(Mentee))` - Mentee found
    /// - `Ok(None)` - No mentee with that Discord ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, discord_id: &str) -> Result<Option<Mentee>, DbErr> {
        let entity = entity::prelude::Mentee::find()
            .filter(entity::mentee::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Mentee::from_entity))
    }

    /// Gets every distinct, non-empty house assigned to a mentee.
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - House names in ascending order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_houses(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Mentee::find()
            .select_only()
            .column(entity::mentee::Column::HouseRole)
            .distinct()
            .filter(entity::mentee::Column::HouseRole.is_not_null())
            .filter(entity::mentee::Column::HouseRole.ne(""))
            .order_by_asc(entity::mentee::Column::HouseRole)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
