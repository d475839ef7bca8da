//! Mentee factory for creating test mentee entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mentees with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let mentee = MenteeFactory::new(&db)
///     .discord_id("123456789")
///     .name("Ann")
///     .house_role("Gryffindor")
///     .build()
///     .await?;
/// ```
pub struct MenteeFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    house_role: Option<String>,
}

impl<'a> MenteeFactory<'a> {
    /// Creates a new MenteeFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: `"{id}"` where id is auto-incremented
    /// - name: `"Mentee {id}"`
    /// - house_role: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("Mentee {}", id),
            house_role: None,
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn house_role(mut self, house_role: impl Into<String>) -> Self {
        self.house_role = Some(house_role.into());
        self
    }

    /// Builds and inserts the mentee entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::mentee::Model)` - Created mentee entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mentee::Model, DbErr> {
        entity::mentee::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            house_role: ActiveValue::Set(self.house_role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mentee with default values.
///
/// Shorthand for `MenteeFactory::new(db).build().await`.
pub async fn create_mentee(db: &DatabaseConnection) -> Result<entity::mentee::Model, DbErr> {
    MenteeFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_mentee_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Mentee).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let mentee = create_mentee(db).await?;

        assert!(!mentee.discord_id.is_empty());
        assert!(!mentee.name.is_empty());
        assert!(mentee.house_role.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_mentees() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Mentee).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_mentee(db).await?;
        let second = create_mentee(db).await?;

        assert_ne!(first.discord_id, second.discord_id);
        assert_ne!(first.id, second.id);

        Ok(())
    }
}
