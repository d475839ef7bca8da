//! Response factory for creating weekly check-in records.

use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test responses attached to a mentee.
///
/// Defaults to a text-only response for the given week, created at noon UTC on the
/// Monday of that week in 2026.
pub struct ResponseFactory<'a> {
    db: &'a DatabaseConnection,
    mentee_id: i32,
    week_number: i32,
    text_response: Option<String>,
    voice_response_url: Option<String>,
}

impl<'a> ResponseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, mentee_id: i32, week_number: i32) -> Self {
        Self {
            db,
            mentee_id,
            week_number,
            text_response: Some(format!("Week {} update", week_number)),
            voice_response_url: None,
        }
    }

    pub fn text_response(mut self, text: Option<&str>) -> Self {
        self.text_response = text.map(str::to_string);
        self
    }

    pub fn voice_response_url(mut self, url: Option<&str>) -> Self {
        self.voice_response_url = url.map(str::to_string);
        self
    }

    /// Builds and inserts the response entity into the database.
    pub async fn build(self) -> Result<entity::response::Model, DbErr> {
        let week_start = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        let created_at = week_start + Duration::weeks(i64::from(self.week_number - 1));

        entity::response::ActiveModel {
            mentee_id: ActiveValue::Set(self.mentee_id),
            week_number: ActiveValue::Set(self.week_number),
            text_response: ActiveValue::Set(self.text_response),
            voice_response_url: ActiveValue::Set(self.voice_response_url),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a text response for `mentee_id` and `week_number`.
pub async fn create_response(
    db: &DatabaseConnection,
    mentee_id: i32,
    week_number: i32,
) -> Result<entity::response::Model, DbErr> {
    ResponseFactory::new(db, mentee_id, week_number).build().await
}
