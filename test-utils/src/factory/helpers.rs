//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a mentee with `count` responses for weeks `1..=count`.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Display name of the mentee
/// - `house_role` - Optional house grouping
/// - `count` - Number of responses to create
///
/// # Returns
/// - `Ok(entity::mentee::Model)` - The created mentee
/// - `Err(DbErr)` - Database error during creation
pub async fn create_mentee_with_responses(
    db: &DatabaseConnection,
    name: &str,
    house_role: Option<&str>,
    count: i32,
) -> Result<entity::mentee::Model, DbErr> {
    let mut factory = crate::factory::mentee::MenteeFactory::new(db).name(name);
    if let Some(house) = house_role {
        factory = factory.house_role(house);
    }
    let mentee = factory.build().await?;

    for week in 1..=count {
        crate::factory::response::create_response(db, mentee.id, week).await?;
    }

    Ok(mentee)
}
