use super::*;

/// Tests finding an existing mentee by Discord ID.
///
/// Expected: Ok(Some(Mentee)) with matching data
#[tokio::test]
async fn finds_existing_mentee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = MenteeFactory::new(db)
        .discord_id("123456789")
        .name("Ann")
        .house_role("Gryffindor")
        .build()
        .await?;

    let repo = MenteeRepository::new(db);
    let mentee = repo.find_by_discord_id("123456789").await?.unwrap();

    assert_eq!(mentee.id, created.id);
    assert_eq!(mentee.discord_id, "123456789");
    assert_eq!(mentee.name, "Ann");
    assert_eq!(mentee.house_role.as_deref(), Some("Gryffindor"));

    Ok(())
}

/// Tests querying for a non-existent mentee.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_mentee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenteeRepository::new(db);
    let result = repo.find_by_discord_id("999999999").await?;

    assert!(result.is_none());

    Ok(())
}
