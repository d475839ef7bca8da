use super::*;

/// Tests listing all mentees without a house filter.
///
/// Expected: Ok with every mentee in insertion order, with or without a house
#[tokio::test]
async fn returns_all_mentees_without_house() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MenteeFactory::new(db).name("Ann").build().await?;
    MenteeFactory::new(db)
        .name("Bob")
        .house_role("Hufflepuff")
        .build()
        .await?;

    let repo = MenteeRepository::new(db);
    let mentees = repo.find_by_house(None).await?;

    let names: Vec<_> = mentees.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob"]);

    Ok(())
}

/// Tests filtering by house.
///
/// Verifies that only mentees with exactly the requested house are returned and
/// that mentees without a house are excluded.
///
/// Expected: Ok with only the Slytherin mentee
#[tokio::test]
async fn filters_by_house() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MenteeFactory::new(db)
        .name("Ann")
        .house_role("Gryffindor")
        .build()
        .await?;
    MenteeFactory::new(db)
        .name("Draco")
        .house_role("Slytherin")
        .build()
        .await?;
    MenteeFactory::new(db).name("Nobody").build().await?;

    let repo = MenteeRepository::new(db);
    let mentees = repo.find_by_house(Some("Slytherin")).await?;

    assert_eq!(mentees.len(), 1);
    assert_eq!(mentees[0].name, "Draco");
    assert_eq!(mentees[0].house_role.as_deref(), Some("Slytherin"));

    Ok(())
}

/// Tests a house nobody belongs to.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_house() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MenteeFactory::new(db)
        .name("Ann")
        .house_role("Gryffindor")
        .build()
        .await?;

    let repo = MenteeRepository::new(db);
    let mentees = repo.find_by_house(Some("Ravenclaw")).await?;

    assert!(mentees.is_empty());

    Ok(())
}
