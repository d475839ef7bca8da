use super::*;

/// Tests houses are distinct and sorted.
///
/// Verifies duplicate houses collapse to one entry, mentees without a house or with
/// an empty house are ignored, and the result is in ascending order.
///
/// Expected: Ok with ["Gryffindor", "Slytherin"]
#[tokio::test]
async fn returns_distinct_sorted_houses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MenteeFactory::new(db).house_role("Slytherin").build().await?;
    MenteeFactory::new(db).house_role("Gryffindor").build().await?;
    MenteeFactory::new(db).house_role("Slytherin").build().await?;
    MenteeFactory::new(db).house_role("").build().await?;
    MenteeFactory::new(db).build().await?;

    let repo = MenteeRepository::new(db);
    let houses = repo.get_houses().await?;

    assert_eq!(houses, vec!["Gryffindor", "Slytherin"]);

    Ok(())
}

/// Tests houses with no mentees.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_mentees() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MenteeRepository::new(db);
    let houses = repo.get_houses().await?;

    assert!(houses.is_empty());

    Ok(())
}
