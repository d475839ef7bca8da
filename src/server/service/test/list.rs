use super::*;

/// Tests default listing sorts by name ascending, ignoring case.
///
/// Expected: Ok with names in case-insensitive alphabetical order
#[tokio::test]
async fn sorts_by_name_ascending_by_default() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MenteeFactory::new(db).name("charlie").build().await?;
    MenteeFactory::new(db).name("Ann").build().await?;
    MenteeFactory::new(db).name("bob").build().await?;

    let service = MenteeService::new(db);
    let mentees = service.list(ListMenteesParam::default()).await?;

    assert_eq!(names(&mentees), vec!["Ann", "bob", "charlie"]);

    Ok(())
}

/// Tests response counts are attached and sortable descending.
///
/// Verifies mentees without responses report zero and that descending order puts the
/// most active mentee first.
///
/// Expected: Ok with counts [3, 1, 0]
#[tokio::test]
async fn sorts_by_response_count_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_mentee_with_responses(db, "Quiet", None, 0).await?;
    create_mentee_with_responses(db, "Busy", None, 3).await?;
    create_mentee_with_responses(db, "Some", None, 1).await?;

    let service = MenteeService::new(db);
    let mentees = service
        .list(ListMenteesParam {
            sort_by: SortBy::ResponseCount,
            sort_order: SortOrder::Desc,
            ..Default::default()
        })
        .await?;

    let counts: Vec<u64> = mentees.iter().map(|s| s.response_count).collect();
    assert_eq!(names(&mentees), vec!["Busy", "Some", "Quiet"]);
    assert_eq!(counts, vec![3, 1, 0]);

    Ok(())
}

/// Tests sorting by house places mentees without a house first.
///
/// Mentees sharing a house keep their insertion order.
///
/// Expected: Ok with the houseless mentee first, then houses alphabetically
#[tokio::test]
async fn sorts_by_house_with_missing_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_mentee_with_responses(db, "Zed", Some("slytherin"), 0).await?;
    create_mentee_with_responses(db, "Ann", Some("Gryffindor"), 0).await?;
    create_mentee_with_responses(db, "Yara", Some("Slytherin"), 0).await?;
    create_mentee_with_responses(db, "Nobody", None, 0).await?;

    let service = MenteeService::new(db);
    let mentees = service
        .list(ListMenteesParam {
            sort_by: SortBy::HouseRole,
            ..Default::default()
        })
        .await?;

    assert_eq!(names(&mentees), vec!["Nobody", "Ann", "Zed", "Yara"]);

    Ok(())
}

/// Tests filters are applied before sorting.
///
/// Expected: Ok with only the Gryffindor mentees whose names contain "an"
#[tokio::test]
async fn applies_house_and_search_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_mentee_with_responses(db, "Hannah", Some("Gryffindor"), 2).await?;
    create_mentee_with_responses(db, "Ann", Some("Gryffindor"), 1).await?;
    create_mentee_with_responses(db, "Bob", Some("Gryffindor"), 0).await?;
    create_mentee_with_responses(db, "Andy", Some("Hufflepuff"), 0).await?;

    let service = MenteeService::new(db);
    let mentees = service
        .list(ListMenteesParam {
            house: Some("Gryffindor".to_string()),
            search: Some("AN".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(names(&mentees), vec!["Ann", "Hannah"]);
    assert_eq!(mentees[0].response_count, 1);
    assert_eq!(mentees[1].response_count, 2);

    Ok(())
}

/// Tests listing with no mentees.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_mentees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MenteeService::new(db);
    let mentees = service.list(ListMenteesParam::default()).await?;

    assert!(mentees.is_empty());

    Ok(())
}

/// Tests search folds case for non-ASCII names.
///
/// Expected: Ok with "Élodie" for a lowercase "élodie" search and "ÉLO" for a partial
/// uppercase search
#[tokio::test]
async fn searches_non_ascii_names_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_mentee_with_responses(db, "Élodie", None, 1).await?;
    create_mentee_with_responses(db, "Bob", None, 0).await?;

    let service = MenteeService::new(db);

    let lowercase = service
        .list(ListMenteesParam {
            search: Some("élodie".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(names(&lowercase), vec!["Élodie"]);
    assert_eq!(lowercase[0].response_count, 1);

    let partial = service
        .list(ListMenteesParam {
            search: Some("ÉLO".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(names(&partial), vec!["Élodie"]);

    Ok(())
}

/// Tests a search with no matching names.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_search_matches_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_mentee_with_responses(db, "Ann", None, 0).await?;

    let service = MenteeService::new(db);
    let mentees = service
        .list(ListMenteesParam {
            search: Some("xyz".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(mentees.is_empty());

    Ok(())
}
