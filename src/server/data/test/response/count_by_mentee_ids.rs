use super::*;

/// Tests counts are grouped per mentee.
///
/// Verifies each mentee gets its own count and mentees without responses are
/// absent from the map.
///
/// Expected: Ok with {first: 2, second: 1}
#[tokio::test]
async fn counts_responses_per_mentee() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_mentee(db).await?;
    let second = create_mentee(db).await?;
    let silent = create_mentee(db).await?;
    create_response(db, first.id, 1).await?;
    create_response(db, first.id, 2).await?;
    create_response(db, second.id, 1).await?;

    let repo = ResponseRepository::new(db);
    let counts = repo
        .count_by_mentee_ids(&[first.id, second.id, silent.id])
        .await?;

    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), Some(&1));
    assert_eq!(counts.get(&silent.id), None);

    Ok(())
}

/// Tests counting with no mentee IDs skips the query.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ResponseRepository::new(db);
    let counts = repo.count_by_mentee_ids(&[]).await?;

    assert!(counts.is_empty());

    Ok(())
}
