use super::*;

/// Tests responses are returned latest week first.
///
/// Expected: Ok with weeks [3, 2, 1]
#[tokio::test]
async fn orders_by_week_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mentee = create_mentee(db).await?;
    create_response(db, mentee.id, 2).await?;
    create_response(db, mentee.id, 3).await?;
    create_response(db, mentee.id, 1).await?;

    let repo = ResponseRepository::new(db);
    let responses = repo.get_by_mentee_id(mentee.id).await?;

    let weeks: Vec<_> = responses.iter().map(|r| r.week_number).collect();
    assert_eq!(weeks, vec![3, 2, 1]);

    Ok(())
}

/// Tests only the requested mentee's responses are returned.
///
/// Expected: Ok with the single response of the second mentee
#[tokio::test]
async fn excludes_other_mentees() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_mentee(db).await?;
    let second = create_mentee(db).await?;
    create_response(db, first.id, 1).await?;
    ResponseFactory::new(db, second.id, 4)
        .text_response(None)
        .voice_response_url(Some("https://cdn.example.com/4.ogg"))
        .build()
        .await?;

    let repo = ResponseRepository::new(db);
    let responses = repo.get_by_mentee_id(second.id).await?;

    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].week_number, 4);
    assert!(responses[0].text_response.is_none());
    assert_eq!(
        responses[0].voice_response_url.as_deref(),
        Some("https://cdn.example.com/4.ogg")
    );

    Ok(())
}

/// Tests a mentee without responses.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_responses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mentee_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mentee = create_mentee(db).await?;

    let repo = ResponseRepository::new(db);
    let responses = repo.get_by_mentee_id(mentee.id).await?;

    assert!(responses.is_empty());

    Ok(())
}
