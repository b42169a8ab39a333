use super::*;

/// Tests first contact from a new visitor without a display name.
///
/// Expected: profile created at level 1 with a generated name
#[tokio::test]
async fn creates_profile_with_default_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let overview = VisitorService::new(db)
        .get_or_create(CreateVisitorParams {
            visitor_id: "abcdef123456".to_string(),
            display_name: None,
        })
        .await?;

    assert_eq!(overview.profile.display_name, "Độc giả abcdef");
    assert_eq!(overview.level.level, 1);
    assert_eq!(overview.streak.current_streak, 0);
    assert_eq!(overview.badges_count, 0);

    Ok(())
}

/// Tests calling again for an existing visitor.
///
/// Expected: existing profile returned, name and XP untouched
#[tokio::test]
async fn returns_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visitor = VisitorFactory::new(db)
        .display_name("Minh")
        .xp(150)
        .level(2)
        .build()
        .await?;

    let overview = VisitorService::new(db)
        .get_or_create(CreateVisitorParams {
            visitor_id: visitor.visitor_id.clone(),
            display_name: Some("Tên khác".to_string()),
        })
        .await?;

    assert_eq!(overview.profile.display_name, "Minh");
    assert_eq!(overview.profile.xp, 150);

    Ok(())
}

/// Tests deleting an unknown visitor.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_unknown_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VisitorService::new(db).delete("khong-ton-tai").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a visitor who has read a post.
///
/// Expected: Ok(()) and a later lookup is NotFound
#[tokio::test]
async fn delete_removes_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_gamification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, visitor) = create_post_and_visitor(db).await?;

    let service = VisitorService::new(db);
    service.delete(&visitor.visitor_id).await?;

    let result = service.get(&visitor.visitor_id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
