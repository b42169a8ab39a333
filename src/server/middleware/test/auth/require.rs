use super::*;

/// Tests a logged-in admin passes the guard.
///
/// Expected: Ok(AdminUser) matching the stored admin
#[tokio::test]
async fn grants_access_to_logged_in_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = AdminUserFactory::new(db)
        .email("bo@boreview.vn")
        .build()
        .await?;
    AuthSession::new(session).set_admin_id(admin.id).await?;

    let returned = AuthGuard::new(db, session).require().await?;

    assert_eq!(returned.id, admin.id);
    assert_eq!(returned.email, "bo@boreview.vn");

    Ok(())
}

/// Tests the guard without a login.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_when_not_logged_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a removed admin.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the stale id
#[tokio::test]
async fn denies_access_when_admin_removed() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_admin_id(77).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(77)))
    ));

    Ok(())
}

/// Tests that logout clears the admin id.
///
/// Expected: Err(AuthError::UserNotInSession) after clear
#[tokio::test]
async fn denies_access_after_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::AdminUser)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = AdminUserFactory::new(db).build().await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_admin_id(admin.id).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}
