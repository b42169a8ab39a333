use super::*;

/// Tests creating the first admin with a valid code.
///
/// Expected: admin created with normalized email and the code consumed
#[tokio::test]
async fn creates_first_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let admin = AuthService::new(db)
        .setup(&codes, &code, " Admin@BoReview.VN ", "Bơ", "mat-khau-dai")
        .await?;

    assert_eq!(admin.email, "admin@boreview.vn");
    assert!(!codes.is_pending().await);

    let logged_in = AuthService::new(db)
        .login("admin@boreview.vn", "mat-khau-dai")
        .await?;
    assert_eq!(logged_in.id, admin.id);

    Ok(())
}

/// Tests setup with a wrong code.
///
/// Expected: Err(AuthError::InvalidSetupCode)
#[tokio::test]
async fn rejects_wrong_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = SetupCodeService::new();
    codes.generate().await;

    let result = AuthService::new(db)
        .setup(&codes, "sai", "a@b.vn", "A", "mat-khau-dai")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidSetupCode))
    ));

    Ok(())
}

/// Tests setup when an admin already exists.
///
/// Expected: Err(AuthError::AdminAlreadyExists) and the code left unused
#[tokio::test]
async fn rejects_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(AdminUser).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AdminUserFactory::new(db).build().await?;

    let codes = SetupCodeService::new();
    let code = codes.generate().await;

    let result = AuthService::new(db)
        .setup(&codes, &code, "a@b.vn", "A", "mat-khau-dai")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AdminAlreadyExists))
    ));
    assert!(codes.is_pending().await);

    Ok(())
}
