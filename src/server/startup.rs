use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::admin_user::AdminUserRepository, error::AppError,
    service::admin::setup_code::SetupCodeService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application database.
///
/// Sessions are stored in the same SQLite database through `tower-sessions-sqlx-store`
/// and expire after 7 days of inactivity. The store's table is migrated on startup.
///
/// # Arguments
/// - `db` - Connected database whose SQLite pool hosts the session table
/// - `config` - Configuration deciding whether the cookie is marked `Secure`
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Generates a setup code when no admin account exists.
///
/// Logs the setup URL containing a one-time code that is valid for 60 seconds. The code
/// is consumed by `POST /api/auth/setup` to create the first admin.
///
/// # Arguments
/// - `db` - Database connection used to look for existing admins
/// - `config` - Configuration providing the application URL
/// - `setup_codes` - Service that stores the generated code
///
/// # Returns
/// - `Ok(())` - Either an admin exists or a code was generated and logged
/// - `Err(AppError::DbErr)` - Failed to query admin accounts
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
    setup_codes: &SetupCodeService,
) -> Result<(), AppError> {
    let admin_repo = AdminUserRepository::new(db);

    if admin_repo.admin_exists().await? {
        return Ok(());
    }

    let code = setup_codes.generate().await;

    tracing::info!(
        "No admin account exists. Create one within 60 seconds at {}/admin/setup?code={}",
        config.app_url.trim_end_matches('/'),
        code
    );

    Ok(())
}
