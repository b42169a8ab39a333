//! Admin authentication with argon2 password hashes.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::admin::AdminUser,
    service::admin::setup_code::SetupCodeService,
};

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored PHC hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the first admin account using the one-time setup code.
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - Created admin
    /// - `Err(AuthError::AdminAlreadyExists)` - An admin already exists
    /// - `Err(AuthError::InvalidSetupCode)` - Code wrong, expired or already used
    pub async fn setup(
        &self,
        codes: &SetupCodeService,
        code: &str,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<AdminUser, AppError> {
        let repo = AdminUserRepository::new(self.db);

        if repo.admin_exists().await? {
            return Err(AuthError::AdminAlreadyExists.into());
        }
        if !codes.validate_and_consume(code).await {
            return Err(AuthError::InvalidSetupCode.into());
        }

        let password_hash = hash_password(password)?;
        let admin = repo
            .create(
                email.trim().to_lowercase(),
                name.trim().to_string(),
                password_hash,
            )
            .await?;

        tracing::info!("Created admin account {}", admin.email);

        Ok(admin)
    }

    /// Verifies admin credentials.
    ///
    /// Unknown email and wrong password fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser, AppError> {
        let credentials = AdminUserRepository::new(self.db)
            .find_credentials(&email.trim().to_lowercase())
            .await?;

        let Some((admin, hash)) = credentials else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash)? {
            tracing::warn!("Failed login for admin {}", admin.email);
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(admin)
    }
}
