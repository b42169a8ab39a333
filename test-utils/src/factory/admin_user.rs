//! Admin user factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating admin accounts.
///
/// The default password hash is not a valid PHC string; tests that log in must
/// supply a real hash through `password_hash`.
pub struct AdminUserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    password_hash: String,
}

impl<'a> AdminUserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("admin{}@boreview.vn", id),
            name: format!("Admin {}", id),
            password_hash: "not-a-real-hash".to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the admin into the database.
    pub async fn build(self) -> Result<entity::admin_user::Model, DbErr> {
        entity::admin_user::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            password_hash: ActiveValue::Set(self.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db).build().await
}
