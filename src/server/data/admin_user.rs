use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::admin::AdminUser;

pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an admin account with an already hashed password.
    pub async fn create(
        &self,
        email: String,
        name: String,
        password_hash: String,
    ) -> Result<AdminUser, DbErr> {
        let entity = entity::admin_user::ActiveModel {
            email: ActiveValue::Set(email),
            name: ActiveValue::Set(name),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AdminUser::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<AdminUser>, DbErr> {
        let entity = entity::prelude::AdminUser::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(AdminUser::from_entity))
    }

    /// Finds an admin by email, returning the stored password hash alongside.
    ///
    /// Only the login flow needs the hash, so it is returned separately from the
    /// domain model.
    pub async fn find_credentials(
        &self,
        email: &str,
    ) -> Result<Option<(AdminUser, String)>, DbErr> {
        let entity = entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (AdminUser::from_entity(e), hash)
        }))
    }

    /// Checks if any admin account exists.
    ///
    /// Used at startup to decide whether a setup code is needed.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::AdminUser::find().count(self.db).await?;

        Ok(count > 0)
    }
}
