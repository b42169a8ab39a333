use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::contact::{ContactMessage, CreateContactParams};

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateContactParams) -> Result<ContactMessage, DbErr> {
        let entity = entity::contact_message::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            subject: ActiveValue::Set(params.subject),
            message: ActiveValue::Set(params.message),
            ip_hash: ActiveValue::Set(params.ip_hash),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ContactMessage::from_entity(entity))
    }

    /// Messages newest first, optionally only unread ones.
    pub async fn get_paginated(
        &self,
        unread_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ContactMessage>, u64), DbErr> {
        let mut query = entity::prelude::ContactMessage::find();

        if unread_only {
            query = query.filter(entity::contact_message::Column::IsRead.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::contact_message::Column::CreatedAt)
            .order_by_desc(entity::contact_message::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(ContactMessage::from_entity).collect(),
            total,
        ))
    }

    pub async fn set_read(&self, id: i32, is_read: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::ContactMessage::update_many()
            .col_expr(entity::contact_message::Column::IsRead, Expr::value(is_read))
            .filter(entity::contact_message::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ContactMessage::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_unread(&self) -> Result<u64, DbErr> {
        entity::prelude::ContactMessage::find()
            .filter(entity::contact_message::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }
}
