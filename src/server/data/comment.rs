use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParams};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment. Callers sanitize the text beforehand.
    pub async fn create(
        &self,
        params: CreateCommentParams,
        approved: bool,
    ) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            parent_id: ActiveValue::Set(params.parent_id),
            visitor_id: ActiveValue::Set(params.visitor_id),
            author_name: ActiveValue::Set(params.author_name),
            author_email: ActiveValue::Set(params.author_email),
            content: ActiveValue::Set(params.content),
            ip_hash: ActiveValue::Set(params.ip_hash),
            approved: ActiveValue::Set(approved),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Approved comments on a post, oldest first.
    pub async fn get_approved_by_post(&self, post_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.eq(post_id))
            .filter(entity::comment::Column::Approved.eq(true))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Moderation listing, newest first.
    ///
    /// # Arguments
    /// - `pending_only` - Only return comments awaiting approval
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of comments per page
    pub async fn get_paginated(
        &self,
        pending_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        let mut query = entity::prelude::Comment::find();

        if pending_only {
            query = query.filter(entity::comment::Column::Approved.eq(false));
        }

        let paginator = query
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Comment::from_entity).collect(), total))
    }

    pub async fn set_approved(&self, id: i32, approved: bool) -> Result<Option<Comment>, DbErr> {
        let Some(existing) = entity::prelude::Comment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::comment::ActiveModel = existing.into();
        active.approved = ActiveValue::Set(approved);
        let entity = active.update(self.db).await?;

        Ok(Some(Comment::from_entity(entity)))
    }

    /// Deletes a comment; replies cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self, pending_only: bool) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Comment::find();

        if pending_only {
            query = query.filter(entity::comment::Column::Approved.eq(false));
        }

        query.count(self.db).await
    }
}
