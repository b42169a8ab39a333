//! Comment service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParams, PaginatedComments},
        gamification::Activity,
    },
    service::gamification::activity::ActivityService,
    util::sanitize::{sanitize_opt, sanitize_required},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approved comments of a published post, oldest first.
    pub async fn list_for_post(&self, post_id: i32) -> Result<Vec<Comment>, AppError> {
        self.require_published_post(post_id).await?;

        Ok(CommentRepository::new(self.db)
            .get_approved_by_post(post_id)
            .await?)
    }

    /// Stores a visitor comment.
    ///
    /// Text fields are sanitized before storage. A reply's parent must belong to the
    /// same post. When a visitor id is attached the comment activity is credited;
    /// failures there are logged and don't affect the comment.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Stored comment, pending when approval is required
    /// - `Err(AppError::NotFound)` - Post missing or unpublished
    /// - `Err(AppError::BadRequest)` - Parent comment missing or on another post
    pub async fn create(
        &self,
        params: CreateCommentParams,
        require_approval: bool,
    ) -> Result<Comment, AppError> {
        self.require_published_post(params.post_id).await?;

        let repo = CommentRepository::new(self.db);

        if let Some(parent_id) = params.parent_id {
            match repo.find_by_id(parent_id).await? {
                Some(parent) if parent.post_id == params.post_id => {}
                _ => {
                    return Err(AppError::BadRequest(
                        "Bình luận gốc không thuộc bài viết này".to_string(),
                    ))
                }
            }
        }

        let params = CreateCommentParams {
            author_name: sanitize_required(&params.author_name, "Tên không được để trống")?,
            author_email: sanitize_opt(params.author_email.as_deref()).map(|e| e.to_lowercase()),
            content: sanitize_required(&params.content, "Bình luận không được để trống")?,
            visitor_id: params
                .visitor_id
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            ..params
        };

        let comment = repo.create(params, !require_approval).await?;

        ActivityService::new(self.db)
            .record_after(comment.visitor_id.as_deref(), Activity::Comment)
            .await;

        Ok(comment)
    }

    pub async fn list_admin(
        &self,
        pending_only: bool,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedComments, AppError> {
        let (comments, total) = CommentRepository::new(self.db)
            .get_paginated(pending_only, page, per_page)
            .await?;

        Ok(PaginatedComments {
            comments,
            total,
            page,
            per_page,
        })
    }

    pub async fn set_approved(&self, id: i32, approved: bool) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .set_approved(id, approved)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy bình luận".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Không tìm thấy bình luận".to_string()));
        }

        Ok(())
    }

    async fn require_published_post(&self, post_id: i32) -> Result<(), AppError> {
        match PostRepository::new(self.db).find_by_id(post_id).await? {
            Some(post) if post.published => Ok(()),
            _ => Err(AppError::NotFound("Không tìm thấy bài viết".to_string())),
        }
    }
}
