//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{AdminCommentDto, CommentDto, CreateCommentDto, PaginatedCommentsDto},
    server::util::parse::total_pages,
};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i32,
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub visitor_id: Option<String>,
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    pub ip_hash: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            parent_id: entity.parent_id,
            visitor_id: entity.visitor_id,
            author_name: entity.author_name,
            author_email: entity.author_email,
            content: entity.content,
            ip_hash: entity.ip_hash,
            approved: entity.approved,
            created_at: entity.created_at,
        }
    }

    /// Public view; email and ip hash stay private.
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            post_id: self.post_id,
            parent_id: self.parent_id,
            author_name: self.author_name,
            content: self.content,
            approved: self.approved,
            created_at: self.created_at,
        }
    }

    pub fn into_admin_dto(self) -> AdminCommentDto {
        AdminCommentDto {
            id: self.id,
            post_id: self.post_id,
            parent_id: self.parent_id,
            visitor_id: self.visitor_id,
            author_name: self.author_name,
            author_email: self.author_email,
            content: self.content,
            ip_hash: self.ip_hash,
            approved: self.approved,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedComments {
    pub comments: Vec<Comment>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedComments {
    pub fn into_dto(self) -> PaginatedCommentsDto {
        PaginatedCommentsDto {
            total_pages: total_pages(self.total, self.per_page),
            comments: self
                .comments
                .into_iter()
                .map(Comment::into_admin_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Comment submitted from the public form, not yet sanitized.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub post_id: i32,
    pub parent_id: Option<i32>,
    pub visitor_id: Option<String>,
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    pub ip_hash: String,
}

impl CreateCommentParams {
    pub fn from_dto(dto: CreateCommentDto, ip_hash: String) -> Self {
        Self {
            post_id: dto.post_id,
            parent_id: dto.parent_id,
            visitor_id: dto.visitor_id,
            author_name: dto.author_name,
            author_email: dto.author_email,
            content: dto.content,
            ip_hash,
        }
    }
}
