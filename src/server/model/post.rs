//! Post domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::post::{
        CategoryCountDto, CreatePostDto, PaginatedPostsDto, PostDetailDto, PostSummaryDto,
        UpdatePostDto,
    },
    server::util::{
        markdown::render_html,
        parse::{split_tags, total_pages},
    },
};

/// A blog post with tags already split into a list.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown source.
    pub content: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub featured: bool,
    pub view_count: i32,
    pub reading_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            excerpt: entity.excerpt,
            content: entity.content,
            cover_image: entity.cover_image,
            category: entity.category,
            tags: split_tags(&entity.tags),
            published: entity.published,
            featured: entity.featured,
            view_count: entity.view_count,
            reading_time: entity.reading_time,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            published_at: entity.published_at,
        }
    }

    /// Converts to the listing DTO, omitting the body.
    pub fn into_summary_dto(self) -> PostSummaryDto {
        PostSummaryDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            category: self.category,
            tags: self.tags,
            featured: self.featured,
            view_count: self.view_count,
            reading_time: self.reading_time,
            published_at: self.published_at,
        }
    }

    /// Converts to the detail DTO, rendering the markdown body to HTML.
    pub fn into_detail_dto(self) -> PostDetailDto {
        let content_html = render_html(&self.content);

        PostDetailDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            content_html,
            cover_image: self.cover_image,
            category: self.category,
            tags: self.tags,
            published: self.published,
            featured: self.featured,
            view_count: self.view_count,
            reading_time: self.reading_time,
            created_at: self.created_at,
            updated_at: self.updated_at,
            published_at: self.published_at,
        }
    }
}

/// One page of posts with pagination metadata.
#[derive(Debug, Clone)]
pub struct PaginatedPosts {
    pub posts: Vec<Post>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl PaginatedPosts {
    pub fn into_dto(self) -> PaginatedPostsDto {
        PaginatedPostsDto {
            total_pages: total_pages(self.total, self.per_page),
            posts: self.posts.into_iter().map(Post::into_summary_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Filters for the public post listing. All filters combine with AND.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category: Option<String>,
    pub tag: Option<String>,
    /// Substring matched against title and excerpt.
    pub search: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

impl CategoryCount {
    pub fn into_dto(self) -> CategoryCountDto {
        CategoryCountDto {
            category: self.category,
            count: self.count,
        }
    }
}

/// Admin input for a new post before slug, excerpt and reading time are derived.
#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub published: bool,
    pub featured: bool,
}

impl CreatePostParams {
    pub fn from_dto(dto: CreatePostDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            slug: dto.slug,
            excerpt: dto.excerpt.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()),
            content: dto.content,
            cover_image: dto.cover_image.filter(|c| !c.trim().is_empty()),
            category: dto.category.trim().to_string(),
            tags: dto.tags,
            published: dto.published,
            featured: dto.featured,
        }
    }
}

/// Admin partial update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostParams {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            slug: dto.slug,
            excerpt: dto.excerpt.map(|e| e.trim().to_string()),
            content: dto.content,
            cover_image: dto.cover_image,
            category: dto.category.map(|c| c.trim().to_string()),
            tags: dto.tags,
            published: dto.published,
            featured: dto.featured,
        }
    }
}

/// Fully resolved column values written by the repository.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: Option<String>,
    pub category: String,
    pub tags: String,
    pub published: bool,
    pub featured: bool,
    pub reading_time: i32,
    pub published_at: Option<DateTime<Utc>>,
}
