//! Blog post service: public reading and back-office management.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::post::PostRepository,
    error::AppError,
    model::post::{
        CategoryCount, CreatePostParams, PaginatedPosts, Post, PostFilter, PostRecord,
        UpdatePostParams,
    },
    util::{
        markdown::{default_excerpt, reading_time},
        parse::join_tags,
        slug::{slugify, with_suffix},
    },
};

/// Posts returned by the featured listing.
const FEATURED_LIMIT: u64 = 5;

/// Posts returned as related reading.
const RELATED_LIMIT: u64 = 3;

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_published(
        &self,
        filter: PostFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPosts, AppError> {
        let (posts, total) = PostRepository::new(self.db)
            .get_published_paginated(&filter, page, per_page)
            .await?;

        Ok(PaginatedPosts {
            posts,
            total,
            page,
            per_page,
        })
    }

    pub async fn featured(&self) -> Result<Vec<Post>, AppError> {
        Ok(PostRepository::new(self.db)
            .get_featured(FEATURED_LIMIT)
            .await?)
    }

    pub async fn categories(&self) -> Result<Vec<CategoryCount>, AppError> {
        Ok(PostRepository::new(self.db).get_category_counts().await?)
    }

    /// Gets a published post by slug and counts the view.
    ///
    /// # Returns
    /// - `Ok(Post)` - Post with the view already included in `view_count`
    /// - `Err(AppError::NotFound)` - No published post with that slug
    pub async fn view_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);

        let mut post = repo
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy bài viết".to_string()))?;

        repo.increment_views(post.id).await?;
        post.view_count += 1;

        Ok(post)
    }

    /// Up to three published posts from the same category.
    pub async fn related(&self, slug: &str) -> Result<Vec<Post>, AppError> {
        let repo = PostRepository::new(self.db);

        let post = repo
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy bài viết".to_string()))?;

        Ok(repo.get_related(&post, RELATED_LIMIT).await?)
    }

    /// Every post including drafts, newest first.
    pub async fn list_all(&self, page: u64, per_page: u64) -> Result<PaginatedPosts, AppError> {
        let (posts, total) = PostRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedPosts {
            posts,
            total,
            page,
            per_page,
        })
    }

    pub async fn get(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy bài viết".to_string()))
    }

    /// Creates a post, deriving slug, excerpt and reading time.
    ///
    /// A slug generated from the title is made unique with `-2`, `-3`, ... suffixes.
    ///
    /// # Returns
    /// - `Ok(Post)` - Created post
    /// - `Err(AppError::Conflict)` - An explicitly requested slug is already taken
    pub async fn create(&self, params: CreatePostParams) -> Result<Post, AppError> {
        let slug = self.resolve_slug(params.slug.as_deref(), &params.title, None).await?;
        let excerpt = params
            .excerpt
            .unwrap_or_else(|| default_excerpt(&params.content));

        let post = PostRepository::new(self.db)
            .create(PostRecord {
                slug,
                title: params.title,
                excerpt,
                reading_time: reading_time(&params.content),
                content: params.content,
                cover_image: params.cover_image,
                category: params.category,
                tags: join_tags(&params.tags),
                published: params.published,
                featured: params.featured,
                published_at: params.published.then(Utc::now),
            })
            .await?;

        tracing::info!("Created post {} ({})", post.slug, post.id);

        Ok(post)
    }

    /// Applies a partial update.
    ///
    /// The slug only changes when a new one is given. Publishing a draft stamps
    /// `published_at`; unpublishing clears it.
    pub async fn update(&self, id: i32, params: UpdatePostParams) -> Result<Post, AppError> {
        let repo = PostRepository::new(self.db);
        let existing = self.get(id).await?;

        let slug = match params.slug.as_deref() {
            Some(slug) if slug != existing.slug => {
                self.resolve_slug(Some(slug), &existing.title, Some(id)).await?
            }
            _ => existing.slug.clone(),
        };

        let content = params.content.unwrap_or(existing.content);
        let excerpt = match params.excerpt {
            Some(excerpt) if excerpt.is_empty() => default_excerpt(&content),
            Some(excerpt) => excerpt,
            None => existing.excerpt,
        };
        let published = params.published.unwrap_or(existing.published);
        let published_at = match (published, existing.published_at) {
            (false, _) => None,
            (true, Some(at)) => Some(at),
            (true, None) => Some(Utc::now()),
        };

        let record = PostRecord {
            slug,
            title: params.title.unwrap_or(existing.title),
            excerpt,
            reading_time: reading_time(&content),
            content,
            cover_image: match params.cover_image {
                Some(cover) if cover.trim().is_empty() => None,
                Some(cover) => Some(cover),
                None => existing.cover_image,
            },
            category: params.category.unwrap_or(existing.category),
            tags: join_tags(&params.tags.unwrap_or(existing.tags)),
            published,
            featured: params.featured.unwrap_or(existing.featured),
            published_at,
        };

        repo.update(id, record)
            .await?
            .ok_or_else(|| AppError::NotFound("Không tìm thấy bài viết".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !PostRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Không tìm thấy bài viết".to_string()));
        }

        tracing::info!("Deleted post {}", id);

        Ok(())
    }

    async fn resolve_slug(
        &self,
        requested: Option<&str>,
        title: &str,
        exclude_id: Option<i32>,
    ) -> Result<String, AppError> {
        let repo = PostRepository::new(self.db);

        if let Some(slug) = requested {
            if repo.slug_exists(slug, exclude_id).await? {
                return Err(AppError::Conflict("Slug đã được sử dụng".to_string()));
            }
            return Ok(slug.to_string());
        }

        let base = slugify(title);
        let mut attempt = 1;
        loop {
            let candidate = with_suffix(&base, attempt);
            if !repo.slug_exists(&candidate, exclude_id).await? {
                return Ok(candidate);
            }
            attempt += 1;
        }
    }
}
