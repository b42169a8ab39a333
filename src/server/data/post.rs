use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::collections::BTreeMap;

use crate::server::model::post::{CategoryCount, Post, PostFilter, PostRecord};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a post from fully resolved column values.
    pub async fn create(&self, record: PostRecord) -> Result<Post, DbErr> {
        let now = Utc::now();

        let entity = entity::post::ActiveModel {
            slug: ActiveValue::Set(record.slug),
            title: ActiveValue::Set(record.title),
            excerpt: ActiveValue::Set(record.excerpt),
            content: ActiveValue::Set(record.content),
            cover_image: ActiveValue::Set(record.cover_image),
            category: ActiveValue::Set(record.category),
            tags: ActiveValue::Set(record.tags),
            published: ActiveValue::Set(record.published),
            featured: ActiveValue::Set(record.featured),
            view_count: ActiveValue::Set(0),
            reading_time: ActiveValue::Set(record.reading_time),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            published_at: ActiveValue::Set(record.published_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    /// Overwrites every editable column of an existing post.
    ///
    /// # Returns
    /// - `Ok(Some(Post))` - Updated post
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, record: PostRecord) -> Result<Option<Post>, DbErr> {
        let Some(existing) = entity::prelude::Post::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::post::ActiveModel = existing.into();
        active.slug = ActiveValue::Set(record.slug);
        active.title = ActiveValue::Set(record.title);
        active.excerpt = ActiveValue::Set(record.excerpt);
        active.content = ActiveValue::Set(record.content);
        active.cover_image = ActiveValue::Set(record.cover_image);
        active.category = ActiveValue::Set(record.category);
        active.tags = ActiveValue::Set(record.tags);
        active.published = ActiveValue::Set(record.published);
        active.featured = ActiveValue::Set(record.featured);
        active.reading_time = ActiveValue::Set(record.reading_time);
        active.published_at = ActiveValue::Set(record.published_at);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Post::from_entity(entity)))
    }

    /// Deletes a post; comments, reactions and polls cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Post deleted
    /// - `Ok(false)` - No post with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Finds a published post by slug. Drafts are never returned.
    pub async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find()
            .filter(entity::post::Column::Slug.eq(slug))
            .filter(entity::post::Column::Published.eq(true))
            .one(self.db)
            .await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Checks whether a slug is used by any post other than `exclude_id`.
    pub async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Post::find().filter(entity::post::Column::Slug.eq(slug));

        if let Some(id) = exclude_id {
            query = query.filter(entity::post::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets published posts, newest first, with optional filters.
    ///
    /// # Arguments
    /// - `filter` - Category, tag and search text filters
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of posts per page
    ///
    /// # Returns
    /// - `Ok((posts, total))` - Posts for the page and total matching posts
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_published_paginated(
        &self,
        filter: &PostFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Post>, u64), DbErr> {
        let paginator = Self::published()
            .filter(Self::filter_condition(filter))
            .order_by_desc(entity::post::Column::PublishedAt)
            .order_by_desc(entity::post::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Post::from_entity).collect(), total))
    }

    /// Gets every post including drafts for the back-office, newest first.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Post>, u64), DbErr> {
        let paginator = entity::prelude::Post::find()
            .order_by_desc(entity::post::Column::CreatedAt)
            .order_by_desc(entity::post::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Post::from_entity).collect(), total))
    }

    pub async fn get_featured(&self, limit: u64) -> Result<Vec<Post>, DbErr> {
        let entities = Self::published()
            .filter(entity::post::Column::Featured.eq(true))
            .order_by_desc(entity::post::Column::PublishedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Published posts in the same category, excluding the post itself.
    pub async fn get_related(&self, post: &Post, limit: u64) -> Result<Vec<Post>, DbErr> {
        let entities = Self::published()
            .filter(entity::post::Column::Category.eq(post.category.as_str()))
            .filter(entity::post::Column::Id.ne(post.id))
            .order_by_desc(entity::post::Column::PublishedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Post::from_entity).collect())
    }

    /// Published post count per category, ordered by category name.
    pub async fn get_category_counts(&self) -> Result<Vec<CategoryCount>, DbErr> {
        let categories: Vec<String> = Self::published()
            .select_only()
            .column(entity::post::Column::Category)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for category in categories {
            *counts.entry(category).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect())
    }

    pub async fn increment_views(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::update_many()
            .col_expr(
                entity::post::Column::ViewCount,
                Expr::col(entity::post::Column::ViewCount).add(1),
            )
            .filter(entity::post::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts posts by published state.
    pub async fn count_by_published(&self, published: bool) -> Result<u64, DbErr> {
        entity::prelude::Post::find()
            .filter(entity::post::Column::Published.eq(published))
            .count(self.db)
            .await
    }

    pub async fn total_views(&self) -> Result<i64, DbErr> {
        let views: Vec<i32> = entity::prelude::Post::find()
            .select_only()
            .column(entity::post::Column::ViewCount)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(views.into_iter().map(i64::from).sum())
    }

    fn published() -> Select<entity::post::Entity> {
        entity::prelude::Post::find().filter(entity::post::Column::Published.eq(true))
    }

    fn filter_condition(filter: &PostFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(category) = &filter.category {
            condition = condition.add(entity::post::Column::Category.eq(category.as_str()));
        }

        // Tags are stored comma separated, so match the tag as a whole list element.
        if let Some(tag) = &filter.tag {
            condition = condition.add(
                Condition::any()
                    .add(entity::post::Column::Tags.eq(tag.as_str()))
                    .add(entity::post::Column::Tags.starts_with(format!("{},", tag)))
                    .add(entity::post::Column::Tags.ends_with(format!(",{}", tag)))
                    .add(entity::post::Column::Tags.contains(format!(",{},", tag))),
            );
        }

        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::post::Column::Title.contains(search.as_str()))
                    .add(entity::post::Column::Excerpt.contains(search.as_str())),
            );
        }

        condition
    }
}
