use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, TryInsertResult,
};
use std::collections::BTreeMap;

pub struct ReactionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the reaction of one identity of one type on a post.
    pub async fn find(
        &self,
        post_id: i32,
        ip_hash: &str,
        reaction_type: &str,
    ) -> Result<Option<entity::reaction::Model>, DbErr> {
        entity::prelude::Reaction::find()
            .filter(entity::reaction::Column::PostId.eq(post_id))
            .filter(entity::reaction::Column::IpHash.eq(ip_hash))
            .filter(entity::reaction::Column::ReactionType.eq(reaction_type))
            .one(self.db)
            .await
    }

    /// Adds a reaction unless the identity already has this type on the post.
    ///
    /// # Returns
    /// - `Ok(true)` - Reaction stored
    /// - `Ok(false)` - Already present, nothing changed
    pub async fn create(
        &self,
        post_id: i32,
        ip_hash: &str,
        reaction_type: &str,
    ) -> Result<bool, DbErr> {
        let reaction = entity::reaction::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            ip_hash: ActiveValue::Set(ip_hash.to_string()),
            reaction_type: ActiveValue::Set(reaction_type.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        let inserted = entity::prelude::Reaction::insert(reaction)
            .on_conflict(
                OnConflict::columns([
                    entity::reaction::Column::PostId,
                    entity::reaction::Column::IpHash,
                    entity::reaction::Column::ReactionType,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec_without_returning(self.db)
            .await?;

        Ok(matches!(inserted, TryInsertResult::Inserted(rows) if rows > 0))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reaction::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Reaction counts per type for a post, ordered by type.
    pub async fn count_by_type(&self, post_id: i32) -> Result<Vec<(String, u64)>, DbErr> {
        let types: Vec<String> = entity::prelude::Reaction::find()
            .select_only()
            .column(entity::reaction::Column::ReactionType)
            .filter(entity::reaction::Column::PostId.eq(post_id))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for reaction_type in types {
            *counts.entry(reaction_type).or_default() += 1;
        }

        Ok(counts.into_iter().collect())
    }

    /// Reaction types an identity currently has on a post.
    pub async fn get_types_for_identity(
        &self,
        post_id: i32,
        ip_hash: &str,
    ) -> Result<Vec<String>, DbErr> {
        let mut types: Vec<String> = entity::prelude::Reaction::find()
            .select_only()
            .column(entity::reaction::Column::ReactionType)
            .filter(entity::reaction::Column::PostId.eq(post_id))
            .filter(entity::reaction::Column::IpHash.eq(ip_hash))
            .into_tuple()
            .all(self.db)
            .await?;
        types.sort();

        Ok(types)
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Reaction::find().count(self.db).await
    }
}
