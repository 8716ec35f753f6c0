//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use quill_core::traits::{ReactionRepository, RepoResult};
use quill_core::{DomainError, Reaction, ReactionValue, Snowflake, TargetKind};

use crate::models::{ReactionModel, TargetLikesModel};

use super::error::{map_db_error, map_unique_violation};

/// Table and key column holding reactions for a target kind
fn table_for(kind: TargetKind) -> (&'static str, &'static str) {
    match kind {
        TargetKind::Article => ("article_reactions", "article_id"),
        TargetKind::Comment => ("comment_reactions", "comment_id"),
    }
}

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
    kind: TargetKind,
    table: &'static str,
    key: &'static str,
}

impl PgReactionRepository {
    /// Create a repository over the reaction table for `kind`
    pub fn new(pool: PgPool, kind: TargetKind) -> Self {
        let (table, key) = table_for(kind);
        Self {
            pool,
            kind,
            table,
            key,
        }
    }

    fn returning(&self) -> String {
        format!(
            "{key} AS target_id, user_id, value, created_at, updated_at",
            key = self.key
        )
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn find(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<Option<Reaction>> {
        let sql = format!(
            r#"
            SELECT {columns}
            FROM {table}
            WHERE {key} = $1 AND user_id = $2
            "#,
            columns = self.returning(),
            table = self.table,
            key = self.key,
        );

        let result = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(target_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        result.map(Reaction::try_from).transpose()
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn exists(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE {key} = $1 AND user_id = $2)",
            table = self.table,
            key = self.key,
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(target_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn put(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        value: ReactionValue,
    ) -> RepoResult<Reaction> {
        let sql = format!(
            r#"
            INSERT INTO {table} ({key}, user_id, value)
            VALUES ($1, $2, $3)
            ON CONFLICT ({key}, user_id)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            RETURNING {columns}
            "#,
            table = self.table,
            key = self.key,
            columns = self.returning(),
        );

        let model = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(target_id.into_inner())
            .bind(user_id.into_inner())
            .bind(value.as_i16())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Reaction::try_from(model)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn delete(&self, user_id: Snowflake, target_id: Snowflake) -> RepoResult<bool> {
        let sql = format!(
            "DELETE FROM {table} WHERE {key} = $1 AND user_id = $2",
            table = self.table,
            key = self.key,
        );

        let result = sqlx::query(&sql)
            .bind(target_id.into_inner())
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, reaction), fields(kind = %self.kind, user_id = %reaction.user_id, target_id = %reaction.target_id))]
    async fn insert(&self, reaction: &Reaction) -> RepoResult<()> {
        let sql = format!(
            r#"
            INSERT INTO {table} ({key}, user_id, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
            table = self.table,
            key = self.key,
        );

        sqlx::query(&sql)
            .bind(reaction.target_id.into_inner())
            .bind(reaction.user_id.into_inner())
            .bind(reaction.value.as_i16())
            .bind(reaction.created_at)
            .bind(reaction.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::WriteConflict))?;

        Ok(())
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn compare_and_set(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        expected: ReactionValue,
        value: ReactionValue,
    ) -> RepoResult<bool> {
        let sql = format!(
            r#"
            UPDATE {table}
            SET value = $4, updated_at = NOW()
            WHERE {key} = $1 AND user_id = $2 AND value = $3
            "#,
            table = self.table,
            key = self.key,
        );

        let result = sqlx::query(&sql)
            .bind(target_id.into_inner())
            .bind(user_id.into_inner())
            .bind(expected.as_i16())
            .bind(value.as_i16())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn compare_and_delete(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        expected: ReactionValue,
    ) -> RepoResult<bool> {
        let sql = format!(
            "DELETE FROM {table} WHERE {key} = $1 AND user_id = $2 AND value = $3",
            table = self.table,
            key = self.key,
        );

        let result = sqlx::query(&sql)
            .bind(target_id.into_inner())
            .bind(user_id.into_inner())
            .bind(expected.as_i16())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn count_by_target(&self, target_id: Snowflake, value: ReactionValue) -> RepoResult<i64> {
        let sql = format!(
            "SELECT COUNT(*) FROM {table} WHERE {key} = $1 AND value = $2",
            table = self.table,
            key = self.key,
        );

        sqlx::query_scalar::<_, i64>(&sql)
            .bind(target_id.into_inner())
            .bind(value.as_i16())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn top_by_likes(&self, limit: i64) -> RepoResult<Vec<(Snowflake, i64)>> {
        let sql = format!(
            r#"
            SELECT {key} AS target_id, COUNT(*) AS likes
            FROM {table}
            WHERE value = 1
            GROUP BY {key}
            ORDER BY likes DESC, {key} ASC
            LIMIT $1
            "#,
            table = self.table,
            key = self.key,
        );

        let results = sqlx::query_as::<_, TargetLikesModel>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|r| (Snowflake::new(r.target_id), r.likes))
            .collect())
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn delete_by_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let sql = format!("DELETE FROM {table} WHERE user_id = $1", table = self.table);

        let result = sqlx::query(&sql)
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
