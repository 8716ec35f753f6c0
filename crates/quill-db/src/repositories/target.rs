//! PostgreSQL implementation of TargetLookup

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use quill_core::traits::{RepoResult, TargetLookup};
use quill_core::{Snowflake, TargetKind};

use super::error::map_db_error;

/// Resolves articles and comments against their tables
#[derive(Clone)]
pub struct PgTargetLookup {
    pool: PgPool,
    kind: TargetKind,
    table: &'static str,
}

impl PgTargetLookup {
    pub fn new(pool: PgPool, kind: TargetKind) -> Self {
        let table = match kind {
            TargetKind::Article => "articles",
            TargetKind::Comment => "comments",
        };
        Self { pool, kind, table }
    }
}

#[async_trait]
impl TargetLookup for PgTargetLookup {
    fn kind(&self) -> TargetKind {
        self.kind
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn exists(&self, target_id: Snowflake) -> RepoResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE id = $1)",
            table = self.table
        );

        sqlx::query_scalar::<_, bool>(&sql)
            .bind(target_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    async fn owner(&self, target_id: Snowflake) -> RepoResult<Option<Snowflake>> {
        let sql = format!(
            "SELECT author_id FROM {table} WHERE id = $1",
            table = self.table
        );

        let author = sqlx::query_scalar::<_, i64>(&sql)
            .bind(target_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(author.map(Snowflake::new))
    }
}
