//! SQLite-backed profile store.
//!
//! Merge is a single upsert: each column is written only when the update
//! carries a value (`COALESCE(?n, column)`), so a partial update never clobbers
//! fields it does not mention.

use crate::profile_store::validate_id;
use crate::{ProfileStore, Result as StoreResult};

use optin_core::{ProfileRecord, ProfileUpdate};

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use sqlx::Row;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file and run migrations.
    pub async fn connect(path: &Path) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
                    .journal_mode(SqliteJournalMode::Wal)
                    .synchronous(SqliteSynchronous::Normal)
                    .busy_timeout(Duration::from_secs(5)),
            )
            .await?;

        Self::migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Private in-memory database, single connection so every query sees it.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::migrate(&pool).await?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(pool: &SqlitePool) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Provision a full record, replacing any existing one.
    pub async fn insert(&self, record: &ProfileRecord) -> StoreResult<()> {
        validate_id(&record.id)?;

        sqlx::query(
            r#"
                INSERT OR REPLACE INTO profiles (id, is_opted_in, email, display_name, username)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(record.is_opted_in)
        .bind(&record.email)
        .bind(&record.display_name)
        .bind(&record.username)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn get(&self, id: &str) -> StoreResult<Option<ProfileRecord>> {
        validate_id(id)?;

        let row = sqlx::query(
            r#"
                SELECT id, is_opted_in, email, display_name, username
                FROM profiles
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            debug!("No profile record for {}", id);
            return Ok(None);
        };

        Ok(Some(ProfileRecord {
            id: row.try_get("id")?,
            is_opted_in: row.try_get("is_opted_in")?,
            email: row.try_get("email")?,
            display_name: row.try_get("display_name")?,
            username: row.try_get("username")?,
        }))
    }

    async fn merge(&self, id: &str, update: &ProfileUpdate) -> StoreResult<()> {
        validate_id(id)?;

        if update.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
                INSERT INTO profiles (id, is_opted_in, email, display_name, username, updated_at)
                VALUES (?1, COALESCE(?2, 0), ?3, ?4, ?5, strftime('%s', 'now'))
                ON CONFLICT(id) DO UPDATE SET
                    is_opted_in = COALESCE(?2, is_opted_in),
                    email = COALESCE(?3, email),
                    display_name = COALESCE(?4, display_name),
                    username = COALESCE(?5, username),
                    updated_at = strftime('%s', 'now')
            "#,
        )
        .bind(id)
        .bind(update.is_opted_in)
        .bind(&update.email)
        .bind(&update.display_name)
        .bind(&update.username)
        .execute(&self.pool)
        .await?;

        debug!("Merged profile update for {}", id);
        Ok(())
    }
}
