use async_trait::async_trait;

use super::SqliteRepository;
use super::mapping::{conn, encode_progress, map_progress_row};
use crate::repository::{ProgressRecord, ProgressRepository, StorageError};

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn get_progress(&self, username: &str) -> Result<Option<ProgressRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT username, data, updated_at
            FROM progress
            WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        row.as_ref().map(map_progress_row).transpose()
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let data = encode_progress(&record.progress)?;

        sqlx::query(
            r"
            INSERT INTO progress (username, data, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(username) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            ",
        )
        .bind(&record.username)
        .bind(data)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }
}
