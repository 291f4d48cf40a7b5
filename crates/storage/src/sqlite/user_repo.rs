use async_trait::async_trait;

use super::SqliteRepository;
use super::mapping::{conn, is_unique_violation, map_user_row};
use crate::repository::{StorageError, UserRecord, UserRepository};

#[async_trait]
impl UserRepository for SqliteRepository {
    async fn insert_user(&self, user: &UserRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO users (username, password, created_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                StorageError::Conflict
            } else {
                conn(err)
            }
        })?;

        Ok(())
    }

    async fn get_user(&self, username: &str) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT username, password, created_at
            FROM users
            WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?;

        row.as_ref().map(map_user_row).transpose()
    }
}
