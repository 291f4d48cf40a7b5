use math_core::model::Progress;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{ProgressRecord, StorageError, UserRecord};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

/// True when a sqlx error is a primary-key or unique violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

pub(crate) fn encode_progress(progress: &Progress) -> Result<String, StorageError> {
    serde_json::to_string(progress).map_err(ser)
}

pub(crate) fn decode_progress(raw: &str) -> Result<Progress, StorageError> {
    serde_json::from_str(raw).map_err(ser)
}

pub(crate) fn map_user_row(row: &SqliteRow) -> Result<UserRecord, StorageError> {
    Ok(UserRecord {
        username: row.try_get("username").map_err(ser)?,
        password: row.try_get("password").map_err(ser)?,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}

pub(crate) fn map_progress_row(row: &SqliteRow) -> Result<ProgressRecord, StorageError> {
    let data: String = row.try_get("data").map_err(ser)?;
    Ok(ProgressRecord {
        username: row.try_get("username").map_err(ser)?,
        progress: decode_progress(&data)?,
        updated_at: row.try_get("updated_at").map_err(ser)?,
    })
}
