use async_trait::async_trait;
use chrono::{DateTime, Utc};
use math_core::model::{Progress, User, UserError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a player account.
///
/// The password column is never null; an empty string means "no password".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    #[must_use]
    pub fn from_user(user: &User, created_at: DateTime<Utc>) -> Self {
        Self {
            username: user.username().to_owned(),
            password: user.password().unwrap_or_default().to_owned(),
            created_at,
        }
    }

    /// Convert the record back into a domain `User`.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if the stored name is blank.
    pub fn into_user(self) -> Result<User, UserError> {
        User::new(self.username, Some(self.password))
    }
}

/// Persisted progress for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub username: String,
    pub progress: Progress,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new account.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the username is already taken.
    async fn insert_user(&self, user: &UserRecord) -> Result<(), StorageError>;

    /// Fetch an account by username.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backend failures; a missing user is `Ok(None)`.
    async fn get_user(&self, username: &str) -> Result<Option<UserRecord>, StorageError>;
}

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch stored progress for a player.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` for backend or decoding failures; no record is `Ok(None)`.
    async fn get_progress(&self, username: &str) -> Result<Option<ProgressRecord>, StorageError>;

    /// Replace the stored progress for a player.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<Mutex<HashMap<String, UserRecord>>>,
    progress: Arc<Mutex<HashMap<String, ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            progress: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn insert_user(&self, user: &UserRecord) -> Result<(), StorageError> {
        let mut guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard.contains_key(&user.username) {
            return Err(StorageError::Conflict);
        }
        guard.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, username: &str) -> Result<Option<UserRecord>, StorageError> {
        let guard = self
            .users
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(username).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn get_progress(&self, username: &str) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(username).cloned())
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(record.username.clone(), record.clone());
        Ok(())
    }
}

/// Aggregates user and progress repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub users: Arc<dyn UserRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let users: Arc<dyn UserRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { users, progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use math_core::model::{OperationKind, Stars};
    use math_core::time::fixed_now;

    fn record(name: &str) -> UserRecord {
        let user = User::new(name, None).unwrap();
        UserRecord::from_user(&user, fixed_now())
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let repo = InMemoryRepository::new();
        repo.insert_user(&record("Ana")).await.unwrap();
        let err = repo.insert_user(&record("Ana")).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict));
    }

    #[tokio::test]
    async fn missing_user_is_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn progress_save_replaces_previous_record() {
        let repo = InMemoryRepository::new();
        let first = ProgressRecord {
            username: "Ana".into(),
            progress: Progress::initial(),
            updated_at: fixed_now(),
        };
        repo.save_progress(&first).await.unwrap();

        let second = ProgressRecord {
            progress: Progress::initial().with_recorded(OperationKind::Addition, Stars::saturating(2)),
            ..first.clone()
        };
        repo.save_progress(&second).await.unwrap();

        let fetched = repo.get_progress("Ana").await.unwrap().unwrap();
        assert_eq!(fetched.progress.get(OperationKind::Addition).value(), 2);
    }

    #[test]
    fn user_record_round_trips_blank_password() {
        let user = User::new("Ana", None).unwrap();
        let rec = UserRecord::from_user(&user, fixed_now());
        assert_eq!(rec.password, "");
        assert_eq!(rec.into_user().unwrap(), user);
    }
}
