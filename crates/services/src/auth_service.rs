use std::sync::Arc;
use std::time::Duration;

use math_core::Clock;
use math_core::model::{Progress, User, normalize_username};
use storage::repository::{
    ProgressRecord, ProgressRepository, StorageError, UserRecord, UserRepository,
};
use tracing::{debug, info};

use crate::error::AuthError;

/// Registers and signs in players.
///
/// There is no session token: a successful call simply hands back the
/// player's public identity for the UI to hold on to.
#[derive(Clone)]
pub struct AuthService {
    clock: Clock,
    users: Arc<dyn UserRepository>,
    progress: Arc<dyn ProgressRepository>,
    latency: Duration,
}

impl AuthService {
    #[must_use]
    pub fn new(
        clock: Clock,
        users: Arc<dyn UserRepository>,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            clock,
            users,
            progress,
            latency: Duration::ZERO,
        }
    }

    /// Adds an artificial delay before every call.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Create a new account with all-zero progress.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmptyUsername` for blank names,
    /// `AuthError::UsernameTaken` if the name exists, or `AuthError::Storage`.
    pub async fn register(&self, username: &str, password: Option<&str>) -> Result<User, AuthError> {
        simulate_latency(self.latency).await;

        let user = User::new(username, password.map(str::to_owned))?;
        let now = self.clock.now();
        match self.users.insert_user(&UserRecord::from_user(&user, now)).await {
            Ok(()) => {}
            Err(StorageError::Conflict) => {
                debug!(username = user.username(), "registration rejected: name taken");
                return Err(AuthError::UsernameTaken);
            }
            Err(err) => return Err(err.into()),
        }

        self.progress
            .save_progress(&ProgressRecord {
                username: user.username().to_owned(),
                progress: Progress::initial(),
                updated_at: now,
            })
            .await?;

        info!(username = user.username(), "player registered");
        Ok(user.public())
    }

    /// Check credentials for an existing account.
    ///
    /// A missing password and an empty password are equivalent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the player is unknown or the
    /// password does not match, `AuthError::EmptyUsername` for blank names.
    pub async fn login(&self, username: &str, password: Option<&str>) -> Result<User, AuthError> {
        simulate_latency(self.latency).await;

        let username = normalize_username(username)?;
        let Some(record) = self.users.get_user(&username).await? else {
            debug!(username = %username, "login rejected: unknown player");
            return Err(AuthError::InvalidCredentials);
        };
        let user = record
            .into_user()
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        if !user.password_matches(password) {
            debug!(username = %username, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        info!(username = %username, "player signed in");
        Ok(user.public())
    }
}

pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
