use std::sync::Arc;
use std::time::Duration;

use math_core::Clock;
use math_core::model::{OperationKind, Progress, Stars};
use storage::repository::{ProgressRecord, ProgressRepository};
use tokio::sync::Mutex;
use tracing::debug;

use crate::auth_service::simulate_latency;
use crate::error::ProgressServiceError;

/// Loads and stores per-player star progress.
///
/// Saves are merged into the stored record one at a time, so a stale
/// snapshot that lands late never lowers a star count.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
    latency: Duration,
    save_lock: Arc<Mutex<()>>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>) -> Self {
        Self {
            clock,
            progress,
            latency: Duration::ZERO,
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fetch a player's progress, creating the all-zero record if none exists.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if loading or initializing fails.
    pub async fn get_progress(&self, username: &str) -> Result<Progress, ProgressServiceError> {
        simulate_latency(self.latency).await;

        if let Some(record) = self.progress.get_progress(username).await? {
            return Ok(record.progress);
        }

        debug!(username, "no stored progress, initializing");
        let progress = Progress::initial();
        self.store(username, progress).await?;
        Ok(progress)
    }

    /// Save `progress`, keeping any higher star counts already stored.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the read or the write fails.
    pub async fn save_progress(
        &self,
        username: &str,
        progress: &Progress,
    ) -> Result<(), ProgressServiceError> {
        let _guard = self.save_lock.lock().await;
        simulate_latency(self.latency).await;

        let mut merged = *progress;
        if let Some(stored) = self.progress.get_progress(username).await? {
            if merged.merge(&stored.progress) {
                debug!(username, "stored progress was ahead, merged");
            }
        }
        self.store(username, merged).await
    }

    /// Merge a new star count into `progress` and persist it if it went up.
    ///
    /// `progress` is updated in place before the write, so callers keep the
    /// merged value even when saving fails. Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the write fails.
    pub async fn record_stars(
        &self,
        username: &str,
        progress: &mut Progress,
        kind: OperationKind,
        stars: Stars,
    ) -> Result<bool, ProgressServiceError> {
        if !progress.record(kind, stars) {
            return Ok(false);
        }
        self.save_progress(username, progress).await?;
        Ok(true)
    }

    async fn store(&self, username: &str, progress: Progress) -> Result<(), ProgressServiceError> {
        self.progress
            .save_progress(&ProgressRecord {
                username: username.to_owned(),
                progress,
                updated_at: self.clock.now(),
            })
            .await?;
        Ok(())
    }
}
