use std::sync::Arc;

use math_core::model::{OperationKind, Progress, Stars};
use tracing::{debug, error, warn};

use super::session::{AnswerOutcome, FeedbackResolution, GameSession};
use crate::progress_service::ProgressService;

/// Whether the latest progress change reached storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    #[default]
    Synced,
    /// The last save failed; the in-memory progress is ahead of storage.
    Failed,
}

/// Result of answering through `GameLoopService`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerReport {
    pub outcome: AnswerOutcome,
    /// Set when the answer triggered a save attempt.
    pub sync: Option<SyncStatus>,
}

/// Connects game sessions to progress storage.
///
/// Save failures never reach the session: they are logged and reported as
/// `SyncStatus::Failed` so the screen can show that progress is unsaved.
#[derive(Clone)]
pub struct GameLoopService {
    progress: Arc<ProgressService>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(progress: Arc<ProgressService>) -> Self {
        Self { progress }
    }

    /// Load a player's progress, falling back to all-zero on failure.
    pub async fn load_progress(&self, username: &str) -> Progress {
        match self.progress.get_progress(username).await {
            Ok(progress) => progress,
            Err(err) => {
                warn!(username, error = %err, "failed to load progress, using defaults");
                Progress::initial()
            }
        }
    }

    /// Start a session for `kind` at the player's current star count.
    #[must_use]
    pub fn start(&self, kind: OperationKind, progress: &Progress) -> GameSession {
        let session = GameSession::start(kind, progress.get(kind), &mut rand::rng());
        debug!(
            operation = %kind,
            level = session.challenge().level(),
            prompt = session.challenge().prompt(),
            "session started"
        );
        session
    }

    /// Grade an answer and persist any star increase into `progress`.
    pub async fn answer(
        &self,
        session: &mut GameSession,
        username: &str,
        progress: &mut Progress,
        value: u32,
    ) -> AnswerReport {
        let outcome = self.grade(session, value);
        let AnswerOutcome::Correct { stars } = outcome else {
            return AnswerReport {
                outcome,
                sync: None,
            };
        };

        let sync = self.record(username, progress, session.kind(), stars).await;
        AnswerReport {
            outcome,
            sync: Some(sync),
        }
    }

    /// Grade an answer without touching storage.
    ///
    /// Screens call this first so feedback shows at once, then hand a
    /// `Correct` outcome to `record`.
    pub fn grade(&self, session: &mut GameSession, value: u32) -> AnswerOutcome {
        let outcome = session.answer(value);
        debug!(operation = %session.kind(), value, ?outcome, "answer graded");
        outcome
    }

    /// Merge `stars` into `progress` and save it if it went up.
    pub async fn record(
        &self,
        username: &str,
        progress: &mut Progress,
        kind: OperationKind,
        stars: Stars,
    ) -> SyncStatus {
        match self.progress.record_stars(username, progress, kind, stars).await {
            Ok(_) => SyncStatus::Synced,
            Err(err) => {
                error!(username, operation = %kind, error = %err, "failed to save progress");
                SyncStatus::Failed
            }
        }
    }

    /// Retry saving progress after an earlier failure.
    pub async fn resync(&self, username: &str, progress: &Progress) -> SyncStatus {
        match self.progress.save_progress(username, progress).await {
            Ok(()) => SyncStatus::Synced,
            Err(err) => {
                error!(username, error = %err, "progress retry failed");
                SyncStatus::Failed
            }
        }
    }

    /// Advance the session once the feedback delay has passed.
    pub fn feedback_elapsed(&self, session: &mut GameSession) -> FeedbackResolution {
        let resolution = session.feedback_elapsed(&mut rand::rng());
        if resolution == FeedbackResolution::NextChallenge {
            debug!(
                operation = %session.kind(),
                level = session.challenge().level(),
                prompt = session.challenge().prompt(),
                "next challenge"
            );
        }
        resolution
    }
}
