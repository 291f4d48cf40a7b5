use std::sync::Arc;
use std::time::Duration;

use storage::repository::Storage;

use crate::Clock;
use crate::auth_service::AuthService;
use crate::game::GameLoopService;
use crate::progress_service::ProgressService;

/// Assembles the app-facing services over one `Storage`.
#[derive(Clone)]
pub struct AppServices {
    auth: Arc<AuthService>,
    progress: Arc<ProgressService>,
    game_loop: Arc<GameLoopService>,
}

impl AppServices {
    /// Build services over any storage backend.
    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        Self::from_storage_with_latency(storage, clock, Duration::ZERO)
    }

    /// Same as `from_storage`, with every service call delayed by `latency`.
    #[must_use]
    pub fn from_storage_with_latency(storage: &Storage, clock: Clock, latency: Duration) -> Self {
        let auth = Arc::new(
            AuthService::new(
                clock,
                Arc::clone(&storage.users),
                Arc::clone(&storage.progress),
            )
            .with_latency(latency),
        );
        let progress = Arc::new(
            ProgressService::new(clock, Arc::clone(&storage.progress)).with_latency(latency),
        );
        let game_loop = Arc::new(GameLoopService::new(Arc::clone(&progress)));

        Self {
            auth,
            progress,
            game_loop,
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}
