use std::sync::Arc;

use services::{AuthService, GameLoopService, GameTiming};

/// Launch-time settings the screens read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub muted_on_launch: bool,
    pub timing: GameTiming,
}

pub trait UiApp: Send + Sync {
    fn config(&self) -> AppConfig;

    fn auth(&self) -> Arc<AuthService>;
    fn game_loop(&self) -> Arc<GameLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    config: AppConfig,

    auth: Arc<AuthService>,
    game_loop: Arc<GameLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            config: app.config(),
            auth: app.auth(),
            game_loop: app.game_loop(),
        }
    }

    #[must_use]
    pub fn config(&self) -> AppConfig {
        self.config
    }

    #[must_use]
    pub fn timing(&self) -> GameTiming {
        self.config.timing
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
