#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod error;
pub mod game;
pub mod progress_service;

pub use math_core::Clock;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use error::{AuthError, ProgressServiceError};
pub use game::{
    AnswerOutcome, AnswerReport, FeedbackResolution, GameLoopService, GamePhase, GameSession,
    GameTiming, SyncStatus,
};
pub use progress_service::ProgressService;
