mod session;
mod timing;
mod workflow;

// Public API of the game subsystem.
pub use session::{AnswerOutcome, FeedbackResolution, GamePhase, GameSession};
pub use timing::GameTiming;
pub use workflow::{AnswerReport, GameLoopService, SyncStatus};
