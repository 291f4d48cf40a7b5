use std::time::Duration;

/// Delays the game screen waits between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTiming {
    /// How long right/wrong feedback stays up before the session moves on.
    pub feedback: Duration,
    /// Pause after the final star before returning to the menu.
    pub completion: Duration,
    /// Pause before a new prompt is read aloud.
    pub narration: Duration,
}

impl GameTiming {
    pub const DEFAULT_FEEDBACK_MS: u64 = 1500;
    pub const DEFAULT_COMPLETION_MS: u64 = 2500;
    pub const DEFAULT_NARRATION_MS: u64 = 500;

    /// Same defaults with a different feedback delay.
    #[must_use]
    pub fn with_feedback_ms(mut self, millis: u64) -> Self {
        self.feedback = Duration::from_millis(millis);
        self
    }

    /// All delays zero, for tests.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            feedback: Duration::ZERO,
            completion: Duration::ZERO,
            narration: Duration::ZERO,
        }
    }
}

impl Default for GameTiming {
    fn default() -> Self {
        Self {
            feedback: Duration::from_millis(Self::DEFAULT_FEEDBACK_MS),
            completion: Duration::from_millis(Self::DEFAULT_COMPLETION_MS),
            narration: Duration::from_millis(Self::DEFAULT_NARRATION_MS),
        }
    }
}
