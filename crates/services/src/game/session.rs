use math_core::generator::{generate_challenge, level_for_stars};
use math_core::model::{Challenge, OperationKind, Stars};
use rand::Rng;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Where a game session is in its answer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// A new challenge is on screen and its prompt has not been narrated yet.
    Presenting,
    /// Waiting for the player to pick an option.
    AwaitingAnswer,
    /// The last pick was right; the next step happens after the feedback delay.
    CorrectFeedback,
    /// The last pick was wrong; the same challenge comes back after the delay.
    IncorrectFeedback,
    /// Five stars reached; the menu should take over.
    Complete,
}

impl GamePhase {
    #[must_use]
    pub fn is_feedback(self) -> bool {
        matches!(self, GamePhase::CorrectFeedback | GamePhase::IncorrectFeedback)
    }
}

/// Result of `GameSession::answer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer; `stars` is the new level to report upward.
    Correct { stars: Stars },
    Incorrect,
    /// Feedback is showing or the session is over; nothing changed.
    Ignored,
}

/// Result of `GameSession::feedback_elapsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackResolution {
    /// A fresh challenge one level up is ready.
    NextChallenge,
    /// Back to the same challenge after a wrong pick.
    Retry,
    /// The operation is mastered; close the game screen.
    SessionComplete,
    /// No feedback was pending.
    NoChange,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through an operation, from the stored star count up to five.
///
/// The session is a pure state machine. Delays, narration and persistence
/// belong to the caller, which drives it with `answer` and
/// `feedback_elapsed`.
#[derive(Debug, Clone)]
pub struct GameSession {
    kind: OperationKind,
    level: Stars,
    challenge: Challenge,
    phase: GamePhase,
    selected: Option<u32>,
}

impl GameSession {
    /// Start at the stored star count with a challenge one level above it.
    pub fn start<R: Rng + ?Sized>(kind: OperationKind, stored: Stars, rng: &mut R) -> Self {
        let challenge = generate_challenge(kind, level_for_stars(stored), rng);
        Self {
            kind,
            level: stored,
            challenge,
            phase: GamePhase::Presenting,
            selected: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Stars earned so far, including those carried in from storage.
    #[must_use]
    pub fn level(&self) -> Stars {
        self.level
    }

    #[must_use]
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Option picked most recently, kept while feedback is showing.
    #[must_use]
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        matches!(self.phase, GamePhase::Presenting | GamePhase::AwaitingAnswer)
    }

    /// Mark the current challenge as shown. Returns `false` outside `Presenting`.
    pub fn challenge_presented(&mut self) -> bool {
        if self.phase != GamePhase::Presenting {
            return false;
        }
        self.phase = GamePhase::AwaitingAnswer;
        true
    }

    /// Grade a picked option.
    pub fn answer(&mut self, value: u32) -> AnswerOutcome {
        if !self.accepts_answers() {
            return AnswerOutcome::Ignored;
        }

        self.selected = Some(value);
        if self.challenge.is_correct(value) {
            self.level = self.level.next();
            self.phase = GamePhase::CorrectFeedback;
            AnswerOutcome::Correct { stars: self.level }
        } else {
            self.phase = GamePhase::IncorrectFeedback;
            AnswerOutcome::Incorrect
        }
    }

    /// Leave the feedback phase once its delay has passed.
    pub fn feedback_elapsed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FeedbackResolution {
        match self.phase {
            GamePhase::CorrectFeedback if self.level.is_max() => {
                self.phase = GamePhase::Complete;
                FeedbackResolution::SessionComplete
            }
            GamePhase::CorrectFeedback => {
                self.challenge = generate_challenge(self.kind, level_for_stars(self.level), rng);
                self.selected = None;
                self.phase = GamePhase::Presenting;
                FeedbackResolution::NextChallenge
            }
            GamePhase::IncorrectFeedback => {
                self.selected = None;
                self.phase = GamePhase::AwaitingAnswer;
                FeedbackResolution::Retry
            }
            GamePhase::Presenting | GamePhase::AwaitingAnswer | GamePhase::Complete => {
                FeedbackResolution::NoChange
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
