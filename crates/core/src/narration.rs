//! Phrases the game speaks aloud.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::OperationKind;

pub static CORRECT_ANSWER_LINES: [&str; 6] = [
    "Excellent!",
    "Very good!",
    "That's right!",
    "You did it!",
    "Amazing!",
    "Keep it up!",
];

pub static INCORRECT_ANSWER_LINES: [&str; 4] = [
    "Oops, try again.",
    "Almost there, try one more time.",
    "Not this time. You can do it!",
    "Try again.",
];

pub const LEVEL_UP_LINE: &str = "Wow, you reached the next level!";

pub const GOODBYE_LINE: &str = "See you next time!";

fn pick<R: Rng + ?Sized>(lines: &'static [&'static str], rng: &mut R) -> &'static str {
    lines.choose(rng).copied().unwrap_or_default()
}

#[must_use]
pub fn correct_answer<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(&CORRECT_ANSWER_LINES, rng)
}

#[must_use]
pub fn incorrect_answer<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(&INCORRECT_ANSWER_LINES, rng)
}

#[must_use]
pub fn operation_complete(kind: OperationKind) -> String {
    format!(
        "Wow! You finished every {} challenge! Congratulations!",
        kind.label().to_lowercase()
    )
}

#[must_use]
pub fn welcome_back(username: &str) -> String {
    format!("Welcome back, {username}!")
}

#[must_use]
pub fn welcome_new(username: &str) -> String {
    format!("Hi, {username}! Let's start the adventure!")
}

#[must_use]
pub fn menu_greeting(username: &str) -> String {
    format!("Hello, {username}! Welcome back to Math Adventure! Pick a challenge to begin!")
}

#[must_use]
pub fn game_finished(username: &str) -> String {
    format!("Great job, {username}! Keep exploring the challenges.")
}
