//! Randomized challenge generation.
//!
//! Every generator takes the RNG by reference so callers can use
//! `rand::rng()` in the app and a seeded `StdRng` in tests.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Challenge, Illustration, OPTION_COUNT, OperationKind, Operands, Stars};

/// Highest challenge level.
pub const MAX_LEVEL: u8 = Stars::MAX_VALUE;

/// Largest number of toucans a counting challenge shows.
pub const MAX_COUNT: u32 = 20;

/// Multiplier table indexed by `level - 1`; later levels reuse the last entry.
pub const MULTIPLIERS: [u32; 5] = [2, 3, 4, 5, 10];

const DISTRACTOR_SPREAD: i64 = 2;

const TOUCAN: &str = "🐦";

/// Level to play next for a given star count: one above the stars earned,
/// staying at the top level once an operation is complete.
#[must_use]
pub fn level_for_stars(stars: Stars) -> u8 {
    clamp_level(stars.value().saturating_add(1))
}

fn clamp_level(level: u8) -> u8 {
    level.clamp(1, MAX_LEVEL)
}

/// Generates a challenge of `kind` for `level` (clamped into `1..=5`).
pub fn generate_challenge<R: Rng + ?Sized>(kind: OperationKind, level: u8, rng: &mut R) -> Challenge {
    let level = clamp_level(level);
    match kind {
        OperationKind::Counting => counting(level, rng),
        OperationKind::Addition => addition(level, rng),
        OperationKind::Subtraction => subtraction(level, rng),
        OperationKind::Multiplication => multiplication(level, rng),
    }
}

fn counting<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Challenge {
    let level = u32::from(level);
    let min = (level - 1) * 4 + 1;
    let max = (level * 4).min(MAX_COUNT);
    let answer = rng.random_range(min..=max);
    let prompt = "How many toucans do you see?".to_string();

    Challenge::new(
        OperationKind::Counting,
        level_u8(level),
        prompt.clone(),
        prompt,
        build_options(answer, rng),
        answer,
        None,
        Some(Illustration::Repeat {
            glyph: TOUCAN,
            count: answer,
        }),
    )
}

fn addition<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Challenge {
    let max = u32::from(level) * 2 + 2;
    let left = rng.random_range(1..=max);
    let right = rng.random_range(1..=max);
    arithmetic(OperationKind::Addition, level, left, right, left + right, "+", "plus", rng)
}

fn subtraction<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Challenge {
    // The minuend starts at 2 so the subtrahend range is never empty and
    // the difference stays strictly between 0 and the minuend.
    let level_u32 = u32::from(level);
    let minuend = rng.random_range(level_u32 + 1..=level_u32 * 3 + 3);
    let subtrahend = rng.random_range(1..minuend);
    arithmetic(
        OperationKind::Subtraction,
        level,
        minuend,
        subtrahend,
        minuend - subtrahend,
        "-",
        "minus",
        rng,
    )
}

fn multiplication<R: Rng + ?Sized>(level: u8, rng: &mut R) -> Challenge {
    let index = usize::from(level - 1).min(MULTIPLIERS.len() - 1);
    let mut left = rng.random_range(1..=5);
    let mut right = MULTIPLIERS[index];
    if rng.random_bool(0.5) {
        std::mem::swap(&mut left, &mut right);
    }
    arithmetic(
        OperationKind::Multiplication,
        level,
        left,
        right,
        left * right,
        "×",
        "times",
        rng,
    )
}

#[allow(clippy::too_many_arguments)]
fn arithmetic<R: Rng + ?Sized>(
    kind: OperationKind,
    level: u8,
    left: u32,
    right: u32,
    answer: u32,
    symbol: &str,
    spoken: &str,
    rng: &mut R,
) -> Challenge {
    Challenge::new(
        kind,
        level,
        format!("{left} {symbol} {right} = ?"),
        format!("What is {left} {spoken} {right}?"),
        build_options(answer, rng),
        answer,
        Some(Operands { left, right }),
        None,
    )
}

fn level_u8(level: u32) -> u8 {
    u8::try_from(level).unwrap_or(MAX_LEVEL)
}

/// Builds the shuffled answer set: the answer plus three distinct
/// non-negative distractors near it.
///
/// Distractors are `answer + offset` with `offset` in `-2..=2`. An answer of
/// zero only has two non-negative neighbours in that window, so the window
/// widens by one in that case.
pub fn build_options<R: Rng + ?Sized>(answer: u32, rng: &mut R) -> [u32; OPTION_COUNT] {
    let spread = if answer == 0 {
        DISTRACTOR_SPREAD + 1
    } else {
        DISTRACTOR_SPREAD
    };
    let mut options = [answer; OPTION_COUNT];
    let mut filled = 1;

    while filled < OPTION_COUNT {
        let candidate = i64::from(answer) + rng.random_range(-spread..=spread);
        let Ok(candidate) = u32::try_from(candidate) else {
            continue;
        };
        if candidate != answer && !options[..filled].contains(&candidate) {
            options[filled] = candidate;
            filled += 1;
        }
    }

    options.shuffle(rng);
    options
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
