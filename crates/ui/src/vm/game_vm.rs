use math_core::model::{Illustration, Stars};
use services::{GamePhase, GameSession};

/// Filled/empty flags for the five-star row.
#[must_use]
pub fn star_row(filled: u8) -> [bool; 5] {
    let mut row = [false; Stars::MAX_VALUE as usize];
    for (index, star) in row.iter_mut().enumerate() {
        *star = index < usize::from(filled);
    }
    row
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptVm {
    Text(String),
    Picture {
        caption: String,
        glyph: &'static str,
        count: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionButtonVm {
    pub value: u32,
    pub label: String,
    pub class: String,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameScreenVm {
    pub title: &'static str,
    pub glyph: &'static str,
    pub stars: [bool; 5],
    pub prompt: PromptVm,
    pub options: Vec<OptionButtonVm>,
    pub feedback: Option<&'static str>,
}

#[must_use]
pub fn map_game_screen(session: &GameSession) -> GameScreenVm {
    let kind = session.kind();
    let challenge = session.challenge();
    let phase = session.phase();
    let locked = !session.accepts_answers();

    let prompt = match challenge.illustration() {
        Some(Illustration::Repeat { glyph, count }) => PromptVm::Picture {
            caption: challenge.prompt().to_owned(),
            glyph,
            count,
        },
        None => PromptVm::Text(challenge.prompt().to_owned()),
    };

    let options = challenge
        .options()
        .iter()
        .map(|&value| {
            let mut class = format!("answer {}", kind.css_class());
            if phase.is_feedback() && session.selected() == Some(value) {
                class.push_str(match phase {
                    GamePhase::CorrectFeedback => " answer--correct",
                    _ => " answer--wrong",
                });
            }
            OptionButtonVm {
                value,
                label: value.to_string(),
                class,
                disabled: locked,
            }
        })
        .collect();

    let feedback = match phase {
        GamePhase::CorrectFeedback => Some("Correct!"),
        GamePhase::IncorrectFeedback => Some("Try again!"),
        GamePhase::Complete => Some("All five stars!"),
        GamePhase::Presenting | GamePhase::AwaitingAnswer => None,
    };

    GameScreenVm {
        title: kind.label(),
        glyph: kind.glyph(),
        stars: star_row(session.level().value()),
        prompt,
        options,
        feedback,
    }
}
