use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use math_core::model::OperationKind;
use math_core::narration::{
    LEVEL_UP_LINE, correct_answer, game_finished, incorrect_answer, operation_complete,
};
use services::{AnswerOutcome, FeedbackResolution, GamePhase, GameSession};
use tokio::time::sleep;

use crate::context::AppContext;
use crate::routes::Route;
use crate::shell::Shell;
use crate::speech::cancel_speech;
use crate::views::sync_banner::SyncBanner;
use crate::vm::{PromptVm, map_game_screen};

/// State and actions behind one game screen.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct GameController {
    pub session: Signal<GameSession>,
    /// Grade a picked option.
    pub answer: Callback<u32>,
    /// Leave for the menu.
    pub close: Callback<()>,
}

pub(crate) fn use_game_controller(operation: OperationKind) -> GameController {
    let ctx = use_context::<AppContext>();
    let mut shell = use_context::<Shell>();
    let navigator = use_navigator();
    let game_loop = ctx.game_loop();
    let timing = ctx.timing();

    let mut session = use_signal(|| game_loop.start(operation, &shell.progress.peek()));
    // Bumped for every new challenge so a late narration timer cannot read
    // out a prompt that is no longer on screen.
    let mut round = use_signal(|| 0_u32);

    use_effect(move || {
        if !shell.is_signed_in() {
            navigator.replace(Route::Auth {});
        }
    });

    let present = use_callback(move |()| {
        let current = *round.peek() + 1;
        round.set(current);
        spawn(async move {
            sleep(timing.narration).await;
            if *round.peek() != current || session.peek().phase() != GamePhase::Presenting {
                return;
            }
            let spoken = session.peek().challenge().spoken_prompt().to_owned();
            shell.say(&spoken);
            session.write().challenge_presented();
        });
    });

    use_effect(move || present.call(()));

    let close = use_callback(move |()| {
        cancel_speech();
        if let Some(username) = shell.username() {
            shell.say(&game_finished(&username));
        }
        navigator.replace(Route::Menu {});
    });

    let answer = use_callback(move |value: u32| {
        let outcome = game_loop.grade(&mut session.write(), value);
        let mut rng = rand::rng();
        match outcome {
            AnswerOutcome::Ignored => return,
            AnswerOutcome::Incorrect => shell.say(incorrect_answer(&mut rng)),
            AnswerOutcome::Correct { stars } => {
                shell.say(correct_answer(&mut rng));
                shell.record_stars(Arc::clone(&game_loop), operation, stars);
            }
        }

        let game_loop = Arc::clone(&game_loop);
        spawn(async move {
            sleep(timing.feedback).await;
            let resolution = game_loop.feedback_elapsed(&mut session.write());
            match resolution {
                FeedbackResolution::NextChallenge => {
                    shell.say(LEVEL_UP_LINE);
                    present.call(());
                }
                FeedbackResolution::SessionComplete => {
                    shell.say(&operation_complete(operation));
                    sleep(timing.completion).await;
                    close.call(());
                }
                FeedbackResolution::Retry | FeedbackResolution::NoChange => {}
            }
        });
    });

    GameController {
        session,
        answer,
        close,
    }
}

#[component]
pub fn GameView(operation: OperationKind) -> Element {
    let game = use_game_controller(operation);
    rsx! {
        GameBoard { operation, game }
    }
}

#[component]
pub(crate) fn GameBoard(operation: OperationKind, game: GameController) -> Element {
    let vm = map_game_screen(&game.session.read());
    let prompt = match vm.prompt {
        PromptVm::Text(text) => rsx! {
            p { class: "prompt", "{text}" }
        },
        PromptVm::Picture {
            caption,
            glyph,
            count,
        } => rsx! {
            p { class: "prompt-caption", "{caption}" }
            div { class: "picture",
                for index in 0..count {
                    span { key: "{index}", class: "picture-item", "{glyph}" }
                }
            }
        },
    };

    rsx! {
        div { class: "game {operation.css_class()}",
            button {
                class: "game-close",
                aria_label: "Close challenge",
                onclick: move |_| game.close.call(()),
                "×"
            }
            div { class: "game-header",
                h2 { class: "game-title", "{vm.glyph} {vm.title}" }
                div { class: "stars",
                    for (index, filled) in vm.stars.into_iter().enumerate() {
                        span {
                            key: "{index}",
                            class: if filled { "star star--filled" } else { "star" },
                            "★"
                        }
                    }
                }
            }
            SyncBanner {}
            div { class: "game-board", {prompt} }
            if let Some(text) = vm.feedback {
                p { class: "feedback", "{text}" }
            }
            div { class: "answers",
                for option in vm.options {
                    button {
                        key: "{option.value}",
                        class: "{option.class}",
                        disabled: option.disabled,
                        onclick: move |_| game.answer.call(option.value),
                        "{option.label}"
                    }
                }
            }
        }
    }
}
