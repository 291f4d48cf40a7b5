use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator};
use math_core::model::OperationKind;
use math_core::narration::GOODBYE_LINE;
use tracing::info;

use crate::shell::Shell;
use crate::views::{AuthView, GameView, MenuView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", AuthView)] Auth {},
        #[route("/menu", MenuView)] Menu {},
        #[route("/game/:operation", GameView)] Game { operation: OperationKind },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Toolbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Say goodbye, forget the player and go back to the sign-in screen.
pub(crate) fn use_sign_out() -> Callback<()> {
    let mut shell = use_context::<Shell>();
    let navigator = use_navigator();

    use_callback(move |()| {
        if let Some(username) = shell.username() {
            info!(username = %username, "player signed out");
        }
        shell.say(GOODBYE_LINE);
        shell.sign_out();
        navigator.replace(Route::Auth {});
    })
}

#[component]
fn Toolbar() -> Element {
    let mut shell = use_context::<Shell>();
    let sign_out = use_sign_out();
    let muted = shell.is_muted();

    rsx! {
        div { class: "toolbar",
            if shell.is_signed_in() {
                button {
                    class: "toolbar-button",
                    id: "logout",
                    aria_label: "Sign out",
                    onclick: move |_| sign_out.call(()),
                    "⎋"
                }
            }
            button {
                class: "toolbar-button",
                id: "mute",
                aria_label: if muted { "Turn sound on" } else { "Turn sound off" },
                onclick: move |_| shell.toggle_mute(),
                if muted { "🔇" } else { "🔊" }
            }
        }
    }
}
