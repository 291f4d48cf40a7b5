use dioxus::prelude::*;
use dioxus_router::use_navigator;
use math_core::narration::menu_greeting;

use crate::routes::Route;
use crate::shell::Shell;
use crate::speech::cancel_speech;
use crate::views::sync_banner::SyncBanner;
use crate::vm::map_menu_tiles;

#[component]
pub fn MenuView() -> Element {
    let mut shell = use_context::<Shell>();
    let navigator = use_navigator();

    use_effect(move || {
        if !shell.is_signed_in() {
            navigator.replace(Route::Auth {});
        }
    });

    use_effect(move || {
        if let Some(username) = shell.username() {
            if shell.take_menu_greeting() {
                shell.say(&menu_greeting(&username));
            }
        }
    });

    let username = shell.username().unwrap_or_default();
    let tiles = map_menu_tiles(&shell.progress.read());

    rsx! {
        div { class: "menu",
            h1 { class: "menu-title", "Math" }
            h2 { class: "menu-subtitle", "Adventure" }
            p { class: "menu-player", "Player: {username}" }
            SyncBanner {}
            div { class: "menu-grid",
                for tile in tiles {
                    button {
                        key: "{tile.kind}",
                        class: "{tile.class}",
                        aria_label: "{tile.label}",
                        onclick: move |_| {
                            cancel_speech();
                            navigator.push(Route::Game { operation: tile.kind });
                        },
                        span { class: "menu-symbol", "{tile.symbol}" }
                        span { class: "menu-glyph", title: "{tile.mascot}", "{tile.glyph}" }
                        h3 { class: "menu-label", "{tile.label}" }
                        div { class: "stars", aria_label: "{tile.stars_label}",
                            for (index, filled) in tile.stars.into_iter().enumerate() {
                                span {
                                    key: "{index}",
                                    class: if filled { "star star--filled" } else { "star" },
                                    "★"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
