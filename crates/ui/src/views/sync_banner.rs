use dioxus::prelude::*;
use services::SyncStatus;

use crate::context::AppContext;
use crate::shell::Shell;

/// Retry action for a failed save.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct Resync {
    pub retrying: Signal<bool>,
    pub retry: Callback<()>,
}

pub(crate) fn use_resync() -> Resync {
    let ctx = use_context::<AppContext>();
    let mut shell = use_context::<Shell>();
    let mut retrying = use_signal(|| false);

    let retry = use_callback(move |()| {
        if *retrying.peek() {
            return;
        }
        let Some(username) = shell.username() else {
            return;
        };
        let progress = *shell.progress.peek();
        let game_loop = ctx.game_loop();
        retrying.set(true);
        spawn(async move {
            let status = game_loop.resync(&username, &progress).await;
            shell.sync.set(status);
            retrying.set(false);
        });
    });

    Resync { retrying, retry }
}

/// Shown while the latest stars exist only in memory.
#[component]
pub fn SyncBanner() -> Element {
    let shell = use_context::<Shell>();
    let Resync { retrying, retry } = use_resync();

    if *shell.sync.read() == SyncStatus::Synced {
        return rsx! {};
    }

    rsx! {
        div { class: "sync-warning", role: "status",
            span { "Your newest stars are not saved yet." }
            button {
                class: "sync-retry",
                disabled: *retrying.read(),
                onclick: move |_| retry.call(()),
                "Try again"
            }
        }
    }
}
