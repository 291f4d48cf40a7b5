use std::sync::Arc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use math_core::model::{OperationKind, Progress, Stars, User};
use services::{GameLoopService, SyncStatus};

use crate::speech::{cancel_speech, speak};

/// Session-wide state shared by every screen: who is playing, their stars,
/// whether narration is muted and whether the last save went through.
#[derive(Clone, Copy, PartialEq)]
pub struct Shell {
    pub user: Signal<Option<User>>,
    pub progress: Signal<Progress>,
    pub muted: Signal<bool>,
    pub sync: Signal<SyncStatus>,
    greeted: Signal<bool>,
}

impl Shell {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new(muted: bool) -> Self {
        Self {
            user: Signal::new(None),
            progress: Signal::new(Progress::initial()),
            muted: Signal::new(muted),
            sync: Signal::new(SyncStatus::Synced),
            greeted: Signal::new(false),
        }
    }

    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.user.read().as_ref().map(|user| user.username().to_owned())
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        *self.muted.read()
    }

    pub fn sign_in(&mut self, user: User, progress: Progress) {
        self.user.set(Some(user));
        self.progress.set(progress);
        self.sync.set(SyncStatus::Synced);
        self.greeted.set(false);
    }

    /// True the first time it is called after each sign-in.
    pub fn take_menu_greeting(&mut self) -> bool {
        let first = !*self.greeted.peek();
        self.greeted.set(true);
        first
    }

    pub fn sign_out(&mut self) {
        self.user.set(None);
        self.progress.set(Progress::initial());
        self.sync.set(SyncStatus::Synced);
    }

    /// Merge `stars` into the player's progress and save it in the background.
    ///
    /// The save runs in the root scope, so it finishes even if the screen
    /// that earned the star is gone by then. Returns whether progress changed.
    pub fn record_stars(
        &mut self,
        game_loop: Arc<GameLoopService>,
        kind: OperationKind,
        stars: Stars,
    ) -> bool {
        let mut snapshot = *self.progress.peek();
        if !self.progress.write().record(kind, stars) {
            return false;
        }
        let Some(username) = self.username() else {
            return true;
        };

        let mut sync = self.sync;
        spawn_forever(async move {
            let status = game_loop.record(&username, &mut snapshot, kind, stars).await;
            sync.set(status);
        });
        true
    }

    /// Read `text` aloud unless narration is muted.
    pub fn say(&self, text: &str) {
        if !self.is_muted() {
            speak(text);
        }
    }

    pub fn toggle_mute(&mut self) {
        let muted = !self.is_muted();
        if muted {
            cancel_speech();
        }
        self.muted.set(muted);
    }
}
