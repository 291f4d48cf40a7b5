mod auth;
mod game;
mod menu;
mod state;
mod sync_banner;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use auth::AuthView;
pub use game::GameView;
pub use menu::MenuView;
pub use state::ViewError;
pub use sync_banner::SyncBanner;
