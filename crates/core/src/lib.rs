#![forbid(unsafe_code)]

pub mod generator;
pub mod model;
pub mod narration;
pub mod time;

pub use generator::{generate_challenge, level_for_stars};
pub use time::Clock;
