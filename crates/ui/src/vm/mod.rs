mod auth_vm;
mod game_vm;
mod menu_vm;

pub use auth_vm::AuthMode;
pub use game_vm::{GameScreenVm, OptionButtonVm, PromptVm, map_game_screen, star_row};
pub use menu_vm::{MenuTileVm, map_menu_tiles};
