use math_core::model::{OperationKind, Progress};

use super::game_vm::star_row;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuTileVm {
    pub kind: OperationKind,
    pub label: &'static str,
    pub glyph: &'static str,
    pub symbol: &'static str,
    pub mascot: &'static str,
    pub class: String,
    pub stars: [bool; 5],
    pub stars_label: String,
}

/// One tile per operation, in menu order.
#[must_use]
pub fn map_menu_tiles(progress: &Progress) -> Vec<MenuTileVm> {
    progress
        .iter()
        .map(|(kind, stars)| MenuTileVm {
            kind,
            label: kind.label(),
            glyph: kind.glyph(),
            symbol: kind.symbol(),
            mascot: kind.mascot(),
            class: format!("menu-tile {}", kind.css_class()),
            stars: star_row(stars.value()),
            stars_label: format!("{} of 5 stars", stars.value()),
        })
        .collect()
}
