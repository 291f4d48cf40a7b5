use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ─── OPERATION KIND ───────────────────────────────────────────────────────────
//

/// The four kinds of practice a player can pick from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Counting,
    Addition,
    Subtraction,
    Multiplication,
}

impl OperationKind {
    /// Every operation, in menu order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Counting,
        OperationKind::Addition,
        OperationKind::Subtraction,
        OperationKind::Multiplication,
    ];

    /// Stable key used in routes and persisted progress.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            OperationKind::Counting => "counting",
            OperationKind::Addition => "addition",
            OperationKind::Subtraction => "subtraction",
            OperationKind::Multiplication => "multiplication",
        }
    }

    /// Human-readable title shown on menu tiles and the game header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Counting => "Counting",
            OperationKind::Addition => "Addition",
            OperationKind::Subtraction => "Subtraction",
            OperationKind::Multiplication => "Multiplication",
        }
    }

    /// Math symbol badge for the menu tile.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            OperationKind::Counting => "123",
            OperationKind::Addition => "+",
            OperationKind::Subtraction => "−",
            OperationKind::Multiplication => "×",
        }
    }

    /// Mascot animal for the tile.
    #[must_use]
    pub fn mascot(self) -> &'static str {
        match self {
            OperationKind::Counting => "toucan",
            OperationKind::Addition => "lion",
            OperationKind::Subtraction => "monkey",
            OperationKind::Multiplication => "elephant",
        }
    }

    /// Glyph rendered in place of mascot artwork.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            OperationKind::Counting => "🐦",
            OperationKind::Addition => "🦁",
            OperationKind::Subtraction => "🐒",
            OperationKind::Multiplication => "🐘",
        }
    }

    /// CSS modifier used for tile and answer-button colours.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            OperationKind::Counting => "op-counting",
            OperationKind::Addition => "op-addition",
            OperationKind::Subtraction => "op-subtraction",
            OperationKind::Multiplication => "op-multiplication",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a string does not name an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOperationError {
    raw: String,
}

impl fmt::Display for ParseOperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: {}", self.raw)
    }
}

impl std::error::Error for ParseOperationError {}

impl FromStr for OperationKind {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOperationError { raw: s.to_string() })
    }
}
