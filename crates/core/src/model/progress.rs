use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::operation::OperationKind;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("star count {0} is above the maximum of {max}", max = Stars::MAX_VALUE)]
    StarsOutOfRange(u8),
}

//
// ─── STARS ────────────────────────────────────────────────────────────────────
//

/// Mastery level for one operation, always within `0..=5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const MAX_VALUE: u8 = 5;
    pub const ZERO: Stars = Stars(0);
    pub const MAX: Stars = Stars(Self::MAX_VALUE);

    /// # Errors
    ///
    /// Returns `ProgressError::StarsOutOfRange` for values above 5.
    pub fn new(value: u8) -> Result<Self, ProgressError> {
        if value > Self::MAX_VALUE {
            return Err(ProgressError::StarsOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Clamps `value` into range instead of failing.
    #[must_use]
    pub fn saturating(value: u8) -> Self {
        Self(value.min(Self::MAX_VALUE))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// One more star, capped at the maximum.
    #[must_use]
    pub fn next(self) -> Self {
        Self::saturating(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 == Self::MAX_VALUE
    }
}

impl TryFrom<u8> for Stars {
    type Error = ProgressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

/// Per-player star counts, one entry per operation.
///
/// Serialized as a JSON object keyed by `OperationKind::key`. Missing keys
/// read back as zero stars so older records stay loadable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    counting: Stars,
    addition: Stars,
    subtraction: Stars,
    multiplication: Stars,
}

impl Progress {
    /// All operations at zero stars.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, kind: OperationKind) -> Stars {
        match kind {
            OperationKind::Counting => self.counting,
            OperationKind::Addition => self.addition,
            OperationKind::Subtraction => self.subtraction,
            OperationKind::Multiplication => self.multiplication,
        }
    }

    fn slot_mut(&mut self, kind: OperationKind) -> &mut Stars {
        match kind {
            OperationKind::Counting => &mut self.counting,
            OperationKind::Addition => &mut self.addition,
            OperationKind::Subtraction => &mut self.subtraction,
            OperationKind::Multiplication => &mut self.multiplication,
        }
    }

    /// Records a new star count, keeping the higher of the old and new value.
    ///
    /// Returns `true` if the stored value changed.
    pub fn record(&mut self, kind: OperationKind, stars: Stars) -> bool {
        let slot = self.slot_mut(kind);
        if stars > *slot {
            *slot = stars;
            true
        } else {
            false
        }
    }

    /// Returns a copy with `stars` recorded for `kind`.
    #[must_use]
    pub fn with_recorded(mut self, kind: OperationKind, stars: Stars) -> Self {
        self.record(kind, stars);
        self
    }

    /// Iterates `(kind, stars)` in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (OperationKind, Stars)> + '_ {
        OperationKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Takes the higher star count per operation from `other`.
    ///
    /// Returns `true` if anything in `self` changed.
    pub fn merge(&mut self, other: &Progress) -> bool {
        other
            .iter()
            .fold(false, |changed, (kind, stars)| self.record(kind, stars) || changed)
    }
}
