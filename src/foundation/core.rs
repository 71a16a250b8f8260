use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::{PleatError, PleatResult};

pub use kurbo::{Point, Vec2};

/// Largest permitted fold target angle, in degrees.
///
/// A 180-degree fold would lay the moving half exactly flat on the static
/// half and is disallowed; sliders and imports cap at this value.
pub const MAX_FOLD_ANGLE: f64 = 179.0;

/// Unique identity of a [`crate::Fold`] within a session.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FoldId(pub u64);

static NEXT_FOLD_ID: AtomicU64 = AtomicU64::new(1);

impl FoldId {
    /// Allocate a fresh, process-unique id.
    pub fn fresh() -> Self {
        Self(NEXT_FOLD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The sheet of paper being folded: a square of `size_px` pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Paper {
    /// Side length in paper-local pixels.
    pub size_px: f64,
}

impl Paper {
    /// Side length used when none is supplied.
    pub const DEFAULT_SIZE_PX: f64 = 300.0;

    /// Build a paper description, rejecting non-positive or non-finite sizes.
    pub fn new(size_px: f64) -> PleatResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PleatError::validation("paper size_px must be finite and > 0"));
        }
        Ok(Self { size_px })
    }
}

impl Default for Paper {
    fn default() -> Self {
        Self {
            size_px: Self::DEFAULT_SIZE_PX,
        }
    }
}
