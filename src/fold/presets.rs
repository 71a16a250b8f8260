//! Built-in fold sequence catalog.
//!
//! Static data only; nothing here is computed. Preset target angles follow
//! the classic instructions (several fold fully flat at 180), so
//! instantiation clamps them into the engine's `0..=179` range.

use crate::fold::line::FoldKind;
use crate::fold::model::{Fold, FoldDirection};
use crate::fold::pattern::PatternFold;

/// A named entry in the built-in catalog.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    /// Stable lookup key.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Fold steps in application order.
    pub folds: &'static [PatternFold],
}

impl Preset {
    /// Materialize the preset as folds at rest (fresh ids, current angle 0).
    pub fn instantiate(&self) -> Vec<Fold> {
        self.folds
            .iter()
            .map(|pf| Fold::at_rest(pf.kind, pf.target_angle, pf.position, pf.direction))
            .collect()
    }
}

const fn step(
    kind: FoldKind,
    target_angle: f64,
    position: f64,
    direction: FoldDirection,
) -> PatternFold {
    PatternFold {
        kind,
        target_angle,
        position,
        direction,
    }
}

/// The full catalog, in display order.
pub const PRESETS: &[Preset] = &[
    Preset {
        key: "blank",
        name: "Blank Paper",
        description: "Start with a fresh sheet",
        folds: &[],
    },
    Preset {
        key: "simple-fold",
        name: "Simple Half Fold",
        description: "Basic fold in half",
        folds: &[step(
            FoldKind::Horizontal,
            180.0,
            50.0,
            FoldDirection::Mountain,
        )],
    },
    Preset {
        key: "triangle",
        name: "Triangle",
        description: "Fold corner to corner",
        folds: &[step(FoldKind::Diag1, 180.0, 50.0, FoldDirection::Mountain)],
    },
    Preset {
        key: "paper-airplane-simple",
        name: "Simple Paper Airplane",
        description: "Classic dart airplane",
        folds: &[
            step(FoldKind::Vertical, 180.0, 50.0, FoldDirection::Valley),
            step(FoldKind::Diag1, 160.0, 25.0, FoldDirection::Mountain),
            step(FoldKind::Diag2, 160.0, 75.0, FoldDirection::Mountain),
        ],
    },
    Preset {
        key: "fortune-teller",
        name: "Fortune Teller Base",
        description: "Corners to center",
        folds: &[
            step(FoldKind::Diag1, 180.0, 50.0, FoldDirection::Valley),
            step(FoldKind::Diag2, 180.0, 50.0, FoldDirection::Valley),
        ],
    },
    Preset {
        key: "waterbomb-base",
        name: "Waterbomb Base",
        description: "Classic origami base",
        folds: &[
            step(FoldKind::Horizontal, 180.0, 50.0, FoldDirection::Valley),
            step(FoldKind::Vertical, 180.0, 50.0, FoldDirection::Valley),
            step(FoldKind::Diag1, 180.0, 50.0, FoldDirection::Mountain),
            step(FoldKind::Diag2, 180.0, 50.0, FoldDirection::Mountain),
        ],
    },
];

/// Lookup keys for every preset, in display order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.key).collect()
}

/// Find a preset by key.
pub fn preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}

#[cfg(test)]
#[path = "../../tests/unit/fold/presets.rs"]
mod tests;
