//! The JSON pattern exchange format.
//!
//! A pattern file is `{"version": 1, "name": "...", "folds": [...]}` where
//! each fold carries the original wire field names (`type`, `targetAngle`,
//! `position`, `direction`). Import is all-or-nothing: a file whose `folds`
//! field is missing or not an array is rejected without touching the
//! caller's fold list.

use crate::fold::line::FoldKind;
use crate::fold::model::{Fold, FoldDirection};
use crate::foundation::error::{PleatError, PleatResult};

/// Wire format version written by [`export_folds`].
pub const PATTERN_VERSION: u32 = 1;

/// A named, serializable fold sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pattern {
    /// Format version; defaults to [`PATTERN_VERSION`] when absent.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Human-readable pattern name.
    #[serde(default)]
    pub name: String,
    /// Fold steps in application order.
    pub folds: Vec<PatternFold>,
}

/// One fold as stored on the wire.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PatternFold {
    /// Fold line family.
    #[serde(rename = "type")]
    pub kind: FoldKind,
    /// Target angle in degrees.
    #[serde(rename = "targetAngle")]
    pub target_angle: f64,
    /// Fold position percentage; defaults to centered.
    #[serde(default = "default_position")]
    pub position: f64,
    /// Mountain or valley; defaults to mountain.
    #[serde(default)]
    pub direction: FoldDirection,
}

fn default_version() -> u32 {
    PATTERN_VERSION
}

fn default_position() -> f64 {
    Fold::DEFAULT_POSITION
}

impl Pattern {
    /// Capture the visible fold list as a pattern.
    ///
    /// Only the durable fields survive; ids and current angles do not.
    pub fn from_folds(name: &str, folds: &[Fold]) -> Self {
        Self {
            version: PATTERN_VERSION,
            name: name.to_string(),
            folds: folds
                .iter()
                .map(|f| PatternFold {
                    kind: f.kind,
                    target_angle: f.target_angle,
                    position: f.position,
                    direction: f.direction,
                })
                .collect(),
        }
    }

    /// Decode a pattern from JSON.
    pub fn from_json(json: &str) -> PleatResult<Self> {
        serde_json::from_str(json).map_err(|e| PleatError::import(e.to_string()))
    }

    /// Encode this pattern as pretty-printed JSON.
    pub fn to_json(&self) -> PleatResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PleatError::serde(e.to_string()))
    }

    /// Materialize the pattern as folds at rest: fresh ids, current angle
    /// zero, target angles clamped into `0..=179`.
    pub fn instantiate(&self) -> Vec<Fold> {
        self.folds
            .iter()
            .map(|pf| Fold::at_rest(pf.kind, pf.target_angle, pf.position, pf.direction))
            .collect()
    }
}

/// Serialize a fold list as a pattern JSON document.
pub fn export_folds(name: &str, folds: &[Fold]) -> PleatResult<String> {
    Pattern::from_folds(name, folds).to_json()
}

/// Decode a pattern JSON document into folds at rest.
///
/// Fails with [`PleatError::Import`] on malformed JSON or a missing /
/// non-array `folds` field; never applies a partial result.
pub fn import_folds(json: &str) -> PleatResult<Vec<Fold>> {
    Ok(Pattern::from_json(json)?.instantiate())
}

#[cfg(test)]
#[path = "../../tests/unit/fold/pattern.rs"]
mod tests;
