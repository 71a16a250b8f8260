use crate::fold::line::FoldKind;
use crate::foundation::core::{FoldId, MAX_FOLD_ANGLE};
use crate::foundation::error::{PleatError, PleatResult};

/// Which way the moving side of a fold rotates.
///
/// Mountain folds rotate toward the viewer (positive angle), valley folds
/// away (negative angle). Unknown wire tags decode as mountain, matching
/// the original's behavior of treating anything but `"valley"` as mountain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FoldDirection {
    /// Toward the viewer; positive rotation.
    #[default]
    Mountain,
    /// Away from the viewer; negative rotation.
    Valley,
}

impl FoldDirection {
    /// Stable wire/display tag.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Mountain => "mountain",
            Self::Valley => "valley",
        }
    }

    /// Decode a wire tag; anything but `"valley"` is mountain.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "valley" {
            Self::Valley
        } else {
            Self::Mountain
        }
    }
}

impl serde::Serialize for FoldDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> serde::Deserialize<'de> for FoldDirection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// One crease operation in a fold sequence.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fold {
    /// Session-unique identity.
    pub id: FoldId,
    /// Fold line family.
    pub kind: FoldKind,
    /// Angle the fold reaches when fully applied, `0..=179` degrees.
    pub target_angle: f64,
    /// Interpolated display angle, `0..=target_angle` during playback.
    pub current_angle: f64,
    /// Fold line position percentage, `0..=100` (50 = centered).
    pub position: f64,
    /// Mountain or valley.
    pub direction: FoldDirection,
}

impl Fold {
    /// Target angle assigned to newly added folds.
    pub const DEFAULT_TARGET_ANGLE: f64 = 135.0;
    /// Position assigned to newly added folds.
    pub const DEFAULT_POSITION: f64 = 50.0;

    /// A fresh fold with default angle, centered position, mountain
    /// direction, and its current angle already at the target (the config
    /// view shows new folds fully applied).
    pub fn new(kind: FoldKind) -> Self {
        Self {
            id: FoldId::fresh(),
            kind,
            target_angle: Self::DEFAULT_TARGET_ANGLE,
            current_angle: Self::DEFAULT_TARGET_ANGLE,
            position: Self::DEFAULT_POSITION,
            direction: FoldDirection::Mountain,
        }
    }

    /// A fresh fold at rest: current angle zero, target and position
    /// sanitized into range. Used by preset instantiation and import.
    pub fn at_rest(
        kind: FoldKind,
        target_angle: f64,
        position: f64,
        direction: FoldDirection,
    ) -> Self {
        let target_angle = if target_angle.is_finite() {
            target_angle.clamp(0.0, MAX_FOLD_ANGLE)
        } else {
            Self::DEFAULT_TARGET_ANGLE
        };
        let position = if position.is_finite() {
            position.clamp(0.0, 100.0)
        } else {
            Self::DEFAULT_POSITION
        };
        Self {
            id: FoldId::fresh(),
            kind,
            target_angle,
            current_angle: 0.0,
            position,
            direction,
        }
    }

    /// The signed rotation actually applied: valley folds negate the
    /// current angle's magnitude.
    pub fn effective_angle(&self) -> f64 {
        let angle = self.current_angle.abs();
        match self.direction {
            FoldDirection::Valley => -angle,
            FoldDirection::Mountain => angle,
        }
    }

    /// Validate angle and position ranges.
    pub fn validate(&self) -> PleatResult<()> {
        if !self.target_angle.is_finite()
            || self.target_angle < 0.0
            || self.target_angle > MAX_FOLD_ANGLE
        {
            return Err(PleatError::validation(format!(
                "fold target_angle must be within 0..={MAX_FOLD_ANGLE}"
            )));
        }
        if !self.current_angle.is_finite() {
            return Err(PleatError::validation("fold current_angle must be finite"));
        }
        if !self.position.is_finite() || self.position < 0.0 || self.position > 100.0 {
            return Err(PleatError::validation(
                "fold position must be within 0..=100",
            ));
        }
        Ok(())
    }
}

/// The two-fold starter sequence shown on a fresh session.
pub fn default_folds() -> Vec<Fold> {
    vec![
        Fold::at_rest(FoldKind::Diag1, 135.0, 50.0, FoldDirection::Mountain),
        Fold::at_rest(FoldKind::Horizontal, 170.0, 50.0, FoldDirection::Mountain),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/fold/model.rs"]
mod tests;
