/// Easing curves used by playback and glide animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity curve.
    Linear,
    /// Cubic ease-out; shapes [`crate::FoldSession::animate_to`] glides.
    OutCubic,
    /// Cubic ease-in-out; shapes per-fold playback interpolation.
    InOutCubic,
}

impl Ease {
    /// Apply the curve to `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
