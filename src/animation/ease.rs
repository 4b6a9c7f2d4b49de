/// Easing curve applied to linear morph progress before rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    Linear,
    /// Half-cosine ease, `-(cos(pi * t) - 1) / 2`.
    #[default]
    InOutSine,
    /// Piecewise quadratic ease.
    InOutQuad,
    /// Piecewise cubic ease.
    InOutCubic,
}

impl Ease {
    /// Map linear progress to eased progress; input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutSine => ease_in_out_sine(t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
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

/// The standard half-cosine ease used for all rendered interpolation.
pub fn ease_in_out_sine(t: f64) -> f64 {
    -((std::f64::consts::PI * t).cos() - 1.0) / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
