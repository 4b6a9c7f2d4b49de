use crate::{
    animation::ease::Ease,
    foundation::{
        core::{Mode, check_size},
        error::{MarkError, MarkResult},
    },
};

/// Tunables for the pattern and outline generators.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MarkDefaults {
    /// Prepended to every user seed before it reaches a generator.
    pub seed_prefix: String,
    /// Triangulation point jitter.
    pub variance: f64,
    /// Triangulation cell size as a fraction of the canvas edge.
    pub cell_size_ratio: f64,
    /// Outline anchors beyond the minimum of three.
    pub extra_points: u32,
    /// Outline radial noise.
    pub randomness: f64,
}

impl Default for MarkDefaults {
    fn default() -> Self {
        Self {
            seed_prefix: "ideaman's ".to_owned(),
            variance: 1.5,
            cell_size_ratio: 0.2,
            extra_points: 8,
            randomness: 4.0,
        }
    }
}

impl MarkDefaults {
    /// Smallest accepted `cell_size_ratio`.
    pub const MIN_CELL_SIZE_RATIO: f64 = 0.01;

    pub fn validate(&self) -> MarkResult<()> {
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(MarkError::validation("variance must be finite and >= 0"));
        }
        if !self.cell_size_ratio.is_finite()
            || self.cell_size_ratio < Self::MIN_CELL_SIZE_RATIO
        {
            return Err(MarkError::validation(
                "cell_size_ratio must be finite and >= 0.01",
            ));
        }
        if !self.randomness.is_finite() || self.randomness < 0.0 {
            return Err(MarkError::validation("randomness must be finite and >= 0"));
        }
        Ok(())
    }

    /// Seed as seen by the generators.
    pub fn salted(&self, seed: &str) -> String {
        format!("{}{seed}", self.seed_prefix)
    }
}

/// Host-facing animation options. Absent fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationOptions {
    /// Initial seed; a random one is drawn when unset.
    pub seed: Option<String>,
    /// Square canvas edge in pixels.
    pub size: f64,
    pub mode: Mode,
    /// Length of one morph cycle.
    pub duration_ms: f64,
    /// Period of the timer that starts the next cycle.
    pub interval_ms: f64,
    pub ease: Ease,
    pub mark: MarkDefaults,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            seed: None,
            size: 400.0,
            mode: Mode::Morph,
            duration_ms: 2000.0,
            interval_ms: 4000.0,
            ease: Ease::InOutSine,
            mark: MarkDefaults::default(),
        }
    }
}

impl AnimationOptions {
    /// Parse options from JSON and validate them.
    pub fn from_json_str(s: &str) -> MarkResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Square edge for a `width` x `height` host box.
    pub fn for_box(width: f64, height: f64) -> Self {
        Self {
            size: width.min(height),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> MarkResult<()> {
        check_size(self.size)?;
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(MarkError::validation("duration_ms must be finite and > 0"));
        }
        if !self.interval_ms.is_finite() || self.interval_ms <= 0.0 {
            return Err(MarkError::validation("interval_ms must be finite and > 0"));
        }
        if self.seed.as_deref().is_some_and(str::is_empty) {
            return Err(MarkError::validation("seed must be non-empty when set"));
        }
        self.mark.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
