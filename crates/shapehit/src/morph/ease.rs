use serde::{Deserialize, Serialize};

/// Named timing curve handed to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    #[serde(rename = "linear")]
    Linear,
    /// Quadratic ease-out: decelerates toward the end.
    #[default]
    #[serde(rename = "power2.out")]
    Power2Out,
}

impl Ease {
    /// Progress at normalized time `t` (clamped to [0, 1]).
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2Out => "power2.out",
        }
    }
}

/// Duration and curve of one shape transition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: 1.0,
            ease: Ease::Power2Out,
        }
    }
}
