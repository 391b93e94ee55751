use crate::foundation::error::{FrameplayError, FrameplayResult};

/// 0-based frame index within an action's frame sequence.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The first frame of every action.
    pub const ZERO: Self = Self(0);

    /// Clamp to `[0, end]` (inclusive).
    pub fn clamp_to(self, end: FrameIndex) -> Self {
        Self(self.0.min(end.0))
    }

    /// Frame index as a `usize` suitable for indexing frame tables.
    pub fn as_usize(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FrameplayResult<Self> {
        if den == 0 {
            return Err(FrameplayError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FrameplayError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert seconds to a (possibly fractional) frame count.
    pub fn secs_to_frames(self, secs: f64) -> f64 {
        (secs * self.as_f64()).max(0.0)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas (both dimensions non-zero).
    pub fn new(width: u32, height: u32) -> FrameplayResult<Self> {
        if width == 0 || height == 0 {
            return Err(FrameplayError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
