//! Per-frame rotation of the globe group.

use std::f64::consts::TAU;

use glam::DQuat;
use serde::{Deserialize, Serialize};

/// Rotation of the globe group about the Y axis.
///
/// The earth, glow, pillars and arcs all hang off this group, so advancing
/// the spin turns everything together. A render loop calls
/// [`advance`](Self::advance) once per frame.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Spin {
    /// Radians added per frame.
    pub rate: f64,
    /// Current angle in radians.
    pub angle: f64,
}

impl Spin {
    /// A spin at rest with the given per-frame rate.
    pub fn new(rate: f64) -> Self {
        Self { rate, angle: 0.0 }
    }

    /// Step the spin forward by `frames` frames. The angle stays in `[0, 2π)`.
    pub fn advance(&mut self, frames: u64) {
        self.angle = (self.angle + self.rate * frames as f64).rem_euclid(TAU);
    }

    /// Current group rotation.
    #[must_use]
    pub fn rotation(&self) -> DQuat {
        DQuat::from_rotation_y(self.angle)
    }
}
