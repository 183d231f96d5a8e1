//! Point light source.

use crate::vector::Vector3;

/// Point light with a position and an RGB intensity.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// World-space position of the light.
    pub position: Vector3,
    /// Light color; white is `(1, 1, 1)`.
    pub color: Vector3,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vector3, color: Vector3) -> Self {
        Self { position, color }
    }

    /// White light at `position`.
    pub fn white(position: Vector3) -> Self {
        Self::new(position, Vector3::ONE)
    }
}
