//! Ray representation for ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction. The direction is not
//! normalized: primary rays keep the raw view-plane offset, so `t` is measured
//! in units of that offset.

use crate::vector::Vector3;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vector3,

    /// Direction vector of the ray (not necessarily unit length).
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vector3 {
        self.origin.add(self.direction.scale(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let r = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.5, 10.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(0.5), Vector3::new(0.0, 0.25, 0.0));
        assert_eq!(r.at(-1.0), Vector3::new(0.0, -0.5, -15.0));
    }
}
