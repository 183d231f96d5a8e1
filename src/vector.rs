//! Three-component vector value type.
//!
//! Thin wrapper over `glam::Vec3A` that exposes the operations the tracer
//! needs as plain named methods. Every method takes `self` by value and
//! returns a new vector.

use glam::Vec3A;

/// Immutable (x, y, z) triple used for points, directions and colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(Vec3A);

#[allow(clippy::should_implement_trait)]
impl Vector3 {
    /// All components zero.
    pub const ZERO: Vector3 = Vector3(Vec3A::ZERO);

    /// All components one.
    pub const ONE: Vector3 = Vector3(Vec3A::ONE);

    /// Create a vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3A::new(x, y, z))
    }

    /// X component.
    pub fn x(self) -> f32 {
        self.0.x
    }

    /// Y component.
    pub fn y(self) -> f32 {
        self.0.y
    }

    /// Z component.
    pub fn z(self) -> f32 {
        self.0.z
    }

    /// Component-wise sum.
    pub fn add(self, other: Vector3) -> Vector3 {
        Self(self.0 + other.0)
    }

    /// Component-wise difference.
    pub fn sub(self, other: Vector3) -> Vector3 {
        Self(self.0 - other.0)
    }

    /// Negate every component.
    pub fn neg(self) -> Vector3 {
        Self(-self.0)
    }

    /// Multiply every component by `s`.
    pub fn scale(self, s: f32) -> Vector3 {
        Self(self.0 * s)
    }

    /// Component-wise (Hadamard) product, used to tint colors.
    pub fn mul(self, other: Vector3) -> Vector3 {
        Self(self.0 * other.0)
    }

    /// Dot product.
    pub fn dot(self, other: Vector3) -> f32 {
        self.0.dot(other.0)
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.0.length()
    }

    /// Scale to unit length.
    ///
    /// Unchecked: a zero-length input divides by zero and yields non-finite
    /// components.
    pub fn normalize(self) -> Vector3 {
        Self(self.0 / self.0.length())
    }

    /// Mirror `self` about the surface normal `n`: `v - 2·dot(v,n)·n`.
    ///
    /// `n` is expected to be unit length.
    pub fn reflect(self, n: Vector3) -> Vector3 {
        self.sub(n.scale(2.0 * self.dot(n)))
    }

    /// Components as an array, in x, y, z order.
    pub fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }
}

impl From<Vec3A> for Vector3 {
    fn from(v: Vec3A) -> Self {
        Self(v)
    }
}

impl From<Vector3> for Vec3A {
    fn from(v: Vector3) -> Self {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn reflect_flips_normal_component() {
        let n = Vector3::new(1.0, 2.0, -0.5).normalize();
        for v in [
            Vector3::new(1.0, -1.0, 0.0),
            Vector3::new(0.3, 4.0, -2.0),
            Vector3::new(-7.0, 0.0, 0.25),
        ] {
            let r = v.reflect(n);
            assert!((r.dot(n) + v.dot(n)).abs() < EPS, "{:?} reflected to {:?}", v, r);
        }
    }

    #[test]
    fn reflect_keeps_tangent_component() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let r = Vector3::new(1.0, -1.0, 0.0).reflect(n);
        assert_eq!(r, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-10.0, 9.8, -9.0),
            Vector3::new(1e-3, 0.0, 0.0),
            Vector3::new(250.0, -100.0, 42.0),
        ] {
            assert!((v.normalize().length() - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn normalize_zero_is_not_finite() {
        let n = Vector3::ZERO.normalize();
        assert!(n.to_array().iter().all(|c| !c.is_finite()));
    }

    #[test]
    fn arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 0.5);
        assert_eq!(a.add(b), Vector3::new(5.0, -3.0, 3.5));
        assert_eq!(a.sub(b), Vector3::new(-3.0, 7.0, 2.5));
        assert_eq!(a.neg(), Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.scale(2.0), Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.mul(b), Vector3::new(4.0, -10.0, 1.5));
        assert_eq!(a.dot(b), 4.0 - 10.0 + 1.5);
    }
}
