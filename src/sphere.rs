//! Sphere primitive for ray tracing.
//!
//! Solves the full quadratic `a·t² + b·t + c = 0` for the ray parameter and
//! keeps the root with the smaller magnitude.

use crate::material::Material;
use crate::ray::Ray;
use crate::vector::Vector3;

/// Ray-sphere intersection information.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Ray parameter of the selected root
    pub t: f32,
    /// Point where the ray meets the sphere
    pub point: Vector3,
    /// Outward surface normal at `point`
    pub normal: Vector3,
}

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vector3,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f32,

    /// Surface parameters used for shading.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vector3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Unit sphere at the world origin.
    pub fn unit(material: Material) -> Self {
        Self::new(Vector3::ZERO, 1.0, material)
    }

    /// Quadratic coefficients `(a, b, c)` for `r` against this sphere.
    pub fn coefficients(&self, r: &Ray) -> (f32, f32, f32) {
        let oc = r.origin.sub(self.center);
        let a = r.direction.dot(r.direction);
        let b = 2.0 * oc.dot(r.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        (a, b, c)
    }

    /// `b² − 4ac`; negative means the ray misses.
    pub fn discriminant(&self, r: &Ray) -> f32 {
        let (a, b, c) = self.coefficients(r);
        b * b - 4.0 * a * c
    }

    /// Intersect `r` with the sphere.
    ///
    /// Of the two roots, the one with the smaller absolute value wins, ties
    /// going to the far root. That root can lie behind the ray origin.
    ///
    /// A zero-radius sphere has no surface normal and is never hit.
    pub fn intersect(&self, r: &Ray) -> Option<Hit> {
        if self.radius == 0.0 {
            return None;
        }
        let (a, b, c) = self.coefficients(r);
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);
        let t = if t1.abs() < t2.abs() { t1 } else { t2 };

        let point = r.at(t);
        // For the unit sphere at the origin this is exactly `point`.
        let normal = point.sub(self.center).scale(1.0 / self.radius);

        Some(Hit { t, point, normal })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Sphere {
        Sphere::unit(Material::default())
    }

    #[test]
    fn miss_has_negative_discriminant() {
        let r = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 2.0, 1.0));
        assert!(unit().discriminant(&r) < 0.0);
        assert!(unit().intersect(&r).is_none());
    }

    #[test]
    fn head_on_hit_picks_near_surface() {
        let r = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        let hit = unit().intersect(&r).expect("ray through center hits");
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert!((hit.point.z() + 1.0).abs() < 1e-5);
        assert_eq!(hit.normal, hit.point);
    }

    #[test]
    fn smaller_magnitude_root_wins_even_behind_origin() {
        // Roots are t = -0.1 (behind) and t = 1.9 (ahead).
        let inside = Ray::new(Vector3::new(0.0, 0.0, -0.9), Vector3::new(0.0, 0.0, 1.0));
        let hit = unit().intersect(&inside).expect("origin inside sphere");
        assert!((hit.t + 0.1).abs() < 1e-5, "t = {}", hit.t);
        assert!(hit.t < 0.0);
    }

    #[test]
    fn equal_magnitude_roots_pick_far_root() {
        // From the center the roots are exactly -1 and +1.
        let r = Ray::new(Vector3::ZERO, Vector3::new(0.0, 0.0, 1.0));
        let hit = unit().intersect(&r).expect("origin at center");
        assert_eq!(hit.t, 1.0);
        assert_eq!(hit.point, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn zero_radius_sphere_is_never_hit() {
        let s = Sphere::new(Vector3::ZERO, 0.0, Material::default());
        let through_center = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(s.discriminant(&through_center) >= 0.0);
        assert!(s.intersect(&through_center).is_none());
    }

    #[test]
    fn tangent_ray_touches_once() {
        let r = Ray::new(Vector3::new(1.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(unit().discriminant(&r), 0.0);
        let hit = unit().intersect(&r).expect("tangent counts as a hit");
        assert!((hit.t - 5.0).abs() < 1e-5);
    }

    #[test]
    fn negative_radius_clamps_to_zero() {
        let s = Sphere::new(Vector3::ZERO, -2.0, Material::default());
        assert_eq!(s.radius, 0.0);
        let r = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(s.intersect(&r).is_none());
    }
}
