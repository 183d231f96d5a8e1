//! Fixed scene descriptions for the three exercises.

use crate::light::Light;
use crate::material::{Color, Material, SpecularGating};
use crate::sphere::Sphere;
use crate::vector::Vector3;

/// Background for the ray-traced sphere: pixels the ray misses keep it.
pub const SPHERE_BACKGROUND: [u8; 3] = [0, 0, 0];

/// Clear color `(0.2, 0.3, 0.3)` of the triangle exercise.
pub const TRIANGLE_BACKGROUND: [u8; 3] = [51, 76, 76];

/// Fill color `(1.0, 0.5, 0.2)` of the triangle exercise.
pub const TRIANGLE_COLOR: [u8; 3] = [255, 127, 51];

/// Triangle vertices in normalized device coordinates.
pub const TRIANGLE_VERTICES: [(f32, f32); 3] = [(-0.5, -0.5), (0.5, -0.5), (0.0, 1.0)];

/// Everything the tracer needs to shade one image.
#[derive(Debug, Clone)]
pub struct Scene {
    /// The only object.
    pub sphere: Sphere,
    /// The only light.
    pub light: Light,
    /// Color of pixels whose ray misses the sphere.
    pub background: [u8; 3],
    /// Specular gating policy for back-facing points.
    pub gating: SpecularGating,
}

impl Scene {
    /// Yellow unit sphere at the origin lit by a white point light at
    /// `(-10, 10, -10)`.
    pub fn phong_sphere() -> Self {
        Self {
            sphere: Sphere::unit(Material::default()),
            light: Light::white(Vector3::new(-10.0, 10.0, -10.0)),
            background: SPHERE_BACKGROUND,
            gating: SpecularGating::Coupled,
        }
    }

    /// Same scene with a different gating policy.
    pub fn with_gating(mut self, gating: SpecularGating) -> Self {
        self.gating = gating;
        self
    }

    /// Same scene with a different material on the sphere.
    pub fn with_material(mut self, material: Material) -> Self {
        self.sphere.material = material;
        self
    }

    /// Same scene with a different light color.
    pub fn with_light_color(mut self, color: Color) -> Self {
        self.light.color = color;
        self
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::phong_sphere()
    }
}
