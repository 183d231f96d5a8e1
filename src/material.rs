//! Phong surface material.
//!
//! A material holds a base color and the ambient, diffuse and specular
//! weights of the Phong reflection model. [`Material::lighting`] evaluates the
//! model for one surface point and [`Material::to_bytes`] maps the result to
//! an RGB8 triple.

use crate::light::Light;
use crate::vector::Vector3;

/// RGB color in linear `[0, 1]` units.
pub type Color = Vector3;

/// How the specular term reacts when the surface faces away from the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecularGating {
    /// Back-facing points get neither diffuse nor specular light.
    #[default]
    Coupled,
    /// Diffuse and specular are each gated by their own dot product.
    Independent,
}

/// Phong material parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base surface color.
    pub color: Color,
    /// Ambient weight.
    pub ambient: f32,
    /// Diffuse weight.
    pub diffuse: f32,
    /// Specular weight.
    pub specular: f32,
    /// Specular exponent; larger values give tighter highlights.
    pub shininess: f32,
}

impl Default for Material {
    /// Yellow plastic: `ambient = 0.1`, `diffuse = 0.9`, `specular = 0.9`,
    /// `shininess = 200`.
    fn default() -> Self {
        Self {
            color: Color::new(1.0, 1.0, 0.0),
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}

/// The three Phong contributions at one surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    /// Ambient term.
    pub ambient: Color,
    /// Diffuse term.
    pub diffuse: Color,
    /// Specular term.
    pub specular: Color,
}

impl Shade {
    /// Sum of all three contributions.
    pub fn total(&self) -> Color {
        self.ambient.add(self.diffuse).add(self.specular)
    }
}

impl Material {
    /// Evaluate Phong lighting at `point`.
    ///
    /// `eye` points from the camera towards `point`, `normal` is the unit
    /// outward surface normal.
    pub fn lighting(
        &self,
        light: &Light,
        point: Vector3,
        eye: Vector3,
        normal: Vector3,
        gating: SpecularGating,
    ) -> Shade {
        let color = self.color.mul(light.color);
        let ambient = color.scale(self.ambient);

        let light_dir = light.position.sub(point).normalize();
        let light_dot_normal = light_dir.dot(normal);

        let facing_away = light_dot_normal < 0.0;
        let diffuse = if facing_away {
            Color::ZERO
        } else {
            color.scale(self.diffuse * light_dot_normal)
        };

        let specular = if facing_away && gating == SpecularGating::Coupled {
            Color::ZERO
        } else {
            self.specular_term(light, light_dir, eye, normal)
        };

        Shade {
            ambient,
            diffuse,
            specular,
        }
    }

    fn specular_term(&self, light: &Light, light_dir: Vector3, eye: Vector3, normal: Vector3) -> Color {
        let reflect_dir = light_dir.neg().reflect(normal);
        let reflect_dot_eye = eye.dot(reflect_dir);
        if reflect_dot_eye <= 0.0 {
            return Color::ZERO;
        }
        let factor = reflect_dot_eye.powf(self.shininess);
        light.color.scale(self.specular * factor)
    }

    /// Scale a lit color to bytes.
    ///
    /// The weights sum to full intensity, so the color is multiplied by
    /// `255 / (specular + diffuse + ambient)`, clamped to `[0, 255]` and
    /// truncated. Non-finite channels become 0.
    pub fn to_bytes(&self, color: Color) -> [u8; 3] {
        let scale = 255.0 / (self.specular + self.diffuse + self.ambient);
        color.to_array().map(|c| (c * scale).clamp(0.0, 255.0) as u8)
    }
}
