//! Surface materials for Phong/Blinn shading.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Shading coefficients for one surface look.
///
/// Materials are plain immutable value data. Objects that share a look
/// hold the same material behind an `Arc`, so a material is built once
/// and never mutated after scene construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base surface color for the Lambertian term
    pub diffuse_color: Color,
    /// Weight of the Lambertian term (0-1)
    pub diffuse_coef: f32,
    /// Weight of the Blinn-Phong highlight
    pub specular_coef: f32,
    /// Shininess exponent for the highlight
    pub phong_exp: f32,
    /// Weight of the mirror-reflected contribution
    pub reflex_coef: f32,
    /// Blend factor fed directly into the simplified refraction formula
    pub refract_coef: f32,
    /// Blend weight between the reflective (1) and refractive (0) branches
    pub opacity: f32,
}

impl Material {
    /// Create a matte material with the given color and diffuse weight.
    ///
    /// Everything else defaults to a dull opaque surface: no highlight,
    /// no reflection, no refraction.
    pub fn new(diffuse_color: Color, diffuse_coef: f32) -> Self {
        Self {
            diffuse_color,
            diffuse_coef,
            specular_coef: 0.0,
            phong_exp: 1.0,
            reflex_coef: 0.0,
            refract_coef: 0.0,
            opacity: 1.0,
        }
    }

    /// Set the Blinn-Phong highlight weight and shininess.
    pub fn with_specular(mut self, specular_coef: f32, phong_exp: f32) -> Self {
        self.specular_coef = specular_coef;
        self.phong_exp = phong_exp;
        self
    }

    /// Set the mirror contribution weight.
    pub fn with_reflection(mut self, reflex_coef: f32) -> Self {
        self.reflex_coef = reflex_coef;
        self
    }

    /// Set the refraction blend factor and the opacity that weights the
    /// refracted branch into the final color.
    pub fn with_refraction(mut self, refract_coef: f32, opacity: f32) -> Self {
        self.refract_coef = refract_coef;
        self.opacity = opacity;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::splat(0.5), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults() {
        let mat = Material::new(Color::new(1.0, 0.0, 0.0), 1.0);

        assert_eq!(mat.specular_coef, 0.0);
        assert_eq!(mat.reflex_coef, 0.0);
        assert_eq!(mat.refract_coef, 0.0);
        // Opaque by default: the refractive branch carries zero weight
        assert_eq!(mat.opacity, 1.0);
    }

    #[test]
    fn test_material_builders() {
        let mat = Material::new(Color::new(0.0, 0.5, 0.0), 0.5)
            .with_specular(1.0, 1000.0)
            .with_reflection(0.2)
            .with_refraction(0.8, 0.3);

        assert_eq!(mat.specular_coef, 1.0);
        assert_eq!(mat.phong_exp, 1000.0);
        assert_eq!(mat.reflex_coef, 0.2);
        assert_eq!(mat.refract_coef, 0.8);
        assert_eq!(mat.opacity, 0.3);
    }
}
