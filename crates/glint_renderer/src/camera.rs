//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// A fixed pinhole camera looking down -Z.
///
/// Maps integer pixel coordinates to primary rays through pixel
/// centers. `ray_for_pixel` is pure, so any two calls with the same
/// arguments produce the same ray.
#[derive(Debug, Clone)]
pub struct Camera {
    pub origin: Vec3,
    pub image_width: u32,
    pub image_height: u32,
    /// Vertical field of view in radians
    pub vfov: f32,
}

impl Camera {
    /// Create a camera with the default settings (1024x768, 1.8 rad).
    pub fn new() -> Self {
        Self {
            origin: Vec3::ZERO,
            image_width: 1024,
            image_height: 768,
            vfov: 1.8,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the vertical field of view in radians.
    pub fn with_fov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self
    }

    /// Set the camera position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Generate the primary ray through the center of pixel (i, j).
    ///
    /// Standard NDC transform: x spans +-aspect * tan(vfov/2), y spans
    /// +-tan(vfov/2) with row 0 at the top, look direction -Z. The
    /// returned direction is unit length.
    pub fn ray_for_pixel(&self, i: u32, j: u32) -> Ray {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let tan_half = (self.vfov / 2.0).tan();
        let aspect = width / height;

        let x = (2.0 * (i as f32 + 0.5) / width - 1.0) * tan_half * aspect;
        let y = (1.0 - 2.0 * (j as f32 + 0.5) / height) * tan_half;

        Ray::new(self.origin, Vec3::new(x, y, -1.0).normalize())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pixel_looks_down_z() {
        // Odd resolution puts a pixel center exactly on the axis
        let camera = Camera::new().with_resolution(101, 101);
        let ray = camera.ray_for_pixel(50, 50);

        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert_eq!(ray.origin, Vec3::ZERO);
    }

    #[test]
    fn test_row_zero_is_top() {
        let camera = Camera::new().with_resolution(64, 48);

        let top = camera.ray_for_pixel(32, 0);
        let bottom = camera.ray_for_pixel(32, 47);

        assert!(top.direction.y > 0.0);
        assert!(bottom.direction.y < 0.0);
    }

    #[test]
    fn test_direction_is_unit_length() {
        let camera = Camera::new().with_resolution(64, 48).with_fov(1.8);

        for &(i, j) in &[(0, 0), (63, 0), (0, 47), (63, 47), (32, 24)] {
            let ray = camera.ray_for_pixel(i, j);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_deterministic() {
        let camera = Camera::new().with_resolution(64, 48);

        let a = camera.ray_for_pixel(10, 20);
        let b = camera.ray_for_pixel(10, 20);
        assert_eq!(a, b);
    }
}
