//! Render configuration, image buffer and the sequential frame loop.

use glint_core::{Color, Scene};

use crate::camera::Camera;
use crate::tracer::cast_ray;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum recursion depth for reflection/refraction rays
    pub max_depth: u32,
    /// Color returned when a ray hits nothing or recursion bottoms out
    pub background: Color,
    /// Self-intersection epsilon: minimum hit distance and the offset
    /// applied to shadow and secondary ray origins
    pub epsilon: f32,
    /// Maximum ray travel distance; hits beyond this count as misses
    pub max_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: Color::new(0.8, 0.8, 1.0),
            epsilon: 0.001,
            max_distance: 1000.0,
        }
    }
}

/// Compute the color of a single pixel.
pub fn render_pixel(scene: &Scene, camera: &Camera, i: u32, j: u32, config: &RenderConfig) -> Color {
    let ray = camera.ray_for_pixel(i, j);
    cast_ray(&ray, scene, 0, config)
}

/// Row-major frame buffer of linear RGB samples.
///
/// Each pixel is written exactly once during rendering and the buffer
/// is handed off immutably to the image writers afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to 8-bit RGB bytes: clamp each channel to [0, 1] and
    /// scale to 0-255.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.push((255.0 * color.x.clamp(0.0, 1.0)) as u8);
            bytes.push((255.0 * color.y.clamp(0.0, 1.0)) as u8);
            bytes.push((255.0 * color.z.clamp(0.0, 1.0)) as u8);
        }
        bytes
    }
}

/// Render the entire scene sequentially, row-major.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for j in 0..camera.image_height {
        for i in 0..camera.image_width {
            image.set(i, j, render_pixel(scene, camera, i, j, config));
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Light, Material, Object, Shape, Vec3};
    use std::sync::Arc;

    /// Single green sphere below the view axis, one light, empty
    /// background everywhere else.
    fn green_sphere_scene() -> Scene {
        let green = Arc::new(Material::new(Color::new(0.0, 0.8, 0.0), 1.0));
        let mut scene = Scene::new();
        scene.add_object(Object::new(
            Shape::sphere(Vec3::new(0.0, -3.0, -10.0), 1.0),
            green,
        ));
        scene.add_light(Light::new(Vec3::new(0.0, 20.0, 20.0), 1000.0));
        scene
    }

    #[test]
    fn test_render_green_sphere_end_to_end() {
        let scene = green_sphere_scene();
        let camera = Camera::new().with_resolution(64, 48).with_fov(1.8);
        let config = RenderConfig::default();

        let image = render(&scene, &camera, &config);

        // All four corner rays miss the sphere and must be exactly the
        // background color.
        for &(x, y) in &[(0, 0), (63, 0), (0, 47), (63, 47)] {
            assert_eq!(image.get(x, y), config.background);
        }

        // The pixel where the sphere projects (center column, 0.3 below
        // the view axis) must be closer to the sphere's diffuse color
        // than to the background.
        let hit = image.get(32, 29);
        let green = Color::new(0.0, 0.8, 0.0);
        assert_ne!(hit, config.background);
        assert!((hit - green).length() < (hit - config.background).length());
    }

    #[test]
    fn test_render_is_idempotent() {
        let scene = green_sphere_scene();
        let camera = Camera::new().with_resolution(32, 24);
        let config = RenderConfig::default();

        let first = render(&scene, &camera, &config);
        let second = render(&scene, &camera, &config);

        // No randomness anywhere: bit-identical buffers
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_scene_is_all_background() {
        let scene = Scene::new();
        let camera = Camera::new().with_resolution(8, 8);
        let config = RenderConfig::default();

        let image = render(&scene, &camera, &config);
        assert!(image.pixels.iter().all(|&p| p == config.background));
    }

    #[test]
    fn test_to_rgb8_clamps_channels() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(-0.5, 0.5, 2.0));
        image.set(1, 0, Color::new(0.0, 1.0, 0.25));

        let bytes = image.to_rgb8();
        assert_eq!(bytes, vec![0, 127, 255, 0, 255, 63]);
    }
}
