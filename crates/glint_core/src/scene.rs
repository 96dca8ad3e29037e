//! Scene container and the brute-force nearest-hit query.

use std::sync::Arc;

use glint_math::{Interval, Ray, Vec3};

use crate::light::Light;
use crate::material::Material;
use crate::shape::Shape;

/// A renderable object: one shape with one (possibly shared) material.
#[derive(Debug, Clone)]
pub struct Object {
    pub shape: Shape,
    pub material: Arc<Material>,
}

impl Object {
    /// Create a new object.
    pub fn new(shape: Shape, material: Arc<Material>) -> Self {
        Self { shape, material }
    }
}

/// The nearest surface a ray meets, with everything shading needs.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit<'a> {
    /// Point of intersection
    pub point: Vec3,
    /// Outward surface normal at the intersection point
    pub normal: Vec3,
    /// Ray parameter of the intersection
    pub distance: f32,
    /// Material of the hit object
    pub material: &'a Material,
}

/// A static scene: objects and lights, read-only during rendering.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Object>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get the lights in the scene.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Find the nearest intersection along the ray within `ray_t`.
    ///
    /// Linear scan over all objects; a strictly nearer hit wins, an
    /// exact tie keeps the first-seen object. An empty scene (valid)
    /// never intersects.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit<'_>> {
        let mut closest_so_far = ray_t.max;
        let mut best = None;

        for object in &self.objects {
            let interval = Interval::new(ray_t.min, closest_so_far);
            if let Some(hit) = object.shape.intersect(ray, interval) {
                closest_so_far = hit.t;
                best = Some(SurfaceHit {
                    point: ray.at(hit.t),
                    normal: hit.normal,
                    distance: hit.t,
                    material: object.material.as_ref(),
                });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Color;

    fn grey() -> Arc<Material> {
        Arc::new(Material::new(Color::splat(0.5), 1.0))
    }

    fn red() -> Arc<Material> {
        Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 1.0))
    }

    const RANGE: Interval = Interval {
        min: 0.001,
        max: 1000.0,
    };

    #[test]
    fn test_empty_scene_never_intersects() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert!(scene.intersect(&ray, RANGE).is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut scene = Scene::new();
        scene.add_object(Object::new(
            Shape::sphere(Vec3::new(0.0, 0.0, -20.0), 1.0),
            grey(),
        ));
        scene.add_object(Object::new(
            Shape::sphere(Vec3::new(0.0, 0.0, -10.0), 1.0),
            red(),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&ray, RANGE).expect("should hit");

        assert!((hit.distance - 9.0).abs() < 1e-4);
        assert_eq!(hit.material.diffuse_color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_max_distance_bound() {
        let mut scene = Scene::new();
        scene.add_object(Object::new(
            Shape::sphere(Vec3::new(0.0, 0.0, -2000.0), 1.0),
            grey(),
        ));

        // The sphere lies beyond the maximum ray travel distance
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(scene.intersect(&ray, RANGE).is_none());
    }

    #[test]
    fn test_shared_material() {
        let shared = grey();
        let mut scene = Scene::new();
        scene.add_object(Object::new(
            Shape::sphere(Vec3::new(0.0, 0.0, -10.0), 1.0),
            Arc::clone(&shared),
        ));
        scene.add_object(Object::new(
            Shape::cuboid(Vec3::new(-5.0, -5.0, -30.0), Vec3::new(5.0, -4.0, -20.0)),
            Arc::clone(&shared),
        ));

        assert_eq!(Arc::strong_count(&shared), 3);
        assert_eq!(scene.object_count(), 2);
    }
}
