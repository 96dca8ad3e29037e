//! Recursive Whitted-style shading.

use glint_core::{Color, Scene, SurfaceHit};
use glint_math::{Interval, Ray, Vec3};

use crate::renderer::RenderConfig;

/// Compute the color seen by a ray.
///
/// Shades the nearest intersection with Lambert and Blinn-Phong terms
/// per visible light, then recurses into mirror-reflected and
/// refracted rays. Recursion is bounded by `config.max_depth`; beyond
/// it, and on a miss, the background color is returned.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32, config: &RenderConfig) -> Color {
    if depth > config.max_depth {
        return config.background;
    }

    let ray_t = Interval::new(config.epsilon, config.max_distance);
    let hit = match scene.intersect(ray, ray_t) {
        Some(hit) => hit,
        None => return config.background,
    };
    let material = hit.material;

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;

    for light in scene.lights() {
        let to_light = light.position - hit.point;
        let light_dist = to_light.length();
        let light_dir = to_light.normalize_or_zero();
        if light_dir == Vec3::ZERO {
            // Light coincides with the hit point: degenerate, skip
            continue;
        }

        if occluded(scene, &hit, light_dir, light_dist, config) {
            continue;
        }

        // I / r^2 falloff
        let dist_factor = light.intensity / (light_dist * light_dist);

        // Lambert
        diffuse_intensity +=
            material.diffuse_coef * dist_factor * hit.normal.dot(light_dir).max(0.0);

        // Blinn-Phong
        let view_dir = (ray.origin - hit.point).normalize_or_zero();
        let half_vector = (view_dir + light_dir).normalize_or_zero();
        specular_intensity += material.specular_coef
            * dist_factor
            * hit.normal.dot(half_vector).max(0.0).powf(material.phong_exp);
    }

    let dir = ray.direction;
    let reflected = dir - hit.normal * (2.0 * dir.dot(hit.normal));

    // Simplified refraction: refract_coef blends the incoming direction
    // against the normal directly, with no total-internal-reflection
    // branch. Kept as-is for output parity.
    let cosi = hit.normal.dot(dir);
    let refracted =
        dir * material.refract_coef - hit.normal * (-cosi + material.refract_coef * cosi);

    // Secondary rays start off the surface along the normal
    let bounce_origin = hit.point + hit.normal * config.epsilon;
    let reflected_color = cast_ray(
        &Ray::new(bounce_origin, reflected),
        scene,
        depth + 1,
        config,
    );
    let refracted_color = cast_ray(
        &Ray::new(bounce_origin, refracted),
        scene,
        depth + 1,
        config,
    );

    let hit_color =
        material.diffuse_color * diffuse_intensity + Color::ONE * specular_intensity;

    (hit_color + reflected_color * material.reflex_coef) * material.opacity
        + refracted_color * (1.0 - material.opacity)
}

/// Test whether an object blocks the path from the hit point to the
/// light.
///
/// The shadow ray starts offset along the normal, on whichever side the
/// light lies, so the surface cannot occlude itself.
fn occluded(
    scene: &Scene,
    hit: &SurfaceHit<'_>,
    light_dir: Vec3,
    light_dist: f32,
    config: &RenderConfig,
) -> bool {
    let shadow_origin = if light_dir.dot(hit.normal) < 0.0 {
        hit.point - hit.normal * config.epsilon
    } else {
        hit.point + hit.normal * config.epsilon
    };
    let shadow_ray = Ray::new(shadow_origin, light_dir);

    let ray_t = Interval::new(config.epsilon, config.max_distance);
    match scene.intersect(&shadow_ray, ray_t) {
        Some(shadow_hit) => (shadow_hit.point - hit.point).length() < light_dist,
        None => false,
    }
}
