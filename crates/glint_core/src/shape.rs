//! Geometric primitives and their ray intersection tests.

use glint_math::{Interval, Ray, Vec3};

/// Result of a ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter where the intersection occurs
    pub t: f32,
    /// Outward surface normal at the intersection point (unit length)
    pub normal: Vec3,
}

/// A geometric primitive.
///
/// The shape set is closed and finite, so variants are dispatched by
/// pattern matching rather than through a trait object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    Cuboid { min: Vec3, max: Vec3 },
}

impl Shape {
    /// Create a sphere with a non-negative radius.
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self::Sphere {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Create an axis-aligned cuboid from two opposite corners.
    ///
    /// The corners may be given in any order; they are normalized so
    /// that `min <= max` on every axis.
    pub fn cuboid(a: Vec3, b: Vec3) -> Self {
        Self::Cuboid {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Test the ray against this shape within the acceptable t-range.
    ///
    /// Returns the nearest intersection whose parameter lies strictly
    /// inside `ray_t`, or `None`. Bounds at or below `ray_t.min` are
    /// rejected to prevent self-intersection acne.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        match *self {
            Self::Sphere { center, radius } => sphere_intersect(center, radius, ray, ray_t),
            Self::Cuboid { min, max } => cuboid_intersect(min, max, ray, ray_t),
        }
    }
}

/// Ray-sphere intersection via the quadratic in the ray parameter.
fn sphere_intersect(center: Vec3, radius: f32, ray: &Ray, ray_t: Interval) -> Option<Hit> {
    let oc = center - ray.origin;
    let a = ray.direction.length_squared();
    let h = ray.direction.dot(oc);
    let c = oc.length_squared() - radius * radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Prefer the nearer root, fall back to the farther one
    let mut root = (h - sqrtd) / a;
    if !ray_t.surrounds(root) {
        root = (h + sqrtd) / a;
        if !ray_t.surrounds(root) {
            return None;
        }
    }

    let normal = (ray.at(root) - center) / radius;
    Some(Hit { t: root, normal })
}

/// Ray-cuboid intersection via the slab method.
///
/// The running [t_enter, t_exit] interval is tightened by each axis
/// slab; the axis that produced the chosen bound defines the face
/// normal.
fn cuboid_intersect(min: Vec3, max: Vec3, ray: &Ray, ray_t: Interval) -> Option<Hit> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut enter_axis = 0;
    let mut exit_axis = 0;

    for axis in 0..3 {
        let adinv = 1.0 / ray.direction[axis];
        let mut t0 = (min[axis] - ray.origin[axis]) * adinv;
        let mut t1 = (max[axis] - ray.origin[axis]) * adinv;
        if adinv < 0.0 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > t_enter {
            t_enter = t0;
            enter_axis = axis;
        }
        if t1 < t_exit {
            t_exit = t1;
            exit_axis = axis;
        }
        if t_exit <= t_enter {
            return None;
        }
    }

    // Entering face when hit from outside, exiting face when the ray
    // starts inside the box
    if ray_t.surrounds(t_enter) {
        Some(Hit {
            t: t_enter,
            normal: face_normal(enter_axis, -ray.direction[enter_axis]),
        })
    } else if ray_t.surrounds(t_exit) {
        Some(Hit {
            t: t_exit,
            normal: face_normal(exit_axis, ray.direction[exit_axis]),
        })
    } else {
        None
    }
}

/// Outward unit normal of the axis-aligned face on `axis` whose outward
/// side agrees with the sign of `toward`.
fn face_normal(axis: usize, toward: f32) -> Vec3 {
    let sign = if toward < 0.0 { -1.0 } else { 1.0 };
    match axis {
        0 => Vec3::new(sign, 0.0, 0.0),
        1 => Vec3::new(0.0, sign, 0.0),
        _ => Vec3::new(0.0, 0.0, sign),
    }
}
