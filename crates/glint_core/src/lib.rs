//! Glint Core - scene model for the Whitted ray tracer.
//!
//! This crate provides:
//!
//! - **Materials**: Phong/Blinn shading coefficients, shared via `Arc`
//! - **Shapes**: sphere and axis-aligned cuboid with ray intersection
//! - **Lights**: point lights with inverse-square falloff
//! - **Scene**: brute-force nearest-hit query over all objects

pub mod light;
pub mod material;
pub mod scene;
pub mod shape;

// Re-export commonly used types
pub use light::Light;
pub use material::{Color, Material};
pub use scene::{Object, Scene, SurfaceHit};
pub use shape::{Hit, Shape};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
