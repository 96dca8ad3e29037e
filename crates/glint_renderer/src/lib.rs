//! Glint Renderer - Whitted-style CPU ray tracing
//!
//! Recursive ray tracer with Blinn-Phong shading, hard shadows,
//! mirror reflection and simplified refraction. Single-threaded and
//! rayon-parallel render paths produce bit-identical output.

mod bucket;
mod camera;
pub mod output;
mod renderer;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use output::{save, save_png, save_ppm, OutputError};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig};
pub use tracer::cast_ray;

/// Re-export the scene model and math types
pub use glint_core::{Color, Hit, Light, Material, Object, Scene, Shape, SurfaceHit};
pub use glint_math::{Interval, Ray, Vec3};
