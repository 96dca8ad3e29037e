//! Glint CLI - renders the demo scene and writes it to disk.
//!
//! Usage: `glint [settings.json]`
//!
//! The optional JSON file overrides any subset of the render settings;
//! omitted fields keep their defaults.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use glint_core::{Color, Light, Material, Object, Scene, Shape, Vec3};
use glint_renderer::{output, render_parallel, Camera, RenderConfig};

/// Render settings, loadable from JSON. Every field has a default, so
/// a settings file only needs the fields it wants to change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RenderSettings {
    width: u32,
    height: u32,
    /// Vertical field of view in radians
    fov: f32,
    max_depth: u32,
    background: [f32; 3],
    epsilon: f32,
    max_distance: f32,
    output: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fov: 1.8,
            max_depth: 5,
            background: [0.8, 0.8, 1.0],
            epsilon: 0.001,
            max_distance: 1000.0,
            output: PathBuf::from("render.ppm"),
        }
    }
}

impl RenderSettings {
    fn load(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {path}"))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse settings file {path}"))
    }

    fn camera(&self) -> Camera {
        Camera::new()
            .with_resolution(self.width, self.height)
            .with_fov(self.fov)
    }

    fn render_config(&self) -> RenderConfig {
        let [r, g, b] = self.background;
        RenderConfig {
            max_depth: self.max_depth,
            background: Color::new(r, g, b),
            epsilon: self.epsilon,
            max_distance: self.max_distance,
        }
    }
}

/// Build the demo scene: two spheres and two pillars on a grey slab,
/// lit by two point lights.
fn build_scene() -> Scene {
    let red = Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 1.0).with_specular(1.0, 50.0));
    let green = Arc::new(Material::new(Color::new(0.0, 0.5, 0.0), 0.5).with_specular(1.0, 1000.0));
    let blue = Arc::new(Material::new(Color::new(0.0, 0.0, 1.0), 0.5).with_specular(1.0, 300.0));
    let grey = Arc::new(Material::new(Color::splat(0.5), 1.0));

    let mut scene = Scene::new();

    // Ground slab
    scene.add_object(Object::new(
        Shape::cuboid(Vec3::new(-30.0, -5.0, -30.0), Vec3::new(30.0, -4.5, 9.0)),
        grey,
    ));

    scene.add_object(Object::new(
        Shape::sphere(Vec3::new(0.0, -3.5, -12.0), 1.0),
        Arc::clone(&green),
    ));
    scene.add_object(Object::new(
        Shape::sphere(Vec3::new(3.0, -4.0, -11.0), 0.5),
        red,
    ));

    // Pillars
    scene.add_object(Object::new(
        Shape::cuboid(Vec3::new(7.0, 0.0, -15.0), Vec3::new(10.0, -7.0, -10.0)),
        green,
    ));
    scene.add_object(Object::new(
        Shape::cuboid(Vec3::new(-7.0, 0.0, -15.0), Vec3::new(-10.0, -7.0, -10.0)),
        blue,
    ));

    scene.add_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 3000.0));
    scene.add_light(Light::new(Vec3::new(20.0, 30.0, 20.0), 4000.0));

    scene
}

fn main() -> Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => RenderSettings::load(&path)?,
        None => RenderSettings::default(),
    };
    log::info!(
        "rendering {}x{} (depth {}) to {}",
        settings.width,
        settings.height,
        settings.max_depth,
        settings.output.display()
    );

    let scene = build_scene();
    log::info!("scene has {} objects", scene.object_count());

    let camera = settings.camera();
    let config = settings.render_config();

    let start = Instant::now();
    let image = render_parallel(&scene, &camera, &config);
    log::info!("rendered in {:?}", start.elapsed());

    output::save(&image, &settings.output)
        .with_context(|| format!("failed to save {}", settings.output.display()))?;

    Ok(())
}
