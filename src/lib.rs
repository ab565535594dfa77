//! Lumen: a sphere-only ray tracer.
//!
//! A [`Camera`] casts one ray per pixel into a [`World`] of transformed unit
//! spheres lit by a single point light, and shades the nearest hit with the
//! Phong model.

#[macro_use]
extern crate serde_derive;

#[macro_use]
pub mod float;

pub mod camera;
pub mod canvas;
pub mod color;
pub mod error;
pub mod intersection;
pub mod light;
pub mod lighting;
pub mod material;
pub mod matrix;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod transform;
pub mod tuple;
pub mod vec4;
pub mod world;

pub use crate::camera::Camera;
pub use crate::canvas::Canvas;
pub use crate::color::Color;
pub use crate::error::{Error, Result};
pub use crate::intersection::{hit, Intersection, Intersections};
pub use crate::light::PointLight;
pub use crate::material::Material;
pub use crate::matrix::{Matrix, Matrix4x4};
pub use crate::ray::Ray;
pub use crate::scene::Scene;
pub use crate::sphere::Sphere;
pub use crate::transform::Transform;
pub use crate::tuple::{Point, Vector};
pub use crate::world::World;

/// Renders `world` as seen by `camera`.
pub fn render(camera: &Camera, world: &World) -> Canvas {
    camera.render(world)
}
