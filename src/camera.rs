use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::matrix::Matrix4x4;
use crate::ray::Ray;
use crate::tuple::Point;
use crate::world::World;

/// Pinhole camera looking down `-z` at a view plane one unit away.
///
/// The transform orients the world relative to the camera (see
/// [`view_transform`](crate::transform::view_transform)); it is the only
/// part that changes after construction.
#[derive(Clone, Debug)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Matrix4x4,
    inverse: Matrix4x4,
    pixel_size: f64,
    half_width: f64,
    half_height: f64,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.0).tan();
        let aspect = hsize as f64 / vsize as f64;

        let (half_width, half_height) = if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix4x4::identity(),
            inverse: Matrix4x4::identity(),
            pixel_size: half_width * 2.0 / hsize as f64,
            half_width,
            half_height,
        }
    }

    #[inline]
    pub fn hsize(&self) -> usize {
        self.hsize
    }

    #[inline]
    pub fn vsize(&self) -> usize {
        self.vsize
    }

    #[inline]
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    #[inline]
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    #[inline]
    pub fn transform(&self) -> &Matrix4x4 {
        &self.transform
    }

    /// Fails, leaving the camera untouched, when `transform` is singular.
    pub fn set_transform(&mut self, transform: Matrix4x4) -> Result<()> {
        let inverse = transform.inverse().map_err(|err| {
            warn!("camera transform rejected: {}", err);
            err
        })?;
        self.transform = transform;
        self.inverse = inverse;
        Ok(())
    }

    /// Ray from the camera through the center of pixel `(px, py)`.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Ray {
        let xoffset = (px as f64 + 0.5) * self.pixel_size;
        let yoffset = (py as f64 + 0.5) * self.pixel_size;

        // The camera looks toward -z, so +x is to the left.
        let world_x = self.half_width - xoffset;
        let world_y = self.half_height - yoffset;

        let pixel = self.inverse * Point::new(world_x, world_y, -1.0);
        let origin = self.inverse * Point::origin();
        let direction = (pixel - origin).normalize();

        Ray::new(origin, direction)
    }

    /// Shades every pixel of the view.
    ///
    /// Rows are handed out to the rayon pool; each row is written by exactly
    /// one worker, and the world is only read.
    pub fn render(&self, world: &World) -> Canvas {
        let mut canvas = Canvas::new(self.hsize, self.vsize);
        if self.hsize == 0 || self.vsize == 0 {
            return canvas;
        }

        debug!(
            "camera: fov {:.4} rad, pixel size {:.6}, half extent {:.4}x{:.4}",
            self.field_of_view, self.pixel_size, self.half_width, self.half_height
        );
        info!(
            "Rendering {}x{} pixels, {} objects",
            self.hsize,
            self.vsize,
            world.objects.len()
        );
        let now = Instant::now();

        canvas
            .pixels_mut()
            .par_chunks_mut(self.hsize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let ray = self.ray_for_pixel(x, y);
                    *pixel = world.color_at(&ray);
                }
            });

        info!("Finished, elapsed: {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);
        canvas
    }
}

#[cfg(test)]
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

#[cfg(test)]
use crate::color::Color;
#[cfg(test)]
use crate::transform::{chain_transforms, rotation_y, translation, view_transform};
#[cfg(test)]
use crate::tuple::Vector;

#[test]
fn constructing_a_camera() {
    let c = Camera::new(160, 120, FRAC_PI_2);
    assert_eq!(160, c.hsize());
    assert_eq!(120, c.vsize());
    assert_eq!(FRAC_PI_2, c.field_of_view());
    assert_eq!(&Matrix4x4::identity(), c.transform());
}

#[test]
fn pixel_size_for_horizontal_canvas() {
    assert_approx_eq!(0.01, Camera::new(200, 125, FRAC_PI_2).pixel_size());
}

#[test]
fn pixel_size_for_vertical_canvas() {
    assert_approx_eq!(0.01, Camera::new(125, 200, FRAC_PI_2).pixel_size());
}

#[test]
fn ray_through_center_of_canvas() {
    let c = Camera::new(201, 101, FRAC_PI_2);
    let r = c.ray_for_pixel(100, 50);
    assert_approx_eq!(Point::origin(), r.origin);
    assert_approx_eq!(Vector::new(0.0, 0.0, -1.0), r.direction);
}

#[test]
fn ray_through_corner_of_canvas() {
    let c = Camera::new(201, 101, FRAC_PI_2);
    let r = c.ray_for_pixel(0, 0);
    assert_approx_eq!(Point::origin(), r.origin);
    assert_approx_eq!(Vector::new(0.66519, 0.33259, -0.66851), r.direction);
}

#[test]
fn ray_when_camera_is_transformed() {
    let mut c = Camera::new(201, 101, FRAC_PI_2);
    c.set_transform(chain_transforms(&[translation(0.0, -2.0, 5.0), rotation_y(FRAC_PI_4)]))
        .unwrap();
    let r = c.ray_for_pixel(100, 50);
    let k = 2f64.sqrt() / 2.0;
    assert_approx_eq!(Point::new(0.0, 2.0, -5.0), r.origin);
    assert_approx_eq!(Vector::new(k, 0.0, -k), r.direction);
}

#[test]
fn singular_camera_transform_is_rejected() {
    let mut c = Camera::new(10, 10, FRAC_PI_2);
    assert!(c.set_transform(Matrix4x4::new([[0.0; 4]; 4])).is_err());
    assert_eq!(&Matrix4x4::identity(), c.transform());
}

#[test]
fn rendering_a_world() {
    let w = World::default_world();
    let mut c = Camera::new(11, 11, FRAC_PI_2);
    let from = Point::new(0.0, 0.0, -5.0);
    let to = Point::origin();
    let up = Vector::new(0.0, 1.0, 0.0);
    c.set_transform(view_transform(from, to, up)).unwrap();

    let image = c.render(&w);
    assert_approx_eq!(Color::new(0.38066, 0.47583, 0.2855), image.pixel_at(5, 5));
}

#[test]
fn parallel_render_matches_pixel_loop() {
    let w = World::default_world();
    let mut c = Camera::new(16, 9, FRAC_PI_2);
    c.set_transform(view_transform(
        Point::new(1.0, 1.5, -4.0),
        Point::origin(),
        Vector::new(0.0, 1.0, 0.0),
    ))
    .unwrap();

    let image = c.render(&w);
    for y in 0..c.vsize() {
        for x in 0..c.hsize() {
            assert_eq!(w.color_at(&c.ray_for_pixel(x, y)), image.pixel_at(x, y));
        }
    }
}

#[test]
fn empty_view_renders_empty_canvas() {
    let c = Camera::new(0, 0, FRAC_PI_2);
    let image = c.render(&World::default_world());
    assert_eq!((0, 0), (image.width(), image.height()));
}
