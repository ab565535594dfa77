use log::warn;

use crate::error::{Error, Result};
use crate::intersection::{Intersection, Intersections};
use crate::material::Material;
use crate::matrix::Matrix4x4;
use crate::ray::Ray;
use crate::transform::Transform;
use crate::tuple::{Point, Vector};

/// Unit sphere at the origin, placed in the world by its transform.
///
/// Size and position always come from the transform, so every intersection
/// is solved against the same unit sphere in object space. The inverse is
/// computed once, when the transform is set.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    transform: Matrix4x4,
    inverse: Option<Matrix4x4>,
    pub material: Material,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            transform: Matrix4x4::identity(),
            inverse: Some(Matrix4x4::identity()),
            material: Material::default(),
        }
    }
}

impl Sphere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: Matrix4x4) -> Self {
        let mut sphere = Self::default();
        sphere.set_transform(transform);
        sphere
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    #[inline]
    pub fn transform(&self) -> &Matrix4x4 {
        &self.transform
    }

    /// Replaces the object-to-world transform.
    ///
    /// A singular transform is kept, but the sphere then never intersects
    /// anything.
    pub fn set_transform(&mut self, transform: Matrix4x4) {
        self.inverse = match transform.inverse() {
            Ok(inverse) => Some(inverse),
            Err(err) => {
                warn!("sphere will be skipped during intersection: {}", err);
                None
            }
        };
        self.transform = transform;
    }

    /// All points where `ray` crosses the sphere, nearest first.
    ///
    /// A tangent ray yields two equal values; a miss yields none.
    pub fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        let inverse = match self.inverse {
            Some(inverse) => inverse,
            None => return Vec::new(),
        };

        let ray = ray.transform(&inverse);
        let sphere_to_ray = ray.origin - Point::origin();

        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * ray.direction.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Vec::new();
        }

        let sqrt = discriminant.sqrt();
        let denominator = 2.0 * a;

        vec![
            Intersection::new((-b - sqrt) / denominator, self),
            Intersection::new((-b + sqrt) / denominator, self),
        ]
    }

    /// World-space unit normal at a world-space point on the surface.
    pub fn normal_at(&self, world_point: Point) -> Result<Vector> {
        let inverse = self.inverse.ok_or(Error::NotInvertible)?;

        let object_point = inverse * world_point;
        let object_normal = object_point - Point::origin();
        // Normals are covectors: they go through the inverse transpose.
        let world_normal = inverse.transpose() * object_normal;

        Ok(world_normal.normalize())
    }
}

#[cfg(test)]
use std::f64::consts::PI;

#[cfg(test)]
use crate::transform::{chain_transforms, rotation_z, scaling, translation};

#[cfg(test)]
fn ts(xs: &Intersections) -> Vec<f64> {
    xs.iter().map(|x| x.t).collect()
}

#[test]
fn ray_intersects_sphere_at_two_points() {
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    let s = Sphere::new();
    let xs = s.intersect(&ray);
    assert_eq!(vec![4.0, 6.0], ts(&xs));
    assert!(std::ptr::eq(&s, xs[0].object));
    assert!(std::ptr::eq(&s, xs[1].object));
}

#[test]
fn ray_tangent_to_sphere() {
    let ray = Ray::new(Point::new(0.0, 1.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    assert_eq!(vec![5.0, 5.0], ts(&Sphere::new().intersect(&ray)));
}

#[test]
fn ray_misses_sphere() {
    let ray = Ray::new(Point::new(0.0, 2.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    assert!(Sphere::new().intersect(&ray).is_empty());
}

#[test]
fn ray_originates_inside_sphere() {
    let ray = Ray::new(Point::origin(), Vector::new(0.0, 0.0, 1.0));
    assert_eq!(vec![-1.0, 1.0], ts(&Sphere::new().intersect(&ray)));
}

#[test]
fn sphere_behind_ray() {
    let ray = Ray::new(Point::new(0.0, 0.0, 5.0), Vector::new(0.0, 0.0, 1.0));
    assert_eq!(vec![-6.0, -4.0], ts(&Sphere::new().intersect(&ray)));
}

#[test]
fn intersecting_scaled_sphere() {
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    let s = Sphere::with_transform(scaling(2.0, 2.0, 2.0));
    let xs = s.intersect(&ray);
    assert_eq!(2, xs.len());
    assert_approx_eq!(3.0, xs[0].t);
    assert_approx_eq!(7.0, xs[1].t);
}

#[test]
fn intersecting_translated_sphere() {
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    let s = Sphere::with_transform(translation(5.0, 0.0, 0.0));
    assert!(s.intersect(&ray).is_empty());
}

#[test]
fn singular_transform_skips_intersection() {
    let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::new(0.0, 0.0, 1.0));
    let s = Sphere::with_transform(scaling(0.0, 1.0, 1.0));
    assert!(s.intersect(&ray).is_empty());
    assert!(s.normal_at(Point::origin()).is_err());
}

#[test]
fn default_transform_is_identity() {
    assert_eq!(&Matrix4x4::identity(), Sphere::new().transform());
}

#[test]
fn normals_on_unit_sphere() {
    let s = Sphere::new();
    let k = 3f64.sqrt() / 3.0;
    assert_approx_eq!(Vector::new(1.0, 0.0, 0.0), s.normal_at(Point::new(1.0, 0.0, 0.0)).unwrap());
    assert_approx_eq!(Vector::new(0.0, 1.0, 0.0), s.normal_at(Point::new(0.0, 1.0, 0.0)).unwrap());
    assert_approx_eq!(Vector::new(0.0, 0.0, 1.0), s.normal_at(Point::new(0.0, 0.0, 1.0)).unwrap());

    let n = s.normal_at(Point::new(k, k, k)).unwrap();
    assert_approx_eq!(Vector::new(k, k, k), n);
    assert_approx_eq!(n.normalize(), n);
}

#[test]
fn normal_on_translated_sphere() {
    let s = Sphere::with_transform(translation(0.0, 1.0, 0.0));
    let n = s.normal_at(Point::new(0.0, 1.70711, -0.70711)).unwrap();
    assert_approx_eq!(Vector::new(0.0, 0.70711, -0.70711), n);
}

#[test]
fn normal_on_squashed_and_rotated_sphere() {
    let s = Sphere::with_transform(chain_transforms(&[rotation_z(PI / 5.0), scaling(1.0, 0.5, 1.0)]));
    let k = 2f64.sqrt() / 2.0;
    let n = s.normal_at(Point::new(0.0, k, -k)).unwrap();
    assert_approx_eq!(Vector::new(0.0, 0.97014, -0.24254), n);
}
