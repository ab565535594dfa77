use crate::matrix::Matrix4x4;
use crate::transform::Transform;
use crate::tuple::{Point, Vector};

/// A half-line through the scene.
///
/// The direction is kept as given; it is not normalized, since intersecting in
/// object space relies on the scale of the transformed direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    #[inline]
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn position(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}

impl Transform for Ray {
    fn transform(&self, transformation: &Matrix4x4) -> Self {
        Ray::new(self.origin.transform(transformation), self.direction.transform(transformation))
    }
}

#[cfg(test)]
use crate::transform::{scaling, translation};

#[test]
fn creating_and_querying_a_ray() {
    let origin = Point::new(1.0, 2.0, 3.0);
    let direction = Vector::new(4.0, 5.0, 6.0);
    let ray = Ray::new(origin, direction);
    assert_eq!(origin, ray.origin);
    assert_eq!(direction, ray.direction);
}

#[test]
fn computing_a_point_from_a_distance() {
    let ray = Ray::new(Point::new(2.0, 3.0, 4.0), Vector::new(1.0, 0.0, 0.0));
    assert_approx_eq!(Point::new(2.0, 3.0, 4.0), ray.position(0.0));
    assert_approx_eq!(Point::new(3.0, 3.0, 4.0), ray.position(1.0));
    assert_approx_eq!(Point::new(1.0, 3.0, 4.0), ray.position(-1.0));
    assert_approx_eq!(Point::new(4.5, 3.0, 4.0), ray.position(2.5));
}

#[test]
fn translating_a_ray() {
    let ray = Ray::new(Point::new(1.0, 2.0, 3.0), Vector::new(0.0, 1.0, 0.0));
    let moved = ray.transform(&translation(3.0, 4.0, 5.0));
    assert_approx_eq!(Point::new(4.0, 6.0, 8.0), moved.origin);
    assert_approx_eq!(Vector::new(0.0, 1.0, 0.0), moved.direction);
}

#[test]
fn scaling_a_ray() {
    let ray = Ray::new(Point::new(1.0, 2.0, 3.0), Vector::new(0.0, 1.0, 0.0));
    let scaled = ray.transform(&scaling(2.0, 3.0, 4.0));
    assert_approx_eq!(Point::new(2.0, 6.0, 12.0), scaled.origin);
    assert_approx_eq!(Vector::new(0.0, 3.0, 0.0), scaled.direction);
}
