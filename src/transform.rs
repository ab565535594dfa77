//! Affine transform builders.
//!
//! Every builder returns a [`Matrix4x4`] meant to be applied by
//! left-multiplying a column point or vector. Vectors have `w = 0`, so the
//! translation column never reaches them.

use crate::matrix::Matrix4x4;
use crate::tuple::{Point, Vector};

pub trait Transform {
    fn transform(&self, transformation: &Matrix4x4) -> Self;
}

impl Transform for Point {
    #[inline]
    fn transform(&self, transformation: &Matrix4x4) -> Self {
        *transformation * *self
    }
}

impl Transform for Vector {
    #[inline]
    fn transform(&self, transformation: &Matrix4x4) -> Self {
        *transformation * *self
    }
}

pub fn translation(x: f64, y: f64, z: f64) -> Matrix4x4 {
    Matrix4x4::new([
        [1.0, 0.0, 0.0, x],
        [0.0, 1.0, 0.0, y],
        [0.0, 0.0, 1.0, z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix4x4 {
    Matrix4x4::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_x(radians: f64) -> Matrix4x4 {
    let (sin, cos) = radians.sin_cos();
    Matrix4x4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, cos, -sin, 0.0],
        [0.0, sin, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_y(radians: f64) -> Matrix4x4 {
    let (sin, cos) = radians.sin_cos();
    Matrix4x4::new([
        [cos, 0.0, sin, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [-sin, 0.0, cos, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

pub fn rotation_z(radians: f64) -> Matrix4x4 {
    let (sin, cos) = radians.sin_cos();
    Matrix4x4::new([
        [cos, -sin, 0.0, 0.0],
        [sin, cos, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Each coordinate moves in proportion to the other two, e.g. `xy` moves x
/// by y.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix4x4 {
    Matrix4x4::new([
        [1.0, xy, xz, 0.0],
        [yx, 1.0, yz, 0.0],
        [zx, zy, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Composes transforms given in the order they should be applied.
///
/// `chain_transforms(&[a, b, c])` is `c * b * a`: applying the result to a
/// point is the same as applying `a`, then `b`, then `c`.
pub fn chain_transforms(transformations: &[Matrix4x4]) -> Matrix4x4 {
    transformations
        .iter()
        .rev()
        .fold(Matrix4x4::identity(), |chain, t| chain * *t)
}

/// Orients the world relative to an eye at `from` looking at `to`.
pub fn view_transform(from: Point, to: Point, up: Vector) -> Matrix4x4 {
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize());
    let true_up = left.cross(&forward);

    let orientation = Matrix4x4::new([
        [left.x, left.y, left.z, 0.0],
        [true_up.x, true_up.y, true_up.z, 0.0],
        [-forward.x, -forward.y, -forward.z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    orientation * translation(-from.x, -from.y, -from.z)
}

#[cfg(test)]
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

#[cfg(test)]
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn translating_points_but_not_vectors() {
    let t = translation(5.0, -3.0, 2.0);
    let p = Point::new(-3.0, 4.0, 5.0);
    assert_approx_eq!(Point::new(2.0, 1.0, 7.0), p.transform(&t));
    assert_approx_eq!(Point::new(-8.0, 7.0, 3.0), p.transform(&t.inverse().unwrap()));

    let v = Vector::new(-3.0, 4.0, 5.0);
    assert_approx_eq!(v, v.transform(&t));
}

#[test]
fn scaling_points_and_vectors() {
    let s = scaling(2.0, 3.0, 4.0);
    assert_approx_eq!(Point::new(-8.0, 18.0, 32.0), s * Point::new(-4.0, 6.0, 8.0));
    assert_approx_eq!(Vector::new(-8.0, 18.0, 32.0), s * Vector::new(-4.0, 6.0, 8.0));
    assert_approx_eq!(
        Vector::new(-2.0, 2.0, 2.0),
        s.inverse().unwrap() * Vector::new(-4.0, 6.0, 8.0)
    );
    assert_approx_eq!(Point::new(-2.0, 3.0, 4.0), scaling(-1.0, 1.0, 1.0) * Point::new(2.0, 3.0, 4.0));
}

#[test]
fn rotating_around_each_axis() {
    let k = 2f64.sqrt() / 2.0;

    let p = Point::new(0.0, 1.0, 0.0);
    assert_approx_eq!(Point::new(0.0, k, k), rotation_x(FRAC_PI_4) * p);
    assert_approx_eq!(Point::new(0.0, 0.0, 1.0), rotation_x(FRAC_PI_2) * p);
    assert_approx_eq!(Point::new(0.0, k, -k), rotation_x(FRAC_PI_4).inverse().unwrap() * p);

    let p = Point::new(0.0, 0.0, 1.0);
    assert_approx_eq!(Point::new(k, 0.0, k), rotation_y(FRAC_PI_4) * p);
    assert_approx_eq!(Point::new(1.0, 0.0, 0.0), rotation_y(FRAC_PI_2) * p);

    let p = Point::new(0.0, 1.0, 0.0);
    assert_approx_eq!(Point::new(-k, k, 0.0), rotation_z(FRAC_PI_4) * p);
    assert_approx_eq!(Point::new(-1.0, 0.0, 0.0), rotation_z(FRAC_PI_2) * p);
}

#[test]
fn shearing_each_pair_of_axes() {
    let p = Point::new(2.0, 3.0, 4.0);
    assert_approx_eq!(Point::new(5.0, 3.0, 4.0), shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0) * p);
    assert_approx_eq!(Point::new(6.0, 3.0, 4.0), shearing(0.0, 1.0, 0.0, 0.0, 0.0, 0.0) * p);
    assert_approx_eq!(Point::new(2.0, 5.0, 4.0), shearing(0.0, 0.0, 1.0, 0.0, 0.0, 0.0) * p);
    assert_approx_eq!(Point::new(2.0, 7.0, 4.0), shearing(0.0, 0.0, 0.0, 1.0, 0.0, 0.0) * p);
    assert_approx_eq!(Point::new(2.0, 3.0, 6.0), shearing(0.0, 0.0, 0.0, 0.0, 1.0, 0.0) * p);
    assert_approx_eq!(Point::new(2.0, 3.0, 7.0), shearing(0.0, 0.0, 0.0, 0.0, 0.0, 1.0) * p);
}

#[test]
fn chained_transforms_apply_first_listed_first() {
    let p = Point::new(1.0, 0.0, 1.0);
    let a = rotation_x(FRAC_PI_2);
    let b = scaling(5.0, 5.0, 5.0);
    let c = translation(10.0, 5.0, 7.0);

    let p2 = a * p;
    assert_approx_eq!(Point::new(1.0, -1.0, 0.0), p2);
    let p3 = b * p2;
    assert_approx_eq!(Point::new(5.0, -5.0, 0.0), p3);
    let p4 = c * p3;
    assert_approx_eq!(Point::new(15.0, 0.0, 7.0), p4);

    assert_approx_eq!(p4, chain_transforms(&[a, b, c]) * p);
    assert_approx_eq!(c * b * a, chain_transforms(&[a, b, c]));
}

#[test]
fn empty_chain_is_identity() {
    assert_approx_eq!(Matrix4x4::identity(), chain_transforms(&[]));
}

#[test]
fn chain_matches_sequential_application() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..200 {
        let len = rng.gen_range(1..6);
        let transforms: Vec<Matrix4x4> = (0..len)
            .map(|_| match rng.gen_range(0..6) {
                0 => translation(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)),
                1 => scaling(rng.gen_range(0.2..3.0), rng.gen_range(0.2..3.0), rng.gen_range(0.2..3.0)),
                2 => rotation_x(rng.gen_range(-3.0..3.0)),
                3 => rotation_y(rng.gen_range(-3.0..3.0)),
                4 => rotation_z(rng.gen_range(-3.0..3.0)),
                _ => shearing(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                ),
            })
            .collect();
        let p = Point::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));

        let sequential = transforms.iter().fold(p, |p, t| p.transform(t));
        let chained = p.transform(&chain_transforms(&transforms));
        assert!(
            (sequential - chained).magnitude() < 1e-6 * (1.0 + (sequential - Point::origin()).magnitude()),
            "{:?} != {:?}",
            sequential,
            chained
        );
    }
}

#[test]
fn default_view_orientation_is_identity() {
    let t = view_transform(Point::origin(), Point::new(0.0, 0.0, -1.0), Vector::new(0.0, 1.0, 0.0));
    assert_approx_eq!(Matrix4x4::identity(), t);
}

#[test]
fn looking_in_positive_z_mirrors_the_world() {
    let t = view_transform(Point::origin(), Point::new(0.0, 0.0, 1.0), Vector::new(0.0, 1.0, 0.0));
    assert_approx_eq!(scaling(-1.0, 1.0, -1.0), t);
}

#[test]
fn view_transform_moves_the_world() {
    let t = view_transform(Point::new(0.0, 0.0, 8.0), Point::origin(), Vector::new(0.0, 1.0, 0.0));
    assert_approx_eq!(translation(0.0, 0.0, -8.0), t);
}

#[test]
fn arbitrary_view_transform() {
    let t = view_transform(Point::new(1.0, 3.0, 2.0), Point::new(4.0, -2.0, 8.0), Vector::new(1.0, 1.0, 0.0));
    let expected = Matrix4x4::new([
        [-0.50709, 0.50709, 0.67612, -2.36643],
        [0.76772, 0.60609, 0.12122, -2.82843],
        [-0.35857, 0.59761, -0.71714, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_approx_eq!(expected, t);
}
