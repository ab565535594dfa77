//! Points and vectors.
//!
//! Both are three floats; what tells them apart is the homogeneous `w` they
//! carry into a matrix product (1 for a point, 0 for a vector). Keeping them
//! as separate types makes `point + point` a compile error.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::float::{self, ApproxEq};

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 3]")]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalize(&self) -> Vector {
        *self / self.magnitude()
    }

    /// Mirrors `self` around `normal`: `in - normal * 2 * dot(in, normal)`.
    #[inline]
    pub fn reflect(&self, normal: &Vector) -> Vector {
        *self - *normal * (2.0 * self.dot(normal))
    }
}

impl From<[f64; 3]> for Point {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Point::new(v[0], v[1], v[2])
    }
}

impl From<[f64; 3]> for Vector {
    #[inline]
    fn from(v: [f64; 3]) -> Self {
        Vector::new(v[0], v[1], v[2])
    }
}

// Operations shared by both kinds: scaling, division and negation keep the kind.
macro_rules! impl_shared_ops {
    ($t:ident) => {
        impl Mul<f64> for $t {
            type Output = $t;

            #[inline]
            fn mul(self, factor: f64) -> Self::Output {
                $t::new(self.x * factor, self.y * factor, self.z * factor)
            }
        }

        impl Div<f64> for $t {
            type Output = $t;

            #[inline]
            fn div(self, divisor: f64) -> Self::Output {
                $t::new(self.x / divisor, self.y / divisor, self.z / divisor)
            }
        }

        impl Neg for $t {
            type Output = $t;

            #[inline]
            fn neg(self) -> Self::Output {
                $t::new(-self.x, -self.y, -self.z)
            }
        }

        impl ApproxEq for $t {
            fn approx_eq(&self, other: &$t) -> bool {
                float::approx_eq(self.x, other.x)
                    && float::approx_eq(self.y, other.y)
                    && float::approx_eq(self.z, other.z)
            }
        }
    };
}

impl_shared_ops!(Point);
impl_shared_ops!(Vector);

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, v: Vector) -> Self::Output {
        Point::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, v: Vector) -> Self::Output {
        Point::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Point) -> Self::Output {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, other: Vector) -> Self::Output {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Vector) -> Self::Output {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

#[cfg(test)]
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn adding_vector_to_point_moves_the_point() {
    let p = Point::new(3.0, -2.0, 5.0) + Vector::new(-2.0, 3.0, 1.0);
    assert_approx_eq!(Point::new(1.0, 1.0, 6.0), p);
}

#[test]
fn subtracting_points_gives_vector_between_them() {
    let v = Point::new(3.0, 2.0, 1.0) - Point::new(5.0, 6.0, 7.0);
    assert_approx_eq!(Vector::new(-2.0, -4.0, -6.0), v);
}

#[test]
fn subtracting_vector_from_point() {
    let p = Point::new(3.0, 2.0, 1.0) - Vector::new(5.0, 6.0, 7.0);
    assert_approx_eq!(Point::new(-2.0, -4.0, -6.0), p);
}

#[test]
fn negating_and_scaling() {
    let v = Vector::new(1.0, -2.0, 3.0);
    assert_approx_eq!(Vector::new(-1.0, 2.0, -3.0), -v);
    assert_approx_eq!(Vector::new(3.5, -7.0, 10.5), v * 3.5);
    assert_approx_eq!(Vector::new(0.5, -1.0, 1.5), v / 2.0);
}

#[test]
fn magnitude_of_vectors() {
    assert_approx_eq!(1.0, Vector::new(0.0, 1.0, 0.0).magnitude());
    assert_approx_eq!(14f64.sqrt(), Vector::new(-1.0, -2.0, -3.0).magnitude());
}

#[test]
fn normalizing_vectors() {
    assert_approx_eq!(Vector::new(1.0, 0.0, 0.0), Vector::new(4.0, 0.0, 0.0).normalize());
    assert_approx_eq!(
        Vector::new(0.26726, 0.53452, 0.80178),
        Vector::new(1.0, 2.0, 3.0).normalize()
    );
}

#[test]
fn normalized_vectors_have_unit_length() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let v = Vector::new(
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
            rng.gen_range(-100.0..100.0),
        );
        if v.magnitude() < 1e-3 {
            continue;
        }
        assert_approx_eq!(1.0, v.normalize().magnitude());
    }
}

#[test]
fn dot_and_cross_products() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(2.0, 3.0, 4.0);
    assert_approx_eq!(20.0, a.dot(&b));
    assert_approx_eq!(Vector::new(-1.0, 2.0, -1.0), a.cross(&b));
    assert_approx_eq!(Vector::new(1.0, -2.0, 1.0), b.cross(&a));
}

#[test]
fn reflecting_off_flat_and_slanted_surfaces() {
    let flat = Vector::new(1.0, -1.0, 0.0).reflect(&Vector::new(0.0, 1.0, 0.0));
    assert_approx_eq!(Vector::new(1.0, 1.0, 0.0), flat);

    let k = 2f64.sqrt() / 2.0;
    let slanted = Vector::new(0.0, -1.0, 0.0).reflect(&Vector::new(k, k, 0.0));
    assert_approx_eq!(Vector::new(1.0, 0.0, 0.0), slanted);
}
