use std::ops::{Index, IndexMut};

use crate::tuple::{Point, Vector};

/// Homogeneous column used when a point or vector meets a matrix.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Vec4([f64; 4]);

impl Vec4 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Vec4([x, y, z, w])
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.0[3]
    }

    #[inline]
    pub fn dot(&self, other: &Vec4) -> f64 {
        self.0.iter().zip(other.0.iter()).fold(0.0, |s, (a, b)| s + a * b)
    }
}

impl From<[f64; 4]> for Vec4 {
    #[inline]
    fn from(v: [f64; 4]) -> Self {
        Vec4(v)
    }
}

impl From<Point> for Vec4 {
    #[inline]
    fn from(p: Point) -> Self {
        Vec4::new(p.x, p.y, p.z, 1.0)
    }
}

impl From<Vector> for Vec4 {
    #[inline]
    fn from(v: Vector) -> Self {
        Vec4::new(v.x, v.y, v.z, 0.0)
    }
}

impl From<Vec4> for Point {
    #[inline]
    fn from(v: Vec4) -> Self {
        Point::new(v.x(), v.y(), v.z())
    }
}

impl From<Vec4> for Vector {
    #[inline]
    fn from(v: Vec4) -> Self {
        Vector::new(v.x(), v.y(), v.z())
    }
}

impl Index<usize> for Vec4 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

#[test]
fn points_and_vectors_carry_their_w() {
    assert_eq!(1.0, Vec4::from(Point::new(4.3, -4.2, 3.1)).w());
    assert_eq!(0.0, Vec4::from(Vector::new(4.3, -4.2, 3.1)).w());
}
