use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut, Mul};

use crate::error::{Error, Result};
use crate::float::{self, ApproxEq};
use crate::tuple::{Point, Vector};
use crate::vec4::Vec4;

/// Rectangular matrix of any shape, stored row-major.
///
/// Only 4x4 matrices take part in transforms (see [`Matrix4x4`]); the smaller
/// shapes show up as submatrices while expanding cofactors.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Matrix {
    pub fn zero(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        }
    }

    pub fn from_rows<const C: usize>(rows: &[[f64; C]]) -> Self {
        Self {
            rows: rows.len(),
            columns: C,
            values: rows.iter().flat_map(|row| row.iter().copied()).collect(),
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut m = Self::zero(size, size);
        for i in 0..size {
            m[(i, i)] = 1.0;
        }
        m
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.columns != other.rows {
            return Err(Error::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut out = Matrix::zero(self.rows, other.columns);
        for i in 0..self.rows {
            for j in 0..other.columns {
                out[(i, j)] = (0..self.columns).map(|k| self[(i, k)] * other[(k, j)]).sum();
            }
        }

        Ok(out)
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zero(self.columns, self.rows);
        for i in 0..self.rows {
            for j in 0..self.columns {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Copy of the matrix without the given row and column.
    ///
    /// # Panics
    ///
    /// Panics if `(row, column)` is outside the matrix.
    pub fn submatrix(&self, row: usize, column: usize) -> Matrix {
        assert!(
            row < self.rows && column < self.columns,
            "({}, {}) is outside a {}x{} matrix",
            row,
            column,
            self.rows,
            self.columns
        );
        let mut values = Vec::with_capacity(self.rows.saturating_sub(1) * self.columns.saturating_sub(1));
        for i in (0..self.rows).filter(|&i| i != row) {
            for j in (0..self.columns).filter(|&j| j != column) {
                values.push(self[(i, j)]);
            }
        }

        Matrix {
            rows: self.rows.saturating_sub(1),
            columns: self.columns.saturating_sub(1),
            values,
        }
    }

    pub fn minor(&self, row: usize, column: usize) -> Result<f64> {
        self.ensure_square()?;
        self.ensure_contains(row, column)?;
        Ok(self.submatrix(row, column).expand_determinant())
    }

    pub fn cofactor(&self, row: usize, column: usize) -> Result<f64> {
        self.ensure_square()?;
        self.ensure_contains(row, column)?;
        Ok(self.expand_cofactor(row, column))
    }

    pub fn determinant(&self) -> Result<f64> {
        self.ensure_square()?;
        Ok(self.expand_determinant())
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant().map_or(false, |det| det != 0.0)
    }

    /// Inverse by cofactors: `inverse[c][r] = cofactor(r, c) / det`. Writing
    /// to the swapped index transposes the cofactor matrix in the same pass.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(Error::NotInvertible);
        }

        let mut out = Matrix::zero(self.rows, self.columns);
        for r in 0..self.rows {
            for c in 0..self.columns {
                out[(c, r)] = self.expand_cofactor(r, c) / det;
            }
        }

        Ok(out)
    }

    fn ensure_square(&self) -> Result<()> {
        if self.rows == self.columns {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                left: self.shape(),
                right: (self.columns, self.rows),
            })
        }
    }

    fn ensure_contains(&self, row: usize, column: usize) -> Result<()> {
        if row < self.rows && column < self.columns {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: (row, column),
                shape: self.shape(),
            })
        }
    }

    fn expand_cofactor(&self, row: usize, column: usize) -> f64 {
        let minor = self.submatrix(row, column).expand_determinant();
        if (row + column) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    // Square matrices only; callers check the shape first.
    fn expand_determinant(&self) -> f64 {
        match self.rows {
            0 => 1.0,
            1 => self.values[0],
            2 => self.values[0] * self.values[3] - self.values[1] * self.values[2],
            _ => (0..self.columns)
                .map(|c| self[(0, c)] * self.expand_cofactor(0, c))
                .sum(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.values[row * self.columns + column]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        &mut self.values[row * self.columns + column]
    }
}

impl ApproxEq for Matrix {
    fn approx_eq(&self, other: &Matrix) -> bool {
        self.shape() == other.shape()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(&a, &b)| float::approx_eq(a, b))
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.columns {
                write!(f, "{:9.5} ", self[(i, j)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fixed 4x4 matrix stored as four row vectors.
///
/// Index notation is: i, j - row, column.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Matrix4x4([Vec4; 4]);

impl Matrix4x4 {
    pub fn new(v: [[f64; 4]; 4]) -> Self {
        Matrix4x4([Vec4::from(v[0]), Vec4::from(v[1]), Vec4::from(v[2]), Vec4::from(v[3])])
    }

    pub fn identity() -> Self {
        Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub fn column(&self, j: usize) -> Vec4 {
        Vec4::new(self.0[0][j], self.0[1][j], self.0[2][j], self.0[3][j])
    }

    pub fn transpose(&self) -> Self {
        Matrix4x4([self.column(0), self.column(1), self.column(2), self.column(3)])
    }

    pub fn determinant(&self) -> f64 {
        Matrix::from(*self).expand_determinant()
    }

    pub fn inverse(&self) -> Result<Self> {
        Matrix::from(*self).inverse().and_then(Matrix4x4::try_from)
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4::identity()
    }
}

impl From<Matrix4x4> for Matrix {
    fn from(m: Matrix4x4) -> Self {
        let mut out = Matrix::zero(4, 4);
        for i in 0..4 {
            for j in 0..4 {
                out[(i, j)] = m.0[i][j];
            }
        }
        out
    }
}

impl TryFrom<Matrix> for Matrix4x4 {
    type Error = Error;

    fn try_from(m: Matrix) -> Result<Self> {
        if m.shape() != (4, 4) {
            return Err(Error::DimensionMismatch {
                left: m.shape(),
                right: (4, 4),
            });
        }

        let mut out = Matrix4x4::identity();
        for i in 0..4 {
            for j in 0..4 {
                out.0[i][j] = m[(i, j)];
            }
        }
        Ok(out)
    }
}

impl Mul<Vec4> for Matrix4x4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, vec: Vec4) -> Self::Output {
        Vec4::new(self.0[0].dot(&vec), self.0[1].dot(&vec), self.0[2].dot(&vec), self.0[3].dot(&vec))
    }
}

impl Mul<Point> for Matrix4x4 {
    type Output = Point;

    #[inline]
    fn mul(self, p: Point) -> Self::Output {
        (self * Vec4::from(p)).into()
    }
}

impl Mul<Vector> for Matrix4x4 {
    type Output = Vector;

    #[inline]
    fn mul(self, v: Vector) -> Self::Output {
        (self * Vec4::from(v)).into()
    }
}

impl Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;

    fn mul(self, o: Matrix4x4) -> Self::Output {
        let mut out = Matrix4x4::new([[0.0; 4]; 4]);

        for i in 0..4 {
            for j in 0..4 {
                out.0[i][j] = self.0[i].dot(&o.column(j));
            }
        }

        out
    }
}

impl ApproxEq for Matrix4x4 {
    fn approx_eq(&self, other: &Matrix4x4) -> bool {
        (0..4).all(|i| (0..4).all(|j| float::approx_eq(self.0[i][j], other.0[i][j])))
    }
}

impl Display for Matrix4x4 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&Matrix::from(*self), f)
    }
}

#[cfg(test)]
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(test)]
fn random_matrix(rng: &mut StdRng) -> Matrix4x4 {
    let mut m = [[0.0; 4]; 4];
    for row in m.iter_mut() {
        for v in row.iter_mut() {
            *v = rng.gen_range(-10.0..10.0);
        }
    }
    Matrix4x4::new(m)
}

#[cfg(test)]
fn random_invertible_matrix(rng: &mut StdRng) -> Matrix4x4 {
    loop {
        let m = random_matrix(rng);
        if m.determinant().abs() > 1.0 {
            return m;
        }
    }
}

#[test]
fn constructing_and_inspecting() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0, 4.0], [5.5, 6.5, 7.5, 8.5], [9.0, 10.0, 11.0, 12.0]]);
    assert_eq!(3, m.rows());
    assert_eq!(4, m.columns());
    assert_eq!(1.0, m[(0, 0)]);
    assert_eq!(7.5, m[(1, 2)]);
    assert_eq!(12.0, m[(2, 3)]);
}

#[test]
fn equality_is_tolerant_and_shape_aware() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from_rows(&[[1.000001, 2.0], [3.0, 4.0]]);
    let c = Matrix::from_rows(&[[1.0, 2.0, 0.0], [3.0, 4.0, 0.0]]);
    assert_approx_eq!(a, b);
    assert!(!a.approx_eq(&c));
}

#[test]
fn multiplying_general_matrices() {
    let a = Matrix::from_rows(&[
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 8.0, 7.0, 6.0],
        [5.0, 4.0, 3.0, 2.0],
    ]);
    let b = Matrix::from_rows(&[
        [-2.0, 1.0, 2.0, 3.0],
        [3.0, 2.0, 1.0, -1.0],
        [4.0, 3.0, 6.0, 5.0],
        [1.0, 2.0, 7.0, 8.0],
    ]);
    let expected = Matrix::from_rows(&[
        [20.0, 22.0, 50.0, 48.0],
        [44.0, 54.0, 114.0, 108.0],
        [40.0, 58.0, 110.0, 102.0],
        [16.0, 26.0, 46.0, 42.0],
    ]);
    assert_approx_eq!(expected, a.multiply(&b).unwrap());
}

#[test]
fn multiplying_by_a_column() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 4.0]]);
    let col = Matrix::from_rows(&[[1.0], [2.0], [3.0]]);
    let out = a.multiply(&col).unwrap();
    assert_eq!((2, 1), (out.rows(), out.columns()));
    assert_approx_eq!(Matrix::from_rows(&[[14.0], [22.0]]), out);
}

#[test]
fn multiplying_mismatched_shapes_fails() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from_rows(&[[1.0, 2.0, 3.0]]);
    match a.multiply(&b) {
        Err(Error::DimensionMismatch { left, right }) => {
            assert_eq!((2, 2), left);
            assert_eq!((1, 3), right);
        }
        other => panic!("expected a dimension mismatch, got {:?}", other),
    }
}

#[test]
fn multiplying_by_identity() {
    let a = Matrix4x4::new([
        [0.0, 1.0, 2.0, 4.0],
        [1.0, 2.0, 4.0, 8.0],
        [2.0, 4.0, 8.0, 16.0],
        [4.0, 8.0, 16.0, 32.0],
    ]);
    assert_approx_eq!(a, a * Matrix4x4::identity());
}

#[test]
fn mul_matrix_vec() {
    let a = Matrix4x4::new([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 4.0, 4.0, 2.0],
        [8.0, 6.0, 4.0, 1.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(Vec4::new(18.0, 24.0, 33.0, 1.0), a * Vec4::new(1.0, 2.0, 3.0, 1.0));
    assert_approx_eq!(Point::new(18.0, 24.0, 33.0), a * Point::new(1.0, 2.0, 3.0));
}

#[test]
fn transposing() {
    let a = Matrix::from_rows(&[
        [0.0, 9.0, 3.0, 0.0],
        [9.0, 8.0, 0.0, 8.0],
        [1.0, 8.0, 5.0, 3.0],
        [0.0, 0.0, 5.0, 8.0],
    ]);
    let expected = Matrix::from_rows(&[
        [0.0, 9.0, 1.0, 0.0],
        [9.0, 8.0, 8.0, 0.0],
        [3.0, 0.0, 5.0, 5.0],
        [0.0, 8.0, 3.0, 8.0],
    ]);
    assert_approx_eq!(expected, a.transpose());
    assert_approx_eq!(a, a.transpose().transpose());
    assert_approx_eq!(Matrix4x4::identity(), Matrix4x4::identity().transpose());

    let wide = Matrix::from_rows(&[[1.0, 2.0, 3.0]]);
    assert_eq!((3, 1), (wide.transpose().rows(), wide.transpose().columns()));
}

#[test]
fn fixed_transpose_matches_general_transpose() {
    let mut rng = StdRng::seed_from_u64(11);
    let m = random_matrix(&mut rng);
    assert_approx_eq!(Matrix::from(m).transpose(), Matrix::from(m.transpose()));
    assert_approx_eq!(m, m.transpose().transpose());
}

#[test]
fn determinant_of_2x2() {
    let a = Matrix::from_rows(&[[1.0, 5.0], [-3.0, 2.0]]);
    assert_approx_eq!(17.0, a.determinant().unwrap());
}

#[test]
fn submatrices_drop_a_row_and_column() {
    let a = Matrix::from_rows(&[[1.0, 5.0, 0.0], [-3.0, 2.0, 7.0], [0.0, 6.0, -3.0]]);
    assert_approx_eq!(Matrix::from_rows(&[[-3.0, 2.0], [0.0, 6.0]]), a.submatrix(0, 2));

    let b = Matrix::from_rows(&[
        [-6.0, 1.0, 1.0, 6.0],
        [-8.0, 5.0, 8.0, 6.0],
        [-1.0, 0.0, 8.0, 2.0],
        [-7.0, 1.0, -1.0, 1.0],
    ]);
    let expected = Matrix::from_rows(&[[-6.0, 1.0, 6.0], [-8.0, 8.0, 6.0], [-7.0, -1.0, 1.0]]);
    assert_approx_eq!(expected, b.submatrix(2, 1));
}

#[test]
fn minors_and_cofactors_of_3x3() {
    let a = Matrix::from_rows(&[[3.0, 5.0, 0.0], [2.0, -1.0, -7.0], [6.0, -1.0, 5.0]]);
    assert_approx_eq!(-12.0, a.minor(0, 0).unwrap());
    assert_approx_eq!(-12.0, a.cofactor(0, 0).unwrap());
    assert_approx_eq!(25.0, a.minor(1, 0).unwrap());
    assert_approx_eq!(-25.0, a.cofactor(1, 0).unwrap());
}

#[test]
fn determinant_of_3x3() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 6.0], [-5.0, 8.0, -4.0], [2.0, 6.0, 4.0]]);
    assert_approx_eq!(56.0, a.cofactor(0, 0).unwrap());
    assert_approx_eq!(12.0, a.cofactor(0, 1).unwrap());
    assert_approx_eq!(-46.0, a.cofactor(0, 2).unwrap());
    assert_approx_eq!(-196.0, a.determinant().unwrap());
}

#[test]
fn determinant_of_4x4() {
    let a = Matrix::from_rows(&[
        [-2.0, -8.0, 3.0, 5.0],
        [-3.0, 1.0, 7.0, 3.0],
        [1.0, 2.0, -9.0, 6.0],
        [-6.0, 7.0, 7.0, -9.0],
    ]);
    assert_approx_eq!(690.0, a.cofactor(0, 0).unwrap());
    assert_approx_eq!(447.0, a.cofactor(0, 1).unwrap());
    assert_approx_eq!(210.0, a.cofactor(0, 2).unwrap());
    assert_approx_eq!(51.0, a.cofactor(0, 3).unwrap());
    assert_approx_eq!(-4071.0, a.determinant().unwrap());
}

#[test]
fn cofactor_outside_the_matrix_fails() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 6.0], [-5.0, 8.0, -4.0], [2.0, 6.0, 4.0]]);
    match a.cofactor(5, 5) {
        Err(Error::IndexOutOfRange { index, shape }) => {
            assert_eq!((5, 5), index);
            assert_eq!((3, 3), shape);
        }
        other => panic!("expected an out of range index, got {:?}", other),
    }
    assert!(a.minor(0, 3).is_err());
    assert!(a.cofactor(3, 0).is_err());
    assert_approx_eq!(-46.0, a.cofactor(0, 2).unwrap());
}

#[test]
#[should_panic]
fn submatrix_outside_the_matrix_panics() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 6.0], [-5.0, 8.0, -4.0], [2.0, 6.0, 4.0]]);
    a.submatrix(5, 5);
}

#[test]
fn determinant_of_non_square_fails() {
    let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert!(a.determinant().is_err());
    assert!(a.cofactor(0, 0).is_err());
    assert!(!a.is_invertible());
}

#[test]
fn singular_matrices_are_not_invertible() {
    let a = Matrix4x4::new([
        [-4.0, 2.0, -2.0, -3.0],
        [9.0, 6.0, 2.0, 6.0],
        [0.0, -5.0, 1.0, -5.0],
        [0.0, 0.0, 0.0, 0.0],
    ]);
    assert_approx_eq!(0.0, a.determinant());
    assert!(!Matrix::from(a).is_invertible());
    match a.inverse() {
        Err(Error::NotInvertible) => {}
        other => panic!("expected a singular matrix, got {:?}", other),
    }
}

#[test]
fn inverting_a_matrix() {
    let a = Matrix::from_rows(&[
        [-5.0, 2.0, 6.0, -8.0],
        [1.0, -5.0, 1.0, 8.0],
        [7.0, 7.0, -6.0, -7.0],
        [1.0, -3.0, 7.0, 4.0],
    ]);
    let b = a.inverse().unwrap();
    assert_approx_eq!(532.0, a.determinant().unwrap());
    assert_approx_eq!(-160.0, a.cofactor(2, 3).unwrap());
    assert_approx_eq!(-160.0 / 532.0, b[(3, 2)]);
    assert_approx_eq!(105.0, a.cofactor(3, 2).unwrap());
    assert_approx_eq!(105.0 / 532.0, b[(2, 3)]);
    let expected = Matrix::from_rows(&[
        [0.21805, 0.45113, 0.24060, -0.04511],
        [-0.80827, -1.45677, -0.44361, 0.52068],
        [-0.07895, -0.22368, -0.05263, 0.19737],
        [-0.52256, -0.81391, -0.30075, 0.30639],
    ]);
    assert_approx_eq!(expected, b);
}

#[test]
fn inverse_identity() {
    let i = Matrix4x4::identity();
    assert_approx_eq!(i, i.inverse().unwrap());
}

#[test]
fn product_with_inverse_is_identity() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let a = random_invertible_matrix(&mut rng);
        let inv = a.inverse().unwrap();
        assert_approx_eq!(Matrix4x4::identity(), a * inv);
    }
}

#[test]
fn multiplying_product_by_inverse_recovers_factor() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let a = random_matrix(&mut rng);
        let b = random_invertible_matrix(&mut rng);
        let c = a * b;
        assert_approx_eq!(a, c * b.inverse().unwrap());
    }
}

#[test]
fn general_and_fixed_products_agree() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_matrix(&mut rng);
    let b = random_matrix(&mut rng);
    let general = Matrix::from(a).multiply(&Matrix::from(b)).unwrap();
    assert_approx_eq!(general, Matrix::from(a * b));
}

#[test]
fn converting_wrong_shape_to_fixed_fails() {
    assert!(Matrix4x4::try_from(Matrix::identity(3)).is_err());
    assert_approx_eq!(Matrix4x4::identity(), Matrix4x4::try_from(Matrix::identity(4)).unwrap());
}
