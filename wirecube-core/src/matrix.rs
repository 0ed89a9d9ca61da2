/// Fixed-dimension column-major matrix type
use crate::vector::Vector;
use std::ops::{Index, IndexMut, Mul};

/// A matrix of C columns by R rows, stored as C column vectors.
///
/// `matrix[j]` yields the j-th column. As a linear map it sends `Vector<C>`
/// to `Vector<R>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const C: usize, const R: usize> {
    columns: [Vector<R>; C],
}

impl<const C: usize, const R: usize> Matrix<C, R> {
    pub fn new(columns: [Vector<R>; C]) -> Self {
        Self { columns }
    }

    pub fn zero() -> Self {
        Self {
            columns: [Vector::zero(); C],
        }
    }
}

impl<const C: usize, const R: usize> Default for Matrix<C, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const C: usize, const R: usize> Index<usize> for Matrix<C, R> {
    type Output = Vector<R>;

    fn index(&self, j: usize) -> &Vector<R> {
        &self.columns[j]
    }
}

impl<const C: usize, const R: usize> IndexMut<usize> for Matrix<C, R> {
    fn index_mut(&mut self, j: usize) -> &mut Vector<R> {
        &mut self.columns[j]
    }
}

impl<const C: usize, const R: usize> Mul<Vector<C>> for Matrix<C, R> {
    type Output = Vector<R>;

    /// Linear map: `out[i] = Σ_j self[j][i] * v[j]`.
    fn mul(self, v: Vector<C>) -> Vector<R> {
        let mut out = Vector::zero();
        for j in 0..C {
            for i in 0..R {
                out[i] += self.columns[j][i] * v[j];
            }
        }
        out
    }
}

impl<const K: usize, const C: usize, const R: usize> Mul<Matrix<K, C>> for Matrix<C, R> {
    type Output = Matrix<K, R>;

    /// Composition of linear maps: `(self * rhs) * v == self * (rhs * v)`.
    ///
    /// Each result column is the image of the corresponding column of `rhs`,
    /// which gives the standard multiply for any shapes, square or not.
    fn mul(self, rhs: Matrix<K, C>) -> Matrix<K, R> {
        let mut out = Matrix::zero();
        for j in 0..K {
            out[j] = self * rhs[j];
        }
        out
    }
}
