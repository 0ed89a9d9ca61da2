/// Fixed-dimension vector type for the rendering pipeline
use std::ops::{AddAssign, Index, IndexMut, Mul, Sub};

/// A D-dimensional vector of f64 components.
///
/// The dimension is a compile-time parameter; only D = 2 and D = 3 are used
/// by the renderer, but the type is fully generic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const D: usize> {
    data: [f64; D],
}

impl<const D: usize> Vector<D> {
    pub fn new(data: [f64; D]) -> Self {
        Self { data }
    }

    pub fn zero() -> Self {
        Self { data: [0.0; D] }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.data.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Unit-length copy, or `None` for the zero vector.
    pub fn normalized(&self) -> Option<Self> {
        let l = self.length();
        if l == 0.0 {
            return None;
        }
        let mut out = *self;
        for c in &mut out.data {
            *c /= l;
        }
        Some(out)
    }
}

impl<const D: usize> Default for Vector<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize> Index<usize> for Vector<D> {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl<const D: usize> IndexMut<usize> for Vector<D> {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl<const D: usize> Sub for Vector<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self.data;
        for (c, r) in out.iter_mut().zip(rhs.data) {
            *c -= r;
        }
        Self { data: out }
    }
}

impl<const D: usize> AddAssign for Vector<D> {
    fn add_assign(&mut self, rhs: Self) {
        for (c, r) in self.data.iter_mut().zip(rhs.data) {
            *c += r;
        }
    }
}

impl<const D: usize> Mul<f64> for Vector<D> {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        let mut out = self.data;
        for c in &mut out {
            *c *= s;
        }
        Self { data: out }
    }
}
