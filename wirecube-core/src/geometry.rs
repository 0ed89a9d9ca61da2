/// Geometry primitives for wireframe rendering
use crate::matrix::Matrix;
use crate::vector::Vector;

/// A line segment between two 3D points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vector<3>,
    pub to: Vector<3>,
}

impl Segment {
    pub fn new(from: Vector<3>, to: Vector<3>) -> Self {
        Self { from, to }
    }

    /// Apply a linear transform to both endpoints.
    pub fn transformed(&self, m: &Matrix<3, 3>) -> Self {
        Self {
            from: *m * self.from,
            to: *m * self.to,
        }
    }

    pub fn length(&self) -> f64 {
        (self.to - self.from).length()
    }
}

/// The 12 edges of an axis-aligned cube of the given side length, centred on
/// the origin. Corners lie in {-side/2, +side/2}³; the enumeration order is
/// fixed but the edges are independent draws.
pub fn cube_edges(side: f64) -> [Segment; 12] {
    let h = side / 2.0;
    let corner = |x: f64, y: f64, z: f64| Vector::new([x, y, z]);

    [
        // Bottom face (y = -h)
        Segment::new(corner(-h, -h, -h), corner(h, -h, -h)),
        Segment::new(corner(-h, -h, -h), corner(-h, -h, h)),
        Segment::new(corner(h, -h, -h), corner(h, -h, h)),
        Segment::new(corner(-h, -h, h), corner(h, -h, h)),
        // Top face (y = +h)
        Segment::new(corner(-h, h, -h), corner(h, h, -h)),
        Segment::new(corner(-h, h, -h), corner(-h, h, h)),
        Segment::new(corner(h, h, -h), corner(h, h, h)),
        Segment::new(corner(-h, h, h), corner(h, h, h)),
        // Vertical edges
        Segment::new(corner(-h, h, -h), corner(-h, -h, -h)),
        Segment::new(corner(-h, h, h), corner(-h, -h, h)),
        Segment::new(corner(h, h, h), corner(h, -h, h)),
        Segment::new(corner(h, h, -h), corner(h, -h, -h)),
    ]
}
