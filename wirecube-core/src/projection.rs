/// Oblique projection and depth shading
use crate::matrix::Matrix;
use crate::vector::Vector;

/// Glyph palette indexed by depth, sparse to dense.
pub const DEPTH_RAMP: [char; 10] = ['.', '.', '.', 'c', 'o', 'e', 's', '0', 'O', '@'];

/// The fixed 3×2 screen projection: ×2 horizontal stretch, unit vertical
/// pass-through, and a (0.5, -0.5) shear from the z-axis. A plain linear map,
/// no perspective division.
pub fn oblique() -> Matrix<3, 2> {
    Matrix::new([
        Vector::new([2.0, 0.0]),
        Vector::new([0.0, 1.0]),
        Vector::new([0.5, -0.5]),
    ])
}

/// Select a glyph for a point's depth. The index is `z/5 + 5`, truncated
/// toward zero and clamped to the palette bounds, so any finite z is safe.
pub fn shade(z: f64) -> char {
    let index = (z / 5.0 + 5.0) as i64;
    let index = index.clamp(0, DEPTH_RAMP.len() as i64 - 1);
    DEPTH_RAMP[index as usize]
}

/// Map a 3D point to buffer coordinates: project, flip y so world-up appears
/// up on a row-down screen, translate by the screen centre, truncate toward
/// zero. Returns (row, col).
pub fn to_screen(projection: &Matrix<3, 2>, point: Vector<3>, center: Vector<2>) -> (i32, i32) {
    let mut p = *projection * point;
    p[1] *= -1.0;
    p += center;
    (p[1] as i32, p[0] as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::rotation;

    #[test]
    fn test_shade_clamps_far_depths() {
        assert_eq!(shade(1000.0), '@');
        assert_eq!(shade(-1000.0), '.');
    }

    #[test]
    fn test_shade_midrange() {
        assert_eq!(shade(0.0), 'e');
        assert_eq!(shade(15.0), 'O');
        assert_eq!(shade(-20.0), '.');
    }

    #[test]
    fn test_shade_truncates_toward_zero() {
        // z = -3 gives index 4.4, which truncates to 4, not 5
        assert_eq!(shade(-3.0), 'o');
        assert_eq!(shade(3.0), 'e');
    }

    #[test]
    fn test_corner_projection_at_frame_zero() {
        // (10,10,10) rotated at k = 0 becomes (10,10,-10); the oblique map
        // then gives (2*10 + 0.5*(-10), 1*10 + (-0.5)*(-10)) = (15, 15).
        let rotated = rotation(0) * Vector::new([10.0, 10.0, 10.0]);
        let projected = oblique() * rotated;
        assert!((projected[0] - 15.0).abs() < 1e-9);
        assert!((projected[1] - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_screen_flips_y_and_translates() {
        let center = Vector::new([40.0, 12.0]);
        let point = Vector::new([10.0, 10.0, -10.0]);
        let (row, col) = to_screen(&oblique(), point, center);
        assert_eq!(col, 40 + 15);
        assert_eq!(row, 12 - 15);
    }

    #[test]
    fn test_to_screen_truncates_fractional_coordinates() {
        let center = Vector::new([0.0, 0.0]);
        // Projects to (2.8, 1.9) before the y flip
        let (row, col) = to_screen(&oblique(), Vector::new([1.4, 1.9, 0.0]), center);
        assert_eq!(col, 2);
        assert_eq!(row, -1);
    }
}
