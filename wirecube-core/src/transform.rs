/// Per-frame rotation transform
use crate::matrix::Matrix;
use crate::vector::Vector;
use std::f64::consts::PI;

/// Angle advanced per frame, in radians. The rotation has period 128 frames.
pub const ANGLE_STEP: f64 = PI / 64.0;

/// The frame-k rotation about the world y-axis.
///
/// Entries follow the classic ASCII-cube matrix: at k = 0 this is the map
/// (x, y, z) → (x, y, -z), and the z column carries sin θ into x so depth
/// shears across the screen as the cube turns.
pub fn rotation(k: u64) -> Matrix<3, 3> {
    let angle = ANGLE_STEP * k as f64;
    let (sin, cos) = angle.sin_cos();
    Matrix::new([
        Vector::new([cos, 0.0, sin]),
        Vector::new([0.0, 1.0, 0.0]),
        Vector::new([sin, 0.0, -cos]),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_matrix_eq(a: Matrix<3, 3>, b: Matrix<3, 3>) {
        for j in 0..3 {
            for i in 0..3 {
                assert!(
                    (a[j][i] - b[j][i]).abs() < 1e-9,
                    "entry [{j}][{i}]: {} vs {}",
                    a[j][i],
                    b[j][i]
                );
            }
        }
    }

    #[test]
    fn test_rotation_at_zero_negates_z() {
        let m = rotation(0);
        let v = Vector::new([1.0, 2.0, 3.0]);
        let out = m * v;
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] - 2.0).abs() < 1e-12);
        assert!((out[2] + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_period_is_128_frames() {
        assert_matrix_eq(rotation(5), rotation(5 + 128));
        assert_matrix_eq(rotation(0), rotation(128));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vector::new([3.0, -4.0, 12.0]);
        for k in [0, 1, 17, 63, 100] {
            let out = rotation(k) * v;
            assert!((out.length() - v.length()).abs() < 1e-9, "k = {k}");
        }
    }
}
