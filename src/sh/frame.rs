use nalgebra::{Matrix3, RowVector3, Vector3};

/// `|z|` of a normalised direction past which the frame snaps to a world
/// axis.
pub const POLE_THRESHOLD: f64 = 0.999;

/// Dominant light direction of a coefficient vector, read from its band-1
/// coefficients as `(-c[3], -c[1], c[2])`.
///
/// Vectors without a dipole (fewer than four coefficients) yield the zero
/// vector.
pub fn optimal_direction(coeffs: &[f64]) -> Vector3<f64> {
    match coeffs {
        [_, c1, c2, c3, ..] => Vector3::new(-c3, -c1, *c2),
        _ => Vector3::zeros(),
    }
}

/// Orthonormal right-handed frame whose rows are `nx, ny, nz`, with `nz`
/// along `w`.
///
/// A zero or non-finite length direction has no preferred axis and maps to
/// the identity frame.
pub fn build_rotation(w: &Vector3<f64>) -> Matrix3<f64> {
    let norm = w.norm();
    if norm == 0.0 || !norm.is_finite() {
        return Matrix3::identity();
    }
    let nz = w / norm;

    if nz.z >= POLE_THRESHOLD {
        return Matrix3::identity();
    }
    if nz.z <= -POLE_THRESHOLD {
        // half turn about X, keeps det = +1
        return Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, //
            0.0, 0.0, -1.0,
        );
    }

    let nx = Vector3::z().cross(&nz).normalize();
    let ny = nz.cross(&nx).normalize();
    Matrix3::from_rows(&[
        RowVector3::new(nx.x, nx.y, nx.z),
        RowVector3::new(ny.x, ny.y, ny.z),
        RowVector3::new(nz.x, nz.y, nz.z),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-5;

    fn assert_orthonormal(frame: &Matrix3<f64>) {
        for i in 0..3 {
            assert_relative_eq!(frame.row(i).norm(), 1.0, epsilon = EPSILON);
            for j in (i + 1)..3 {
                assert_relative_eq!(frame.row(i).dot(&frame.row(j)), 0.0, epsilon = EPSILON);
            }
        }
        assert_relative_eq!(frame.determinant(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_frames_are_orthonormal() {
        let directions = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, -2.0, 0.5),
            Vector3::new(0.3, 0.4, -0.8),
            Vector3::new(-5.0, 1.0, 3.0),
            Vector3::new(0.2, 0.1, 0.9),
        ];
        for w in &directions {
            let frame = build_rotation(w);
            assert_orthonormal(&frame);
            let nz = w.normalize();
            assert_relative_eq!(frame.row(2).transpose(), nz, epsilon = EPSILON);
            // the frame carries its own axis onto +Z
            assert_relative_eq!(frame * nz, Vector3::z(), epsilon = EPSILON);
        }
    }

    #[test]
    fn test_pole_branches() {
        assert_eq!(build_rotation(&Vector3::new(0.0, 0.0, 1.0)), Matrix3::identity());
        assert_eq!(build_rotation(&Vector3::new(0.0, 0.0, 7.0)), Matrix3::identity());

        let south = build_rotation(&Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(south.row(0), RowVector3::new(1.0, 0.0, 0.0));
        assert_eq!(south.row(1), RowVector3::new(0.0, -1.0, 0.0));
        assert_eq!(south.row(2), RowVector3::new(0.0, 0.0, -1.0));
        assert_orthonormal(&south);

        // within the threshold of the poles
        assert_eq!(build_rotation(&Vector3::new(0.01, 0.0, 1.0)), Matrix3::identity());
        assert_orthonormal(&build_rotation(&Vector3::new(0.01, 0.0, -1.0)));
    }

    #[test]
    fn test_zero_direction_is_identity() {
        assert_eq!(build_rotation(&Vector3::zeros()), Matrix3::identity());
        assert_eq!(
            build_rotation(&Vector3::new(f64::NAN, 0.0, 1.0)),
            Matrix3::identity()
        );
    }

    #[test]
    fn test_optimal_direction_mapping() {
        let coeffs = [0.9, 0.1, 0.2, 0.3, 7.0];
        assert_eq!(optimal_direction(&coeffs), Vector3::new(-0.3, -0.1, 0.2));
        assert_eq!(optimal_direction(&[1.0]), Vector3::zeros());
    }
}
