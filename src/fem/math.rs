//! Matrix routines for frame analysis

use nalgebra::{DMatrix, DVector, Matrix3, SMatrix, SVector};

use super::error::{FEAError, FEAResult};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat3 = Matrix3<f64>;

/// 12x12 matrix for member stiffness
pub type Mat12 = SMatrix<f64, 12, 12>;
/// 12-element vector for member end forces/displacements
pub type Vec12 = SVector<f64, 12>;

/// Gauss-Legendre abscissae and weights on [-1, 1]
const GAUSS_3: [(f64, f64); 3] = [
    (-0.774_596_669_241_483_4, 5.0 / 9.0),
    (0.0, 8.0 / 9.0),
    (0.774_596_669_241_483_4, 5.0 / 9.0),
];

/// Direction cosines of a member running from `i_node` to `j_node`.
///
/// Rows are the local x, y and z axes. Local z is kept parallel to the
/// global XZ plane; vertical members take global X as local z.
pub fn member_direction_cosines(i_node: &[f64; 3], j_node: &[f64; 3]) -> FEAResult<Mat3> {
    let dx = j_node[0] - i_node[0];
    let dy = j_node[1] - i_node[1];
    let dz = j_node[2] - i_node[2];
    let length = (dx * dx + dy * dy + dz * dz).sqrt();

    if !(length > 1e-10) {
        return Err(FEAError::InvalidGeometry(format!(
            "member from {:?} to {:?} has zero length",
            i_node, j_node
        )));
    }

    let x = [dx / length, dy / length, dz / length];

    let (y, z) = if x[0].abs() < 1e-10 && x[2].abs() < 1e-10 {
        if x[1] > 0.0 {
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0])
        } else {
            ([1.0, 0.0, 0.0], [0.0, 0.0, 1.0])
        }
    } else {
        // z = x cross global Y
        let z_raw = [-x[2], 0.0, x[0]];
        let z_len = (z_raw[0] * z_raw[0] + z_raw[2] * z_raw[2]).sqrt();
        let z = [z_raw[0] / z_len, 0.0, z_raw[2] / z_len];
        let y = [
            z[1] * x[2] - z[2] * x[1],
            z[2] * x[0] - z[0] * x[2],
            z[0] * x[1] - z[1] * x[0],
        ];
        (y, z)
    };

    Ok(Mat3::new(
        x[0], x[1], x[2],
        y[0], y[1], y[2],
        z[0], z[1], z[2],
    ))
}

/// 12x12 local-to-global transformation built from the direction cosines
pub fn member_transformation_matrix(i_node: &[f64; 3], j_node: &[f64; 3]) -> FEAResult<Mat12> {
    let r = member_direction_cosines(i_node, j_node)?;
    let mut t = Mat12::zeros();
    for block in 0..4 {
        let offset = block * 3;
        t.fixed_view_mut::<3, 3>(offset, offset).copy_from(&r);
    }
    Ok(t)
}

/// Local elastic stiffness of a 3D frame element
pub fn member_local_stiffness(e: f64, g: f64, a: f64, iy: f64, iz: f64, j: f64, length: f64) -> Mat12 {
    let l = length;
    let ea = e * a / l;
    let gj = g * j / l;
    let (y3, y2, y1) = (e * iy / l.powi(3), e * iy / l.powi(2), e * iy / l);
    let (z3, z2, z1) = (e * iz / l.powi(3), e * iz / l.powi(2), e * iz / l);

    #[rustfmt::skip]
    let data = [
        ea,   0.0,        0.0,        0.0, 0.0,       0.0,       -ea,  0.0,        0.0,        0.0, 0.0,       0.0,
        0.0,  12.0 * z3,  0.0,        0.0, 0.0,       6.0 * z2,  0.0,  -12.0 * z3, 0.0,        0.0, 0.0,       6.0 * z2,
        0.0,  0.0,        12.0 * y3,  0.0, -6.0 * y2, 0.0,       0.0,  0.0,        -12.0 * y3, 0.0, -6.0 * y2, 0.0,
        0.0,  0.0,        0.0,        gj,  0.0,       0.0,       0.0,  0.0,        0.0,        -gj, 0.0,       0.0,
        0.0,  0.0,        -6.0 * y2,  0.0, 4.0 * y1,  0.0,       0.0,  0.0,        6.0 * y2,   0.0, 2.0 * y1,  0.0,
        0.0,  6.0 * z2,   0.0,        0.0, 0.0,       4.0 * z1,  0.0,  -6.0 * z2,  0.0,        0.0, 0.0,       2.0 * z1,
        -ea,  0.0,        0.0,        0.0, 0.0,       0.0,       ea,   0.0,        0.0,        0.0, 0.0,       0.0,
        0.0,  -12.0 * z3, 0.0,        0.0, 0.0,       -6.0 * z2, 0.0,  12.0 * z3,  0.0,        0.0, 0.0,       -6.0 * z2,
        0.0,  0.0,        -12.0 * y3, 0.0, 6.0 * y2,  0.0,       0.0,  0.0,        12.0 * y3,  0.0, 6.0 * y2,  0.0,
        0.0,  0.0,        0.0,        -gj, 0.0,       0.0,       0.0,  0.0,        0.0,        gj,  0.0,       0.0,
        0.0,  0.0,        -6.0 * y2,  0.0, 2.0 * y1,  0.0,       0.0,  0.0,        6.0 * y2,   0.0, 4.0 * y1,  0.0,
        0.0,  6.0 * z2,   0.0,        0.0, 0.0,       2.0 * z1,  0.0,  -6.0 * z2,  0.0,        0.0, 0.0,       4.0 * z1,
    ];

    Mat12::from_row_slice(&data)
}

/// Fixed end reactions for a point load `p` at distance `a` from the
/// i-end, acting along local axis `direction` (0 = x, 1 = y, 2 = z)
pub fn fer_point_load(p: f64, a: f64, length: f64, direction: usize) -> Vec12 {
    let l = length;
    let b = l - a;
    let l2 = l * l;
    let l3 = l2 * l;

    let mut fer = Vec12::zeros();
    match direction {
        0 => {
            fer[0] = -p * b / l;
            fer[6] = -p * a / l;
        }
        1 => {
            fer[1] = -p * b * b * (3.0 * a + b) / l3;
            fer[5] = -p * a * b * b / l2;
            fer[7] = -p * a * a * (a + 3.0 * b) / l3;
            fer[11] = p * a * a * b / l2;
        }
        2 => {
            fer[2] = -p * b * b * (3.0 * a + b) / l3;
            fer[4] = p * a * b * b / l2;
            fer[8] = -p * a * a * (a + 3.0 * b) / l3;
            fer[10] = -p * a * a * b / l2;
        }
        _ => {}
    }
    fer
}

/// Fixed end reactions for a linearly varying load from `w1` at `x1` to
/// `w2` at `x2`, both measured from the i-end.
///
/// The point-load kernel is cubic in the load position, so three Gauss
/// points integrate the trapezoid exactly.
pub fn fer_linear_load(w1: f64, w2: f64, x1: f64, x2: f64, length: f64, direction: usize) -> Vec12 {
    let span = x2 - x1;
    if span <= 0.0 {
        return Vec12::zeros();
    }
    let mid = (x1 + x2) / 2.0;
    let half = span / 2.0;

    GAUSS_3.iter().fold(Vec12::zeros(), |acc, &(xi, weight)| {
        let x = mid + half * xi;
        let w = w1 + (w2 - w1) * (x - x1) / span;
        acc + fer_point_load(w * weight * half, x, length, direction)
    })
}

/// Solve `a * x = b`, rejecting factorisations whose smallest pivot falls
/// below `tolerance` times the largest
pub fn solve_checked(a: &Mat, b: &Vec, tolerance: f64) -> FEAResult<Vec> {
    let lu = a.clone().lu();
    let u = lu.u();
    let pivots: std::vec::Vec<f64> = (0..u.nrows()).map(|i| u[(i, i)].abs()).collect();
    let max_pivot = pivots.iter().copied().fold(0.0_f64, f64::max);

    if let Some((index, pivot)) = pivots
        .iter()
        .copied()
        .enumerate()
        .find(|(_, pivot)| !(*pivot > tolerance * max_pivot))
    {
        return Err(FEAError::Unstable(format!(
            "pivot {} of {} is {:e} against a largest pivot of {:e}",
            index,
            pivots.len(),
            pivot,
            max_pivot
        )));
    }

    lu.solve(b).ok_or(FEAError::SingularMatrix)
}

/// Solve using LU decomposition without a conditioning check
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transformation_matrix_horizontal() {
        let t = member_transformation_matrix(&[0.0, 0.0, 0.0], &[10.0, 0.0, 0.0]).unwrap();
        assert_relative_eq!(t[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(t[(1, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(t[(2, 2)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(t[(9, 9)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transformation_matrix_vertical() {
        let t = member_transformation_matrix(&[0.0, 0.0, 0.0], &[0.0, 10.0, 0.0]).unwrap();
        assert_relative_eq!(t[(0, 1)], 1.0, epsilon = 1e-12);
        let r = member_direction_cosines(&[0.0, 0.0, 0.0], &[0.0, 10.0, 0.0]).unwrap();
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_length_member() {
        assert!(member_transformation_matrix(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]).is_err());
    }

    #[test]
    fn test_local_stiffness_symmetry() {
        let k = member_local_stiffness(200e9, 77e9, 0.01, 1e-4, 2e-4, 1e-5, 10.0);
        for i in 0..12 {
            for j in 0..12 {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_fer_point_load_midspan() {
        let fer = fer_point_load(-10.0, 2.0, 4.0, 1);
        assert_relative_eq!(fer[1], 5.0, epsilon = 1e-12);
        assert_relative_eq!(fer[7], 5.0, epsilon = 1e-12);
        assert_relative_eq!(fer[5], 5.0, epsilon = 1e-12);
        assert_relative_eq!(fer[11], -5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fer_uniform_matches_closed_form() {
        let (w, l) = (-3.0, 6.0);
        let fer = fer_linear_load(w, w, 0.0, l, l, 1);
        assert_relative_eq!(fer[1], -w * l / 2.0, epsilon = 1e-9);
        assert_relative_eq!(fer[7], -w * l / 2.0, epsilon = 1e-9);
        assert_relative_eq!(fer[5], -w * l * l / 12.0, epsilon = 1e-9);
        assert_relative_eq!(fer[11], w * l * l / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fer_triangular_matches_closed_form() {
        // zero at i, w at j: end shears 3wL/20 and 7wL/20, moments wL²/30 and wL²/20
        let (w, l) = (-20.0, 5.0);
        let fer = fer_linear_load(0.0, w, 0.0, l, l, 1);
        assert_relative_eq!(fer[1], -3.0 * w * l / 20.0, epsilon = 1e-9);
        assert_relative_eq!(fer[7], -7.0 * w * l / 20.0, epsilon = 1e-9);
        assert_relative_eq!(fer[5], -w * l * l / 30.0, epsilon = 1e-9);
        assert_relative_eq!(fer[11], w * l * l / 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_solve_checked_rejects_singular() {
        let a = Mat::from_row_slice(2, 2, &[1.0, -1.0, -1.0, 1.0]);
        let b = Vec::from_vec(vec![1.0, 0.0]);
        assert!(matches!(solve_checked(&a, &b, 1e-12), Err(FEAError::Unstable(_))));

        let a = Mat::from_row_slice(2, 2, &[2.0, -1.0, -1.0, 2.0]);
        let x = solve_checked(&a, &b, 1e-12).unwrap();
        assert_relative_eq!(x[0], 2.0 / 3.0, epsilon = 1e-12);
    }
}
