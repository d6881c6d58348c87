//! 4x4 Matrix algebra for homogeneous 3D transforms
//!
//! Matrices are row-major and act on row vectors: a point `p` is transformed
//! as `p · M`, so translation lives in row 3 and `mul(a, b)` applies `a`
//! first, then `b`.

use crate::Vec3;

/// 4x4 matrix type (row-major, `m[row][col]`)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// All-zero matrix, also the failure value of [`inverse`]
pub const ZERO: Mat4 = [[0.0; 4]; 4];

/// Element-wise sum
pub fn add(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = ZERO;
    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = a[i][j] + b[i][j];
        }
    }
    result
}

/// Element-wise difference `a - b`
pub fn subtract(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = ZERO;
    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = a[i][j] - b[i][j];
        }
    }
    result
}

/// Multiply two 4x4 matrices: result = a * b (row by column)
///
/// With row vectors this applies `a` first, then `b`.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = ZERO;

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Determinant of the 3x3 minor left after removing `row` and `col`
fn minor(m: &Mat4, row: usize, col: usize) -> f32 {
    let mut sub = [[0.0f32; 3]; 3];
    let mut r = 0;
    for i in (0..4).filter(|&i| i != row) {
        let mut c = 0;
        for j in (0..4).filter(|&j| j != col) {
            sub[r][c] = m[i][j];
            c += 1;
        }
        r += 1;
    }

    sub[0][0] * (sub[1][1] * sub[2][2] - sub[1][2] * sub[2][1])
        - sub[0][1] * (sub[1][0] * sub[2][2] - sub[1][2] * sub[2][0])
        + sub[0][2] * (sub[1][0] * sub[2][1] - sub[1][1] * sub[2][0])
}

/// Signed cofactor `(-1)^(row+col) * minor(row, col)`
fn cofactor(m: &Mat4, row: usize, col: usize) -> f32 {
    let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
    sign * minor(m, row, col)
}

/// Determinant by cofactor expansion along the first row
pub fn determinant(m: Mat4) -> f32 {
    (0..4).map(|j| m[0][j] * cofactor(&m, 0, j)).sum()
}

/// Invert a matrix via the adjugate
///
/// Returns [`ZERO`] when the determinant is exactly zero. This is a direct,
/// non-pivoted cofactor inverse; near-singular input loses precision.
///
/// # Example
/// ```
/// use affine3d_math::mat4::{inverse, is_zero};
/// let singular = [[1.0, 2.0, 3.0, 4.0], [1.0, 2.0, 3.0, 4.0], [0.0; 4], [0.0, 0.0, 0.0, 1.0]];
/// assert!(is_zero(&inverse(singular)));
/// ```
pub fn inverse(m: Mat4) -> Mat4 {
    let det = determinant(m);
    if det == 0.0 {
        return ZERO;
    }

    let mut cofactors = ZERO;
    for i in 0..4 {
        for j in 0..4 {
            cofactors[i][j] = cofactor(&m, i, j);
        }
    }

    let adjugate = transpose(cofactors);
    let mut result = ZERO;
    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = adjugate[i][j] / det;
        }
    }
    result
}

/// True when every entry is exactly zero (the failed-[`inverse`] sentinel)
pub fn is_zero(m: &Mat4) -> bool {
    m.iter().flatten().all(|&e| e == 0.0)
}

/// Transform a point by a matrix, including the projective divide
///
/// `w = v · col3 + m[3][3]`; each output component is divided by `w`.
/// A zero `w` is not guarded and yields infinities or NaN.
pub fn transform_point(v: Vec3, m: Mat4) -> Vec3 {
    let w = v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + m[3][3];
    Vec3::new(
        (v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + m[3][0]) / w,
        (v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + m[3][1]) / w,
        (v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + m[3][2]) / w,
    )
}

/// Transform a direction by the upper 3x3 block (no translation, no divide)
pub fn transform_vector(v: Vec3, m: Mat4) -> Vec3 {
    Vec3::new(
        v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0],
        v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1],
        v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2],
    )
}

/// Get a row of the matrix as a Vec3 (first three columns)
pub fn get_row(m: Mat4, row: usize) -> Vec3 {
    Vec3::new(m[row][0], m[row][1], m[row][2])
}
