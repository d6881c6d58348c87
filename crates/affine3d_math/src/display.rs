//! Fixed-column text rendering of vectors and matrices
//!
//! Produces the numeric tables a debug overlay prints next to a scene. Only the
//! strings are built here; putting them on screen is the caller's job.

use crate::mat4::Mat4;
use crate::Vec3;

/// Width of one numeric column, in characters
pub const COLUMN_WIDTH: usize = 8;

/// `x`, `y`, `z` with two decimals in fixed columns, followed by `label`
pub fn vector_row(v: Vec3, label: &str) -> String {
    let mut out = String::new();
    for c in v.to_array() {
        out.push_str(&format!("{:<width$}", format!("{:.2}", c), width = COLUMN_WIDTH));
    }
    out.push_str(label);
    out
}

/// `label` on its own line, then the four matrix rows
pub fn matrix_table(m: &Mat4, label: &str) -> String {
    let mut out = String::from(label);
    for row in m {
        out.push('\n');
        for (j, e) in row.iter().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:6.2}", e));
        }
    }
    out
}
