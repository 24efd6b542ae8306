//! Rich assertion helpers with diagnostic output.
//!
//! Every failure names the context, the expected value and the actual one.

use mesh_types::{Mesh, TrianglePoints};

use crate::helpers::HarnessError;
use crate::oracle::{verify_mesh, OracleVerdict};

/// Assert exact vertex and face counts.
pub fn assert_mesh_counts(
    mesh: &Mesh,
    expected_vertices: usize,
    expected_faces: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    let (v, f) = (mesh.vertex_count(), mesh.face_count());
    if v == expected_vertices && f == expected_faces {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected V={} F={}, got V={} F={}",
                ctx, expected_vertices, expected_faces, v, f
            ),
        })
    }
}

/// Assert that `mesh` resolves to `expected` triangle by triangle, each
/// coordinate within `tol`.
pub fn assert_triangles_close(
    mesh: &Mesh,
    expected: &[TrianglePoints],
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let actual = mesh.triangles()?;
    if actual.len() != expected.len() {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] expected {} triangles, got {}",
                ctx,
                expected.len(),
                actual.len()
            ),
        });
    }
    for (t, (a, e)) in actual.iter().zip(expected).enumerate() {
        for k in 0..3 {
            for i in 0..3 {
                if (a[k][i] - e[k][i]).abs() > tol {
                    return Err(HarnessError::AssertionFailed {
                        detail: format!(
                            "[{}] triangle {} corner {}: expected {:?}, got {:?} (tol={})",
                            ctx, t, k, e[k], a[k], tol
                        ),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Assert two meshes share vertex list and faces, coordinates within `tol`.
pub fn assert_same_structure(
    a: &Mesh,
    b: &Mesh,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    if a.faces != b.faces {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] face lists differ ({} vs {} faces)",
                ctx,
                a.face_count(),
                b.face_count()
            ),
        });
    }
    assert_mesh_counts(b, a.vertex_count(), a.face_count(), ctx)?;
    for (i, (va, vb)) in a.vertices.iter().zip(&b.vertices).enumerate() {
        if (0..3).any(|k| (va[k] - vb[k]).abs() > tol) {
            return Err(HarnessError::AssertionFailed {
                detail: format!("[{}] vertex {}: {:?} vs {:?} (tol={})", ctx, i, va, vb, tol),
            });
        }
    }
    Ok(())
}

/// Assert every verdict passed, reporting all failures at once.
pub fn assert_verdicts(verdicts: &[OracleVerdict], ctx: &str) -> Result<(), HarnessError> {
    let failures: Vec<String> = verdicts
        .iter()
        .filter(|v| !v.passed)
        .map(|v| format!("{}: {}", v.oracle_name, v.detail))
        .collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::OracleFailure {
            oracle: ctx.to_string(),
            detail: failures.join("; "),
        })
    }
}

/// Assert a deserialized mesh passes every structure oracle.
pub fn assert_well_formed(mesh: &Mesh, ctx: &str) -> Result<(), HarnessError> {
    assert_verdicts(&verify_mesh(mesh), ctx)
}
