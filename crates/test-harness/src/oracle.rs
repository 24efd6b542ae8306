//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets tests collect all failures in one pass.

use mesh_types::Mesh;

use crate::helpers::{count_mesh_edges, mesh_volume};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Structure Oracles ───────────────────────────────────────────────────────

/// Every face index references a vertex of the same mesh.
pub fn check_face_indices(mesh: &Mesh) -> OracleVerdict {
    match mesh.validate() {
        Ok(()) => OracleVerdict::pass(
            "face_indices",
            format!(
                "all {} faces reference {} vertices",
                mesh.face_count(),
                mesh.vertex_count()
            ),
        ),
        Err(e) => OracleVerdict::fail("face_indices", e.to_string()),
    }
}

/// Indices are handed out 0, 1, 2, … in the order vertices first appear.
pub fn check_first_seen_order(mesh: &Mesh) -> OracleVerdict {
    let mut next = 0u32;
    for (face, tri) in mesh.faces.iter().enumerate() {
        for &i in tri {
            if i > next {
                return OracleVerdict::fail(
                    "first_seen_order",
                    format!("face {} uses index {} before index {}", face, i, next),
                );
            }
            if i == next {
                next += 1;
            }
        }
    }
    if next as usize != mesh.vertex_count() {
        return OracleVerdict::fail(
            "first_seen_order",
            format!(
                "{} vertices stored, {} referenced",
                mesh.vertex_count(),
                next
            ),
        );
    }
    OracleVerdict::pass("first_seen_order", format!("{} vertices in order", next))
}

/// No edge is used by only one triangle.
pub fn check_watertight(mesh: &Mesh) -> OracleVerdict {
    let (total, boundary) = count_mesh_edges(mesh);
    if boundary == 0 {
        OracleVerdict::pass_val(
            "watertight",
            format!("all {} edges shared by two or more faces", total),
            total as f64,
        )
    } else {
        OracleVerdict::fail_val(
            "watertight",
            format!("{} of {} edges are boundary edges", boundary, total),
            boundary as f64,
        )
    }
}

// ── Geometry Oracles ────────────────────────────────────────────────────────

/// Enclosed volume within `tol` of `expected`.
pub fn check_volume(mesh: &Mesh, expected: f64, tol: f64) -> OracleVerdict {
    let volume = mesh_volume(mesh);
    if (volume - expected).abs() <= tol {
        OracleVerdict::pass_val(
            "volume",
            format!("volume {:.6} (expected {:.6})", volume, expected),
            volume,
        )
    } else {
        OracleVerdict::fail_val(
            "volume",
            format!(
                "volume {:.6}, expected {:.6} (tol={})",
                volume, expected, tol
            ),
            volume,
        )
    }
}

/// Run the structure oracles on one mesh.
pub fn verify_mesh(mesh: &Mesh) -> Vec<OracleVerdict> {
    vec![
        check_face_indices(mesh),
        check_first_seen_order(mesh),
        check_watertight(mesh),
    ]
}
