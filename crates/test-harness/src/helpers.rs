//! Helper functions: error type and mesh math.

use std::collections::HashMap;

use mesh_types::Mesh;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("STL error: {0}")]
    Stl(#[from] stl_codec::StlError),

    #[error("mesh error: {0}")]
    Mesh(#[from] mesh_types::MeshError),

    #[error("unexpected output: {detail}")]
    UnexpectedOutput { detail: String },
}

// ── Decoding Shortcuts ──────────────────────────────────────────────────────

/// Deserialize to meshes without metadata.
pub fn read_meshes<'a>(
    input: impl Into<stl_codec::StlInput<'a>>,
) -> Result<Vec<Mesh>, HarnessError> {
    stl_codec::deserialize(input, None, &stl_codec::DeserializeOptions::bare())?
        .into_meshes()
        .ok_or_else(|| HarnessError::UnexpectedOutput {
            detail: "expected meshes, got a script".to_string(),
        })
}

// ── Mesh Math Utilities ─────────────────────────────────────────────────────

/// Compute axis-aligned bounding box of a mesh. Returns (min, max).
///
/// An empty mesh yields `([INF; 3], [-INF; 3])`.
pub fn mesh_bounding_box(mesh: &Mesh) -> ([f64; 3], [f64; 3]) {
    let mut min = [f64::INFINITY; 3];
    let mut max = [f64::NEG_INFINITY; 3];
    for v in &mesh.vertices {
        for i in 0..3 {
            min[i] = min[i].min(v[i]);
            max[i] = max[i].max(v[i]);
        }
    }
    (min, max)
}

/// Compute the volume enclosed by a triangle mesh using the divergence theorem.
///
/// For a closed (watertight) mesh, this returns the enclosed volume.
/// For open meshes, the result may be meaningless.
pub fn mesh_volume(mesh: &Mesh) -> f64 {
    let mut volume = 0.0f64;
    for face in &mesh.faces {
        let [p0, p1, p2] = face.map(|i| mesh.vertices[i as usize]);
        // Signed volume of tetrahedron formed by triangle and origin
        volume += p0[0] * (p1[1] * p2[2] - p2[1] * p1[2])
            + p1[0] * (p2[1] * p0[2] - p0[1] * p2[2])
            + p2[0] * (p0[1] * p1[2] - p1[1] * p0[2]);
    }
    (volume / 6.0).abs()
}

/// Compute the total surface area of a triangle mesh.
pub fn mesh_surface_area(mesh: &Mesh) -> f64 {
    mesh.faces
        .iter()
        .map(|face| {
            let [a, b, c] = face.map(|i| mesh_types::Vec3::from_array(mesh.vertices[i as usize]));
            (b - a).cross(&(c - a)).length() / 2.0
        })
        .sum()
}

/// Count mesh edges: returns (total_edges, boundary_edges).
///
/// A boundary edge is shared by exactly 1 triangle (not 2).
/// For a watertight mesh, boundary_edges should be 0.
pub fn count_mesh_edges(mesh: &Mesh) -> (usize, usize) {
    let mut edge_counts: HashMap<(u32, u32), usize> = HashMap::new();
    for &[a, b, c] in &mesh.faces {
        for (p, q) in [(a, b), (b, c), (c, a)] {
            *edge_counts.entry((p.min(q), p.max(q))).or_insert(0) += 1;
        }
    }
    let boundary = edge_counts.values().filter(|&&n| n == 1).count();
    (edge_counts.len(), boundary)
}
