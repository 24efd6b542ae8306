//! Per-solid vertex deduplication.
//!
//! Vertices merge only when their coordinates are bit-identical, so `0.0`
//! and `-0.0` stay distinct and nothing is snapped to a tolerance.

use std::collections::HashMap;

use mesh_types::{Mesh, MeshMetadata, Orientation, Solid};
use tracing::{debug, warn};

/// Vertex arena for one mesh under construction.
#[derive(Debug, Default)]
struct VertexIndex {
    lookup: HashMap<[u64; 3], u32>,
    vertices: Vec<[f64; 3]>,
}

impl VertexIndex {
    fn with_capacity(n: usize) -> Self {
        Self {
            lookup: HashMap::with_capacity(n),
            vertices: Vec::with_capacity(n),
        }
    }

    fn index_of(&mut self, v: [f64; 3]) -> u32 {
        let key = [v[0].to_bits(), v[1].to_bits(), v[2].to_bits()];
        let next = self.vertices.len() as u32;
        let index = *self.lookup.entry(key).or_insert(next);
        if index == next {
            self.vertices.push(v);
        }
        index
    }
}

/// Build one mesh from a solid's triangles, in file order.
///
/// Returns `None` for a solid without triangles. `solid_index` is 1-based
/// and only used for metadata.
pub fn build_mesh(solid: &Solid, solid_index: usize, add_metadata: bool) -> Option<Mesh> {
    if solid.is_empty() {
        return None;
    }

    let mut index = VertexIndex::with_capacity(solid.triangle_count() * 3);
    let faces: Vec<[u32; 3]> = solid
        .triangles
        .iter()
        .map(|tri| {
            [
                index.index_of(tri.vertices[0]),
                index.index_of(tri.vertices[1]),
                index.index_of(tri.vertices[2]),
            ]
        })
        .collect();

    let mut mesh = Mesh::new(index.vertices, faces).with_orientation(Orientation::Inward);
    if add_metadata {
        mesh = mesh.with_metadata(MeshMetadata {
            solid_index,
            triangle_count: solid.triangle_count(),
            name: solid.name.clone(),
        });
    }
    Some(mesh)
}

/// Build meshes for every non-empty solid, preserving solid order.
pub fn build_meshes(solids: &[Solid], add_metadata: bool) -> Vec<Mesh> {
    if let [only] = solids {
        if only.is_empty() {
            warn!(name = ?only.name, triangles = 0, "STL file holds a single empty solid");
        }
    }

    let meshes: Vec<Mesh> = solids
        .iter()
        .enumerate()
        .filter_map(|(i, solid)| build_mesh(solid, i + 1, add_metadata))
        .collect();

    debug!(
        solids = solids.len(),
        meshes = meshes.len(),
        "meshes built"
    );
    meshes
}
