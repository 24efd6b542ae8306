use serde::{Deserialize, Serialize};

/// Winding convention of a mesh's faces.
///
/// STL readers keep the file's vertex order verbatim and tag the result
/// `Inward`; consumers that want outward-facing polygons reverse each face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Inward,
    Outward,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Inward => "inward",
            Orientation::Outward => "outward",
        }
    }
}

/// Diagnostic data attached to a mesh on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshMetadata {
    /// 1-based position of the source solid within its file.
    pub solid_index: usize,
    /// Number of triangles the source solid contained.
    pub triangle_count: usize,
    /// Name declared after `solid`, if any.
    pub name: Option<String>,
}

/// A corner triple in mesh winding order.
pub type TrianglePoints = [[f64; 3]; 3];

/// Errors from structurally invalid meshes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    IndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("face {face} has {len} vertices, at least 3 are required")]
    DegeneratePolygon { face: usize, len: usize },
}

/// Indexed triangle mesh: one per non-empty solid of an STL file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Unique vertex positions, in first-seen order.
    pub vertices: Vec<[f64; 3]>,
    /// Index triples into `vertices`.
    pub faces: Vec<[u32; 3]>,
    pub orientation: Orientation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MeshMetadata>,
}

impl Mesh {
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            faces,
            orientation: Orientation::Inward,
            metadata: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_metadata(mut self, metadata: MeshMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check that every face index points into `vertices`.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (face, tri) in self.faces.iter().enumerate() {
            for &index in tri {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfRange {
                        face,
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Face corners in stored order.
    pub fn triangles(&self) -> Result<Vec<TrianglePoints>, MeshError> {
        self.validate()?;
        Ok(self
            .faces
            .iter()
            .map(|&[a, b, c]| {
                [
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                ]
            })
            .collect())
    }

    /// Face corners in outward order: faces of an `Inward` mesh are reversed.
    pub fn polygons(&self) -> Result<Vec<TrianglePoints>, MeshError> {
        let mut tris = self.triangles()?;
        if self.orientation == Orientation::Inward {
            for tri in &mut tris {
                tri.reverse();
            }
        }
        Ok(tris)
    }
}

/// Polygon mesh with faces of any arity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyhedron {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<u32>>,
}

impl Polyhedron {
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<Vec<u32>>) -> Self {
        Self { vertices, faces }
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for (face, poly) in self.faces.iter().enumerate() {
            if poly.len() < 3 {
                return Err(MeshError::DegeneratePolygon {
                    face,
                    len: poly.len(),
                });
            }
            if let Some(&index) = poly.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::IndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Fan-triangulate every face around its first vertex.
    pub fn triangles(&self) -> Result<Vec<TrianglePoints>, MeshError> {
        self.validate()?;
        let mut out = Vec::with_capacity(self.triangle_count());
        for poly in &self.faces {
            let first = self.vertices[poly[0] as usize];
            for pair in poly[1..].windows(2) {
                out.push([
                    first,
                    self.vertices[pair[0] as usize],
                    self.vertices[pair[1] as usize],
                ]);
            }
        }
        Ok(out)
    }

    /// Number of triangles fan triangulation yields.
    pub fn triangle_count(&self) -> usize {
        self.faces.iter().map(|f| f.len().saturating_sub(2)).sum()
    }
}
