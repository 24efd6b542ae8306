use serde::{Deserialize, Serialize};

/// One facet of an STL file, exactly as it was read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// The three corners in file winding order.
    pub vertices: [[f64; 3]; 3],
    /// Facet normal stated by the file, if any.
    pub normal: Option<[f64; 3]>,
    /// Binary attribute byte count. Carries no meaning for ASCII input.
    pub attribute: Option<u16>,
}

impl Triangle {
    pub fn new(v1: [f64; 3], v2: [f64; 3], v3: [f64; 3]) -> Self {
        Self {
            vertices: [v1, v2, v3],
            normal: None,
            attribute: None,
        }
    }

    pub fn with_normal(mut self, normal: [f64; 3]) -> Self {
        self.normal = Some(normal);
        self
    }
}

/// A run of triangles belonging to one `solid` block.
///
/// Binary files hold a single unnamed solid. The name is advisory only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    pub name: Option<String>,
    pub triangles: Vec<Triangle>,
}

impl Solid {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            triangles: Vec::new(),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}
