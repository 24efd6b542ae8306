use serde::{Deserialize, Serialize};

use crate::mesh::{Mesh, MeshError, Polyhedron, TrianglePoints};

/// A closed planar outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline2d {
    pub points: Vec<[f64; 2]>,
}

/// An open or closed planar polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path2d {
    pub points: Vec<[f64; 2]>,
    pub closed: bool,
}

/// Any object a modeling pipeline may hand to an exporter.
///
/// Only `Mesh` and `Polyhedron` are 3D solids; everything else is skipped
/// by STL export. Groups nest arbitrarily and are flattened in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Mesh(Mesh),
    Polyhedron(Polyhedron),
    Outline2d(Outline2d),
    Path2d(Path2d),
    Group { children: Vec<Geometry> },
}

/// Borrowed view of a 3D solid found while flattening geometry.
#[derive(Debug, Clone, Copy)]
pub enum SolidGeometry<'a> {
    Mesh(&'a Mesh),
    Polyhedron(&'a Polyhedron),
}

impl SolidGeometry<'_> {
    /// Triangles in stored winding order, fan-triangulating polygons.
    pub fn triangles(&self) -> Result<Vec<TrianglePoints>, MeshError> {
        match self {
            SolidGeometry::Mesh(mesh) => mesh.triangles(),
            SolidGeometry::Polyhedron(poly) => poly.triangles(),
        }
    }
}

impl Geometry {
    pub fn is_solid(&self) -> bool {
        matches!(self, Geometry::Mesh(_) | Geometry::Polyhedron(_))
    }

    /// Depth-first flatten of `objects`, keeping only 3D solids.
    pub fn solids(objects: &[Geometry]) -> Vec<SolidGeometry<'_>> {
        let mut out = Vec::new();
        for object in objects {
            object.collect_solids(&mut out);
        }
        out
    }

    fn collect_solids<'a>(&'a self, out: &mut Vec<SolidGeometry<'a>>) {
        match self {
            Geometry::Mesh(mesh) => out.push(SolidGeometry::Mesh(mesh)),
            Geometry::Polyhedron(poly) => out.push(SolidGeometry::Polyhedron(poly)),
            Geometry::Outline2d(_) | Geometry::Path2d(_) => {}
            Geometry::Group { children } => {
                for child in children {
                    child.collect_solids(out);
                }
            }
        }
    }
}

impl From<Mesh> for Geometry {
    fn from(mesh: Mesh) -> Self {
        Geometry::Mesh(mesh)
    }
}

impl From<Polyhedron> for Geometry {
    fn from(poly: Polyhedron) -> Self {
        Geometry::Polyhedron(poly)
    }
}
