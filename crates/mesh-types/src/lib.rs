//! Shared data model for the STL codec: the transient triangle stream read
//! from a file, the indexed meshes handed back to callers, and the geometry
//! objects callers pass in for export.

pub mod geometry;
pub mod mesh;
pub mod triangle;
pub mod vector;

pub use geometry::*;
pub use mesh::*;
pub use triangle::*;
pub use vector::Vec3;
