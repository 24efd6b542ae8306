//! STL import and export.
//!
//! [`deserialize`] turns ASCII or binary STL into indexed [`Mesh`]es (or a
//! polyhedron script), [`serialize`] flattens [`Geometry`] objects back into
//! STL bytes. Both are pure, synchronous functions of their inputs.
//!
//! # Key Components
//!
//! - [`detect`] — ASCII vs. binary classification
//! - [`read_binary`] / [`read_text`] — format readers producing [`Solid`]s
//! - [`builder`] — per-solid vertex deduplication into [`Mesh`]es
//! - [`write_binary`] / [`write_text`] — format writers with facet normals
//! - [`codegen`] — polyhedron script output

pub mod builder;
pub mod codegen;
pub mod deserialize;
pub mod detect;
pub mod errors;
pub mod number;
pub mod options;
pub mod read_binary;
pub mod read_text;
pub mod serialize;
pub mod write_binary;
pub mod write_text;

pub use deserialize::{deserialize, Deserialized};
pub use detect::{StlFormat, StlInput};
pub use errors::StlError;
pub use options::{DeserializeOptions, OutputFormat, SerializeOptions};
pub use serialize::{serialize, MIME_TYPE};

pub use mesh_types::{Geometry, Mesh, MeshMetadata, Orientation, Polyhedron, Solid, Triangle};
