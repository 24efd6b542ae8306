use serde::{Deserialize, Serialize};

use mesh_types::{Geometry, Mesh};
use stl_codec::{DeserializeOptions, SerializeOptions};

/// File contents as they travel over JSON.
///
/// Binary STL goes as base64; ASCII STL may go as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "encoding", rename_all = "lowercase")]
pub enum Payload {
    Text { data: String },
    Base64 { data: String },
}

/// Messages from the host (JavaScript) to the codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Decode an STL file into meshes or a script.
    Deserialize {
        payload: Payload,
        #[serde(default)]
        filename: Option<String>,
        #[serde(default)]
        options: DeserializeOptions,
    },
    /// Encode geometries as STL.
    Serialize {
        #[serde(default)]
        options: SerializeOptions,
        geometries: Vec<Geometry>,
    },
}

/// Messages from the codec back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// One mesh per non-empty solid.
    Meshes { meshes: Vec<Mesh> },

    /// Generated polyhedron script.
    Script { source: String },

    /// Encoded STL. Binary output is base64, ASCII output is text.
    Serialized { mime_type: String, data: Payload },

    /// The request failed. `kind` is a stable identifier of the failure.
    Error { kind: String, message: String },
}
