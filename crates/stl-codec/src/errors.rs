use mesh_types::MeshError;

use crate::detect::HeaderMismatch;

/// Errors from STL import and export.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StlError {
    #[error("binary STL truncated: expected {expected_len} bytes, found {actual_len}")]
    TruncatedInput { expected_len: u64, actual_len: usize },

    #[error("ASCII STL parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("cannot export STL: {reason}")]
    UnsupportedGeometry { reason: String },

    #[error("malformed binary STL header ({mismatch}); ASCII fallback failed: {source}")]
    MalformedBinaryHeader {
        mismatch: HeaderMismatch,
        #[source]
        source: Box<StlError>,
    },

    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] MeshError),
}

impl StlError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        StlError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Stable identifier of the variant, used by message layers.
    pub fn kind(&self) -> &'static str {
        match self {
            StlError::TruncatedInput { .. } => "TruncatedInput",
            StlError::ParseError { .. } => "ParseError",
            StlError::UnsupportedGeometry { .. } => "UnsupportedGeometry",
            StlError::MalformedBinaryHeader { .. } => "MalformedBinaryHeader",
            StlError::InvalidMesh(_) => "InvalidMesh",
        }
    }
}
