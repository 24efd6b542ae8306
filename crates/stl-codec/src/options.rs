//! Caller-facing options for [`deserialize`](crate::deserialize) and
//! [`serialize`](crate::serialize).
//!
//! Both structs read from JSON with camelCase keys and fill missing fields
//! from their `Default`, so `{"output": "jscad"}` is a complete options object.

use serde::{Deserialize, Serialize};

use crate::detect::StlFormat;

/// Header text written into binary STL files unless overridden.
pub const DEFAULT_HEADER: &str = "Binary STL generated by stl-codec";

/// What `deserialize` hands back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indexed meshes.
    #[default]
    #[serde(alias = "csg")]
    Mesh,
    /// A polyhedron-construction script.
    Jscad,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeserializeOptions {
    pub output: OutputFormat,
    /// Attach solid index, triangle count and name to meshes, and a
    /// producer comment block to scripts.
    #[serde(rename = "addMetaData")]
    pub add_metadata: bool,
    /// Skip detection and force a format. Only meaningful for byte input.
    pub format: Option<StlFormat>,
}

impl Default for DeserializeOptions {
    fn default() -> Self {
        Self {
            output: OutputFormat::Mesh,
            add_metadata: true,
            format: None,
        }
    }
}

impl DeserializeOptions {
    /// Meshes without metadata.
    pub fn bare() -> Self {
        Self {
            add_metadata: false,
            ..Self::default()
        }
    }

    /// Script output.
    pub fn script() -> Self {
        Self {
            output: OutputFormat::Jscad,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SerializeOptions {
    /// Binary output when true, ASCII otherwise.
    pub binary: bool,
    /// Binary header text, truncated to 80 bytes.
    pub header: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            binary: true,
            header: DEFAULT_HEADER.to_string(),
        }
    }
}

impl SerializeOptions {
    pub fn ascii() -> Self {
        Self {
            binary: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let opts: DeserializeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, DeserializeOptions::default());

        let opts: SerializeOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.binary);
        assert_eq!(opts.header, DEFAULT_HEADER);
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let opts: DeserializeOptions =
            serde_json::from_str(r#"{"output": "csg", "addMetaData": false, "format": "binary"}"#)
                .unwrap();
        assert_eq!(opts.output, OutputFormat::Mesh);
        assert!(!opts.add_metadata);
        assert_eq!(opts.format, Some(StlFormat::Binary));

        let opts: DeserializeOptions = serde_json::from_str(r#"{"output": "jscad"}"#).unwrap();
        assert_eq!(opts.output, OutputFormat::Jscad);
    }
}
