use mesh_types::{Mesh, Solid};
use tracing::{info, instrument, warn};

use crate::builder::build_meshes;
use crate::codegen::{generate_script, ScriptHeader, ScriptObject};
use crate::detect::{detect, Detection, StlInput};
use crate::errors::StlError;
use crate::options::{DeserializeOptions, OutputFormat};
use crate::read_binary::read_binary;
use crate::read_text::read_text;

/// Result of [`deserialize`], shaped by [`DeserializeOptions::output`].
#[derive(Debug, Clone, PartialEq)]
pub enum Deserialized {
    Meshes(Vec<Mesh>),
    Script(String),
}

impl Deserialized {
    pub fn into_meshes(self) -> Option<Vec<Mesh>> {
        match self {
            Deserialized::Meshes(meshes) => Some(meshes),
            Deserialized::Script(_) => None,
        }
    }

    pub fn into_script(self) -> Option<String> {
        match self {
            Deserialized::Script(source) => Some(source),
            Deserialized::Meshes(_) => None,
        }
    }
}

/// Decode an STL file into one mesh per non-empty solid, or into a script.
///
/// `filename` is only used for the script header. Fails without any partial
/// result when the input cannot be read.
#[instrument(skip(input, options), fields(output = ?options.output))]
pub fn deserialize<'a>(
    input: impl Into<StlInput<'a>>,
    filename: Option<&str>,
    options: &DeserializeOptions,
) -> Result<Deserialized, StlError> {
    let solids = read_solids(input.into(), options)?;

    let result = match options.output {
        OutputFormat::Mesh => Deserialized::Meshes(build_meshes(&solids, options.add_metadata)),
        OutputFormat::Jscad => Deserialized::Script(render_script(&solids, filename, options)),
    };

    info!(
        solids = solids.len(),
        triangles = solids.iter().map(Solid::triangle_count).sum::<usize>(),
        "STL deserialized"
    );
    Ok(result)
}

/// Detect the format and run the matching reader.
fn read_solids(input: StlInput<'_>, options: &DeserializeOptions) -> Result<Vec<Solid>, StlError> {
    match detect(input, options.format) {
        Detection::Binary(bytes) => Ok(vec![read_binary(bytes)?]),
        Detection::Text { text, mismatch } => {
            if let Some(mismatch) = &mismatch {
                warn!(%mismatch, "binary header does not match length, parsing as ASCII");
            }
            read_text(&text).map_err(|err| match mismatch {
                Some(mismatch) => StlError::MalformedBinaryHeader {
                    mismatch,
                    source: Box::new(err),
                },
                None => err,
            })
        }
    }
}

fn render_script(solids: &[Solid], filename: Option<&str>, options: &DeserializeOptions) -> String {
    let meshes = build_meshes(solids, false);
    let mut meshes = meshes.iter();

    let objects: Vec<ScriptObject<'_>> = solids
        .iter()
        .enumerate()
        .filter(|(_, solid)| !solid.is_empty() || solids.len() == 1)
        .map(|(i, solid)| ScriptObject {
            index: i + 1,
            triangle_count: solid.triangle_count(),
            mesh: if solid.is_empty() { None } else { meshes.next() },
        })
        .collect();

    let header = options.add_metadata.then_some(ScriptHeader {
        source: filename,
        object_count: objects.len(),
    });
    generate_script(&objects, header)
}
