//! Polyhedron script output.
//!
//! Renders meshes as a `main()` function returning one
//! `primitives.polyhedron(...)` call per mesh, for consumers that rebuild
//! geometry from source rather than from mesh data.

use mesh_types::Mesh;

use crate::number::format_number;

/// One entry of the returned array.
#[derive(Debug, Clone, Copy)]
pub struct ScriptObject<'a> {
    /// 1-based solid index within the source file.
    pub index: usize,
    pub triangle_count: usize,
    /// `None` renders the comment line only.
    pub mesh: Option<&'a Mesh>,
}

/// Leading comment block, emitted when metadata is requested.
#[derive(Debug, Clone, Copy)]
pub struct ScriptHeader<'a> {
    pub source: Option<&'a str>,
    pub object_count: usize,
}

/// Render `objects` as a complete script.
pub fn generate_script(objects: &[ScriptObject<'_>], header: Option<ScriptHeader<'_>>) -> String {
    let mut out = String::new();

    if let Some(header) = header {
        out.push_str(&format!(
            "// producer: {} {}\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(source) = header.source {
            out.push_str(&format!("// source: {}\n", source));
        }
        out.push_str(&format!("// objects: {}\n\n", header.object_count));
    }

    out.push_str("function main() { return [\n");
    let entries: Vec<String> = objects.iter().map(render_object).collect();
    out.push_str(&entries.join(",\n"));
    out.push_str("\n\n  ];\n}\n");
    out
}

fn render_object(object: &ScriptObject<'_>) -> String {
    let mut out = format!(
        "// object #{}: triangles: {}",
        object.index, object.triangle_count
    );
    let Some(mesh) = object.mesh else {
        return out;
    };

    let points: Vec<String> = mesh
        .vertices
        .iter()
        .map(|v| {
            format!(
                "  [{},{},{}]",
                format_number(v[0]),
                format_number(v[1]),
                format_number(v[2])
            )
        })
        .collect();
    let faces: Vec<String> = mesh
        .faces
        .iter()
        .map(|f| format!("  [{},{},{}]", f[0], f[1], f[2]))
        .collect();

    out.push_str(&format!(
        "\nprimitives.polyhedron({{orientation: '{}', points: [\n{}],\n  faces: [\n{}] }})",
        mesh.orientation.as_str(),
        points.join(",\n"),
        faces.join(",\n")
    ));
    out
}
