//! ASCII STL writer.

use mesh_types::{TrianglePoints, Vec3};

use crate::number::format_number;

/// Name written after `solid`/`endsolid` for the `index`-th (1-based) solid.
pub fn solid_label(index: usize, triangle_count: usize) -> String {
    format!("object #{}: triangles: {}", index, triangle_count)
}

/// Encode each entry of `solids` as its own `solid … endsolid` block.
pub fn write_text(solids: &[Vec<TrianglePoints>]) -> String {
    let total: usize = solids.iter().map(Vec::len).sum();
    let mut out = String::with_capacity(total * 256 + solids.len() * 80);

    for (i, triangles) in solids.iter().enumerate() {
        let label = solid_label(i + 1, triangles.len());
        out.push_str("solid ");
        out.push_str(&label);
        out.push('\n');
        for tri in triangles {
            write_facet(&mut out, tri);
        }
        out.push_str("endsolid ");
        out.push_str(&label);
        out.push('\n');
    }

    out
}

fn write_facet(out: &mut String, &[v0, v1, v2]: &TrianglePoints) {
    let n = Vec3::triangle_normal(v0, v1, v2);
    out.push_str(&format!(
        "  facet normal {} {} {}\n",
        format_number(n.x),
        format_number(n.y),
        format_number(n.z)
    ));
    out.push_str("    outer loop\n");
    for v in [v0, v1, v2] {
        out.push_str(&format!(
            "      vertex {} {} {}\n",
            format_number(v[0]),
            format_number(v[1]),
            format_number(v[2])
        ));
    }
    out.push_str("    endloop\n");
    out.push_str("  endfacet\n");
}
