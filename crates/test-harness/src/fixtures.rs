//! Reference inputs.
//!
//! The STL encoders here are written independently of the codec's writers
//! so reader tests do not depend on the code they are checking against.

use mesh_types::{Mesh, Orientation, TrianglePoints, Vec3};

/// The 1 mm test cube as exported by a typical CAD tool, in file order.
pub const UNIT_CUBE_TRIANGLES: [TrianglePoints; 12] = [
    [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
    [[1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
    [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [0.0, 0.0, 0.0]],
    [[0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]],
    [[1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
    [[1.0, 1.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
    [[1.0, 1.0, 1.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]],
    [[1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [1.0, 0.0, 0.0]],
    [[1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 0.0, 0.0]],
    [[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
    [[0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [0.0, 0.0, 1.0]],
];

/// A 10 mm cube centred on the origin, in file order.
pub const CUBE_10MM_TRIANGLES: [TrianglePoints; 12] = [
    [[5.0, -5.0, 5.0], [5.0, -5.0, -5.0], [-5.0, -5.0, -5.0]],
    [[-5.0, -5.0, 5.0], [5.0, -5.0, 5.0], [-5.0, -5.0, -5.0]],
    [[5.0, -5.0, -5.0], [5.0, 5.0, -5.0], [-5.0, 5.0, -5.0]],
    [[-5.0, -5.0, -5.0], [5.0, -5.0, -5.0], [-5.0, 5.0, -5.0]],
    [[5.0, -5.0, 5.0], [5.0, 5.0, 5.0], [5.0, 5.0, -5.0]],
    [[5.0, -5.0, -5.0], [5.0, -5.0, 5.0], [5.0, 5.0, -5.0]],
    [[-5.0, -5.0, 5.0], [-5.0, 5.0, 5.0], [5.0, 5.0, 5.0]],
    [[5.0, -5.0, 5.0], [-5.0, -5.0, 5.0], [5.0, 5.0, 5.0]],
    [[-5.0, -5.0, -5.0], [-5.0, 5.0, -5.0], [-5.0, 5.0, 5.0]],
    [[-5.0, -5.0, 5.0], [-5.0, -5.0, -5.0], [-5.0, 5.0, 5.0]],
    [[5.0, 5.0, 5.0], [-5.0, 5.0, 5.0], [-5.0, 5.0, -5.0]],
    [[5.0, 5.0, -5.0], [5.0, 5.0, 5.0], [-5.0, 5.0, -5.0]],
];

/// Axis-aligned cube of edge `size` centred on the origin: 8 shared
/// vertices, 12 counter-clockwise (outward) triangles.
pub fn cube_mesh(size: f64) -> Mesh {
    let h = size / 2.0;
    let vertices = vec![
        [-h, -h, -h],
        [h, -h, -h],
        [h, h, -h],
        [-h, h, -h],
        [-h, -h, h],
        [h, -h, h],
        [h, h, h],
        [-h, h, h],
    ];
    let faces = vec![
        [0, 2, 1],
        [0, 3, 2], // bottom
        [4, 5, 6],
        [4, 6, 7], // top
        [0, 1, 5],
        [0, 5, 4], // front
        [2, 3, 7],
        [2, 7, 6], // back
        [0, 4, 7],
        [0, 7, 3], // left
        [1, 2, 6],
        [1, 6, 5], // right
    ];
    Mesh::new(vertices, faces).with_orientation(Orientation::Outward)
}

/// Encode `triangles` as one ASCII solid, numbers in `%e` style.
pub fn ascii_stl(name: &str, triangles: &[TrianglePoints]) -> String {
    let mut out = format!("solid {}\n", name);
    for &[a, b, c] in triangles {
        let n = Vec3::triangle_normal(a, b, c);
        out.push_str(&format!(
            "  facet normal {:.6e} {:.6e} {:.6e}\n",
            n.x, n.y, n.z
        ));
        out.push_str("    outer loop\n");
        for v in [a, b, c] {
            out.push_str(&format!(
                "      vertex {:.6e} {:.6e} {:.6e}\n",
                v[0], v[1], v[2]
            ));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    }
    out.push_str(&format!("endsolid {}\n", name));
    out
}

/// Encode `triangles` as a binary STL with the given header text.
pub fn binary_stl(header: &[u8], triangles: &[TrianglePoints]) -> Vec<u8> {
    let mut buf = header[..header.len().min(80)].to_vec();
    buf.resize(80, 0u8);
    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for &[a, b, c] in triangles {
        let n = Vec3::triangle_normal(a, b, c).to_array();
        for v in [n, a, b, c] {
            for coord in v {
                buf.extend_from_slice(&(coord as f32).to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
    buf
}

/// ASCII text of the 1 mm test cube.
pub fn unit_cube_ascii() -> String {
    ascii_stl("testcube", &UNIT_CUBE_TRIANGLES)
}

/// Binary bytes of the 10 mm test cube. The header starts with `solid`,
/// as many exporters' headers do.
pub fn cube_10mm_binary() -> Vec<u8> {
    binary_stl(b"solid cube_10mm exported as binary", &CUBE_10MM_TRIANGLES)
}
