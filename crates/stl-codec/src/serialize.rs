use mesh_types::{Geometry, TrianglePoints};
use tracing::{info, instrument};

use crate::errors::StlError;
use crate::options::SerializeOptions;
use crate::write_binary::write_binary;
use crate::write_text::write_text;

/// MIME type of STL output.
pub const MIME_TYPE: &str = "application/sla";

/// Encode the 3D solids among `objects` as STL.
///
/// Groups are flattened and planar geometry is skipped. Every solid is
/// validated before any output is produced. Binary output merges all
/// solids into one triangle list; ASCII output writes one `solid` block
/// per input solid.
#[instrument(skip(options, objects), fields(binary = options.binary, objects = objects.len()))]
pub fn serialize(options: &SerializeOptions, objects: &[Geometry]) -> Result<Vec<u8>, StlError> {
    let solids = Geometry::solids(objects);
    if solids.is_empty() {
        return Err(StlError::UnsupportedGeometry {
            reason: "only 3D geometries can be serialized to STL".to_string(),
        });
    }

    let triangulated = solids
        .iter()
        .map(|solid| solid.triangles())
        .collect::<Result<Vec<Vec<TrianglePoints>>, _>>()?;
    let triangle_count: usize = triangulated.iter().map(Vec::len).sum();

    let bytes = if options.binary {
        let flat: Vec<TrianglePoints> = triangulated.into_iter().flatten().collect();
        write_binary(&flat, &options.header)
    } else {
        write_text(&triangulated).into_bytes()
    };

    info!(
        solids = solids.len(),
        triangles = triangle_count,
        bytes = bytes.len(),
        "STL serialized"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{Mesh, MeshError, Outline2d, Polyhedron};

    fn tri_mesh() -> Mesh {
        Mesh::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn empty_list_is_unsupported() {
        assert!(matches!(
            serialize(&SerializeOptions::default(), &[]),
            Err(StlError::UnsupportedGeometry { .. })
        ));
    }

    #[test]
    fn planar_only_is_unsupported() {
        let objects = [Geometry::Outline2d(Outline2d::default())];
        assert!(matches!(
            serialize(&SerializeOptions::default(), &objects),
            Err(StlError::UnsupportedGeometry { .. })
        ));
    }

    #[test]
    fn binary_counts_all_solids() {
        let objects = [
            Geometry::from(tri_mesh()),
            Geometry::Outline2d(Outline2d::default()),
            Geometry::Group {
                children: vec![tri_mesh().into()],
            },
        ];
        let stl = serialize(&SerializeOptions::default(), &objects).unwrap();
        assert_eq!(stl.len(), 84 + 2 * 50);
        assert_eq!(u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]), 2);
    }

    #[test]
    fn ascii_writes_one_block_per_solid() {
        let quad = Polyhedron::new(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            vec![vec![0, 1, 2, 3]],
        );
        let objects = [Geometry::from(tri_mesh()), Geometry::from(quad)];
        let text = String::from_utf8(serialize(&SerializeOptions::ascii(), &objects).unwrap()).unwrap();
        assert!(text.contains("solid object #1: triangles: 1\n"));
        assert!(text.contains("solid object #2: triangles: 2\n"));
        assert_eq!(text.matches("endfacet").count(), 3);
    }

    #[test]
    fn invalid_index_fails_before_writing() {
        let bad = Mesh::new(vec![[0.0; 3]], vec![[0, 1, 2]]);
        let objects = [Geometry::from(tri_mesh()), Geometry::from(bad)];
        assert_eq!(
            serialize(&SerializeOptions::default(), &objects),
            Err(StlError::InvalidMesh(MeshError::IndexOutOfRange {
                face: 0,
                index: 1,
                vertex_count: 1
            }))
        );
    }
}
