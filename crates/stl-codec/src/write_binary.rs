//! Binary STL writer.
//!
//! Binary STL layout:
//! - 80 bytes: header
//! - 4 bytes: u32 LE triangle count
//! - Per triangle (50 bytes each):
//!   - 12 bytes: normal vector (3 × f32 LE)
//!   - 36 bytes: 3 vertices (3 × 3 × f32 LE)
//!   - 2 bytes: attribute byte count (0u16)

use mesh_types::{TrianglePoints, Vec3};

use crate::detect::{HEADER_SIZE, PREAMBLE_SIZE, RECORD_SIZE};

/// Encode `triangles` as one binary STL file.
///
/// `header` is truncated to 80 bytes and zero-padded. Coordinates narrow
/// from f64 to f32; NaN and infinities keep their IEEE-754 meaning.
pub fn write_binary(triangles: &[TrianglePoints], header: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(PREAMBLE_SIZE + triangles.len() * RECORD_SIZE);

    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(HEADER_SIZE)]);
    buf.resize(HEADER_SIZE, 0u8);

    buf.extend_from_slice(&(triangles.len() as u32).to_le_bytes());

    for &[v0, v1, v2] in triangles {
        let normal = Vec3::triangle_normal(v0, v1, v2).to_array();
        for v in [normal, v0, v1, v2] {
            write_vec3(&mut buf, v);
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}

fn write_vec3(buf: &mut Vec<u8>, v: [f64; 3]) {
    for c in v {
        buf.extend_from_slice(&(c as f32).to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f32_at(buf: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
    }

    #[test]
    fn empty_input_is_bare_preamble() {
        let stl = write_binary(&[], "empty");
        assert_eq!(stl.len(), 84);
        assert!(stl.starts_with(b"empty"));
        assert!(stl[5..80].iter().all(|&b| b == 0));
        assert_eq!(u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]), 0);
    }

    #[test]
    fn single_triangle_layout() {
        let tri = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let stl = write_binary(&[tri], "t");
        assert_eq!(stl.len(), 134);
        assert_eq!(u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]), 1);

        // Normal of (1,0,0)×(0,1,0)
        assert_eq!(f32_at(&stl, 84), 0.0);
        assert_eq!(f32_at(&stl, 92), 1.0);
        // Second vertex x
        assert_eq!(f32_at(&stl, 108), 1.0);
        // Attribute
        assert_eq!(&stl[132..134], &[0, 0]);
    }

    #[test]
    fn long_header_is_truncated() {
        let header = "x".repeat(200);
        let stl = write_binary(&[], &header);
        assert_eq!(stl.len(), 84);
        assert!(stl[..80].iter().all(|&b| b == b'x'));
    }

    #[test]
    fn degenerate_triangle_has_zero_normal() {
        let tri = [[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]];
        let stl = write_binary(&[tri], "");
        for offset in [84, 88, 92] {
            assert_eq!(f32_at(&stl, offset), 0.0);
        }
    }

    #[test]
    fn infinite_coordinates_keep_their_bits() {
        let tri = [[f64::INFINITY, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let stl = write_binary(&[tri], "");
        assert_eq!(f32_at(&stl, 96), f32::INFINITY);
    }
}
