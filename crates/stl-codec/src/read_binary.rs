//! Binary STL reader.
//!
//! Per triangle record (50 bytes):
//! - 12 bytes: normal vector (3 × f32 LE)
//! - 36 bytes: 3 vertices (3 × 3 × f32 LE)
//! - 2 bytes: attribute byte count (u16 LE)

use mesh_types::{Solid, Triangle};
use tracing::{debug, instrument};

use crate::detect::{binary_triangle_count, expected_binary_len, PREAMBLE_SIZE, RECORD_SIZE};
use crate::errors::StlError;

/// Read the single implicit solid of a binary STL buffer.
///
/// Exactly `84 + 50*N` bytes are consumed; trailing bytes are ignored. A
/// buffer too short for its declared count is rejected without reading past
/// its end.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn read_binary(bytes: &[u8]) -> Result<Solid, StlError> {
    let count = binary_triangle_count(bytes).ok_or(StlError::TruncatedInput {
        expected_len: PREAMBLE_SIZE as u64,
        actual_len: bytes.len(),
    })?;

    let expected_len = expected_binary_len(count);
    if (bytes.len() as u64) < expected_len {
        return Err(StlError::TruncatedInput {
            expected_len,
            actual_len: bytes.len(),
        });
    }

    let mut solid = Solid::new(None);
    solid.triangles.reserve(count as usize);
    for record in bytes[PREAMBLE_SIZE..]
        .chunks_exact(RECORD_SIZE)
        .take(count as usize)
    {
        solid.triangles.push(read_record(record));
    }

    debug!(triangles = solid.triangle_count(), "binary STL read");
    Ok(solid)
}

fn read_record(record: &[u8]) -> Triangle {
    Triangle {
        normal: Some(read_vec3(&record[0..12])),
        vertices: [
            read_vec3(&record[12..24]),
            read_vec3(&record[24..36]),
            read_vec3(&record[36..48]),
        ],
        attribute: Some(u16::from_le_bytes([record[48], record[49]])),
    }
}

/// Read 3 little-endian f32s, widened to f64.
fn read_vec3(buf: &[u8]) -> [f64; 3] {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    [f64::from(x), f64::from(y), f64::from(z)]
}
