//! ASCII vs. binary classification.
//!
//! Text input is always ASCII. Byte input is binary only when the triangle
//! count at offset 80 accounts for the buffer length exactly:
//!
//! ```text
//! UINT8[80]    – header (free text, ignored)
//! UINT32       – triangle count N
//! N × 50 bytes – triangle records
//! ```
//!
//! Anything else is decoded as (lossy) UTF-8 and handed to the ASCII reader,
//! since plenty of exporters write ASCII files with arbitrary extensions and
//! headers that start with `solid`.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Header plus the `u32` triangle count.
pub const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one binary triangle record (normal + 3 vertices + attribute).
pub const RECORD_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    Ascii,
    Binary,
}

/// Raw STL input: already-decoded text or an undecoded byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StlInput<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a str> for StlInput<'a> {
    fn from(text: &'a str) -> Self {
        StlInput::Text(text)
    }
}

impl<'a> From<&'a String> for StlInput<'a> {
    fn from(text: &'a String) -> Self {
        StlInput::Text(text)
    }
}

impl<'a> From<&'a [u8]> for StlInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        StlInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for StlInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        StlInput::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for StlInput<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        StlInput::Bytes(bytes)
    }
}

/// Why a byte buffer was not taken as binary STL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMismatch {
    /// Triangle count read at offset 80, `None` if the buffer is too short.
    pub declared: Option<u32>,
    pub actual_len: usize,
}

impl HeaderMismatch {
    /// Length the declared count implies.
    pub fn expected_len(&self) -> Option<u64> {
        self.declared.map(expected_binary_len)
    }
}

impl fmt::Display for HeaderMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.declared {
            Some(n) => write!(
                f,
                "{} triangles declared, requiring {} bytes, but buffer holds {}",
                n,
                expected_binary_len(n),
                self.actual_len
            ),
            None => write!(
                f,
                "buffer of {} bytes is shorter than the {}-byte preamble",
                self.actual_len, PREAMBLE_SIZE
            ),
        }
    }
}

/// Outcome of format detection.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection<'a> {
    Binary(&'a [u8]),
    Text {
        text: Cow<'a, str>,
        /// Set when a byte buffer fell back to text because its header did
        /// not describe its length.
        mismatch: Option<HeaderMismatch>,
    },
}

impl Detection<'_> {
    pub fn format(&self) -> StlFormat {
        match self {
            Detection::Binary(_) => StlFormat::Binary,
            Detection::Text { .. } => StlFormat::Ascii,
        }
    }
}

/// Total byte length of a binary file holding `count` triangles.
pub fn expected_binary_len(count: u32) -> u64 {
    PREAMBLE_SIZE as u64 + RECORD_SIZE as u64 * u64::from(count)
}

/// Triangle count declared by a binary header, if the buffer has one.
pub fn binary_triangle_count(bytes: &[u8]) -> Option<u32> {
    let raw = bytes.get(HEADER_SIZE..PREAMBLE_SIZE)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

/// Classify `input`. A `forced` format skips inspection entirely.
pub fn detect(input: StlInput<'_>, forced: Option<StlFormat>) -> Detection<'_> {
    let detection = match (input, forced) {
        (StlInput::Text(text), Some(StlFormat::Binary)) => Detection::Binary(text.as_bytes()),
        (StlInput::Text(text), _) => Detection::Text {
            text: Cow::Borrowed(text),
            mismatch: None,
        },
        (StlInput::Bytes(bytes), Some(StlFormat::Binary)) => Detection::Binary(bytes),
        (StlInput::Bytes(bytes), Some(StlFormat::Ascii)) => Detection::Text {
            text: String::from_utf8_lossy(bytes),
            mismatch: None,
        },
        (StlInput::Bytes(bytes), None) => {
            let declared = binary_triangle_count(bytes);
            match declared {
                Some(n) if expected_binary_len(n) == bytes.len() as u64 => Detection::Binary(bytes),
                _ => Detection::Text {
                    text: String::from_utf8_lossy(bytes),
                    mismatch: Some(HeaderMismatch {
                        declared,
                        actual_len: bytes.len(),
                    }),
                },
            }
        }
    };
    debug!(format = ?detection.format(), forced = ?forced, "STL format detected");
    detection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary_with_count(count: u32, records: usize) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_SIZE];
        buf.extend_from_slice(&count.to_le_bytes());
        buf.resize(PREAMBLE_SIZE + records * RECORD_SIZE, 0);
        buf
    }

    #[test]
    fn text_is_always_ascii() {
        let d = detect(StlInput::Text("solid x\nendsolid x\n"), None);
        assert_eq!(d.format(), StlFormat::Ascii);
    }

    #[test]
    fn exact_length_is_binary() {
        let buf = binary_with_count(2, 2);
        assert_eq!(detect(StlInput::from(&buf), None), Detection::Binary(&buf[..]));
    }

    #[test]
    fn zero_triangle_binary_is_binary() {
        let buf = binary_with_count(0, 0);
        assert_eq!(buf.len(), 84);
        assert_eq!(detect(StlInput::from(&buf), None).format(), StlFormat::Binary);
    }

    #[test]
    fn length_mismatch_falls_back_to_text() {
        let buf = binary_with_count(3, 2);
        match detect(StlInput::from(&buf), None) {
            Detection::Text { mismatch, .. } => {
                let mismatch = mismatch.unwrap();
                assert_eq!(mismatch.declared, Some(3));
                assert_eq!(mismatch.expected_len(), Some(234));
                assert_eq!(mismatch.actual_len, 184);
            }
            other => panic!("expected text fallback, got {:?}", other),
        }
    }

    #[test]
    fn short_buffer_has_no_declared_count() {
        let buf = b"solid tiny\nendsolid\n";
        match detect(StlInput::from(buf), None) {
            Detection::Text { text, mismatch } => {
                assert!(text.starts_with("solid tiny"));
                assert_eq!(mismatch.unwrap().declared, None);
            }
            other => panic!("expected text fallback, got {:?}", other),
        }
    }

    #[test]
    fn forced_format_wins() {
        let buf = binary_with_count(5, 1);
        assert_eq!(
            detect(StlInput::from(&buf), Some(StlFormat::Binary)).format(),
            StlFormat::Binary
        );
        let buf = binary_with_count(1, 1);
        assert_eq!(
            detect(StlInput::from(&buf), Some(StlFormat::Ascii)).format(),
            StlFormat::Ascii
        );
    }

    #[test]
    fn huge_declared_count_does_not_overflow() {
        let buf = binary_with_count(u32::MAX, 0);
        assert_eq!(detect(StlInput::from(&buf), None).format(), StlFormat::Ascii);
    }
}
