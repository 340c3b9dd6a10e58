use std::borrow::Cow;
use std::fmt;
use std::io::{Read, Write};

/// Wrapper around `Vec<u8>` that provides human-readable debug output
///
/// The text fields of a native grid header are C strings with no declared
/// encoding. The debug output attempts UTF-8 decoding and falls back to
/// showing hex bytes for invalid sequences.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Create a new `ByteString` from a byte vector
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Read a fixed-length text field and return the text before the first NUL
    ///
    /// Consumes exactly `len` bytes from the reader. Everything from the
    /// first NUL byte onwards is padding and is discarded.
    pub fn read_fixed<R: Read>(reader: &mut R, len: usize) -> std::io::Result<Self> {
        let mut buf = vec![0u8; len];
        reader.read_exact(&mut buf)?;
        if let Some(pos) = buf.iter().position(|&b| b == 0) {
            buf.truncate(pos);
        }
        Ok(Self(buf))
    }

    /// Write the text as a fixed-length NUL-terminated field
    ///
    /// Emits exactly `capacity` bytes: at most `capacity - 1` bytes of text
    /// followed by NUL padding. Longer input is silently truncated.
    pub fn write_fixed<W: Write>(&self, writer: &mut W, capacity: usize) -> std::io::Result<()> {
        let mut buf = vec![0u8; capacity];
        let copy_len = self.0.len().min(capacity.saturating_sub(1));
        buf[..copy_len].copy_from_slice(&self.0[..copy_len]);
        writer.write_all(&buf)
    }

    /// Get a reference to the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert into the underlying byte vector
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Decode raw bytes to string
    ///
    /// Attempts UTF-8 decoding first, falling back to Windows-1252 (CP1252)
    /// if UTF-8 fails. Grid files written by legacy tools commonly carry
    /// Latin-script Extended ASCII in their unit and remark fields.
    ///
    /// # Returns
    ///
    /// Decoded string (always succeeds with some valid string)
    pub fn decode(&self) -> Cow<'_, str> {
        match str::from_utf8(&self.0) {
            Ok(s) => s.into(),
            Err(_) => encoding_rs::WINDOWS_1252.decode(&self.0).0,
        }
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<String> for ByteString {
    fn from(str: String) -> Self {
        Self(str.into_bytes())
    }
}

impl From<&str> for ByteString {
    fn from(str: &str) -> Self {
        Self(str.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) => write!(f, "{:?}", s),
            Err(_) => {
                // Show as hex if not valid UTF-8
                write!(f, "b\"")?;
                for &byte in &self.0 {
                    if byte.is_ascii_graphic() || byte == b' ' {
                        write!(f, "{}", byte as char)?;
                    } else {
                        write!(f, "\\x{:02x}", byte)?;
                    }
                }
                write!(f, "\"")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_fixed_stops_at_first_nul() {
        let data = b"meters\0\0\0\0garbage";
        let mut cursor = Cursor::new(data);
        let bs = ByteString::read_fixed(&mut cursor, 10).unwrap();
        assert_eq!(bs.as_bytes(), b"meters");
        // Cursor consumed the full field, not just the text
        assert_eq!(cursor.position(), 10);
    }

    #[test]
    fn read_fixed_without_nul_keeps_everything() {
        let data = b"abcdef";
        let mut cursor = Cursor::new(data);
        let bs = ByteString::read_fixed(&mut cursor, 6).unwrap();
        assert_eq!(bs.as_bytes(), b"abcdef");
    }

    #[test]
    fn read_fixed_all_padding() {
        let data = [0u8; 8];
        let mut cursor = Cursor::new(data);
        let bs = ByteString::read_fixed(&mut cursor, 8).unwrap();
        assert_eq!(bs.as_bytes(), b"");
    }

    #[test]
    fn write_fixed_pads_with_nuls() {
        let bs = ByteString::from("xu");
        let mut buf = Vec::new();
        bs.write_fixed(&mut buf, 8).unwrap();
        assert_eq!(buf, b"xu\0\0\0\0\0\0");
    }

    #[test]
    fn write_fixed_truncates_long_input() {
        let bs = ByteString::new(vec![b'X'; 100]);
        let mut buf = Vec::new();
        bs.write_fixed(&mut buf, 80).unwrap();
        assert_eq!(buf.len(), 80);
        assert_eq!(&buf[..79], &[b'X'; 79][..]);
        assert_eq!(buf[79], 0);
    }

    #[test]
    fn write_fixed_exact_capacity_still_terminated() {
        let bs = ByteString::new(vec![b'Y'; 8]);
        let mut buf = Vec::new();
        bs.write_fixed(&mut buf, 8).unwrap();
        assert_eq!(buf, b"YYYYYYY\0");
    }

    #[test]
    fn fixed_round_trip() {
        let bs = ByteString::from("elevation [m]");
        let mut buf = Vec::new();
        bs.write_fixed(&mut buf, 80).unwrap();
        let mut cursor = Cursor::new(buf);
        let read_back = ByteString::read_fixed(&mut cursor, 80).unwrap();
        assert_eq!(read_back, bs);
    }

    #[test]
    fn debug_valid_utf8() {
        let bs = ByteString::new(b"Hello World".to_vec());
        assert_eq!(format!("{:?}", bs), "\"Hello World\"");
    }

    #[test]
    fn debug_invalid_utf8() {
        // CP1252 character é (0xE9) - not valid UTF-8 on its own
        let bs = ByteString::new(vec![0xE9]);
        assert_eq!(format!("{:?}", bs), "b\"\\xe9\"");
    }

    #[test]
    fn decode_utf8_string() {
        let bs = ByteString::new(b"Hello World".to_vec());
        assert_eq!(bs.decode(), "Hello World");
    }

    #[test]
    fn decode_cp1252_fallback() {
        // CP1252 character é (0xE9) - not valid UTF-8 on its own
        let bs = ByteString::new(vec![0xE9]);
        assert_eq!(bs.decode(), "é");
    }

    #[test]
    fn decode_empty_string() {
        let bs = ByteString::new(vec![]);
        assert_eq!(bs.decode(), "");
    }

    #[test]
    fn from_str_and_as_bytes() {
        let bs = ByteString::from("test");
        assert_eq!(bs.as_bytes(), b"test");
        assert_eq!(bs.into_bytes(), b"test");
    }
}
