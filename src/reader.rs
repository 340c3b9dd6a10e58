//! High-level grid file reader

use crate::error::{Error, Result};
use crate::raw::{Header, data};
use crate::types::ByteOrder;
use crate::{Extent, Grid, Registration};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// A fully decoded grid file: header metadata plus the value matrix
///
/// Owned by the caller; each read produces a fresh pair with no shared
/// state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct GrdFile {
    pub header: Header,
    pub grid: Grid,
}

impl GrdFile {
    /// Read a grid file from a path in native byte order
    ///
    /// Opens the file, verifies that its length matches the dimensions the
    /// header declares, and decodes header and data in one pass.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        GrdReader::open(path)?.read_verified()
    }

    /// Spatial extent in the x direction
    pub fn x_extent(&self) -> Extent {
        self.header.x
    }

    /// Spatial extent in the y direction
    pub fn y_extent(&self) -> Extent {
        self.header.y
    }

    /// Registration mode
    pub fn registration(&self) -> Registration {
        self.header.registration
    }

    /// Dataset title, decoded
    pub fn title(&self) -> Cow<'_, str> {
        self.header.title.decode()
    }

    /// Free-text remark, decoded
    pub fn remark(&self) -> Cow<'_, str> {
        self.header.remark.decode()
    }

    /// Unit labels for the x, y and z axes, decoded
    pub fn units(&self) -> (Cow<'_, str>, Cow<'_, str>, Cow<'_, str>) {
        (
            self.header.x_units.decode(),
            self.header.y_units.decode(),
            self.header.z_units.decode(),
        )
    }
}

/// High-level grid file reader
///
/// Decodes the fixed header and the data matrix from any byte stream.
/// The stream is consumed sequentially and is never repositioned or
/// closed (except for the length probe in [`GrdReader::read_verified`],
/// which seeks back before reading data).
///
/// # Example
///
/// ```no_run
/// use gmt_grd::GrdReader;
///
/// let file = GrdReader::open("relief.grd")?.read_verified()?;
/// println!("{}: {} x {}", file.title(), file.grid.nx(), file.grid.ny());
/// # Ok::<(), gmt_grd::Error>(())
/// ```
pub struct GrdReader<R> {
    inner: R,
    byte_order: ByteOrder,
}

impl GrdReader<BufReader<File>> {
    /// Open a grid file from a path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> GrdReader<R> {
    /// Create a reader over any `Read` source, assuming native byte order
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            byte_order: ByteOrder::native(),
        }
    }

    /// Set the byte order the file was written in
    ///
    /// The format carries no endianness tag, so files from a foreign
    /// architecture need the order stated explicitly.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Decode header and data sequentially
    ///
    /// A stream that ends before `nx * ny` floats have been read fails
    /// with `Error::UnexpectedEof`. Use [`GrdReader::read_verified`] on
    /// seekable sources to reject short files before any data is read.
    pub fn read(mut self) -> Result<GrdFile> {
        let header = Header::read(&mut self.inner, self.byte_order)?;
        let grid = data::read_data(
            &mut self.inner,
            header.nx as usize,
            header.ny as usize,
            self.byte_order,
        )?;
        Ok(GrdFile { header, grid })
    }

    /// Consume the reader and return the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> GrdReader<R> {
    /// Decode header and data, verifying the stream length first
    ///
    /// After parsing the header, the remaining stream length is compared
    /// with the `nx * ny * 4` bytes the header declares. A mismatch fails
    /// with `Error::LengthMismatch` before the data buffer is allocated,
    /// so a header corrupted into absurd dimensions cannot trigger a huge
    /// allocation and a truncated file is caught up front.
    pub fn read_verified(mut self) -> Result<GrdFile> {
        let header = Header::read(&mut self.inner, self.byte_order)?;

        let position = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(position))?;

        let found = end.saturating_sub(position);
        let expected = header.data_len();
        if found != expected {
            return Err(Error::LengthMismatch { expected, found });
        }

        let grid = data::read_data(
            &mut self.inner,
            header.nx as usize,
            header.ny as usize,
            self.byte_order,
        )?;
        Ok(GrdFile { header, grid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GrdWriter;
    use claims::assert_matches;
    use std::io::Cursor;

    fn sample_bytes() -> Vec<u8> {
        let grid = Grid::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut buf = Vec::new();
        GrdWriter::new(Extent::new(0.0, 1.0), Extent::new(0.0, 1.0))
            .with_title("sample")
            .write(&mut buf, &grid)
            .unwrap();
        buf
    }

    #[test]
    fn read_decodes_header_and_grid() {
        let file = GrdReader::new(Cursor::new(sample_bytes())).read().unwrap();
        assert_eq!(file.title(), "sample");
        assert_eq!(file.grid.value(0, 0), 1.0);
        assert_eq!(file.grid.value(1, 1), 4.0);
    }

    #[test]
    fn read_verified_accepts_exact_length() {
        let file = GrdReader::new(Cursor::new(sample_bytes()))
            .read_verified()
            .unwrap();
        assert_eq!(file.grid.nx(), 2);
        assert_eq!(file.grid.ny(), 2);
    }

    #[test]
    fn read_verified_rejects_truncated_data() {
        let mut bytes = sample_bytes();
        bytes.truncate(bytes.len() - 4);

        let result = GrdReader::new(Cursor::new(bytes)).read_verified();
        assert_matches!(
            result,
            Err(Error::LengthMismatch {
                expected: 16,
                found: 12
            })
        );
    }

    #[test]
    fn read_verified_rejects_trailing_bytes() {
        let mut bytes = sample_bytes();
        bytes.extend_from_slice(&[0u8; 8]);

        let result = GrdReader::new(Cursor::new(bytes)).read_verified();
        assert_matches!(
            result,
            Err(Error::LengthMismatch {
                expected: 16,
                found: 24
            })
        );
    }

    #[test]
    fn plain_read_reports_eof_on_truncated_data() {
        let mut bytes = sample_bytes();
        bytes.truncate(bytes.len() - 4);

        let result = GrdReader::new(Cursor::new(bytes)).read();
        assert_matches!(result, Err(Error::UnexpectedEof(_)));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = GrdFile::from_path("does/not/exist.grd");
        assert_matches!(result, Err(Error::IoError(_)));
    }
}
