use crate::error::{Error, Result};
use crate::types::{ByteOrder, Extent, Registration};
use crate::utils::ByteString;
use crate::utils::io::{read_f64, read_i32, write_f64, write_i32};
use std::io::{self, Read, Write};

/// Grid header size in bytes (always 892 bytes as defined by the format)
///
/// 3 x i32, 10 x f64, four 80-byte text fields, one 320-byte and one
/// 160-byte text field.
pub const HEADER_SIZE: usize = 892;

/// Capacity of the unit label fields (`x_units`, `y_units`, `z_units`)
pub const UNIT_LEN: usize = 80;

/// Capacity of the `title` field
pub const TITLE_LEN: usize = 80;

/// Capacity of the `command` field
pub const COMMAND_LEN: usize = 320;

/// Capacity of the `remark` field
pub const REMARK_LEN: usize = 160;

/// Provenance string stored in the `command` field of every written header
///
/// The field records which program produced the file. It is forced to this
/// constant on write regardless of what the header struct carries.
pub const COMMAND_STRING: &str = "produced by the gmt-grd library";

/// Native grid file header (first 892 bytes)
///
/// Contains the grid dimensions, registration mode, spatial extent, value
/// range, cell spacing and descriptive text fields.
///
/// `z_scale_factor` and `z_add_offset` are metadata only: readers and
/// writers of this format store them verbatim but never apply them to the
/// grid values. Callers that want scaled values must apply them themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Number of columns
    pub nx: i32,
    /// Number of rows
    pub ny: i32,
    /// Registration mode (the `node_offset` field)
    pub registration: Registration,
    /// Spatial extent in the x direction
    pub x: Extent,
    /// Spatial extent in the y direction
    pub y: Extent,
    /// Value range (derived on write, informational on read)
    pub z: Extent,
    /// Cell spacing in the x direction
    pub x_inc: f64,
    /// Cell spacing in the y direction
    pub y_inc: f64,
    /// Multiplier metadata, not applied to stored values
    pub z_scale_factor: f64,
    /// Offset metadata, not applied to stored values
    pub z_add_offset: f64,
    pub x_units: ByteString,
    pub y_units: ByteString,
    pub z_units: ByteString,
    pub title: ByteString,
    /// Provenance string; replaced by [`COMMAND_STRING`] on write
    pub command: ByteString,
    pub remark: ByteString,
}

impl Header {
    /// Read a grid header from the current position
    ///
    /// Reads exactly 892 bytes and parses them into a `Header`. The format
    /// has no endianness tag, so the caller must say which byte order the
    /// file was written in; `ByteOrder::native()` matches files produced on
    /// the local architecture.
    ///
    /// # Errors
    ///
    /// `Error::UnexpectedEof` if the stream ends before 892 bytes,
    /// `Error::InvalidDimensions` if `nx` or `ny` is not positive, and
    /// `Error::InvalidNodeOffset` if the registration field is not 0 or 1.
    pub fn read<R: Read>(reader: &mut R, order: ByteOrder) -> Result<Self> {
        let mut buf = [0u8; HEADER_SIZE];
        reader.read_exact(&mut buf).map_err(|err| match err.kind() {
            io::ErrorKind::UnexpectedEof => Error::UnexpectedEof("grid header".into()),
            _ => Error::IoError(err),
        })?;
        let mut record = &buf[..];

        let nx = read_i32(&mut record, order)?;
        let ny = read_i32(&mut record, order)?;
        let node_offset = read_i32(&mut record, order)?;

        if nx < 1 || ny < 1 {
            return Err(Error::InvalidDimensions { nx, ny });
        }
        let registration = Registration::from_node_offset(node_offset)?;

        let x_min = read_f64(&mut record, order)?;
        let x_max = read_f64(&mut record, order)?;
        let y_min = read_f64(&mut record, order)?;
        let y_max = read_f64(&mut record, order)?;
        let z_min = read_f64(&mut record, order)?;
        let z_max = read_f64(&mut record, order)?;
        let x_inc = read_f64(&mut record, order)?;
        let y_inc = read_f64(&mut record, order)?;
        let z_scale_factor = read_f64(&mut record, order)?;
        let z_add_offset = read_f64(&mut record, order)?;

        let x_units = ByteString::read_fixed(&mut record, UNIT_LEN)?;
        let y_units = ByteString::read_fixed(&mut record, UNIT_LEN)?;
        let z_units = ByteString::read_fixed(&mut record, UNIT_LEN)?;
        let title = ByteString::read_fixed(&mut record, TITLE_LEN)?;
        let command = ByteString::read_fixed(&mut record, COMMAND_LEN)?;
        let remark = ByteString::read_fixed(&mut record, REMARK_LEN)?;

        Ok(Self {
            nx,
            ny,
            registration,
            x: Extent::new(x_min, x_max),
            y: Extent::new(y_min, y_max),
            z: Extent::new(z_min, z_max),
            x_inc,
            y_inc,
            z_scale_factor,
            z_add_offset,
            x_units,
            y_units,
            z_units,
            title,
            command,
            remark,
        })
    }

    /// Write the grid header to the writer
    ///
    /// Writes exactly 892 bytes. Text fields are truncated and NUL-padded
    /// to their fixed capacities; the `command` field is always written as
    /// [`COMMAND_STRING`].
    ///
    /// # Returns
    ///
    /// Number of bytes written (always 892) or an error
    pub fn write<W: Write>(&self, writer: &mut W, order: ByteOrder) -> Result<usize> {
        write_i32(writer, self.nx, order)?;
        write_i32(writer, self.ny, order)?;
        write_i32(writer, self.registration.node_offset(), order)?;

        write_f64(writer, self.x.min, order)?;
        write_f64(writer, self.x.max, order)?;
        write_f64(writer, self.y.min, order)?;
        write_f64(writer, self.y.max, order)?;
        write_f64(writer, self.z.min, order)?;
        write_f64(writer, self.z.max, order)?;
        write_f64(writer, self.x_inc, order)?;
        write_f64(writer, self.y_inc, order)?;
        write_f64(writer, self.z_scale_factor, order)?;
        write_f64(writer, self.z_add_offset, order)?;

        self.x_units.write_fixed(writer, UNIT_LEN)?;
        self.y_units.write_fixed(writer, UNIT_LEN)?;
        self.z_units.write_fixed(writer, UNIT_LEN)?;
        self.title.write_fixed(writer, TITLE_LEN)?;
        ByteString::from(COMMAND_STRING).write_fixed(writer, COMMAND_LEN)?;
        self.remark.write_fixed(writer, REMARK_LEN)?;

        Ok(HEADER_SIZE)
    }

    /// Number of data bytes the header declares (`nx * ny * 4`)
    pub fn data_len(&self) -> u64 {
        self.nx as u64 * self.ny as u64 * 4
    }
}
