//! High-level grid file writer with builder API

use crate::error::Result;
use crate::raw::{Header, data};
use crate::stats;
use crate::types::{ByteOrder, Extent, Grid, Registration};
use crate::utils::ByteString;
use std::io::Write;

/// High-level grid file writer with builder API
///
/// Collects the header metadata a caller supplies (extent, registration,
/// scale/offset, text fields), derives the rest from the grid itself and
/// streams header plus data to any `Write` destination. The value range
/// and cell spacing are always recomputed from the grid and extent —
/// there is deliberately no way to supply increments by hand.
///
/// # Example
///
/// ```
/// use gmt_grd::{Extent, Grid, GrdWriter, Registration};
///
/// let grid = Grid::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
///
/// let mut buf = Vec::new();
/// GrdWriter::new(Extent::new(0.0, 1.0), Extent::new(40.0, 41.0))
///     .with_registration(Registration::GridLine)
///     .with_title("example")
///     .with_z_units("m")
///     .write(&mut buf, &grid)?;
/// # Ok::<(), gmt_grd::Error>(())
/// ```
pub struct GrdWriter {
    x: Extent,
    y: Extent,
    registration: Registration,
    z_scale_factor: f64,
    z_add_offset: f64,
    x_units: ByteString,
    y_units: ByteString,
    z_units: ByteString,
    title: ByteString,
    remark: ByteString,
    byte_order: ByteOrder,
}

impl GrdWriter {
    /// Create a writer for the given spatial extent
    ///
    /// Defaults: grid-line registration, scale factor 1.0, offset 0.0,
    /// empty text fields, native byte order.
    pub fn new(x: Extent, y: Extent) -> Self {
        Self {
            x,
            y,
            registration: Registration::GridLine,
            z_scale_factor: 1.0,
            z_add_offset: 0.0,
            x_units: ByteString::default(),
            y_units: ByteString::default(),
            z_units: ByteString::default(),
            title: ByteString::default(),
            remark: ByteString::default(),
            byte_order: ByteOrder::native(),
        }
    }

    /// Set the registration mode (default: grid-line)
    pub fn with_registration(&mut self, registration: Registration) -> &mut Self {
        self.registration = registration;
        self
    }

    /// Set the scale factor metadata (stored, never applied to values)
    pub fn with_z_scale_factor(&mut self, factor: f64) -> &mut Self {
        self.z_scale_factor = factor;
        self
    }

    /// Set the add-offset metadata (stored, never applied to values)
    pub fn with_z_add_offset(&mut self, offset: f64) -> &mut Self {
        self.z_add_offset = offset;
        self
    }

    /// Set the x axis unit label
    pub fn with_x_units(&mut self, units: impl Into<ByteString>) -> &mut Self {
        self.x_units = units.into();
        self
    }

    /// Set the y axis unit label
    pub fn with_y_units(&mut self, units: impl Into<ByteString>) -> &mut Self {
        self.y_units = units.into();
        self
    }

    /// Set the value unit label
    pub fn with_z_units(&mut self, units: impl Into<ByteString>) -> &mut Self {
        self.z_units = units.into();
        self
    }

    /// Set the dataset title
    pub fn with_title(&mut self, title: impl Into<ByteString>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Set the free-text remark
    pub fn with_remark(&mut self, remark: impl Into<ByteString>) -> &mut Self {
        self.remark = remark.into();
        self
    }

    /// Set the byte order for the output file (default: native)
    pub fn with_byte_order(&mut self, byte_order: ByteOrder) -> &mut Self {
        self.byte_order = byte_order;
        self
    }

    /// Write header and data to the destination
    ///
    /// Validates the extents, derives the value range and cell spacing
    /// from the grid, then streams the 892-byte header followed by the
    /// `nx * ny` floats in file order. On error the destination may hold
    /// a partial record; nothing is rolled back.
    pub fn write<W: Write>(&self, writer: &mut W, grid: &Grid) -> Result<()> {
        self.x.validate()?;
        self.y.validate()?;

        let (z_min, z_max) = stats::value_range(grid)?;
        let (x_inc, y_inc) =
            stats::grid_increments(self.x, self.y, grid.nx(), grid.ny(), self.registration)?;

        let header = Header {
            nx: grid.nx() as i32,
            ny: grid.ny() as i32,
            registration: self.registration,
            x: self.x,
            y: self.y,
            z: Extent::new(z_min, z_max),
            x_inc,
            y_inc,
            z_scale_factor: self.z_scale_factor,
            z_add_offset: self.z_add_offset,
            x_units: self.x_units.clone(),
            y_units: self.y_units.clone(),
            z_units: self.z_units.clone(),
            title: self.title.clone(),
            // Ignored by Header::write, which stamps the provenance constant
            command: ByteString::default(),
            remark: self.remark.clone(),
        };

        header.write(writer, self.byte_order)?;
        data::write_data(writer, grid, self.byte_order)?;
        Ok(())
    }
}
