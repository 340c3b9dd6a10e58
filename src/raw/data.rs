//! Grid data matrix encoding and decoding
//!
//! The file stores `nx * ny` 4-byte floats in row-major order from the
//! northernmost row down to the southernmost, columns west to east. The
//! in-memory [`Grid`] keeps row 0 at the south instead, so both directions
//! walk rows in reverse: `j` from `ny - 1` down to 0, `i` from 0 to
//! `nx - 1`. Getting this flip wrong does not fail — it silently produces
//! a vertically mirrored grid — so the ordering is pinned down by tests
//! against a known byte stream.

use crate::error::{Error, Result};
use crate::types::{ByteOrder, Grid};
use std::io::{self, Read, Write};

/// Read an `nx` x `ny` grid from a stream of 4-byte floats in file order
///
/// Each float is widened to f64. No scaling or offset is applied; the
/// header's `z_scale_factor` and `z_add_offset` are metadata only.
///
/// # Errors
///
/// `Error::UnexpectedEof` if the stream holds fewer than `nx * ny` floats.
pub fn read_data<R: Read>(reader: &mut R, nx: usize, ny: usize, order: ByteOrder) -> Result<Grid> {
    let mut grid = Grid::new(nx, ny);
    let mut row = vec![0u8; nx * 4];

    for j in (0..ny).rev() {
        reader.read_exact(&mut row).map_err(|err| match err.kind() {
            io::ErrorKind::UnexpectedEof => {
                Error::UnexpectedEof(format!("grid data, row {j} of {ny}"))
            }
            _ => Error::IoError(err),
        })?;

        for (i, chunk) in row.chunks_exact(4).enumerate() {
            let raw = [chunk[0], chunk[1], chunk[2], chunk[3]];
            let value = match order {
                ByteOrder::LE => f32::from_le_bytes(raw),
                ByteOrder::BE => f32::from_be_bytes(raw),
            };
            grid.set_value(i, j, f64::from(value));
        }
    }

    Ok(grid)
}

/// Write a grid as a stream of 4-byte floats in file order
///
/// Each f64 is narrowed to f32 on the way out; this is the precision the
/// format stores. No scaling or offset is applied.
///
/// # Returns
///
/// Number of bytes written (`nx * ny * 4`) or an error
pub fn write_data<W: Write>(writer: &mut W, grid: &Grid, order: ByteOrder) -> Result<usize> {
    let nx = grid.nx();
    let ny = grid.ny();
    let mut row = Vec::with_capacity(nx * 4);

    for j in (0..ny).rev() {
        row.clear();
        for i in 0..nx {
            let value = grid.value(i, j) as f32;
            let bytes = match order {
                ByteOrder::LE => value.to_le_bytes(),
                ByteOrder::BE => value.to_be_bytes(),
            };
            row.extend_from_slice(&bytes);
        }
        writer.write_all(&row)?;
    }

    Ok(nx * ny * 4)
}
