//! Derived header fields computed before a write
//!
//! A header cannot be serialized until its value range and cell spacing
//! are known. Both are derived here: the range from a scan over the grid,
//! the spacing from the extent, the dimensions and the registration mode.

use crate::error::{Error, Result};
use crate::types::{Extent, Grid, Registration};

/// Compute the value range (`z_min`, `z_max`) of a grid
///
/// Linear scan over all values, seeded from the first element.
///
/// # Errors
///
/// `Error::EmptyGrid` if the grid holds no values.
pub fn value_range(grid: &Grid) -> Result<(f64, f64)> {
    let mut values = grid.values().iter();
    let first = *values.next().ok_or(Error::EmptyGrid)?;

    let (mut z_min, mut z_max) = (first, first);
    for &value in values {
        z_min = z_min.min(value);
        z_max = z_max.max(value);
    }

    Ok((z_min, z_max))
}

/// Compute the cell spacing (`x_inc`, `y_inc`) from extent and dimensions
///
/// Grid-line registration places nodes on the extent bounds, so the span
/// divides by `count - 1`; pixel registration offsets cells half a step
/// from the bounds and divides by `count`.
///
/// # Errors
///
/// `Error::DegenerateSpacing` for a grid-line registered axis with fewer
/// than 2 nodes (the spacing would be a division by zero).
pub fn grid_increments(
    x: Extent,
    y: Extent,
    nx: usize,
    ny: usize,
    registration: Registration,
) -> Result<(f64, f64)> {
    match registration {
        Registration::GridLine => {
            if nx < 2 || ny < 2 {
                return Err(Error::DegenerateSpacing { nx, ny });
            }
            Ok((
                x.span() / (nx - 1) as f64,
                y.span() / (ny - 1) as f64,
            ))
        }
        Registration::Pixel => Ok((x.span() / nx as f64, y.span() / ny as f64)),
    }
}
