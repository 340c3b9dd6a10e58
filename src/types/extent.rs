use crate::error::{Error, Result};

/// Coordinate range along one axis
///
/// The header stores the spatial extent as `(min, max)` pairs for the x and
/// y axes and the value range as a pair for z.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Create an extent from explicit bounds
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Create an extent from a `[min, max]` slice
    ///
    /// Callers passing coordinate ranges as arrays must supply exactly two
    /// values.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [min, max] => Ok(Self::new(*min, *max)),
            _ => Err(Error::InvalidExtentLength(values.len())),
        }
    }

    /// The covered span (`max - min`)
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check that the extent covers a non-empty range
    ///
    /// Spatial extents must have `min < max` before a write. The z value
    /// range is exempt (a constant grid has `z_min == z_max`).
    pub fn validate(&self) -> Result<()> {
        if self.min >= self.max {
            return Err(Error::InvalidExtent {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Extent {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}
