use crate::error::{Error, Result};

/// In-memory grid of double-precision values
///
/// Values are addressed by `(i, j)` where `i` is the column (x) index in
/// `[0, nx)` and `j` is the row (y) index in `[0, ny)`. Row `j = 0` is the
/// southernmost row; row `j = ny - 1` is the northernmost. This is the
/// opposite of the on-disk order, which stores rows north to south — the
/// codec in [`crate::raw::data`] performs the flip.
///
/// Storage is a single row-major `Vec<f64>` with explicit index arithmetic,
/// so there is no pointer striding and out-of-range access is caught by the
/// usual slice bounds checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    nx: usize,
    ny: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Create a zero-filled grid with the given dimensions
    pub fn new(nx: usize, ny: usize) -> Self {
        Self {
            nx,
            ny,
            values: vec![0.0; nx * ny],
        }
    }

    /// Create a grid from a row-major value vector
    ///
    /// `values[j * nx + i]` becomes `value(i, j)`, with `j = 0` as the
    /// southernmost row. Fails if the vector length does not match the
    /// declared shape.
    pub fn from_values(nx: usize, ny: usize, values: Vec<f64>) -> Result<Self> {
        let expected = nx * ny;
        if values.len() != expected {
            return Err(Error::DataShape {
                nx,
                ny,
                expected,
                found: values.len(),
            });
        }
        Ok(Self { nx, ny, values })
    }

    /// Number of columns (x direction)
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of rows (y direction)
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Value at column `i`, row `j`
    ///
    /// # Panics
    ///
    /// Panics if `i >= nx` or `j >= ny`.
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[self.index(i, j)]
    }

    /// Set the value at column `i`, row `j`
    ///
    /// # Panics
    ///
    /// Panics if `i >= nx` or `j >= ny`.
    pub fn set_value(&mut self, i: usize, j: usize, value: f64) {
        let index = self.index(i, j);
        self.values[index] = value;
    }

    /// All values in row-major order (row `j = 0` first)
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn index(&self, i: usize, j: usize) -> usize {
        assert!(i < self.nx, "column index {i} out of range (nx = {})", self.nx);
        assert!(j < self.ny, "row index {j} out of range (ny = {})", self.ny);
        j * self.nx + i
    }
}
