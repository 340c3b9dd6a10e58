use std::io;

/// Unrecoverable encoding/decoding errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Unexpected end of file: {0}")]
    UnexpectedEof(String),

    #[error("Invalid grid dimensions in header: {nx} x {ny}")]
    InvalidDimensions { nx: i32, ny: i32 },

    #[error("Invalid node offset: {0} (expected 0 for grid-line or 1 for pixel registration)")]
    InvalidNodeOffset(i32),

    #[error("Grid data length mismatch: header declares {expected} bytes, stream has {found}")]
    LengthMismatch { expected: u64, found: u64 },

    #[error("Grid-line registration needs at least 2 nodes per axis, got {nx} x {ny}")]
    DegenerateSpacing { nx: usize, ny: usize },

    #[error("Cannot compute the value range of an empty grid")]
    EmptyGrid,

    #[error("Extent must contain exactly 2 values (min, max), got {0}")]
    InvalidExtentLength(usize),

    #[error("Invalid extent: minimum {min} must be smaller than maximum {max}")]
    InvalidExtent { min: f64, max: f64 },

    #[error("Grid shape mismatch: {nx} x {ny} grid needs {expected} values, got {found}")]
    DataShape {
        nx: usize,
        ny: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
