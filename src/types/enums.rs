use crate::error::{Error, Result};

/// Byte ordering for header and data fields
///
/// The native grid format has no endianness tag; a file is laid out in the
/// byte order of the machine that wrote it. `ByteOrder::native()` is the
/// default everywhere and matches what legacy writers produce on the local
/// architecture. Pick an explicit order when exchanging files across
/// architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    LE, // Little Endian
    BE, // Big Endian
}

impl ByteOrder {
    /// Byte order of the current platform
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::BE
        } else {
            ByteOrder::LE
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// Grid registration mode (the header's `node_offset` field)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Registration {
    /// Nodes sit exactly on the extent's min/max coordinates (`node_offset = 0`).
    /// Spacing divides the span by `count - 1`.
    #[default]
    GridLine,
    /// Cells are offset half a cell from the extent edges (`node_offset = 1`).
    /// Spacing divides the span by `count`.
    Pixel,
}

impl Registration {
    /// Parse from the header's `node_offset` field
    pub fn from_node_offset(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Registration::GridLine),
            1 => Ok(Registration::Pixel),
            _ => Err(Error::InvalidNodeOffset(value)),
        }
    }

    /// The `node_offset` value stored in the header
    pub fn node_offset(self) -> i32 {
        match self {
            Registration::GridLine => 0,
            Registration::Pixel => 1,
        }
    }
}
