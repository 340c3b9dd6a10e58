//! Low-level grid file encoding and decoding
//!
//! This module provides direct access to the two components of a native
//! grid file — the fixed 892-byte header record and the float32 data
//! matrix — with minimal transformation. All functions read from and write
//! to the current stream position without seeking or closing; the caller
//! owns the stream and its lifetime.

pub mod data;
mod header;

pub use self::header::{
    COMMAND_LEN, COMMAND_STRING, HEADER_SIZE, Header, REMARK_LEN, TITLE_LEN, UNIT_LEN,
};
