#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::reader::{GrdFile, GrdReader};
pub use crate::types::*;
pub use crate::writer::GrdWriter;

mod error;
pub mod raw;
mod reader;
pub mod stats;
mod types;
pub mod utils;
mod writer;
