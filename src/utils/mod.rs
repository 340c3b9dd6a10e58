mod byte_string;
pub mod io;

pub use byte_string::ByteString;
