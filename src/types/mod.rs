mod enums;
mod extent;
mod grid;

pub use enums::*;
pub use extent::*;
pub use grid::*;
