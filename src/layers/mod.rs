pub mod macros;

pub mod base;
pub mod grid;
pub mod marker;
