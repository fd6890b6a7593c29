pub mod color;
pub mod diagnostic;
pub mod file;
