pub mod color;
pub mod value;
