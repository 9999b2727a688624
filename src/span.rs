pub mod inc;
pub mod ops;
