pub mod surface;
pub mod vector;
