pub mod clip;
pub mod polygon;
