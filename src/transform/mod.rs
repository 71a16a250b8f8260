//! Shared transform helpers.

mod linear;

pub use linear::lerp_point;
