pub mod crease;
pub mod sink;
pub mod tree;
