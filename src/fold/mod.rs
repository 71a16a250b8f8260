pub mod line;
pub mod model;
pub mod pattern;
pub mod presets;
