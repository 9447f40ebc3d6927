pub mod color;
pub mod frame;
pub mod heatmap;
pub mod points;
