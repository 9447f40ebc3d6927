pub mod article;
pub mod config;
pub mod matrix;
pub mod report;
pub mod taxonomy;
