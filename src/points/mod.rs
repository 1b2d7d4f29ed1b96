//! rbox-style point cloud generation.

pub mod generator;
pub mod spec;

pub use generator::generate;
